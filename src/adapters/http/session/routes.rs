//! Axum router configuration for session endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    create_session, delete_session, get_session, list_sessions, update_session, SessionAppState,
};

/// Create the session API router, to be nested under `/api/sessions`.
///
/// # Routes
/// - `GET /` - List every session
/// - `POST /` - Create a session
/// - `GET /:id` - Get one session
/// - `PUT /:id` - Partially update a session
/// - `DELETE /:id` - Delete a session that has no inscriptions
pub fn session_routes() -> Router<SessionAppState> {
    Router::new()
        .route("/", get(list_sessions).post(create_session))
        .route(
            "/:id",
            get(get_session).put(update_session).delete(delete_session),
        )
}
