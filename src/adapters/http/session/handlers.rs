//! HTTP handlers for session endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::handlers::session::{
    CreateSessionCommand, CreateSessionHandler, DeleteSessionCommand, DeleteSessionHandler,
    GetSessionHandler, GetSessionQuery, ListSessionsHandler, ListSessionsQuery,
    UpdateSessionCommand, UpdateSessionHandler,
};
use crate::domain::foundation::{ErrorCode, SessionId};
use crate::domain::session::SessionError;
use crate::ports::{InscriptionRepository, SessionRepository};

use super::dto::{SessionRequest, SessionResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the session endpoints.
///
/// Cloned per request; handlers are built on demand from the ports.
#[derive(Clone)]
pub struct SessionAppState {
    pub session_repository: Arc<dyn SessionRepository>,
    pub inscription_repository: Arc<dyn InscriptionRepository>,
}

impl SessionAppState {
    pub fn new(
        session_repository: Arc<dyn SessionRepository>,
        inscription_repository: Arc<dyn InscriptionRepository>,
    ) -> Self {
        Self {
            session_repository,
            inscription_repository,
        }
    }

    pub fn list_sessions_handler(&self) -> ListSessionsHandler {
        ListSessionsHandler::new(self.session_repository.clone())
    }

    pub fn get_session_handler(&self) -> GetSessionHandler {
        GetSessionHandler::new(self.session_repository.clone())
    }

    pub fn create_session_handler(&self) -> CreateSessionHandler {
        CreateSessionHandler::new(self.session_repository.clone())
    }

    pub fn update_session_handler(&self) -> UpdateSessionHandler {
        UpdateSessionHandler::new(self.session_repository.clone())
    }

    pub fn delete_session_handler(&self) -> DeleteSessionHandler {
        DeleteSessionHandler::new(
            self.session_repository.clone(),
            self.inscription_repository.clone(),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/sessions - List every session
pub async fn list_sessions(
    State(state): State<SessionAppState>,
) -> Result<impl IntoResponse, SessionApiError> {
    let sessions = state.list_sessions_handler().handle(ListSessionsQuery).await?;

    let response: Vec<SessionResponse> = sessions.into_iter().map(SessionResponse::from).collect();
    Ok(Json(response))
}

/// GET /api/sessions/:id - Get one session
pub async fn get_session(
    State(state): State<SessionAppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, SessionApiError> {
    let session_id = parse_session_id(session_id)?;

    let session = state
        .get_session_handler()
        .handle(GetSessionQuery { session_id })
        .await?;

    Ok(Json(SessionResponse::from(session)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST/PUT/DELETE endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/sessions - Create a session
pub async fn create_session(
    State(state): State<SessionAppState>,
    Json(request): Json<SessionRequest>,
) -> Result<impl IntoResponse, SessionApiError> {
    let cmd = CreateSessionCommand {
        session_id: request.session_id(),
        fields: request.into_changes(),
    };

    let session = state.create_session_handler().handle(cmd).await?;

    Ok(Json(SessionResponse::from(session)))
}

/// PUT /api/sessions/:id - Merge non-null fields into a session
pub async fn update_session(
    State(state): State<SessionAppState>,
    Path(session_id): Path<String>,
    Json(request): Json<SessionRequest>,
) -> Result<impl IntoResponse, SessionApiError> {
    let cmd = UpdateSessionCommand {
        session_id: parse_session_id(session_id)?,
        changes: request.into_changes(),
    };

    let session = state.update_session_handler().handle(cmd).await?;

    Ok(Json(SessionResponse::from(session)))
}

/// DELETE /api/sessions/:id - Delete a session without inscriptions
pub async fn delete_session(
    State(state): State<SessionAppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, SessionApiError> {
    let cmd = DeleteSessionCommand {
        session_id: parse_session_id(session_id)?,
    };

    state.delete_session_handler().handle(cmd).await?;

    Ok(StatusCode::OK)
}

/// No stored session can have a blank id, so an unparsable path is a miss.
fn parse_session_id(raw: String) -> Result<SessionId, SessionApiError> {
    raw.parse::<SessionId>()
        .map_err(|_| SessionApiError::UnknownPath(raw))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error that converts session errors to HTTP responses.
///
/// Not-found and internal failures carry no body; a refused delete answers
/// with its plain-text explanation.
#[derive(Debug)]
pub enum SessionApiError {
    /// Failure reported by an application handler.
    Session(SessionError),
    /// Path segment that cannot name any session.
    UnknownPath(String),
}

impl SessionApiError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SessionApiError::Session(err) => err.code(),
            SessionApiError::UnknownPath(_) => ErrorCode::SessionNotFound,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self.code() {
            ErrorCode::SessionNotFound => StatusCode::NOT_FOUND,
            ErrorCode::SessionHasInscriptions => StatusCode::BAD_REQUEST,
            ErrorCode::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SessionError> for SessionApiError {
    fn from(err: SessionError) -> Self {
        SessionApiError::Session(err)
    }
}

impl IntoResponse for SessionApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();
        match self {
            SessionApiError::Session(err @ SessionError::HasInscriptions { .. }) => {
                tracing::info!(%code, "Session delete refused");
                (status, err.message()).into_response()
            }
            SessionApiError::Session(SessionError::Infrastructure(detail)) => {
                tracing::error!(%code, error = %detail, "Session request failed");
                status.into_response()
            }
            SessionApiError::Session(SessionError::NotFound(id)) => {
                tracing::debug!(%code, session_id = %id, "Session not found");
                status.into_response()
            }
            SessionApiError::UnknownPath(raw) => {
                tracing::debug!(%code, path = %raw, "Unusable session id in path");
                status.into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::header;

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn not_found_maps_to_404_with_empty_body() {
        let response = SessionApiError::from(SessionError::not_found(SessionId::new())).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.is_empty());
    }

    #[tokio::test]
    async fn has_inscriptions_maps_to_400_with_text_message() {
        let response =
            SessionApiError::from(SessionError::has_inscriptions(SessionId::new(), 3)).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/plain"));
        assert!(body_text(response).await.contains('3'));
    }

    #[tokio::test]
    async fn infrastructure_maps_to_500_without_leaking_detail() {
        let response =
            SessionApiError::from(SessionError::infrastructure("password=hunter2")).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_text(response).await.is_empty());
    }

    #[test]
    fn blank_path_id_is_not_found() {
        let err = parse_session_id("  ".to_string()).unwrap_err();
        assert!(matches!(&err, SessionApiError::UnknownPath(raw) if raw == "  "));
        assert_eq!(err.code(), ErrorCode::SessionNotFound);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn blank_path_id_maps_to_404_with_empty_body() {
        let response = parse_session_id(" ".to_string()).unwrap_err().into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.is_empty());
    }

    #[test]
    fn status_follows_session_error_code() {
        let cases = [
            (
                SessionError::not_found(SessionId::new()),
                ErrorCode::SessionNotFound,
                StatusCode::NOT_FOUND,
            ),
            (
                SessionError::has_inscriptions(SessionId::new(), 1),
                ErrorCode::SessionHasInscriptions,
                StatusCode::BAD_REQUEST,
            ),
            (
                SessionError::infrastructure("down"),
                ErrorCode::DatabaseError,
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, code, status) in cases {
            let api_err = SessionApiError::from(err);
            assert_eq!(api_err.code(), code);
            assert_eq!(api_err.status(), status);
        }
    }
}
