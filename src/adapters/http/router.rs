//! Axum router configuration with middleware.
//!
//! Session routes live under `/api/sessions`; `/health` sits beside them.
//! Middleware: request id, tracing, CORS, timeout.

use axum::http::HeaderName;
use axum::{response::IntoResponse, routing::get, Json, Router};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::cors::cors_layer;
use super::session::{session_routes, HealthResponse, SessionAppState};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Build the complete application router.
pub fn build_router(state: SessionAppState, server: &ServerConfig) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .nest("/api/sessions", session_routes())
        .route("/health", get(health_check))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .with_state(state)
}

/// GET /health
async fn health_check() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}
