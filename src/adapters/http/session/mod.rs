//! HTTP adapter for session endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{HealthResponse, SessionRequest, SessionResponse};
pub use handlers::{SessionApiError, SessionAppState};
pub use routes::session_routes;
