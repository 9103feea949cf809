//! HTTP adapters - REST API implementations.

pub mod cors;
pub mod router;
pub mod session;

pub use router::build_router;
pub use session::{session_routes, SessionApiError, SessionAppState};
