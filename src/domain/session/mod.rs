//! Session domain module.
//!
//! Training sessions offered in the catalog: creation with sanitized seat
//! counters, partial updates, and the error vocabulary of the session
//! endpoints.

mod aggregate;
mod errors;

pub use aggregate::{sanitize_reserved_places, SessionChanges, SessionFormation};
pub use errors::SessionError;
