//! In-memory adapters.
//!
//! Implementations of the repository ports backed by process memory.
//! Used by tests and when no database is configured.
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::memory::{InMemoryInscriptionRepository, InMemorySessionRepository};
//!
//! let sessions = InMemorySessionRepository::new();
//! let inscriptions = InMemoryInscriptionRepository::new();
//! ```

mod inscription_repository;
mod session_repository;

pub use inscription_repository::InMemoryInscriptionRepository;
pub use session_repository::InMemorySessionRepository;
