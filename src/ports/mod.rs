//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionRepository` - Training session persistence
//! - `InscriptionRepository` - Enrollment lookups by session

mod inscription_repository;
mod session_repository;

pub use inscription_repository::InscriptionRepository;
pub use session_repository::SessionRepository;
