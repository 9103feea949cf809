//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresSessionRepository` - Training sessions
//! - `PostgresInscriptionRepository` - Enrollments, queried by session
//! - `connect` - Pool construction with optional migrations

mod inscription_repository;
mod pool;
mod session_repository;

pub use inscription_repository::PostgresInscriptionRepository;
pub use pool::{connect, MIGRATOR};
pub use session_repository::PostgresSessionRepository;
