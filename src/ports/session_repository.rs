//! Session repository port.
//!
//! Defines the contract for persisting and retrieving training sessions.
//! Implementations handle the actual storage operations.

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::SessionFormation;
use async_trait::async_trait;

/// Repository port for training session persistence.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Return every stored session.
    ///
    /// Ordering is defined by the implementation; no pagination.
    async fn find_all(&self) -> Result<Vec<SessionFormation>, DomainError>;

    /// Find a session by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<SessionFormation>, DomainError>;

    /// Insert or replace a session, keyed by its ID.
    ///
    /// Returns the session as stored.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, session: &SessionFormation) -> Result<SessionFormation, DomainError>;

    /// Delete a session. Deleting an unknown ID is a no-op.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn delete_by_id(&self, id: &SessionId) -> Result<(), DomainError>;
}
