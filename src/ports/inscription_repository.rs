//! Inscription repository port.
//!
//! The session endpoints only read enrollments to enforce referential
//! integrity; `save` exists for seeding and for adapters that own the table.

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::inscription::Inscription;
use async_trait::async_trait;

/// Repository port for enrollment persistence.
#[async_trait]
pub trait InscriptionRepository: Send + Sync {
    /// Find every inscription referencing a session.
    async fn find_by_session_id(
        &self,
        session_id: &SessionId,
    ) -> Result<Vec<Inscription>, DomainError>;

    /// Persist an inscription.
    async fn save(&self, inscription: &Inscription) -> Result<(), DomainError>;
}
