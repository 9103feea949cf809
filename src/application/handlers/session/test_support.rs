//! Test doubles shared by the session handler tests.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::inscription::Inscription;
use crate::domain::session::SessionFormation;
use crate::ports::{InscriptionRepository, SessionRepository};

/// Session repository whose every operation fails.
pub(super) struct FailingSessionRepository;

fn unavailable() -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, "store unavailable")
}

#[async_trait]
impl SessionRepository for FailingSessionRepository {
    async fn find_all(&self) -> Result<Vec<SessionFormation>, DomainError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: &SessionId) -> Result<Option<SessionFormation>, DomainError> {
        Err(unavailable())
    }

    async fn save(&self, _session: &SessionFormation) -> Result<SessionFormation, DomainError> {
        Err(unavailable())
    }

    async fn delete_by_id(&self, _id: &SessionId) -> Result<(), DomainError> {
        Err(unavailable())
    }
}

/// Inscription repository whose lookups fail.
pub(super) struct FailingInscriptionRepository;

#[async_trait]
impl InscriptionRepository for FailingInscriptionRepository {
    async fn find_by_session_id(
        &self,
        _session_id: &SessionId,
    ) -> Result<Vec<Inscription>, DomainError> {
        Err(unavailable())
    }

    async fn save(&self, _inscription: &Inscription) -> Result<(), DomainError> {
        Err(unavailable())
    }
}
