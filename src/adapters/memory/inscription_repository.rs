//! In-memory inscription repository.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::inscription::Inscription;
use crate::ports::InscriptionRepository;

/// In-memory storage for enrollments
#[derive(Debug, Clone, Default)]
pub struct InMemoryInscriptionRepository {
    inscriptions: Arc<RwLock<Vec<Inscription>>>,
}

impl InMemoryInscriptionRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every inscription of a session (useful for tests)
    pub async fn remove_for_session(&self, session_id: &SessionId) {
        self.inscriptions
            .write()
            .await
            .retain(|i| i.session_id() != session_id);
    }
}

#[async_trait]
impl InscriptionRepository for InMemoryInscriptionRepository {
    async fn find_by_session_id(
        &self,
        session_id: &SessionId,
    ) -> Result<Vec<Inscription>, DomainError> {
        let inscriptions = self.inscriptions.read().await;
        Ok(inscriptions
            .iter()
            .filter(|i| i.session_id() == session_id)
            .cloned()
            .collect())
    }

    async fn save(&self, inscription: &Inscription) -> Result<(), DomainError> {
        let mut inscriptions = self.inscriptions.write().await;
        match inscriptions.iter_mut().find(|i| i.id() == inscription.id()) {
            Some(existing) => *existing = inscription.clone(),
            None => inscriptions.push(inscription.clone()),
        }
        Ok(())
    }
}
