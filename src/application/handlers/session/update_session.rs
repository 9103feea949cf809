//! UpdateSessionHandler - Command handler for partial session updates.
//!
//! Load, merge, save. There is no version check between the load and the
//! save, so two concurrent updates of the same session can lose writes.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::{SessionChanges, SessionError, SessionFormation};
use crate::ports::SessionRepository;

/// Command to merge changes into an existing session.
#[derive(Debug, Clone)]
pub struct UpdateSessionCommand {
    pub session_id: SessionId,
    pub changes: SessionChanges,
}

/// Handler for updating sessions.
pub struct UpdateSessionHandler {
    repository: Arc<dyn SessionRepository>,
}

impl UpdateSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateSessionCommand) -> Result<SessionFormation, SessionError> {
        let mut session = self
            .repository
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or_else(|| SessionError::not_found(cmd.session_id.clone()))?;

        session.apply(cmd.changes);

        let saved = self.repository.save(&session).await?;

        tracing::info!(session_id = %saved.id, "Session updated");
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::FailingSessionRepository;
    use super::*;
    use crate::adapters::memory::InMemorySessionRepository;

    async fn seeded_repo() -> (Arc<InMemorySessionRepository>, SessionId) {
        let repo = Arc::new(InMemorySessionRepository::new());
        let session = SessionFormation::create(
            SessionId::new(),
            SessionChanges {
                title: Some("Rust basics".to_string()),
                location: Some("Lyon".to_string()),
                price: Some(450.0),
                total_places: Some(12),
                reserved_places: Some(3),
                ..Default::default()
            },
        );
        repo.save(&session).await.unwrap();
        (repo, session.id)
    }

    #[tokio::test]
    async fn merges_supplied_fields_and_keeps_the_rest() {
        let (repo, id) = seeded_repo().await;
        let handler = UpdateSessionHandler::new(repo.clone());

        let updated = handler
            .handle(UpdateSessionCommand {
                session_id: id.clone(),
                changes: SessionChanges {
                    title: Some("Rust advanced".to_string()),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(updated.title.as_deref(), Some("Rust advanced"));
        assert_eq!(updated.location.as_deref(), Some("Lyon"));
        assert_eq!(updated.price, Some(450.0));

        let stored = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn zero_total_places_leaves_capacity_untouched() {
        let (repo, id) = seeded_repo().await;
        let handler = UpdateSessionHandler::new(repo);

        let updated = handler
            .handle(UpdateSessionCommand {
                session_id: id,
                changes: SessionChanges {
                    total_places: Some(0),
                    reserved_places: Some(-2),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(updated.total_places, Some(12));
        assert_eq!(updated.reserved_places, Some(3));
    }

    #[tokio::test]
    async fn returns_not_found_for_unknown_session() {
        let repo = Arc::new(InMemorySessionRepository::new());
        let handler = UpdateSessionHandler::new(repo.clone());

        let result = handler
            .handle(UpdateSessionCommand {
                session_id: SessionId::new(),
                changes: SessionChanges::default(),
            })
            .await;

        assert!(matches!(result, Err(SessionError::NotFound(_))));
        assert_eq!(repo.session_count().await, 0);
    }

    #[tokio::test]
    async fn store_failure_is_an_infrastructure_error() {
        let handler = UpdateSessionHandler::new(Arc::new(FailingSessionRepository));

        let result = handler
            .handle(UpdateSessionCommand {
                session_id: SessionId::new(),
                changes: SessionChanges::default(),
            })
            .await;
        assert!(matches!(result, Err(SessionError::Infrastructure(_))));
    }
}
