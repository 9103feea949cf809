//! CreateSessionHandler - Command handler for creating new sessions.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::{SessionChanges, SessionError, SessionFormation};
use crate::ports::SessionRepository;

/// Command to create a new session.
#[derive(Debug, Clone, Default)]
pub struct CreateSessionCommand {
    /// Caller-supplied id; a fresh one is generated when absent.
    pub session_id: Option<SessionId>,
    pub fields: SessionChanges,
}

/// Handler for creating sessions.
pub struct CreateSessionHandler {
    repository: Arc<dyn SessionRepository>,
}

impl CreateSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateSessionCommand) -> Result<SessionFormation, SessionError> {
        let session_id = cmd.session_id.unwrap_or_default();
        let session = SessionFormation::create(session_id, cmd.fields);

        let saved = self.repository.save(&session).await?;

        tracing::info!(session_id = %saved.id, "Session created");
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::FailingSessionRepository;
    use super::*;
    use crate::adapters::memory::InMemorySessionRepository;

    fn handler_with_repo() -> (CreateSessionHandler, Arc<InMemorySessionRepository>) {
        let repo = Arc::new(InMemorySessionRepository::new());
        (CreateSessionHandler::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn persists_new_session_with_generated_id() {
        let (handler, repo) = handler_with_repo();

        let saved = handler
            .handle(CreateSessionCommand {
                session_id: None,
                fields: SessionChanges {
                    title: Some("Intro to X".to_string()),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        let stored = repo.find_by_id(&saved.id).await.unwrap().unwrap();
        assert_eq!(stored.title.as_deref(), Some("Intro to X"));
    }

    #[tokio::test]
    async fn negative_reserved_places_are_stored_as_zero() {
        let (handler, repo) = handler_with_repo();

        let saved = handler
            .handle(CreateSessionCommand {
                session_id: None,
                fields: SessionChanges {
                    reserved_places: Some(-5),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(saved.reserved_places, Some(0));
        let stored = repo.find_by_id(&saved.id).await.unwrap().unwrap();
        assert_eq!(stored.reserved_places, Some(0));
    }

    #[tokio::test]
    async fn non_negative_reserved_places_are_kept() {
        let (handler, _repo) = handler_with_repo();

        let saved = handler
            .handle(CreateSessionCommand {
                session_id: None,
                fields: SessionChanges {
                    reserved_places: Some(7),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(saved.reserved_places, Some(7));
    }

    #[tokio::test]
    async fn supplied_id_is_used() {
        let (handler, repo) = handler_with_repo();
        let id: SessionId = "imported-42".parse().unwrap();

        handler
            .handle(CreateSessionCommand {
                session_id: Some(id.clone()),
                fields: SessionChanges::default(),
            })
            .await
            .unwrap();

        assert!(repo.find_by_id(&id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn store_failure_is_an_infrastructure_error() {
        let handler = CreateSessionHandler::new(Arc::new(FailingSessionRepository));

        let result = handler.handle(CreateSessionCommand::default()).await;
        assert!(matches!(result, Err(SessionError::Infrastructure(_))));
    }
}
