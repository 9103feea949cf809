//! In-memory session repository.
//!
//! Keeps sessions in insertion order; `find_all` returns them in that order.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::SessionFormation;
use crate::ports::SessionRepository;

/// In-memory storage for training sessions
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<Vec<SessionFormation>>>,
}

impl InMemorySessionRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored sessions
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn find_all(&self) -> Result<Vec<SessionFormation>, DomainError> {
        Ok(self.sessions.read().await.clone())
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<SessionFormation>, DomainError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.iter().find(|s| &s.id == id).cloned())
    }

    async fn save(&self, session: &SessionFormation) -> Result<SessionFormation, DomainError> {
        let mut sessions = self.sessions.write().await;
        match sessions.iter_mut().find(|s| s.id == session.id) {
            Some(existing) => *existing = session.clone(),
            None => sessions.push(session.clone()),
        }
        Ok(session.clone())
    }

    async fn delete_by_id(&self, id: &SessionId) -> Result<(), DomainError> {
        self.sessions.write().await.retain(|s| &s.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::SessionChanges;

    fn session_titled(title: &str) -> SessionFormation {
        SessionFormation::create(
            SessionId::new(),
            SessionChanges {
                title: Some(title.to_string()),
                ..Default::default()
            },
        )
    }

    #[tokio::test]
    async fn find_all_is_empty_initially() {
        let repo = InMemorySessionRepository::new();
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_then_find_by_id() {
        let repo = InMemorySessionRepository::new();
        let session = session_titled("Docker");

        let saved = repo.save(&session).await.unwrap();
        assert_eq!(saved, session);

        let found = repo.find_by_id(&session.id).await.unwrap();
        assert_eq!(found, Some(session));
    }

    #[tokio::test]
    async fn save_replaces_existing_session_with_same_id() {
        let repo = InMemorySessionRepository::new();
        let mut session = session_titled("Docker");
        repo.save(&session).await.unwrap();

        session.title = Some("Kubernetes".to_string());
        repo.save(&session).await.unwrap();

        assert_eq!(repo.session_count().await, 1);
        let found = repo.find_by_id(&session.id).await.unwrap().unwrap();
        assert_eq!(found.title.as_deref(), Some("Kubernetes"));
    }

    #[tokio::test]
    async fn find_all_preserves_insertion_order() {
        let repo = InMemorySessionRepository::new();
        for title in ["first", "second", "third"] {
            repo.save(&session_titled(title)).await.unwrap();
        }

        let titles: Vec<_> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.title.unwrap())
            .collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn delete_by_id_removes_session() {
        let repo = InMemorySessionRepository::new();
        let session = session_titled("Docker");
        repo.save(&session).await.unwrap();

        repo.delete_by_id(&session.id).await.unwrap();

        assert!(repo.find_by_id(&session.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_by_id_of_unknown_session_is_noop() {
        let repo = InMemorySessionRepository::new();
        repo.save(&session_titled("Docker")).await.unwrap();

        repo.delete_by_id(&SessionId::new()).await.unwrap();

        assert_eq!(repo.session_count().await, 1);
    }
}
