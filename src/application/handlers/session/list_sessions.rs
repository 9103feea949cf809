//! ListSessionsHandler - Query handler for the full session catalog.

use std::sync::Arc;

use crate::domain::session::{SessionError, SessionFormation};
use crate::ports::SessionRepository;

/// Query for every session. No filtering or pagination.
#[derive(Debug, Clone, Default)]
pub struct ListSessionsQuery;

/// Handler for listing sessions.
pub struct ListSessionsHandler {
    repository: Arc<dyn SessionRepository>,
}

impl ListSessionsHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        _query: ListSessionsQuery,
    ) -> Result<Vec<SessionFormation>, SessionError> {
        let sessions = self.repository.find_all().await?;
        tracing::debug!(count = sessions.len(), "Listed sessions");
        Ok(sessions)
    }
}
