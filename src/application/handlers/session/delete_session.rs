//! DeleteSessionHandler - Command handler for removing sessions.
//!
//! A session is only deleted when no inscription references it.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::SessionError;
use crate::ports::{InscriptionRepository, SessionRepository};

/// Command to delete a session.
#[derive(Debug, Clone)]
pub struct DeleteSessionCommand {
    pub session_id: SessionId,
}

/// Handler for deleting sessions.
pub struct DeleteSessionHandler {
    sessions: Arc<dyn SessionRepository>,
    inscriptions: Arc<dyn InscriptionRepository>,
}

impl DeleteSessionHandler {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        inscriptions: Arc<dyn InscriptionRepository>,
    ) -> Self {
        Self {
            sessions,
            inscriptions,
        }
    }

    pub async fn handle(&self, cmd: DeleteSessionCommand) -> Result<(), SessionError> {
        if self.sessions.find_by_id(&cmd.session_id).await?.is_none() {
            return Err(SessionError::not_found(cmd.session_id));
        }

        let inscriptions = self
            .inscriptions
            .find_by_session_id(&cmd.session_id)
            .await?;
        if !inscriptions.is_empty() {
            tracing::info!(
                session_id = %cmd.session_id,
                inscriptions = inscriptions.len(),
                "Refusing to delete session with inscriptions"
            );
            return Err(SessionError::has_inscriptions(
                cmd.session_id,
                inscriptions.len(),
            ));
        }

        self.sessions.delete_by_id(&cmd.session_id).await?;

        tracing::info!(session_id = %cmd.session_id, "Session deleted");
        Ok(())
    }
}
