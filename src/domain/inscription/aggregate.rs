//! Inscription entity.

use crate::domain::foundation::{InscriptionId, SessionId, Timestamp};

/// Enrollment of a participant in a training session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inscription {
    id: InscriptionId,
    session_id: SessionId,
    user_id: Option<String>,
    created_at: Timestamp,
}

impl Inscription {
    /// Create a new inscription for the given session.
    pub fn new(session_id: SessionId, user_id: Option<String>) -> Self {
        Self {
            id: InscriptionId::new(),
            session_id,
            user_id,
            created_at: Timestamp::now(),
        }
    }

    /// Reconstitute an inscription from persistence (no validation).
    pub fn reconstitute(
        id: InscriptionId,
        session_id: SessionId,
        user_id: Option<String>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            session_id,
            user_id,
            created_at,
        }
    }

    pub fn id(&self) -> &InscriptionId {
        &self.id
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}
