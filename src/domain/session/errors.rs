//! Session-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};

/// Session-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Session was not found.
    NotFound(SessionId),
    /// Enrollments still reference the session.
    HasInscriptions { session_id: SessionId, count: usize },
    /// Infrastructure error.
    Infrastructure(String),
}

impl SessionError {
    pub fn not_found(id: SessionId) -> Self {
        SessionError::NotFound(id)
    }
    pub fn has_inscriptions(session_id: SessionId, count: usize) -> Self {
        SessionError::HasInscriptions { session_id, count }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        SessionError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::NotFound(_) => ErrorCode::SessionNotFound,
            SessionError::HasInscriptions { .. } => ErrorCode::SessionHasInscriptions,
            SessionError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            SessionError::NotFound(id) => format!("Session not found: {}", id),
            // Shown verbatim to the catalog's French-speaking administrators.
            SessionError::HasInscriptions { count, .. } => format!(
                "Impossible de supprimer cette session car {} utilisateur(s) y sont déjà inscrit(s). \
                 Veuillez d'abord supprimer les inscriptions associées.",
                count
            ),
            SessionError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SessionError {}

impl From<DomainError> for SessionError {
    fn from(err: DomainError) -> Self {
        SessionError::Infrastructure(err.to_string())
    }
}
