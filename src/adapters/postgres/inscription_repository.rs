//! PostgreSQL implementation of InscriptionRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, InscriptionId, SessionId, Timestamp};
use crate::domain::inscription::Inscription;
use crate::ports::InscriptionRepository;

/// PostgreSQL implementation of InscriptionRepository.
#[derive(Clone)]
pub struct PostgresInscriptionRepository {
    pool: PgPool,
}

impl PostgresInscriptionRepository {
    /// Creates a new PostgresInscriptionRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InscriptionRepository for PostgresInscriptionRepository {
    async fn find_by_session_id(
        &self,
        session_id: &SessionId,
    ) -> Result<Vec<Inscription>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, session_id, user_id, created_at
            FROM inscriptions
            WHERE session_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(session_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch inscriptions by session", e))?;

        rows.into_iter().map(row_to_inscription).collect()
    }

    async fn save(&self, inscription: &Inscription) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO inscriptions (id, session_id, user_id, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE SET
                session_id = EXCLUDED.session_id,
                user_id = EXCLUDED.user_id
            "#,
        )
        .bind(inscription.id().as_str())
        .bind(inscription.session_id().as_str())
        .bind(inscription.user_id())
        .bind(inscription.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert inscription", e))?;

        Ok(())
    }
}

fn row_to_inscription(row: sqlx::postgres::PgRow) -> Result<Inscription, DomainError> {
    let id: String = row
        .try_get("id")
        .map_err(|e| DomainError::database("Failed to get id", e))?;
    let session_id: String = row
        .try_get("session_id")
        .map_err(|e| DomainError::database("Failed to get session_id", e))?;
    let user_id: Option<String> = row
        .try_get("user_id")
        .map_err(|e| DomainError::database("Failed to get user_id", e))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| DomainError::database("Failed to get created_at", e))?;

    Ok(Inscription::reconstitute(
        id.parse::<InscriptionId>()
            .map_err(|e| DomainError::database("Invalid inscription id", e))?,
        session_id
            .parse::<SessionId>()
            .map_err(|e| DomainError::database("Invalid session id", e))?,
        user_id,
        Timestamp::from_datetime(created_at),
    ))
}
