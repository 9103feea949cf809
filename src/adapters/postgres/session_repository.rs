//! PostgreSQL implementation of SessionRepository.
//!
//! Persists training sessions to the `sessions` table. `find_all` orders by
//! insertion time, then id.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::SessionFormation;
use crate::ports::SessionRepository;

const SESSION_COLUMNS: &str = "id, title, dates, lieu, price, level, category, description, \
                               places_totales, places_reservees";

/// PostgreSQL implementation of SessionRepository.
#[derive(Clone)]
pub struct PostgresSessionRepository {
    pool: PgPool,
}

impl PostgresSessionRepository {
    /// Creates a new PostgresSessionRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PostgresSessionRepository {
    async fn find_all(&self) -> Result<Vec<SessionFormation>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM sessions ORDER BY created_at, id",
            SESSION_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch sessions", e))?;

        rows.into_iter().map(row_to_session).collect()
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<SessionFormation>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM sessions WHERE id = $1",
            SESSION_COLUMNS
        ))
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch session", e))?;

        row.map(row_to_session).transpose()
    }

    async fn save(&self, session: &SessionFormation) -> Result<SessionFormation, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO sessions (
                id, title, dates, lieu, price, level, category, description,
                places_totales, places_reservees
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                dates = EXCLUDED.dates,
                lieu = EXCLUDED.lieu,
                price = EXCLUDED.price,
                level = EXCLUDED.level,
                category = EXCLUDED.category,
                description = EXCLUDED.description,
                places_totales = EXCLUDED.places_totales,
                places_reservees = EXCLUDED.places_reservees
            RETURNING {}
            "#,
            SESSION_COLUMNS
        ))
        .bind(session.id.as_str())
        .bind(session.title.as_deref())
        .bind(session.dates.as_deref())
        .bind(session.location.as_deref())
        .bind(session.price)
        .bind(session.level.as_deref())
        .bind(session.category.as_deref())
        .bind(session.description.as_deref())
        .bind(session.total_places)
        .bind(session.reserved_places)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to save session", e))?;

        row_to_session(row)
    }

    async fn delete_by_id(&self, id: &SessionId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete session", e))?;

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn column<'r, T>(row: &'r sqlx::postgres::PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(&format!("Failed to get {}", name), e))
}

fn row_to_session(row: sqlx::postgres::PgRow) -> Result<SessionFormation, DomainError> {
    let id: String = column(&row, "id")?;
    let id = id
        .parse::<SessionId>()
        .map_err(|e| DomainError::database("Invalid session id", e))?;

    Ok(SessionFormation {
        id,
        title: column(&row, "title")?,
        dates: column(&row, "dates")?,
        location: column(&row, "lieu")?,
        price: column(&row, "price")?,
        level: column(&row, "level")?,
        category: column(&row, "category")?,
        description: column(&row, "description")?,
        total_places: column(&row, "places_totales")?,
        reserved_places: column(&row, "places_reservees")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_columns_do_not_use_reserved_keywords() {
        // `desc` is an SQL keyword; the description lives in its own column.
        assert!(!SESSION_COLUMNS.split(", ").any(|c| c.trim() == "desc"));
    }

    #[test]
    fn session_columns_cover_every_field() {
        let columns: Vec<&str> = SESSION_COLUMNS.split(',').map(str::trim).collect();
        assert_eq!(columns.len(), 10);
        assert!(columns.contains(&"places_totales"));
        assert!(columns.contains(&"places_reservees"));
    }
}
