//! PostgreSQL implementation of the `TipRepository` trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use trivia_core::error::DomainError;
use trivia_core::repository::TipRepository;
use trivia_core::tip::{NewTip, Tip};

use crate::schema::infrastructure;

#[derive(Debug, sqlx::FromRow)]
struct TipRow {
    id: i64,
    quiz_id: i64,
    text: String,
    author: String,
    accepted: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<TipRow> for Tip {
    fn from(row: TipRow) -> Self {
        Self {
            id: row.id,
            quiz_id: row.quiz_id,
            text: row.text,
            author: row.author,
            accepted: row.accepted,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL-backed tip repository.
#[derive(Debug, Clone)]
pub struct PgTipRepository {
    pool: PgPool,
}

impl PgTipRepository {
    /// Creates a new `PgTipRepository` with the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TipRepository for PgTipRepository {
    async fn find_by_id(&self, id: i64) -> Result<Tip, DomainError> {
        sqlx::query_as::<_, TipRow>(
            "SELECT id, quiz_id, text, author, accepted, created_at, updated_at \
             FROM tips WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(infrastructure)?
        .map(Tip::from)
        .ok_or(DomainError::TipNotFound(id))
    }

    async fn list_for_quiz(&self, quiz_id: i64) -> Result<Vec<Tip>, DomainError> {
        let rows = sqlx::query_as::<_, TipRow>(
            "SELECT id, quiz_id, text, author, accepted, created_at, updated_at \
             FROM tips WHERE quiz_id = $1 ORDER BY id",
        )
        .bind(quiz_id)
        .fetch_all(&self.pool)
        .await
        .map_err(infrastructure)?;
        Ok(rows.into_iter().map(Tip::from).collect())
    }

    async fn create(&self, tip: NewTip) -> Result<Tip, DomainError> {
        let row = sqlx::query_as::<_, TipRow>(
            "INSERT INTO tips (quiz_id, text, author, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $4) \
             RETURNING id, quiz_id, text, author, accepted, created_at, updated_at",
        )
        .bind(tip.quiz_id)
        .bind(&tip.text)
        .bind(&tip.author)
        .bind(tip.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(infrastructure)?;
        Ok(row.into())
    }

    async fn update(&self, tip: &Tip) -> Result<(), DomainError> {
        let result = sqlx::query(
            "UPDATE tips SET text = $2, accepted = $3, updated_at = $4 WHERE id = $1",
        )
        .bind(tip.id)
        .bind(&tip.text)
        .bind(tip.accepted)
        .bind(tip.updated_at)
        .execute(&self.pool)
        .await
        .map_err(infrastructure)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::TipNotFound(tip.id));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM tips WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(infrastructure)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::TipNotFound(id));
        }
        Ok(())
    }
}
