//! PostgreSQL implementation of the `QuizRepository` trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use trivia_core::error::DomainError;
use trivia_core::quiz::{NewQuiz, Quiz, QuizFilter};
use trivia_core::repository::QuizRepository;

use crate::schema::{infrastructure, to_bigint};

const SELECT_COLUMNS: &str =
    "SELECT id, question, answer, author_id, created_at, updated_at FROM quizzes";

/// Matches `$1` against the question (case-insensitive `LIKE` pattern) and
/// `$2` against the author; a `NULL` parameter disables its condition.
const FILTER_CLAUSE: &str =
    "WHERE ($1::TEXT IS NULL OR question ILIKE $1) AND ($2::BIGINT IS NULL OR author_id = $2)";

#[derive(Debug, sqlx::FromRow)]
struct QuizRow {
    id: i64,
    question: String,
    answer: String,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<QuizRow> for Quiz {
    fn from(row: QuizRow) -> Self {
        Self {
            id: row.id,
            question: row.question,
            answer: row.answer,
            author_id: row.author_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL-backed quiz repository.
#[derive(Debug, Clone)]
pub struct PgQuizRepository {
    pool: PgPool,
}

impl PgQuizRepository {
    /// Creates a new `PgQuizRepository` with the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuizRepository for PgQuizRepository {
    async fn list_all(&self) -> Result<Vec<Quiz>, DomainError> {
        let rows = sqlx::query_as::<_, QuizRow>(&format!("{SELECT_COLUMNS} ORDER BY id"))
            .fetch_all(&self.pool)
            .await
            .map_err(infrastructure)?;
        Ok(rows.into_iter().map(Quiz::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Quiz, DomainError> {
        sqlx::query_as::<_, QuizRow>(&format!("{SELECT_COLUMNS} WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(infrastructure)?
            .map(Quiz::from)
            .ok_or(DomainError::QuizNotFound(id))
    }

    async fn count(&self, filter: &QuizFilter) -> Result<u64, DomainError> {
        let sql = format!("SELECT COUNT(*) FROM quizzes {FILTER_CLAUSE}");
        let total: i64 = sqlx::query_scalar(&sql)
            .bind(filter.like_pattern())
            .bind(filter.author_id)
            .fetch_one(&self.pool)
            .await
            .map_err(infrastructure)?;
        Ok(u64::try_from(total).unwrap_or_default())
    }

    async fn find_page(
        &self,
        filter: &QuizFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Quiz>, DomainError> {
        let sql = format!("{SELECT_COLUMNS} {FILTER_CLAUSE} ORDER BY id LIMIT $3 OFFSET $4");
        let rows = sqlx::query_as::<_, QuizRow>(&sql)
            .bind(filter.like_pattern())
            .bind(filter.author_id)
            .bind(to_bigint(limit))
            .bind(to_bigint(offset))
            .fetch_all(&self.pool)
            .await
            .map_err(infrastructure)?;
        Ok(rows.into_iter().map(Quiz::from).collect())
    }

    async fn create(&self, quiz: NewQuiz) -> Result<Quiz, DomainError> {
        let row = sqlx::query_as::<_, QuizRow>(
            "INSERT INTO quizzes (question, answer, author_id, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $4) \
             RETURNING id, question, answer, author_id, created_at, updated_at",
        )
        .bind(&quiz.question)
        .bind(&quiz.answer)
        .bind(quiz.author_id)
        .bind(quiz.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(infrastructure)?;
        Ok(row.into())
    }

    async fn update(&self, quiz: &Quiz) -> Result<(), DomainError> {
        let result = sqlx::query(
            "UPDATE quizzes SET question = $2, answer = $3, updated_at = $4 WHERE id = $1",
        )
        .bind(quiz.id)
        .bind(&quiz.question)
        .bind(&quiz.answer)
        .bind(quiz.updated_at)
        .execute(&self.pool)
        .await
        .map_err(infrastructure)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::QuizNotFound(quiz.id));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        // Tips go with the quiz through ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM quizzes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(infrastructure)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::QuizNotFound(id));
        }
        Ok(())
    }
}
