//! Repository abstractions for quizzes and tips.

use async_trait::async_trait;

use crate::error::DomainError;
use crate::quiz::{NewQuiz, Quiz, QuizFilter};
use crate::tip::{NewTip, Tip};

/// Read/write access to quiz records.
#[async_trait]
pub trait QuizRepository: Send + Sync {
    /// Every quiz available for random play.
    async fn list_all(&self) -> Result<Vec<Quiz>, DomainError>;

    /// Load one quiz.
    ///
    /// Returns `DomainError::QuizNotFound` if no quiz has this id.
    async fn find_by_id(&self, id: i64) -> Result<Quiz, DomainError>;

    /// Number of quizzes matching `filter`.
    async fn count(&self, filter: &QuizFilter) -> Result<u64, DomainError>;

    /// One page of quizzes matching `filter`, ordered by id.
    async fn find_page(
        &self,
        filter: &QuizFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Quiz>, DomainError>;

    /// Insert a quiz and return it with its assigned id.
    async fn create(&self, quiz: NewQuiz) -> Result<Quiz, DomainError>;

    /// Persist `question`, `answer` and `updated_at` of an existing quiz.
    async fn update(&self, quiz: &Quiz) -> Result<(), DomainError>;

    /// Delete a quiz together with its tips.
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}

/// Read/write access to tip records.
#[async_trait]
pub trait TipRepository: Send + Sync {
    /// Load one tip.
    ///
    /// Returns `DomainError::TipNotFound` if no tip has this id.
    async fn find_by_id(&self, id: i64) -> Result<Tip, DomainError>;

    /// All tips of a quiz, ordered by id.
    async fn list_for_quiz(&self, quiz_id: i64) -> Result<Vec<Tip>, DomainError>;

    /// Insert a tip and return it with its assigned id.
    async fn create(&self, tip: NewTip) -> Result<Tip, DomainError>;

    /// Persist `text`, `accepted` and `updated_at` of an existing tip.
    async fn update(&self, tip: &Tip) -> Result<(), DomainError>;

    /// Delete a tip.
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}
