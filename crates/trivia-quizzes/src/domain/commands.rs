//! Commands for the quiz authoring context.

use uuid::Uuid;

/// Command to create a quiz.
#[derive(Debug, Clone)]
pub struct CreateQuiz {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    pub question: String,
    pub answer: String,
    /// Owning user; `0` when unknown.
    pub author_id: i64,
}

/// Command to replace a quiz's question and answer.
#[derive(Debug, Clone)]
pub struct UpdateQuiz {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    pub quiz_id: i64,
    pub question: String,
    pub answer: String,
}

/// Command to delete a quiz and its tips.
#[derive(Debug, Clone)]
pub struct DeleteQuiz {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    pub quiz_id: i64,
}
