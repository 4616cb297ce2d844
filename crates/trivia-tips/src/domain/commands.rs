//! Commands for the tips context.

use uuid::Uuid;

/// Command to attach a tip to a quiz.
#[derive(Debug, Clone)]
pub struct CreateTip {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    pub quiz_id: i64,
    pub text: String,
    /// Display name of the submitter.
    pub author: String,
}

/// Command to mark a tip as accepted.
#[derive(Debug, Clone)]
pub struct AcceptTip {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    pub quiz_id: i64,
    pub tip_id: i64,
}

/// Command to change a tip's text.
#[derive(Debug, Clone)]
pub struct EditTip {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    pub quiz_id: i64,
    pub tip_id: i64,
    pub text: String,
    /// User making the edit. An edit by the quiz's author withdraws the
    /// tip's acceptance.
    pub editor_id: Option<i64>,
}

/// Command to delete a tip.
#[derive(Debug, Clone)]
pub struct DeleteTip {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    pub quiz_id: i64,
    pub tip_id: i64,
}
