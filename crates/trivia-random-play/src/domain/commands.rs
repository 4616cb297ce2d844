//! Commands for the random play context.

use trivia_core::session::SessionId;
use uuid::Uuid;

/// Request the next question of the caller's play-through, starting one if
/// none is in progress.
#[derive(Debug, Clone)]
pub struct NextQuestion {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The client session playing.
    pub session_id: SessionId,
}

/// Submit an answer for a quiz of the current play-through.
#[derive(Debug, Clone)]
pub struct CheckAnswer {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The client session playing.
    pub session_id: SessionId,
    /// The answer as typed by the player.
    pub answer: String,
}
