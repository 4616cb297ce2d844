//! Query handlers for the random play context.

use serde::Serialize;
use trivia_core::error::DomainError;
use trivia_core::session::SessionId;

use crate::domain::play_session::PlayState;
use crate::store::PlaySessionStore;

/// Read-only view of a session's play-through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayProgressView {
    /// Whether a play-through is in progress.
    pub playing: bool,
    /// Correct answers so far (`0` when idle).
    pub score: u32,
    /// Quizzes still to be answered.
    pub remaining: usize,
    /// The quiz currently on offer, if any.
    pub current_quiz_id: Option<i64>,
}

/// Reports the progress of the caller's play-through without changing it.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the session store fails.
pub async fn get_play_progress(
    session_id: SessionId,
    sessions: &dyn PlaySessionStore,
) -> Result<PlayProgressView, DomainError> {
    let loaded = sessions.load(session_id).await?;
    Ok(match loaded.state {
        PlayState::NoSession => PlayProgressView {
            playing: false,
            score: 0,
            remaining: 0,
            current_quiz_id: None,
        },
        PlayState::InProgress(session) => PlayProgressView {
            playing: true,
            score: session.score(),
            remaining: session.pool().len(),
            current_quiz_id: session.current(),
        },
    })
}
