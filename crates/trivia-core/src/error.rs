//! Domain error types.

use thiserror::Error;
use uuid::Uuid;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// No quiz exists with the given identifier.
    #[error("there is no quiz with id={0}")]
    QuizNotFound(i64),

    /// No tip exists with the given identifier (or it belongs to another quiz).
    #[error("there is no tip with id={0}")]
    TipNotFound(i64),

    /// The request does not fit the current play-through state, e.g. an
    /// answer submitted while no play-through is active.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// The stored play session changed between load and save.
    #[error("concurrency conflict on session {session_id}: expected version {expected}, found {actual}")]
    ConcurrencyConflict {
        /// The session that had the conflict.
        session_id: Uuid,
        /// The version the writer loaded.
        expected: i64,
        /// The version found in the store.
        actual: i64,
    },

    /// Input rejected by domain validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// A repository or session store failure.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

impl DomainError {
    /// Returns `true` for the not-found family of errors.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::QuizNotFound(_) | Self::TipNotFound(_))
    }
}
