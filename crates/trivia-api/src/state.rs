//! Shared application state.

use std::sync::{Arc, Mutex};

use trivia_core::clock::Clock;
use trivia_core::repository::{QuizRepository, TipRepository};
use trivia_core::rng::DeterministicRng;
use trivia_random_play::store::PlaySessionStore;

use crate::session::SessionCookie;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Timestamp source for quiz and tip records.
    pub clock: Arc<dyn Clock>,
    /// Random source for question selection.
    pub rng: Arc<Mutex<dyn DeterministicRng + Send>>,
    /// Quiz storage.
    pub quiz_repository: Arc<dyn QuizRepository>,
    /// Tip storage.
    pub tip_repository: Arc<dyn TipRepository>,
    /// Per-client random play state.
    pub session_store: Arc<dyn PlaySessionStore>,
    /// How the client's session identity is carried.
    pub session_cookie: SessionCookie,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock>,
        rng: Arc<Mutex<dyn DeterministicRng + Send>>,
        quiz_repository: Arc<dyn QuizRepository>,
        tip_repository: Arc<dyn TipRepository>,
        session_store: Arc<dyn PlaySessionStore>,
        session_cookie: SessionCookie,
    ) -> Self {
        Self {
            clock,
            rng,
            quiz_repository,
            tip_repository,
            session_store,
            session_cookie,
        }
    }
}
