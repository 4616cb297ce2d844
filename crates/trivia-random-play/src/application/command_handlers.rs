//! Command handlers for the random play context.
//!
//! Each handler loads the caller's `PlayState`, runs one domain transition
//! and saves the result with the version it loaded. Any failure before the
//! save leaves the stored state untouched.

use std::collections::HashMap;
use std::sync::Mutex;

use tracing::{debug, info, warn};
use trivia_core::error::DomainError;
use trivia_core::quiz::Quiz;
use trivia_core::repository::QuizRepository;
use trivia_core::rng::DeterministicRng;

use crate::domain::commands::{CheckAnswer, NextQuestion};
use crate::domain::play_session::{PlayState, Selection, Verdict};
use crate::store::PlaySessionStore;

/// What to show after a `NextQuestion` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextQuestionResult {
    /// Ask this quiz.
    Question {
        /// The quiz on offer.
        quiz: Quiz,
        /// Score so far.
        score: u32,
    },
    /// Every quiz has been answered (or there were none).
    Finished {
        /// Final score.
        score: u32,
    },
}

/// Handles the `NextQuestion` command.
///
/// Without a play-through in progress, the pool is seeded from every quiz in
/// the repository. The chosen quiz is loaded by id; a pooled quiz that has
/// since been deleted is dropped from the pool and another one is drawn.
///
/// The `Mutex` is locked only around the synchronous draw to avoid holding a
/// `MutexGuard` across await points.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the repository or session store
/// fails and `DomainError::ConcurrencyConflict` if another request changed
/// the session in the meantime.
pub async fn handle_next_question(
    command: &NextQuestion,
    rng: &Mutex<dyn DeterministicRng + Send>,
    quizzes: &dyn QuizRepository,
    sessions: &dyn PlaySessionStore,
) -> Result<NextQuestionResult, DomainError> {
    let loaded = sessions.load(command.session_id).await?;

    let mut fetched: HashMap<i64, Quiz> = HashMap::new();
    let mut state = if loaded.state.is_playing() {
        loaded.state.clone()
    } else {
        let all = quizzes.list_all().await?;
        debug!(quiz_count = all.len(), "seeding random play pool");
        let seeded = PlayState::start(all.iter().map(|q| q.id));
        fetched = all.into_iter().map(|q| (q.id, q)).collect();
        seeded
    };

    loop {
        let transition = {
            let mut rng_guard = rng
                .lock()
                .map_err(|e| DomainError::Infrastructure(format!("RNG mutex poisoned: {e}")))?;
            state.next_question(&mut *rng_guard)
        };

        match transition.outcome {
            Selection::Won { score } => {
                if loaded.state.is_playing() {
                    sessions
                        .save(command.session_id, loaded.version, &PlayState::NoSession)
                        .await?;
                }
                info!(score, "random play finished with an exhausted pool");
                return Ok(NextQuestionResult::Finished { score });
            }
            Selection::Question { quiz_id, score } => {
                let quiz = match fetched.remove(&quiz_id) {
                    Some(quiz) => quiz,
                    None => match quizzes.find_by_id(quiz_id).await {
                        Ok(quiz) => quiz,
                        Err(DomainError::QuizNotFound(missing)) => {
                            warn!(quiz_id = missing, "pooled quiz no longer exists, dropping it");
                            state = transition.state.prune(missing);
                            continue;
                        }
                        Err(e) => return Err(e),
                    },
                };

                // A repeated request re-offers the same quiz and changes nothing.
                if transition.state != loaded.state {
                    sessions
                        .save(command.session_id, loaded.version, &transition.state)
                        .await?;
                }
                debug!(quiz_id, score, "offering question");
                return Ok(NextQuestionResult::Question { quiz, score });
            }
        }
    }
}

/// Handles the `CheckAnswer` command against an already loaded `quiz`.
///
/// # Errors
///
/// Returns `DomainError::InvalidState` if no play-through is in progress or
/// a correct answer names a quiz that is not pending or not on offer,
/// `DomainError::ConcurrencyConflict` if the
/// session changed concurrently, and `DomainError::Infrastructure` if the
/// session store fails.
pub async fn handle_check_answer(
    command: &CheckAnswer,
    quiz: &Quiz,
    sessions: &dyn PlaySessionStore,
) -> Result<Verdict, DomainError> {
    let loaded = sessions.load(command.session_id).await?;
    let correct = quiz.accepts(&command.answer);
    let transition = loaded.state.check_answer(quiz.id, correct)?;

    sessions
        .save(command.session_id, loaded.version, &transition.state)
        .await?;

    match transition.outcome {
        Verdict::Continue { score } => debug!(quiz_id = quiz.id, score, "correct answer"),
        Verdict::Won { score } => info!(score, "random play won"),
        Verdict::Lost { score } => info!(quiz_id = quiz.id, score, "random play lost"),
    }
    Ok(transition.outcome)
}
