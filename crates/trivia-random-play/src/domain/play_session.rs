//! The play-through state machine.
//!
//! `PlayState` is either `NoSession` or `InProgress`. Wins and losses are
//! outcomes of a transition, never stored: a transition that ends the
//! play-through hands back `PlayState::NoSession`.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use trivia_core::error::DomainError;
use trivia_core::rng::{DeterministicRng, draw_index};

/// State of one in-progress play-through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaySession {
    /// Quiz ids not yet answered correctly.
    pool: BTreeSet<i64>,
    /// Correct answers so far.
    score: u32,
    /// The question currently on offer, re-offered until answered.
    current: Option<i64>,
}

impl PlaySession {
    /// Quiz ids still to be answered.
    #[must_use]
    pub fn pool(&self) -> &BTreeSet<i64> {
        &self.pool
    }

    /// Correct answers so far.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The question currently on offer, if one has been drawn.
    #[must_use]
    pub fn current(&self) -> Option<i64> {
        self.current
    }
}

/// Whether a play-through is in progress for a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayState {
    /// Nothing stored for the session.
    #[default]
    NoSession,
    /// A play-through with a non-empty pool.
    InProgress(PlaySession),
}

/// Result of asking for the next question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Show this quiz.
    Question {
        /// The quiz to show.
        quiz_id: i64,
        /// Score so far.
        score: u32,
    },
    /// Nothing left to ask.
    Won {
        /// Final score.
        score: u32,
    },
}

/// Result of checking an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Correct, and more questions remain.
    Continue {
        /// Score including this answer.
        score: u32,
    },
    /// Correct, and that was the last question.
    Won {
        /// Final score.
        score: u32,
    },
    /// Wrong answer; the play-through is over.
    Lost {
        /// Score before the failed attempt.
        score: u32,
    },
}

impl Verdict {
    /// Whether the checked answer was right.
    #[must_use]
    pub fn is_correct(self) -> bool {
        !matches!(self, Self::Lost { .. })
    }

    /// The score to display.
    #[must_use]
    pub fn score(self) -> u32 {
        match self {
            Self::Continue { score } | Self::Won { score } | Self::Lost { score } => score,
        }
    }
}

/// A state transition together with what it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition<T> {
    /// The state to persist.
    pub state: PlayState,
    /// What the caller should render.
    pub outcome: T,
}

impl PlayState {
    /// Begins a play-through over `quiz_ids` with a score of zero.
    ///
    /// With no quizzes there is nothing to play, and the state stays
    /// `NoSession`; [`Self::next_question`] then reports an immediate win.
    #[must_use]
    pub fn start(quiz_ids: impl IntoIterator<Item = i64>) -> Self {
        let pool: BTreeSet<i64> = quiz_ids.into_iter().collect();
        if pool.is_empty() {
            return Self::NoSession;
        }
        Self::InProgress(PlaySession {
            pool,
            score: 0,
            current: None,
        })
    }

    /// Returns `true` while a play-through is in progress.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        matches!(self, Self::InProgress(_))
    }

    /// Picks the question to show.
    ///
    /// The question on offer is returned again until it is answered, so
    /// duplicate requests see the same quiz. Otherwise one uniform draw over
    /// the pool picks a new one. The pool itself is never changed here.
    #[must_use]
    pub fn next_question(self, rng: &mut dyn DeterministicRng) -> Transition<Selection> {
        let mut session = match self {
            Self::NoSession => {
                return Transition {
                    state: Self::NoSession,
                    outcome: Selection::Won { score: 0 },
                };
            }
            Self::InProgress(session) => session,
        };

        if let Some(quiz_id) = session.current.filter(|id| session.pool.contains(id)) {
            let score = session.score;
            return Transition {
                state: Self::InProgress(session),
                outcome: Selection::Question { quiz_id, score },
            };
        }

        let Some(index) = draw_index(rng, session.pool.len()) else {
            return Transition {
                state: Self::NoSession,
                outcome: Selection::Won {
                    score: session.score,
                },
            };
        };
        // `draw_index` stays below the pool length, so `nth` always yields.
        let Some(&quiz_id) = session.pool.iter().nth(index) else {
            return Transition {
                state: Self::NoSession,
                outcome: Selection::Won {
                    score: session.score,
                },
            };
        };

        session.current = Some(quiz_id);
        let score = session.score;
        Transition {
            state: Self::InProgress(session),
            outcome: Selection::Question { quiz_id, score },
        }
    }

    /// Applies the player's answer for `quiz_id`.
    ///
    /// A wrong answer loses immediately, whichever quiz it names, keeping
    /// the score earned before it. A correct answer scores a point and
    /// removes the quiz from the pool; emptying the pool wins.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidState` if no play-through is in progress,
    /// or, for a correct answer, if `quiz_id` is not part of the remaining
    /// pool or is not the question on offer.
    pub fn check_answer(
        self,
        quiz_id: i64,
        correct: bool,
    ) -> Result<Transition<Verdict>, DomainError> {
        let Self::InProgress(mut session) = self else {
            return Err(DomainError::InvalidState(
                "no random play-through is in progress".to_owned(),
            ));
        };

        if !correct {
            return Ok(Transition {
                state: Self::NoSession,
                outcome: Verdict::Lost {
                    score: session.score,
                },
            });
        }

        if !session.pool.contains(&quiz_id) {
            return Err(DomainError::InvalidState(format!(
                "quiz {quiz_id} is not pending in the current play-through"
            )));
        }
        if session.current.is_some_and(|offered| offered != quiz_id) {
            return Err(DomainError::InvalidState(format!(
                "quiz {quiz_id} is not the question on offer"
            )));
        }

        session.score += 1;
        session.pool.remove(&quiz_id);
        session.current = None;

        if session.pool.is_empty() {
            return Ok(Transition {
                state: Self::NoSession,
                outcome: Verdict::Won {
                    score: session.score,
                },
            });
        }

        let score = session.score;
        Ok(Transition {
            state: Self::InProgress(session),
            outcome: Verdict::Continue { score },
        })
    }

    /// Drops a quiz that no longer exists in the repository from the pool.
    ///
    /// Emptying the pool this way leaves an `InProgress` state with nothing
    /// to ask; the next [`Self::next_question`] reports it as won.
    #[must_use]
    pub fn prune(self, quiz_id: i64) -> Self {
        match self {
            Self::NoSession => Self::NoSession,
            Self::InProgress(mut session) => {
                session.pool.remove(&quiz_id);
                if session.current == Some(quiz_id) {
                    session.current = None;
                }
                Self::InProgress(session)
            }
        }
    }
}
