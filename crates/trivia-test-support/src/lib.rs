//! Shared test doubles and fixtures for the Trivia quiz service.

mod clock;
mod fixtures;
mod repository;
mod rng;

pub use clock::FixedClock;
pub use fixtures::{fixed_now, quiz, tip};
pub use repository::{
    FailingQuizRepository, FailingTipRepository, InMemoryQuizRepository, InMemoryTipRepository,
};
pub use rng::{MockRng, SequenceRng};
