//! Trivia: randomized play-through engine.
//!
//! A play-through offers every quiz in random order and counts correct
//! answers until the pool runs dry (won) or the player answers wrongly
//! (lost). Between requests the state lives in a [`store::PlaySessionStore`]
//! keyed by the client's session.

pub mod application;
pub mod domain;
pub mod store;
