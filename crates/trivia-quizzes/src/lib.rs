//! Trivia: quiz authoring bounded context.
//!
//! Creating, editing, deleting and browsing quizzes, plus answering a single
//! quiz outside of a random play-through.

pub mod application;
pub mod domain;
