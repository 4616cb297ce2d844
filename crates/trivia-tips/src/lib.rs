//! Trivia: community tips bounded context.
//!
//! Players attach hints or corrections to a quiz; the quiz's author can
//! accept them.

pub mod application;
pub mod domain;
