//! Route modules organized by bounded context.

pub mod health;
pub mod quizzes;
pub mod random_play;
pub mod tips;
