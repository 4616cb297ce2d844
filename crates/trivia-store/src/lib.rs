//! PostgreSQL-backed repositories for the Trivia quiz service.

pub mod pg_quiz_repository;
pub mod pg_tip_repository;
pub mod schema;
