//! Trivia Core: shared domain abstractions.
//!
//! This crate defines the records, traits and error type that every bounded
//! context depends on. It contains no infrastructure code.

pub mod clock;
pub mod error;
pub mod quiz;
pub mod repository;
pub mod rng;
pub mod session;
pub mod tip;
