//! Domain layer for quiz authoring.

pub mod commands;
pub mod validation;
