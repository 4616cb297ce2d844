//! Application layer for quiz authoring.

pub mod command_handlers;
pub mod query_handlers;
