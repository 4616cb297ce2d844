//! Application layer for random play.

pub mod command_handlers;
pub mod query_handlers;
