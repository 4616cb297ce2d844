//! Application layer for tips.

pub mod command_handlers;
