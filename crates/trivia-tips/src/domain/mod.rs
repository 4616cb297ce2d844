//! Domain layer for tips.

pub mod commands;
