//! Domain layer for random play.

pub mod commands;
pub mod play_session;
