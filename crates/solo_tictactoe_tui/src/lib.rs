//! Solo tic-tac-toe front end.
//!
//! - **Config**: pacing and seed settings from TOML
//! - **Session**: async wrapper around the engine that paces the computer's
//!   replies and cancels them on reset

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod session;

pub use config::{ConfigError, GameConfig};
pub use session::{GameSession, SessionEvent, Snapshot};
