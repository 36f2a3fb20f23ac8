//! Core rules engine for hangman
//!
//! This module contains the game state machine: word selection, reveal tracking
//! and attempt accounting. Nothing here performs I/O or rendering.

mod difficulty;
mod error;
mod session;
mod source;
mod target;

pub use difficulty::Difficulty;
pub use error::GameError;
pub use session::{GameSession, RoundState};
pub use source::WordSource;
pub use target::GuessTarget;
