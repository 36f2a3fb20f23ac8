//! Hangman
//!
//! A hangman rules engine: random word selection, letter reveal tracking and
//! attempt accounting, plus an interactive CLI and a strategy simulator.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Difficulty, GameSession, RoundState, WordSource};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let source = WordSource::from_slice(&["gato"]).unwrap();
//! let mut session = GameSession::new(source, StdRng::seed_from_u64(1));
//! session.set_difficulty(Difficulty::Medium);
//!
//! assert_eq!(session.start(), 4);
//! assert_eq!(session.guess('a').unwrap(), vec![1]);
//! for letter in ['g', 't', 'o'] {
//!     session.guess(letter).unwrap();
//! }
//! assert_eq!(session.state(), RoundState::Won);
//! ```

// Core rules engine
pub mod core;

// Automated players
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
