//! Automated hangman players
//!
//! Letter-picking strategies used by the simulation command.

pub mod candidates;
pub mod strategy;

pub use candidates::{filter_candidates, is_consistent, letter_counts};
pub use strategy::{CandidateStrategy, FrequencyStrategy, RandomStrategy, Strategy, StrategyType};
