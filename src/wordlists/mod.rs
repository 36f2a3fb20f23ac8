//! Word lists for hangman rounds
//!
//! Provides the embedded default list and loading of custom lists from disk.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
