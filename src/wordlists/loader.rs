//! Word list loading utilities
//!
//! Reads newline-delimited word lists and builds a [`WordSource`] from them.

use crate::core::WordSource;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse a newline-delimited word list
///
/// Each line is trimmed; blank lines are skipped. Letters, accents and case are
/// kept exactly as written.
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::parse_words;
///
/// let words = parse_words("gato\n  árbol \n\nsol\r\n");
/// assert_eq!(words, vec!["gato", "árbol", "sol"]);
/// ```
#[must_use]
pub fn parse_words(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}

/// Load a word source from a UTF-8 file
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid UTF-8, or holds
/// no words.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let source = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", source.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordSource> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;

    WordSource::new(parse_words(&content))
        .with_context(|| format!("Word list {} is unusable", path.display()))
}

/// Build a word source from the embedded default list
///
/// # Errors
///
/// Returns an error only if the embedded list was built empty.
pub fn load_embedded() -> Result<WordSource> {
    WordSource::from_slice(super::WORDS).context("Embedded word list is empty")
}

/// Load words by name: `"embedded"` for the built-in list, anything else is a path
///
/// # Errors
///
/// Same conditions as [`load_from_file`] and [`load_embedded`].
pub fn load_wordlist(name: &str) -> Result<WordSource> {
    match name {
        "embedded" | "default" => load_embedded(),
        path => load_from_file(path),
    }
}
