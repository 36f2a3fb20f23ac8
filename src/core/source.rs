//! Candidate word collection
//!
//! Holds the immutable list of words that secret words are drawn from.

use super::GameError;
use rand::Rng;
use std::sync::Arc;

/// An immutable, non-empty collection of candidate secret words
///
/// Cloning is cheap: clones share the same underlying list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSource {
    words: Arc<[String]>,
}

impl WordSource {
    /// Build a source from a collection of words
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordList` if `words` is empty, or
    /// `GameError::EmptyWord` if any entry is an empty string.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::WordSource;
    ///
    /// let source = WordSource::new(vec!["gato".to_string(), "sol".to_string()]).unwrap();
    /// assert_eq!(source.len(), 2);
    ///
    /// assert!(WordSource::new(Vec::new()).is_err());
    /// ```
    pub fn new(words: Vec<String>) -> Result<Self, GameError> {
        if words.is_empty() {
            return Err(GameError::EmptyWordList);
        }
        if words.iter().any(String::is_empty) {
            return Err(GameError::EmptyWord);
        }
        Ok(Self {
            words: words.into(),
        })
    }

    /// Build a source from embedded string slices
    ///
    /// # Errors
    /// Same conditions as [`WordSource::new`].
    pub fn from_slice(words: &[&str]) -> Result<Self, GameError> {
        Self::new(words.iter().map(|&w| w.to_string()).collect())
    }

    /// Pick a word uniformly at random using the supplied random source
    ///
    /// The collection itself is never modified.
    pub fn pick_word<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        // Non-empty by construction, so the range is never empty
        let index = rng.random_range(0..self.words.len());
        &self.words[index]
    }

    /// All candidate words, in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of candidate words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: empty sources are rejected at construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
