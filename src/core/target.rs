//! Secret word representation
//!
//! A `GuessTarget` stores the letters of the secret word alongside a parallel
//! set of reveal flags, one per position.

use super::GameError;
use std::fmt;

/// The secret word for a single round with per-position reveal tracking
///
/// Letters are kept exactly as given: no case folding and no Unicode
/// normalization, so `'á'` and `'a'` are different letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessTarget {
    letters: Vec<char>,
    revealed: Vec<bool>,
}

impl GuessTarget {
    /// Create a new target from a word
    ///
    /// # Errors
    /// Returns `GameError::EmptyWord` if the word has no characters.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::GuessTarget;
    ///
    /// let target = GuessTarget::new("gato").unwrap();
    /// assert_eq!(target.len(), 4);
    /// assert!(!target.is_solved());
    ///
    /// assert!(GuessTarget::new("").is_err());
    /// ```
    pub fn new(word: &str) -> Result<Self, GameError> {
        let letters: Vec<char> = word.chars().collect();
        if letters.is_empty() {
            return Err(GameError::EmptyWord);
        }

        let revealed = vec![false; letters.len()];
        Ok(Self { letters, revealed })
    }

    /// Build a target from a word already known to be non-empty
    pub(crate) fn from_checked(word: &str) -> Self {
        debug_assert!(!word.is_empty(), "word sources never hold empty words");
        let letters: Vec<char> = word.chars().collect();
        let revealed = vec![false; letters.len()];
        Self { letters, revealed }
    }

    /// Guess a letter, revealing every position where it appears
    ///
    /// Returns the zero-based positions of the letter in ascending order.
    /// A letter that does not appear returns an empty vector and changes nothing.
    /// Guessing an already revealed letter returns the same positions again.
    pub fn guess(&mut self, letter: char) -> Vec<usize> {
        let positions: Vec<usize> = self
            .letters
            .iter()
            .enumerate()
            .filter_map(|(i, &ch)| (ch == letter).then_some(i))
            .collect();

        for &i in &positions {
            self.revealed[i] = true;
        }

        positions
    }

    /// Total number of letter positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false: a target is never built from an empty word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Check whether every position has been revealed
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.revealed.iter().all(|&r| r)
    }

    /// The letters of the secret word
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Reveal flags, parallel to [`letters`](Self::letters)
    #[inline]
    #[must_use]
    pub fn revealed(&self) -> &[bool] {
        &self.revealed
    }

    /// Number of positions revealed so far
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|&&r| r).count()
    }

    /// Check if the word contains a letter, revealed or not
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }
}

impl fmt::Display for GuessTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &ch in &self.letters {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_creation_valid() {
        let target = GuessTarget::new("gato").unwrap();
        assert_eq!(target.letters(), &['g', 'a', 't', 'o']);
        assert_eq!(target.revealed(), &[false; 4]);
        assert_eq!(target.len(), 4);
        assert!(!target.is_empty());
    }

    #[test]
    fn target_creation_empty() {
        assert_eq!(GuessTarget::new(""), Err(GameError::EmptyWord));
    }

    #[test]
    fn target_preserves_accents_and_case() {
        let target = GuessTarget::new("Árbol").unwrap();
        assert_eq!(target.len(), 5);
        assert_eq!(target.letters()[0], 'Á');

        let mut target = GuessTarget::new("canción").unwrap();
        assert_eq!(target.len(), 7);
        assert_eq!(target.guess('o'), Vec::<usize>::new());
        assert_eq!(target.guess('ó'), vec![5]);
    }

    #[test]
    fn guess_case_sensitive() {
        let mut target = GuessTarget::new("Sol").unwrap();
        assert!(target.guess('s').is_empty());
        assert_eq!(target.guess('S'), vec![0]);
    }

    #[test]
    fn guess_missing_letter_changes_nothing() {
        let mut target = GuessTarget::new("gato").unwrap();
        let before = target.clone();

        assert!(target.guess('z').is_empty());
        assert_eq!(target, before);
        assert_eq!(target.revealed_count(), 0);
    }

    #[test]
    fn guess_reveals_all_positions_ascending() {
        let mut target = GuessTarget::new("banana").unwrap();
        assert_eq!(target.guess('a'), vec![1, 3, 5]);
        assert_eq!(
            target.revealed(),
            &[false, true, false, true, false, true]
        );
        assert_eq!(target.guess('n'), vec![2, 4]);
        assert_eq!(target.revealed_count(), 5);
    }

    #[test]
    fn guess_is_idempotent() {
        let mut target = GuessTarget::new("perro").unwrap();
        let first = target.guess('r');
        let revealed_after_first = target.revealed().to_vec();

        let second = target.guess('r');
        assert_eq!(first, vec![2, 3]);
        assert_eq!(first, second);
        assert_eq!(target.revealed(), revealed_after_first.as_slice());
    }

    #[test]
    fn solved_after_every_letter_guessed() {
        let mut target = GuessTarget::new("gato").unwrap();
        assert_eq!(target.guess('a'), vec![1]);
        assert!(!target.is_solved());
        assert_eq!(target.guess('g'), vec![0]);
        assert_eq!(target.guess('t'), vec![2]);
        assert!(!target.is_solved());
        assert_eq!(target.guess('o'), vec![3]);
        assert!(target.is_solved());
    }

    #[test]
    fn solved_order_independent() {
        let mut target = GuessTarget::new("sol").unwrap();
        for letter in ['l', 'x', 'o', 's'] {
            target.guess(letter);
        }
        assert!(target.is_solved());
    }

    #[test]
    fn target_contains() {
        let target = GuessTarget::new("ñandú").unwrap();
        assert!(target.contains('ñ'));
        assert!(target.contains('ú'));
        assert!(!target.contains('u'));
    }

    #[test]
    fn target_display() {
        let target = GuessTarget::new("pingüino").unwrap();
        assert_eq!(format!("{target}"), "pingüino");
    }
}
