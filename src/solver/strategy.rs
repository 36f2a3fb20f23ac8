//! Letter selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::candidates::{filter_candidates, letter_counts};
use crate::core::GuessTarget;
use rand::RngCore;
use rustc_hash::{FxHashMap, FxHashSet};

/// A strategy for choosing the next letter to guess
pub trait Strategy {
    /// Select an untried letter for the current round
    ///
    /// Any randomness must come from `rng` so seeded runs repeat exactly.
    /// Returns `None` when the strategy has nothing left to try.
    fn select_letter(
        &self,
        target: &GuessTarget,
        tried: &FxHashSet<char>,
        rng: &mut dyn RngCore,
    ) -> Option<char>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType<'a> {
    /// Narrow the word list, then pick the most common letter (default)
    Candidates(CandidateStrategy<'a>),
    /// Fixed letter order by frequency over the whole word list
    Frequency(FrequencyStrategy),
    /// Random untried letter
    Random(RandomStrategy),
}

impl Strategy for StrategyType<'_> {
    fn select_letter(
        &self,
        target: &GuessTarget,
        tried: &FxHashSet<char>,
        rng: &mut dyn RngCore,
    ) -> Option<char> {
        match self {
            Self::Candidates(s) => s.select_letter(target, tried, rng),
            Self::Frequency(s) => s.select_letter(target, tried, rng),
            Self::Random(s) => s.select_letter(target, tried, rng),
        }
    }
}

impl<'a> StrategyType<'a> {
    /// Create strategy from name string
    ///
    /// Supported names: "candidates", "frequency", "random".
    /// Defaults to candidates if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, words: &'a [String]) -> Self {
        match name {
            "frequency" => Self::Frequency(FrequencyStrategy::new(words)),
            "random" => Self::Random(RandomStrategy::new(words)),
            _ => Self::Candidates(CandidateStrategy::new(words)),
        }
    }
}

/// Most-used letter first, decided once from the whole word list
pub struct FrequencyStrategy {
    order: Vec<char>,
}

impl FrequencyStrategy {
    /// Rank the letters of `words` by how many words contain them
    #[must_use]
    pub fn new(words: &[String]) -> Self {
        let counts = letter_counts(words.iter().map(String::as_str));
        Self {
            order: ranked_letters(&counts),
        }
    }

    /// Letters in the order they will be tried
    #[must_use]
    pub fn order(&self) -> &[char] {
        &self.order
    }
}

impl Strategy for FrequencyStrategy {
    fn select_letter(
        &self,
        _target: &GuessTarget,
        tried: &FxHashSet<char>,
        _rng: &mut dyn RngCore,
    ) -> Option<char> {
        self.order.iter().copied().find(|ch| !tried.contains(ch))
    }
}

/// Candidate narrowing strategy
///
/// Keeps only the words that still fit the revealed pattern and the misses, then
/// guesses the untried letter found in the most of them. Falls back to global
/// frequency when no listed word fits.
pub struct CandidateStrategy<'a> {
    words: &'a [String],
    fallback: FrequencyStrategy,
}

impl<'a> CandidateStrategy<'a> {
    #[must_use]
    pub fn new(words: &'a [String]) -> Self {
        Self {
            words,
            fallback: FrequencyStrategy::new(words),
        }
    }
}

impl Strategy for CandidateStrategy<'_> {
    fn select_letter(
        &self,
        target: &GuessTarget,
        tried: &FxHashSet<char>,
        rng: &mut dyn RngCore,
    ) -> Option<char> {
        let candidates = filter_candidates(self.words, target, tried);
        let mut counts = letter_counts(candidates);
        counts.retain(|ch, _| !tried.contains(ch));

        ranked_letters(&counts)
            .first()
            .copied()
            .or_else(|| self.fallback.select_letter(target, tried, rng))
    }
}

/// Random strategy
///
/// Picks any untried letter from the list's alphabet, drawn from the caller's
/// generator. Useful as a baseline.
pub struct RandomStrategy {
    alphabet: Vec<char>,
}

impl RandomStrategy {
    #[must_use]
    pub fn new(words: &[String]) -> Self {
        let mut alphabet: Vec<char> = letter_counts(words.iter().map(String::as_str))
            .into_keys()
            .collect();
        alphabet.sort_unstable();
        Self { alphabet }
    }
}

impl Strategy for RandomStrategy {
    fn select_letter(
        &self,
        _target: &GuessTarget,
        tried: &FxHashSet<char>,
        rng: &mut dyn RngCore,
    ) -> Option<char> {
        use rand::prelude::IndexedRandom;

        let untried: Vec<char> = self
            .alphabet
            .iter()
            .copied()
            .filter(|ch| !tried.contains(ch))
            .collect();

        untried.choose(rng).copied()
    }
}

/// Letters sorted by descending count, ties broken alphabetically
fn ranked_letters(counts: &FxHashMap<char, usize>) -> Vec<char> {
    let mut letters: Vec<(char, usize)> = counts.iter().map(|(&ch, &n)| (ch, n)).collect();
    letters.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    letters.into_iter().map(|(ch, _)| ch).collect()
}
