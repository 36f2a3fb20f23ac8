//! Candidate narrowing
//!
//! Works out which words from a list could still be the secret word, given what
//! the current round has revealed.

use crate::core::GuessTarget;
use rustc_hash::{FxHashMap, FxHashSet};

/// Check if `word` is still possible given the target's reveals and tried letters
///
/// A word stays possible when it has the same length, matches every revealed
/// position, and has no tried letter in any unrevealed position (a tried letter
/// present in the secret word would have been revealed everywhere).
#[must_use]
pub fn is_consistent(word: &str, target: &GuessTarget, tried: &FxHashSet<char>) -> bool {
    let mut chars = word.chars();

    for (&letter, &revealed) in target.letters().iter().zip(target.revealed()) {
        let Some(ch) = chars.next() else {
            return false;
        };
        if revealed {
            if ch != letter {
                return false;
            }
        } else if tried.contains(&ch) {
            return false;
        }
    }

    // Longer words leave characters behind
    chars.next().is_none()
}

/// Filter a word list down to the words still consistent with the round
#[must_use]
pub fn filter_candidates<'a>(
    words: &'a [String],
    target: &GuessTarget,
    tried: &FxHashSet<char>,
) -> Vec<&'a str> {
    words
        .iter()
        .map(String::as_str)
        .filter(|word| is_consistent(word, target, tried))
        .collect()
}

/// Count, for each letter, how many words contain it at least once
#[must_use]
pub fn letter_counts<'a, I>(words: I) -> FxHashMap<char, usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: FxHashMap<char, usize> = FxHashMap::default();
    let mut seen: FxHashSet<char> = FxHashSet::default();

    for word in words {
        seen.clear();
        for ch in word.chars() {
            if seen.insert(ch) {
                *counts.entry(ch).or_insert(0) += 1;
            }
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tried(letters: &[char]) -> FxHashSet<char> {
        letters.iter().copied().collect()
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|&w| w.to_string()).collect()
    }

    #[test]
    fn fresh_target_keeps_same_length_words() {
        let target = GuessTarget::new("gato").unwrap();
        let list = words(&["gato", "pato", "sol", "perro", "luna"]);

        let candidates = filter_candidates(&list, &target, &tried(&[]));
        assert_eq!(candidates, vec!["gato", "pato", "luna"]);
    }

    #[test]
    fn revealed_positions_must_match() {
        let mut target = GuessTarget::new("gato").unwrap();
        target.guess('t');
        let list = words(&["gato", "pato", "luna", "mito"]);

        let candidates = filter_candidates(&list, &target, &tried(&['t']));
        assert_eq!(candidates, vec!["gato", "pato", "mito"]);
    }

    #[test]
    fn misses_exclude_words() {
        let mut target = GuessTarget::new("gato").unwrap();
        target.guess('p');
        let list = words(&["gato", "pato", "luna"]);

        let candidates = filter_candidates(&list, &target, &tried(&['p']));
        assert_eq!(candidates, vec!["gato", "luna"]);
    }

    #[test]
    fn hit_letter_cannot_hide_in_unrevealed_position() {
        let mut target = GuessTarget::new("sol").unwrap();
        target.guess('o');
        // "oso" has 'o' where the secret shows it unrevealed
        assert!(!is_consistent("oso", &target, &tried(&['o'])));
        assert!(is_consistent("sol", &target, &tried(&['o'])));
    }

    #[test]
    fn length_mismatch_rejected() {
        let target = GuessTarget::new("sol").unwrap();
        assert!(!is_consistent("so", &target, &tried(&[])));
        assert!(!is_consistent("sola", &target, &tried(&[])));
    }

    #[test]
    fn accented_letters_compared_exactly() {
        let mut target = GuessTarget::new("ratón").unwrap();
        target.guess('ó');
        assert!(is_consistent("ratón", &target, &tried(&['ó'])));
        assert!(!is_consistent("raton", &target, &tried(&['ó'])));
    }

    #[test]
    fn letter_counts_once_per_word() {
        let counts = letter_counts(["banana", "sol", "luna"]);
        assert_eq!(counts.get(&'a'), Some(&2));
        assert_eq!(counts.get(&'n'), Some(&2));
        assert_eq!(counts.get(&'l'), Some(&2));
        assert_eq!(counts.get(&'b'), Some(&1));
        assert_eq!(counts.get(&'z'), None);
    }
}
