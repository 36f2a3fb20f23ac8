//! Formatting utilities for terminal output

use crate::core::GuessTarget;

/// Show revealed letters and hide the rest behind `placeholder`
///
/// Positions are separated by spaces so the word length is easy to read.
#[must_use]
pub fn mask_word(target: &GuessTarget, placeholder: char) -> String {
    let mut result = String::with_capacity(target.len() * 2);

    for (i, (&letter, &revealed)) in target.letters().iter().zip(target.revealed()).enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(if revealed { letter } else { placeholder });
    }

    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value.max(0.0) / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Gauge of attempts left out of the round's budget
#[must_use]
pub fn attempts_bar(remaining: i32, budget: i32, width: usize) -> String {
    create_progress_bar(f64::from(remaining), f64::from(budget), width)
}

/// Tried letters in the order they were guessed, comma separated
#[must_use]
pub fn format_tried(tried: &[char]) -> String {
    tried
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
