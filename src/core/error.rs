//! Error type for the rules engine

use derive_more::{Display, Error};

/// Errors raised by the core game types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// A guess was made after the attempt budget ran out.
    #[display("No attempts left for this round")]
    OutOfAttempts,

    /// A guess was made before any round was started.
    #[display("No round in progress - call start() first")]
    NotStarted,

    /// A secret word must contain at least one letter.
    #[display("Secret word must not be empty")]
    EmptyWord,

    /// A word source needs at least one candidate word.
    #[display("Word list must contain at least one word")]
    EmptyWordList,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            GameError::OutOfAttempts.to_string(),
            "No attempts left for this round"
        );
        assert_eq!(
            GameError::EmptyWordList.to_string(),
            "Word list must contain at least one word"
        );
    }

    #[test]
    fn implements_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&GameError::NotStarted);
    }
}
