//! Game session: round lifecycle and attempt accounting
//!
//! A `GameSession` draws secret words from a [`WordSource`], wraps each one in a
//! fresh [`GuessTarget`] and charges one attempt per guess against the budget of
//! the current [`Difficulty`].
//!
//! The attempt check runs *before* the decrement and only fails once the counter
//! is already negative, so a budget of `n` allows `n + 1` guesses:
//!
//! ```
//! use hangman::core::{Difficulty, GameError, GameSession, RoundState, WordSource};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let source = WordSource::from_slice(&["sol"]).unwrap();
//! let mut session = GameSession::new(source, StdRng::seed_from_u64(0));
//! session.set_difficulty(Difficulty::High);
//! assert_eq!(session.start(), 3);
//!
//! for letter in ['x', 'y', 'z', 'w', 'v', 'u'] {
//!     assert!(session.guess(letter).unwrap().is_empty());
//! }
//! assert_eq!(session.state(), RoundState::Lost);
//! assert_eq!(session.guess('s'), Err(GameError::OutOfAttempts));
//! ```

use super::{Difficulty, GameError, GuessTarget, WordSource};
use rand::Rng;
use tracing::{debug, info, instrument};

/// Where the current round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundState {
    /// `start` has never been called
    NotStarted,
    /// Word unsolved and attempts remain
    InProgress,
    /// Every letter revealed
    Won,
    /// Attempt counter dropped below zero with the word unsolved
    Lost,
}

impl RoundState {
    /// Check if the round is over
    #[inline]
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A single player's game: one round at a time
///
/// The random source is injected so callers can seed it for reproducible draws.
#[derive(Debug)]
pub struct GameSession<R> {
    source: WordSource,
    rng: R,
    difficulty: Difficulty,
    attempts_remaining: i32,
    target: Option<GuessTarget>,
}

impl<R: Rng> GameSession<R> {
    /// Create a session at `Difficulty::Low` with no round started
    #[must_use]
    pub fn new(source: WordSource, rng: R) -> Self {
        Self {
            source,
            rng,
            difficulty: Difficulty::default(),
            attempts_remaining: 0,
            target: None,
        }
    }

    /// Change difficulty; applies from the next [`start`](Self::start)
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, level: Difficulty) {
        debug!(previous = %self.difficulty, "difficulty changed");
        self.difficulty = level;
    }

    /// Budget for the currently configured difficulty
    #[inline]
    #[must_use]
    pub const fn calculate_attempts_allowed(&self) -> i32 {
        self.difficulty.attempts_allowed()
    }

    /// Start a new round, discarding any previous one
    ///
    /// Returns the length of the secret word.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> usize {
        let word = self.source.pick_word(&mut self.rng);
        let target = GuessTarget::from_checked(word);
        let len = target.len();

        self.target = Some(target);
        self.attempts_remaining = self.calculate_attempts_allowed();

        debug!(
            len,
            difficulty = %self.difficulty,
            attempts = self.attempts_remaining,
            "round started"
        );
        len
    }

    /// Guess a letter in the current round
    ///
    /// Every guess costs one attempt, hit or miss. Returns the positions revealed
    /// by the letter, as [`GuessTarget::guess`] does.
    ///
    /// # Errors
    /// - `GameError::NotStarted` if no round has been started.
    /// - `GameError::OutOfAttempts` if the attempt counter is already below zero.
    #[instrument(skip(self))]
    pub fn guess(&mut self, letter: char) -> Result<Vec<usize>, GameError> {
        let before = self.state();
        let target = self.target.as_mut().ok_or(GameError::NotStarted)?;

        if self.attempts_remaining < 0 {
            debug!("guess rejected, no attempts left");
            return Err(GameError::OutOfAttempts);
        }
        self.attempts_remaining -= 1;

        let positions = target.guess(letter);
        if positions.is_empty() {
            debug!(remaining = self.attempts_remaining, "miss");
        } else {
            debug!(?positions, remaining = self.attempts_remaining, "hit");
        }

        match ended_by_guess(before, self.state()) {
            Some(RoundState::Won) => info!(word = %self.target_word(), "round won"),
            Some(RoundState::Lost) => info!(word = %self.target_word(), "round lost"),
            _ => {}
        }

        Ok(positions)
    }

    /// True while the attempt counter is zero or above
    #[inline]
    #[must_use]
    pub const fn has_attempts_left(&self) -> bool {
        self.attempts_remaining >= 0
    }

    /// True once every letter of the current word is revealed
    ///
    /// Always false before the first round.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.target.as_ref().is_some_and(GuessTarget::is_solved)
    }

    /// Current round state
    #[must_use]
    pub fn state(&self) -> RoundState {
        match &self.target {
            None => RoundState::NotStarted,
            Some(target) if target.is_solved() => RoundState::Won,
            Some(_) if !self.has_attempts_left() => RoundState::Lost,
            Some(_) => RoundState::InProgress,
        }
    }

    /// Attempts left in the current round (may be -1 after the grace guess)
    #[inline]
    #[must_use]
    pub const fn attempts_remaining(&self) -> i32 {
        self.attempts_remaining
    }

    /// The configured difficulty
    #[inline]
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The current round's target, if a round was started
    #[inline]
    #[must_use]
    pub const fn target(&self) -> Option<&GuessTarget> {
        self.target.as_ref()
    }

    fn target_word(&self) -> String {
        self.target
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }
}

/// The final state if this guess is the one that finished the round
const fn ended_by_guess(before: RoundState, after: RoundState) -> Option<RoundState> {
    if !before.is_finished() && after.is_finished() {
        Some(after)
    } else {
        None
    }
}
