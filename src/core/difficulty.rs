//! Difficulty tiers and their attempt budgets

use std::fmt;
use std::str::FromStr;

/// Difficulty tier for a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// 20 attempts
    #[default]
    Low,
    /// 10 attempts
    Medium,
    /// 5 attempts
    High,
}

impl Difficulty {
    /// All tiers, easiest first
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Number of guesses budgeted for a round at this tier
    #[inline]
    #[must_use]
    pub const fn attempts_allowed(self) -> i32 {
        match self {
            Self::Low => 20,
            Self::Medium => 10,
            Self::High => 5,
        }
    }

    /// Budget for a tier given by name
    ///
    /// Unrecognized names get a budget of 0 rather than an error.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Difficulty;
    ///
    /// assert_eq!(Difficulty::attempts_for_name("medium"), 10);
    /// assert_eq!(Difficulty::attempts_for_name("impossible"), 0);
    /// ```
    #[must_use]
    pub fn attempts_for_name(name: &str) -> i32 {
        name.parse::<Self>().map_or(0, Self::attempts_allowed)
    }

    /// Lowercase name of the tier
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" | "easy" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" | "hard" => Ok(Self::High),
            other => Err(format!(
                "unknown difficulty '{other}' (expected low, medium or high)"
            )),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
