//! Simulate command
//!
//! Plays many rounds automatically with a strategy and gathers statistics.

use crate::core::{Difficulty, GameSession, RoundState, WordSource};
use crate::solver::Strategy;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::{info, instrument};

/// Mixed into each round seed so strategy draws differ from the word draw
const STRATEGY_STREAM: u64 = 0x9E37_79B9_7F4A_7C15;

/// Settings for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub rounds: usize,
    pub difficulty: Difficulty,
    /// Round `i` draws its word from a generator seeded with `seed + i`, and
    /// its strategy choices from a second stream derived from the same value
    pub seed: u64,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(rounds: usize, difficulty: Difficulty, seed: u64) -> Self {
        Self {
            rounds,
            difficulty,
            seed,
            show_progress: true,
        }
    }
}

/// Outcome of one automated round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    pub word: String,
    pub won: bool,
    pub guesses: usize,
    pub misses: usize,
}

/// Aggregated statistics over all simulated rounds
#[derive(Debug)]
pub struct SimulationResult {
    pub difficulty: Difficulty,
    pub total_rounds: usize,
    pub wins: usize,
    pub losses: usize,
    /// Average guesses over won rounds
    pub average_guesses: f64,
    /// Misses per round -> number of rounds
    pub miss_distribution: BTreeMap<usize, usize>,
    /// Words lost most often, worst first
    pub hardest_words: Vec<(String, usize)>,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

impl SimulationResult {
    /// Fraction of rounds won, between 0 and 1
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_rounds == 0 {
            0.0
        } else {
            self.wins as f64 / self.total_rounds as f64
        }
    }
}

/// Play one round to completion with the given strategy
///
/// Any random choice the strategy makes is drawn from `rng`.
/// Stops early if the strategy runs out of letters; such a round counts as lost.
pub fn play_round<S, R>(
    strategy: &S,
    session: &mut GameSession<R>,
    rng: &mut dyn RngCore,
) -> RoundResult
where
    S: Strategy + ?Sized,
    R: rand::Rng,
{
    session.start();

    let mut tried: FxHashSet<char> = FxHashSet::default();
    let mut guesses = 0;
    let mut misses = 0;

    while !session.state().is_finished() {
        let Some(target) = session.target() else {
            break;
        };
        let Some(letter) = strategy.select_letter(target, &tried, rng) else {
            break;
        };
        tried.insert(letter);

        match session.guess(letter) {
            Ok(positions) => {
                guesses += 1;
                if positions.is_empty() {
                    misses += 1;
                }
            }
            Err(_) => break,
        }
    }

    RoundResult {
        word: session.target().map(ToString::to_string).unwrap_or_default(),
        won: session.state() == RoundState::Won,
        guesses,
        misses,
    }
}

/// Run `config.rounds` independent rounds in parallel
///
/// Every round gets its own session and seeded generators for both the word
/// draw and the strategy, so results only depend on the seed, not on thread
/// scheduling.
#[instrument(skip(strategy, source), fields(words = source.len()))]
pub fn run_simulation<S: Strategy + Sync>(
    strategy: &S,
    source: &WordSource,
    config: &SimulationConfig,
) -> SimulationResult {
    let pb = if config.show_progress {
        ProgressBar::new(config.rounds as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message(format!("{} difficulty", config.difficulty));

    let start = Instant::now();

    let results: Vec<RoundResult> = (0..config.rounds)
        .into_par_iter()
        .map(|i| {
            let round_seed = config.seed.wrapping_add(i as u64);
            let mut session = GameSession::new(source.clone(), StdRng::seed_from_u64(round_seed));
            session.set_difficulty(config.difficulty);

            let mut strategy_rng = StdRng::seed_from_u64(round_seed ^ STRATEGY_STREAM);
            let result = play_round(strategy, &mut session, &mut strategy_rng);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let result = summarize(config.difficulty, &results, duration);
    info!(
        wins = result.wins,
        losses = result.losses,
        "simulation finished"
    );
    result
}

fn summarize(difficulty: Difficulty, results: &[RoundResult], duration: Duration) -> SimulationResult {
    let total_rounds = results.len();
    let wins = results.iter().filter(|r| r.won).count();

    let won_guesses: usize = results.iter().filter(|r| r.won).map(|r| r.guesses).sum();
    let average_guesses = if wins == 0 {
        0.0
    } else {
        won_guesses as f64 / wins as f64
    };

    let mut miss_distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut losses_by_word: BTreeMap<&str, usize> = BTreeMap::new();
    for r in results {
        *miss_distribution.entry(r.misses).or_insert(0) += 1;
        if !r.won {
            *losses_by_word.entry(r.word.as_str()).or_insert(0) += 1;
        }
    }

    let mut hardest_words: Vec<(String, usize)> = losses_by_word
        .into_iter()
        .map(|(word, n)| (word.to_string(), n))
        .collect();
    hardest_words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    hardest_words.truncate(5);

    let secs = duration.as_secs_f64();
    SimulationResult {
        difficulty,
        total_rounds,
        wins,
        losses: total_rounds - wins,
        average_guesses,
        miss_distribution,
        hardest_words,
        duration,
        rounds_per_second: if secs > 0.0 {
            total_rounds as f64 / secs
        } else {
            0.0
        },
    }
}
