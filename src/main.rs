//! Hangman - CLI
//!
//! Play hangman in the terminal, or simulate rounds to compare letter strategies.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hangman::{
    commands::{SimulationConfig, run_play, run_simulation},
    core::{Difficulty, GameSession},
    output::print_simulation_result,
    solver::StrategyType,
    wordlists::loader::load_wordlist,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Hangman word-guessing game with a strategy simulator",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty: low (20 attempts, default), medium (10), high (5)
    #[arg(short, long, global = true, default_value = "low")]
    difficulty: Difficulty,

    /// Wordlist: 'embedded' (default) or path to a newline-delimited UTF-8 file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for reproducible word draws
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play,

    /// Play many rounds automatically and report win rates
    Simulate {
        /// Number of rounds to play
        #[arg(short = 'n', long, default_value = "1000")]
        rounds: usize,

        /// Strategy: candidates (default), frequency, random
        #[arg(short, long, default_value = "candidates")]
        strategy: String,

        /// Hide the progress bar
        #[arg(long)]
        quiet: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let source = load_wordlist(&cli.wordlist)?;
    info!(words = source.len(), wordlist = %cli.wordlist, "word list loaded");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let rng = cli
                .seed
                .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
            let mut session = GameSession::new(source, rng);
            session.set_difficulty(cli.difficulty);
            run_play(&mut session)
        }
        Commands::Simulate {
            rounds,
            strategy,
            quiet,
        } => {
            let strategy = StrategyType::from_name(&strategy, source.words());
            let config = SimulationConfig {
                show_progress: !quiet,
                ..SimulationConfig::new(rounds, cli.difficulty, cli.seed.unwrap_or(0))
            };

            println!(
                "Simulating {rounds} rounds on {} words at {} difficulty...",
                source.len(),
                cli.difficulty
            );
            let result = run_simulation(&strategy, &source, &config);
            print_simulation_result(&result);
            Ok(())
        }
    }
}
