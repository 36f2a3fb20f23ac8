//! Display functions for game state and command results

use super::formatters::{attempts_bar, format_tried, mask_word};
use crate::commands::SimulationResult;
use crate::core::{GameSession, RoundState};
use colored::Colorize;
use std::io::{self, Write};

/// Print the masked word, attempts gauge and tried letters
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_round_status<W: Write, R>(
    out: &mut W,
    session: &GameSession<R>,
    tried: &[char],
) -> io::Result<()>
where
    R: rand::Rng,
{
    let Some(target) = session.target() else {
        return writeln!(out, "No round in progress.");
    };

    let budget = session.calculate_attempts_allowed();
    let remaining = session.attempts_remaining();

    writeln!(out, "{}", "─".repeat(40).cyan())?;
    writeln!(out, "  Word:     {}", mask_word(target, '_').bright_white().bold())?;
    writeln!(
        out,
        "  Attempts: [{}] {}",
        attempts_bar(remaining, budget, 20).green(),
        remaining.max(0)
    )?;
    if !tried.is_empty() {
        writeln!(out, "  Tried:    {}", format_tried(tried).bright_black())?;
    }
    writeln!(out, "{}", "─".repeat(40).cyan())
}

/// Print the end-of-round banner with the secret word
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_round_outcome<W: Write, R>(out: &mut W, session: &GameSession<R>) -> io::Result<()>
where
    R: rand::Rng,
{
    let word = session
        .target()
        .map(ToString::to_string)
        .unwrap_or_default();

    match session.state() {
        RoundState::Won => {
            writeln!(out, "\n{}", "═".repeat(40).bright_cyan())?;
            writeln!(out, "{}", "  🎉 You won! 🎉".bright_green().bold())?;
            writeln!(
                out,
                "  The word was {} ({} attempts to spare)",
                word.bright_yellow().bold(),
                session.attempts_remaining().max(0)
            )?;
            writeln!(out, "{}", "═".repeat(40).bright_cyan())
        }
        RoundState::Lost => {
            writeln!(out, "\n{}", "═".repeat(40).red())?;
            writeln!(out, "{}", "  💀 Out of attempts!".red().bold())?;
            writeln!(out, "  The word was {}", word.bright_yellow().bold())?;
            writeln!(out, "{}", "═".repeat(40).red())
        }
        RoundState::NotStarted | RoundState::InProgress => Ok(()),
    }
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Difficulty:       {}", result.difficulty);
    println!("   Rounds played:    {}", result.total_rounds);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Wins / losses:    {} / {}",
        result.wins.to_string().green(),
        result.losses.to_string().red()
    );
    println!("   Avg guesses (won): {:.2}", result.average_guesses);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Rounds/second:    {:.1}", result.rounds_per_second);

    if result.total_rounds > 0 {
        println!("\n📈 {}", "Misses per round:".bright_cyan().bold());
        for (&misses, &count) in &result.miss_distribution {
            let pct = (count as f64 / result.total_rounds as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {misses:2}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if !result.hardest_words.is_empty() {
        println!("\n💀 {}", "Hardest words:".bright_cyan().bold());
        for (word, losses) in &result.hardest_words {
            println!("   {:<16} lost {losses}x", word.bright_white());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Difficulty, WordSource};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session(word: &str) -> GameSession<StdRng> {
        let source = WordSource::from_slice(&[word]).unwrap();
        GameSession::new(source, StdRng::seed_from_u64(0))
    }

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn status_before_start() {
        let session = session("gato");
        let text = render(|out| print_round_status(out, &session, &[]));
        assert!(text.contains("No round in progress"));
    }

    #[test]
    fn status_shows_mask_and_tried() {
        let mut session = session("gato");
        session.start();
        session.guess('a').unwrap();
        session.guess('z').unwrap();

        let text = render(|out| print_round_status(out, &session, &['a', 'z']));
        assert!(text.contains("_ a _ _"));
        assert!(text.contains("a, z"));
        assert!(text.contains("18"));
    }

    #[test]
    fn outcome_lost_reveals_word() {
        let mut session = session("sol");
        session.set_difficulty(Difficulty::High);
        session.start();
        while session.guess('x').is_ok() {}

        let text = render(|out| print_round_outcome(out, &session));
        assert!(text.contains("Out of attempts"));
        assert!(text.contains("sol"));
    }

    #[test]
    fn outcome_won() {
        let mut session = session("sol");
        session.start();
        for letter in ['s', 'o', 'l'] {
            session.guess(letter).unwrap();
        }

        let text = render(|out| print_round_outcome(out, &session));
        assert!(text.contains("You won"));
        assert!(text.contains("17 attempts to spare"));
    }

    #[test]
    fn outcome_in_progress_prints_nothing() {
        let mut session = session("sol");
        session.start();
        let text = render(|out| print_round_outcome(out, &session));
        assert!(text.is_empty());
    }
}
