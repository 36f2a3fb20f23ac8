//! Interactive play mode
//!
//! Line-based game loop: shows the masked word, reads one letter per line and
//! feeds it to the session.

use crate::core::{Difficulty, GameError, GameSession};
use crate::output::{print_round_outcome, print_round_status};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// What the player asked for on a prompt line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerInput {
    /// A single character to guess
    Letter(char),
    /// `:quit`, leave the game
    Quit,
    /// `:new`, abandon the current word and draw another
    NewRound,
    /// `:difficulty <level>`, takes effect from the next word
    SetDifficulty(Difficulty),
    /// Anything else, with the reason to show the player
    Invalid(String),
}

impl PlayerInput {
    /// Parse one trimmed input line
    ///
    /// Commands start with `:` so that every single character stays a valid guess.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();

        if let Some(command) = line.strip_prefix(':') {
            let mut parts = command.split_whitespace();
            return match (parts.next(), parts.next()) {
                (Some("quit" | "q" | "exit"), None) => Self::Quit,
                (Some("new" | "n"), None) => Self::NewRound,
                (Some("difficulty" | "d"), Some(level)) => match level.parse() {
                    Ok(level) => Self::SetDifficulty(level),
                    Err(e) => Self::Invalid(e),
                },
                _ => Self::Invalid(format!("unknown command '{line}'")),
            };
        }

        let mut chars = line.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Self::Letter(letter),
            (None, _) => Self::Invalid("enter a letter".to_string()),
            (Some(_), Some(_)) => Self::Invalid("guess one letter at a time".to_string()),
        }
    }
}

/// Run the interactive game on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R: Rng>(session: &mut GameSession<R>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    play_with_io(session, &mut stdin.lock(), &mut stdout)
}

/// Run the game loop against any line source and sink
///
/// Ends when the player quits, declines another round, or input runs out.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_with_io<R, I, O>(session: &mut GameSession<R>, input: &mut I, out: &mut O) -> Result<()>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════╗")?;
    writeln!(out, "║              H A N G M A N           ║")?;
    writeln!(out, "╚══════════════════════════════════════╝\n")?;
    writeln!(out, "Guess the word one letter at a time. Every guess costs an attempt.")?;
    writeln!(out, "Commands: ':quit', ':new', ':difficulty low|medium|high'\n")?;

    loop {
        let len = session.start();
        writeln!(
            out,
            "New word: {} letters, {} difficulty, {} attempts",
            len.to_string().bright_cyan().bold(),
            session.difficulty(),
            session.attempts_remaining()
        )?;

        let mut tried: Vec<char> = Vec::new();

        while !session.state().is_finished() {
            print_round_status(out, session, &tried)?;

            let Some(line) = prompt(input, out, "Guess a letter")? else {
                return Ok(());
            };

            match PlayerInput::parse(&line) {
                PlayerInput::Quit => {
                    writeln!(out, "\n👋 Thanks for playing!\n")?;
                    return Ok(());
                }
                PlayerInput::NewRound => break,
                PlayerInput::SetDifficulty(level) => {
                    session.set_difficulty(level);
                    writeln!(out, "Difficulty set to {level}; it applies from the next word.")?;
                }
                PlayerInput::Invalid(reason) => {
                    writeln!(out, "{} {reason}", "❌".red())?;
                }
                PlayerInput::Letter(letter) if tried.contains(&letter) => {
                    writeln!(out, "You already tried '{letter}'.")?;
                }
                PlayerInput::Letter(letter) => {
                    tried.push(letter);
                    match session.guess(letter) {
                        Ok(positions) if positions.is_empty() => {
                            writeln!(out, "No '{letter}' in the word.")?;
                        }
                        Ok(positions) => {
                            writeln!(
                                out,
                                "{} '{letter}' appears {} time(s).",
                                "✓".green(),
                                positions.len()
                            )?;
                        }
                        Err(GameError::OutOfAttempts) => break,
                        Err(e) => return Err(e.into()),
                    }
                }
            }
        }

        print_round_outcome(out, session)?;

        if !session.state().is_finished() {
            writeln!(out, "\n🔄 New word!\n")?;
            continue;
        }

        match prompt(input, out, "Play again? (yes/no)")? {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {}
            _ => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
        }
    }
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn prompt<I: BufRead, O: Write>(input: &mut I, out: &mut O, text: &str) -> Result<Option<String>> {
    write!(out, "{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RoundState, WordSource};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn session(word: &str) -> GameSession<StdRng> {
        let source = WordSource::from_slice(&[word]).unwrap();
        GameSession::new(source, StdRng::seed_from_u64(0))
    }

    fn play(session: &mut GameSession<StdRng>, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        play_with_io(session, &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_letters_and_commands() {
        assert_eq!(PlayerInput::parse("a"), PlayerInput::Letter('a'));
        assert_eq!(PlayerInput::parse("  ñ \n"), PlayerInput::Letter('ñ'));
        assert_eq!(PlayerInput::parse("q"), PlayerInput::Letter('q'));
        assert_eq!(PlayerInput::parse(":quit"), PlayerInput::Quit);
        assert_eq!(PlayerInput::parse(":new"), PlayerInput::NewRound);
        assert_eq!(
            PlayerInput::parse(":difficulty high"),
            PlayerInput::SetDifficulty(Difficulty::High)
        );
    }

    #[test]
    fn parse_command_aliases() {
        assert_eq!(PlayerInput::parse(":q"), PlayerInput::Quit);
        assert_eq!(PlayerInput::parse(":exit"), PlayerInput::Quit);
        assert_eq!(PlayerInput::parse(":n"), PlayerInput::NewRound);
        assert_eq!(
            PlayerInput::parse(":d easy"),
            PlayerInput::SetDifficulty(Difficulty::Low)
        );
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(matches!(PlayerInput::parse(""), PlayerInput::Invalid(_)));
        assert!(matches!(PlayerInput::parse("ab"), PlayerInput::Invalid(_)));
        assert!(matches!(PlayerInput::parse(":dance"), PlayerInput::Invalid(_)));
        assert!(matches!(
            PlayerInput::parse(":difficulty extreme"),
            PlayerInput::Invalid(_)
        ));
    }

    #[test]
    fn winning_round_then_decline() {
        let mut session = session("sol");
        let text = play(&mut session, "s\no\nl\nno\n");

        assert!(text.contains("You won"));
        assert!(text.contains("Thanks for playing"));
        assert_eq!(session.state(), RoundState::Won);
        assert_eq!(session.attempts_remaining(), 17);
    }

    #[test]
    fn repeated_letter_not_charged() {
        let mut session = session("sol");
        let text = play(&mut session, "s\ns\n:quit\n");

        assert!(text.contains("already tried 's'"));
        assert_eq!(session.attempts_remaining(), 19);
    }

    #[test]
    fn losing_round_reveals_word() {
        let mut session = session("sol");
        session.set_difficulty(Difficulty::High);
        let text = play(&mut session, "a\nb\nc\nd\ne\nf\nno\n");

        assert!(text.contains("Out of attempts"));
        assert_eq!(session.state(), RoundState::Lost);
    }

    #[test]
    fn difficulty_change_applies_next_round() {
        let mut session = session("sol");
        let text = play(&mut session, ":difficulty high\ns\no\nl\nyes\n:quit\n");

        assert!(text.contains("applies from the next word"));
        assert!(text.contains("20 attempts"));
        assert!(text.contains("5 attempts"));
        assert_eq!(session.attempts_remaining(), 5);
    }

    #[test]
    fn new_round_command_restarts() {
        let mut session = session("sol");
        let text = play(&mut session, "s\n:new\n:quit\n");

        assert!(text.contains("New word!"));
        assert_eq!(session.attempts_remaining(), 20);
    }

    #[test]
    fn end_of_input_stops_quietly() {
        let mut session = session("sol");
        let text = play(&mut session, "s\n");
        assert!(!text.contains("Thanks for playing"));
        assert_eq!(session.state(), RoundState::InProgress);
    }
}
