use crate::board::{BoardRenderer, PlayerAction};
use crate::config::Difficulty;
use crate::error::GameError;
use crate::feedback::FeedbackResult;
use crate::palette::Peg;
use crate::session::{Outcome, Session};
use clap::Parser;
use std::io::BufRead;

/// Mastermind CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Difficulty preset
    #[arg(short, long, value_enum, default_value_t = Difficulty::Easy)]
    pub difficulty: Difficulty,

    /// Allow the secret to repeat colors
    #[arg(long)]
    pub duplicates: bool,

    /// Seed the secret generator for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,

    /// Play in the interactive terminal interface
    #[arg(long)]
    pub tui: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

pub enum GuessInput {
    Valid(Vec<Peg>),
    Invalid,
    Exit,
    NewGame,
}

/// Parse a guess typed as one-letter color codes, e.g. `ROYG`.
pub fn parse_guess(input: &str, code_length: usize) -> Option<Vec<Peg>> {
    if input.len() != code_length {
        return None;
    }
    input.chars().map(Peg::from_code).collect()
}

pub fn format_pegs(pegs: &[Peg]) -> String {
    pegs.iter().map(|p| p.code()).collect()
}

pub fn read_guess<R: BufRead>(reader: &mut R, code_length: usize) -> GuessInput {
    println!(
        "\nEnter your guess ({code_length} letters, or 'exit' to quit, or 'next' to start a new game):"
    );
    let mut input = String::new();
    // A closed input stream ends the game rather than re-prompting forever.
    if reader.read_line(&mut input).unwrap_or(0) == 0 {
        return GuessInput::Exit;
    }
    let input = input.trim().to_uppercase();

    match input.as_str() {
        "EXIT" => GuessInput::Exit,
        "NEXT" => GuessInput::NewGame,
        _ => match parse_guess(&input, code_length) {
            Some(pegs) => GuessInput::Valid(pegs),
            None => {
                println!("Invalid guess. Please enter {code_length} color letters.");
                GuessInput::Invalid
            }
        },
    }
}

pub fn display_session_start(session: &Session) {
    let config = session.config();
    println!("MASTERMIND");
    println!(
        "Crack the {}-peg code within {} rounds.",
        config.code_length, config.max_rounds
    );
    println!("Colors: {}", config.palette.legend());
    if config.allow_duplicates {
        println!("The secret may repeat colors.");
    } else {
        println!("The secret has no repeated colors.");
    }
}

pub fn display_feedback(session: &Session, result: FeedbackResult) {
    println!(
        "Round {}/{}: {} exact, {} partial.",
        session.rounds_played(),
        session.config().max_rounds,
        result.exact,
        result.partial
    );
}

pub fn display_outcome(session: &Session, secret: &[Peg]) {
    match session.outcome() {
        Outcome::Won => println!("YOU WIN! Cracked in {} round(s).", session.rounds_played()),
        Outcome::Lost => println!("GAME OVER."),
        Outcome::Pending => {}
    }
    println!("The secret was: {}", format_pegs(secret));
}

pub fn display_error(error: &GameError) {
    println!("{error}");
}

pub fn display_exit_message() {
    println!("Exiting.");
}

/// CLI implementation of the `BoardRenderer` trait.
/// Wraps a `BufRead` reader so whole games can be scripted in tests.
pub struct CliRenderer<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliRenderer<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> BoardRenderer for CliRenderer<R> {
    fn display_session_start(&mut self, session: &Session) {
        display_session_start(session);
    }

    fn read_action(&mut self, session: &Session) -> Option<PlayerAction> {
        match read_guess(&mut self.reader, session.config().code_length) {
            GuessInput::Valid(pegs) => Some(PlayerAction::Guess(pegs)),
            GuessInput::Exit => Some(PlayerAction::Exit),
            GuessInput::NewGame => Some(PlayerAction::NewGame),
            GuessInput::Invalid => None,
        }
    }

    fn display_feedback(&mut self, session: &Session, result: FeedbackResult) {
        display_feedback(session, result);
    }

    fn display_error(&mut self, error: &GameError) {
        display_error(error);
    }

    fn display_outcome(&mut self, session: &Session, secret: &[Peg]) {
        display_outcome(session, secret);
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["mastermind"]).unwrap();
        assert_eq!(cli.difficulty, Difficulty::Easy);
        assert!(!cli.duplicates);
        assert_eq!(cli.seed, None);
        assert!(!cli.tui);
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::try_parse_from([
            "mastermind",
            "--difficulty",
            "expert",
            "--duplicates",
            "--seed",
            "42",
        ])
        .unwrap();
        assert_eq!(cli.difficulty, Difficulty::Expert);
        assert!(cli.duplicates);
        assert_eq!(cli.seed, Some(42));
        assert!(!cli.tui);
    }

    #[test]
    fn test_parse_guess_valid() {
        let pegs = parse_guess("ROYG", 4).unwrap();
        assert_eq!(pegs, vec![Peg::Red, Peg::Orange, Peg::Yellow, Peg::Green]);
    }

    #[test]
    fn test_parse_guess_lowercase() {
        let pegs = parse_guess("royg", 4).unwrap();
        assert_eq!(pegs.len(), 4);
    }

    #[test]
    fn test_parse_guess_wrong_length() {
        assert!(parse_guess("ROY", 4).is_none());
        assert!(parse_guess("ROYGB", 4).is_none());
    }

    #[test]
    fn test_parse_guess_unknown_letter() {
        assert!(parse_guess("ROYZ", 4).is_none());
        assert!(parse_guess("R0YG", 4).is_none());
    }

    #[test]
    fn test_format_pegs_uses_codes() {
        assert_eq!(
            format_pegs(&[Peg::Red, Peg::Brown, Peg::Black]),
            "RNK".to_string()
        );
    }

    #[test]
    fn test_read_guess_valid() {
        let mut reader = Cursor::new("royg\n");
        match read_guess(&mut reader, 4) {
            GuessInput::Valid(pegs) => assert_eq!(pegs.len(), 4),
            _ => panic!("Expected Valid guess"),
        }
    }

    #[test]
    fn test_read_guess_exit() {
        let mut reader = Cursor::new("EXIT\n");
        assert!(matches!(read_guess(&mut reader, 4), GuessInput::Exit));
    }

    #[test]
    fn test_read_guess_new_game() {
        let mut reader = Cursor::new("next\n");
        assert!(matches!(read_guess(&mut reader, 4), GuessInput::NewGame));
    }

    #[test]
    fn test_read_guess_invalid() {
        let mut reader = Cursor::new("ZZZZ\n");
        assert!(matches!(read_guess(&mut reader, 4), GuessInput::Invalid));
    }

    #[test]
    fn test_read_guess_eof_exits() {
        let mut reader = Cursor::new("");
        assert!(matches!(read_guess(&mut reader, 4), GuessInput::Exit));
    }

    #[test]
    fn test_read_guess_eof_after_last_line_exits() {
        let mut reader = Cursor::new("ROYG\n");
        assert!(matches!(read_guess(&mut reader, 4), GuessInput::Valid(_)));
        assert!(matches!(read_guess(&mut reader, 4), GuessInput::Exit));
    }

    #[test]
    fn test_read_guess_trims_whitespace() {
        let mut reader = Cursor::new("  ROYG  \n");
        assert!(matches!(read_guess(&mut reader, 4), GuessInput::Valid(_)));
    }
}
