use crate::palette::Peg;
use thiserror::Error;

/// Errors raised by session, round, and scoring operations.
///
/// Every variant is local to a single call; a failed call never advances or
/// corrupts the session state machine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Invalid session parameters; fatal to session start.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Submit attempted with blank positions (or a wrong-length guess).
    /// Recoverable: the round is not consumed.
    #[error("incomplete guess: {filled} of {expected} pegs placed")]
    IncompleteGuess { filled: usize, expected: usize },

    /// Guess references a color outside the configured palette.
    /// Recoverable: the round is not consumed.
    #[error("peg '{0}' is not in the configured palette")]
    InvalidPeg(Peg),

    /// Operation attempted outside its valid state; a caller bug.
    #[error("cannot {operation} while the session is {state}")]
    InvalidState {
        operation: &'static str,
        state: &'static str,
    },
}
