use crate::error::GameError;
use crate::palette::Peg;

/// Exact and partial match counts for one scored guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackResult {
    /// Pegs correct in both color and position.
    pub exact: usize,
    /// Pegs whose color appears elsewhere in the secret, each secret peg
    /// counted at most once.
    pub partial: usize,
}

impl FeedbackResult {
    pub fn is_win(self, code_length: usize) -> bool {
        self.exact == code_length
    }
}

/// Score `guess` against `secret`.
///
/// First pass collects exact matches and the unmatched residue of both
/// sequences. Second pass counts one partial match per unmatched guess peg
/// whose color is still present in the unmatched secret residue, removing a
/// single occurrence each time so duplicate colors are never double-counted.
pub fn score(secret: &[Peg], guess: &[Peg]) -> Result<FeedbackResult, GameError> {
    if guess.len() != secret.len() {
        return Err(GameError::IncompleteGuess {
            filled: guess.len(),
            expected: secret.len(),
        });
    }

    let mut exact = 0;
    let mut unmatched_guess = Vec::new();
    let mut unmatched_secret = Vec::new();

    for (&g, &s) in guess.iter().zip(secret) {
        if g == s {
            exact += 1;
        } else {
            unmatched_guess.push(g);
            unmatched_secret.push(s);
        }
    }

    let mut partial = 0;
    for g in unmatched_guess {
        if let Some(pos) = unmatched_secret.iter().position(|&s| s == g) {
            partial += 1;
            unmatched_secret.swap_remove(pos);
        }
    }

    Ok(FeedbackResult { exact, partial })
}
