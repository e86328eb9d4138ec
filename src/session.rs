use crate::config::GameConfig;
use crate::error::GameError;
use crate::feedback::{self, FeedbackResult};
use crate::palette::Peg;
use crate::secret;
use rand::Rng;

/// Terminal status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pending,
    Won,
    Lost,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Pending)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Pending => "in play",
            Outcome::Won => "won",
            Outcome::Lost => "lost",
        }
    }
}

/// One guess attempt: a peg draft that freezes once scored.
#[derive(Debug, Clone)]
pub struct Round {
    index: usize,
    guess: Vec<Option<Peg>>,
    result: Option<FeedbackResult>,
}

impl Round {
    pub fn new(index: usize, code_length: usize) -> Self {
        Self {
            index,
            guess: vec![None; code_length],
            result: None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn guess(&self) -> &[Option<Peg>] {
        &self.guess
    }

    pub fn result(&self) -> Option<FeedbackResult> {
        self.result
    }

    pub fn is_scored(&self) -> bool {
        self.result.is_some()
    }

    pub fn is_complete(&self) -> bool {
        self.guess.iter().all(Option::is_some)
    }

    /// Place a peg at `position`, overwriting any previous choice.
    ///
    /// # Panics
    /// Panics if `position` is outside the guess row.
    pub fn set_peg(&mut self, position: usize, peg: Peg) -> Result<(), GameError> {
        if self.is_scored() {
            return Err(GameError::InvalidState {
                operation: "place a peg",
                state: "scored",
            });
        }
        self.guess[position] = Some(peg);
        Ok(())
    }

    /// Remove the peg at `position`, leaving the slot blank.
    ///
    /// # Panics
    /// Panics if `position` is outside the guess row.
    pub fn clear_peg(&mut self, position: usize) -> Result<(), GameError> {
        if self.is_scored() {
            return Err(GameError::InvalidState {
                operation: "clear a peg",
                state: "scored",
            });
        }
        self.guess[position] = None;
        Ok(())
    }

    /// Score the completed draft against `secret` and freeze the round.
    ///
    /// An incomplete draft fails without consuming the round; the caller may
    /// keep filling pegs and submit again.
    pub fn submit(&mut self, secret: &[Peg]) -> Result<FeedbackResult, GameError> {
        if self.is_scored() {
            return Err(GameError::InvalidState {
                operation: "submit a round",
                state: "scored",
            });
        }
        if !self.is_complete() {
            return Err(GameError::IncompleteGuess {
                filled: self.guess.iter().filter(|p| p.is_some()).count(),
                expected: self.guess.len(),
            });
        }
        let pegs: Vec<Peg> = self.guess.iter().copied().flatten().collect();
        let result = feedback::score(secret, &pegs)?;
        self.result = Some(result);
        Ok(result)
    }
}

/// The turn-based state machine driving a whole game.
///
/// Construction validates the configuration and generates the secret, after
/// which the session is in play. Rounds are created one at a time as guesses
/// arrive, up to the configured round limit.
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    secret: Vec<Peg>,
    rounds: Vec<Round>,
    outcome: Outcome,
}

impl Session {
    /// Start a session with a freshly generated secret.
    pub fn start(config: GameConfig) -> Result<Self, GameError> {
        let mut rng = rand::thread_rng();
        Self::start_with_rng(config, &mut rng)
    }

    /// Start a session drawing the secret from the given RNG.
    pub fn start_with_rng<R: Rng + ?Sized>(
        config: GameConfig,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let secret = secret::generate(
            rng,
            &config.palette,
            config.code_length,
            config.allow_duplicates,
        )?;
        Ok(Self {
            config,
            secret,
            rounds: Vec::new(),
            outcome: Outcome::Pending,
        })
    }

    /// Start a session with a fixed secret (replays, scripted tests).
    pub fn with_secret(config: GameConfig, secret: Vec<Peg>) -> Result<Self, GameError> {
        config.validate()?;
        if secret.len() != config.code_length {
            return Err(GameError::Configuration(format!(
                "secret has {} pegs, expected {}",
                secret.len(),
                config.code_length
            )));
        }
        if let Some(&peg) = secret.iter().find(|&&p| !config.palette.contains(p)) {
            return Err(GameError::Configuration(format!(
                "secret color {peg} is not in the palette"
            )));
        }
        if !config.allow_duplicates {
            for (i, &peg) in secret.iter().enumerate() {
                if secret[..i].contains(&peg) {
                    return Err(GameError::Configuration(format!(
                        "secret repeats {peg} but duplicates are disallowed"
                    )));
                }
            }
        }
        Ok(Self {
            config,
            secret,
            rounds: Vec::new(),
            outcome: Outcome::Pending,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn rounds_played(&self) -> usize {
        self.rounds.len()
    }

    pub fn rounds_remaining(&self) -> usize {
        self.config.max_rounds - self.rounds.len()
    }

    /// Index of the round the next guess will occupy.
    pub fn current_round_index(&self) -> usize {
        self.rounds.len()
    }

    /// Play the next round with a completed guess.
    ///
    /// Malformed guesses (wrong length, color outside the palette) fail
    /// without consuming the round; the same round is simply retried. Calling
    /// this on a finished session is a caller bug and fails with
    /// `InvalidState`.
    pub fn submit_guess(&mut self, guess: &[Peg]) -> Result<FeedbackResult, GameError> {
        if self.outcome.is_terminal() {
            return Err(GameError::InvalidState {
                operation: "submit a guess",
                state: self.outcome.as_str(),
            });
        }
        if guess.len() != self.config.code_length {
            return Err(GameError::IncompleteGuess {
                filled: guess.len(),
                expected: self.config.code_length,
            });
        }
        if let Some(&peg) = guess.iter().find(|&&p| !self.config.palette.contains(p)) {
            return Err(GameError::InvalidPeg(peg));
        }

        let mut round = Round::new(self.rounds.len(), self.config.code_length);
        for (position, &peg) in guess.iter().enumerate() {
            round.set_peg(position, peg)?;
        }
        let result = round.submit(&self.secret)?;
        self.rounds.push(round);

        if result.is_win(self.config.code_length) {
            self.outcome = Outcome::Won;
        } else if self.rounds.len() == self.config.max_rounds {
            self.outcome = Outcome::Lost;
        }
        Ok(result)
    }

    /// The hidden sequence, available once the session has ended.
    pub fn reveal_secret(&self) -> Result<&[Peg], GameError> {
        if !self.outcome.is_terminal() {
            return Err(GameError::InvalidState {
                operation: "reveal the secret",
                state: self.outcome.as_str(),
            });
        }
        Ok(&self.secret)
    }
}
