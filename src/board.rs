use crate::config::GameConfig;
use crate::error::GameError;
use crate::feedback::FeedbackResult;
use crate::palette::Peg;
use crate::session::Session;
use rand::Rng;

/// One player decision collected by a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerAction {
    Guess(Vec<Peg>),
    NewGame,
    Exit,
}

/// The narrow seam between the game core and any front-end.
///
/// A renderer owns all waiting-for-input; the core only ever sees completed
/// actions. Recoverable errors (incomplete guess, color outside the palette)
/// are shown and the same round is retried.
pub trait BoardRenderer {
    /// A fresh session began: show difficulty, palette legend, round limit.
    fn display_session_start(&mut self, session: &Session);

    /// Collect the next action. `None` means the input was invalid and
    /// should be re-prompted.
    fn read_action(&mut self, session: &Session) -> Option<PlayerAction>;

    /// A round was scored; `session` already contains it.
    fn display_feedback(&mut self, session: &Session, result: FeedbackResult);

    /// A recoverable error: the round was not consumed.
    fn display_error(&mut self, error: &GameError);

    /// The session ended; `secret` is the revealed hidden sequence.
    fn display_outcome(&mut self, session: &Session, secret: &[Peg]);

    fn display_exit_message(&mut self);
}

/// Drive sessions against a renderer until the player exits.
///
/// `NewGame` restarts with the same configuration and a fresh secret.
pub fn game_loop<B: BoardRenderer>(
    config: &GameConfig,
    renderer: &mut B,
) -> Result<(), GameError> {
    let mut rng = rand::thread_rng();
    game_loop_with_rng(config, &mut rng, renderer)
}

/// Like [`game_loop`], drawing every secret from the given RNG
/// (reproducible games, scripted tests).
pub fn game_loop_with_rng<B: BoardRenderer, R: Rng + ?Sized>(
    config: &GameConfig,
    rng: &mut R,
    renderer: &mut B,
) -> Result<(), GameError> {
    let mut session = Session::start_with_rng(config.clone(), rng)?;
    renderer.display_session_start(&session);

    loop {
        let Some(action) = renderer.read_action(&session) else {
            continue;
        };

        match action {
            PlayerAction::Exit => {
                renderer.display_exit_message();
                break;
            }
            PlayerAction::NewGame => {
                session = Session::start_with_rng(config.clone(), rng)?;
                renderer.display_session_start(&session);
            }
            PlayerAction::Guess(pegs) => match session.submit_guess(&pegs) {
                Ok(result) => {
                    renderer.display_feedback(&session, result);
                    if session.outcome().is_terminal() {
                        let secret = session.reveal_secret()?;
                        renderer.display_outcome(&session, secret);
                    }
                }
                Err(error) => renderer.display_error(&error),
            },
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Difficulty;
    use crate::session::Outcome;

    /// Scripted renderer: replays a fixed action list and records what the
    /// loop showed it.
    struct ScriptedBoard {
        script: Vec<Option<PlayerAction>>,
        feedback_seen: Vec<FeedbackResult>,
        errors_seen: Vec<GameError>,
        outcomes_seen: Vec<Outcome>,
        starts_seen: usize,
        exited: bool,
    }

    impl ScriptedBoard {
        fn new(script: Vec<Option<PlayerAction>>) -> Self {
            Self {
                script,
                feedback_seen: Vec::new(),
                errors_seen: Vec::new(),
                outcomes_seen: Vec::new(),
                starts_seen: 0,
                exited: false,
            }
        }
    }

    impl BoardRenderer for ScriptedBoard {
        fn display_session_start(&mut self, _session: &Session) {
            self.starts_seen += 1;
        }

        fn read_action(&mut self, _session: &Session) -> Option<PlayerAction> {
            if self.script.is_empty() {
                Some(PlayerAction::Exit)
            } else {
                self.script.remove(0)
            }
        }

        fn display_feedback(&mut self, _session: &Session, result: FeedbackResult) {
            self.feedback_seen.push(result);
        }

        fn display_error(&mut self, error: &GameError) {
            self.errors_seen.push(error.clone());
        }

        fn display_outcome(&mut self, session: &Session, secret: &[Peg]) {
            assert_eq!(secret.len(), session.config().code_length);
            self.outcomes_seen.push(session.outcome());
        }

        fn display_exit_message(&mut self) {
            self.exited = true;
        }
    }

    fn tiny_config() -> GameConfig {
        let mut config = Difficulty::Easy.preset();
        config.max_rounds = 2;
        config
    }

    #[test]
    fn test_loop_exits_on_exit_action() {
        let mut board = ScriptedBoard::new(vec![Some(PlayerAction::Exit)]);
        game_loop(&tiny_config(), &mut board).unwrap();
        assert!(board.exited);
        assert_eq!(board.starts_seen, 1);
    }

    #[test]
    fn test_loop_reprompts_on_invalid_input() {
        let mut board = ScriptedBoard::new(vec![None, None, Some(PlayerAction::Exit)]);
        game_loop(&tiny_config(), &mut board).unwrap();
        assert!(board.exited);
        assert!(board.feedback_seen.is_empty());
    }

    #[test]
    fn test_loop_plays_to_loss_and_reveals() {
        use crate::palette::Peg::{Blue, Purple};
        // Duplicates are off, so a secret can repeat no color and BPBP can
        // never win; two rounds exhaust the limit.
        let guess = vec![Blue, Purple, Blue, Purple];
        let mut board = ScriptedBoard::new(vec![
            Some(PlayerAction::Guess(guess.clone())),
            Some(PlayerAction::Guess(guess)),
            Some(PlayerAction::Exit),
        ]);
        game_loop(&tiny_config(), &mut board).unwrap();
        assert_eq!(board.feedback_seen.len(), 2);
        assert_eq!(board.outcomes_seen, vec![Outcome::Lost]);
    }

    #[test]
    fn test_loop_surfaces_recoverable_errors() {
        use crate::palette::Peg::{Black, Blue, Purple};
        let mut board = ScriptedBoard::new(vec![
            Some(PlayerAction::Guess(vec![Blue, Purple])),
            Some(PlayerAction::Guess(vec![Black, Black, Black, Black])),
            Some(PlayerAction::Exit),
        ]);
        game_loop(&tiny_config(), &mut board).unwrap();
        assert_eq!(board.errors_seen.len(), 2);
        assert!(board.feedback_seen.is_empty());
        assert!(board.outcomes_seen.is_empty());
    }

    #[test]
    fn test_new_game_restarts_with_fresh_session() {
        use crate::palette::Peg::{Blue, Purple};
        let mut board = ScriptedBoard::new(vec![
            Some(PlayerAction::Guess(vec![Blue, Purple, Blue, Purple])),
            Some(PlayerAction::NewGame),
            Some(PlayerAction::Exit),
        ]);
        game_loop(&tiny_config(), &mut board).unwrap();
        assert_eq!(board.starts_seen, 2);
    }
}
