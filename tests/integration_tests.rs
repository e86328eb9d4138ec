// Integration tests for the mastermind application
// These tests verify that all modules work together correctly

use mastermind::cli::CliRenderer;
use mastermind::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Cursor;

use Peg::{Green, Orange, Red, Yellow};

fn easy_config() -> GameConfig {
    Difficulty::Easy.preset()
}

#[test]
fn test_end_to_end_fixed_secret_scenario() {
    // The canonical two-round game: swap feedback first, then the crack.
    let mut session =
        Session::with_secret(easy_config(), vec![Red, Orange, Yellow, Green]).unwrap();

    let first = session.submit_guess(&[Red, Yellow, Orange, Green]).unwrap();
    assert_eq!((first.exact, first.partial), (2, 2));
    assert_eq!(session.outcome(), Outcome::Pending);

    let second = session.submit_guess(&[Red, Orange, Yellow, Green]).unwrap();
    assert_eq!((second.exact, second.partial), (4, 0));
    assert_eq!(session.outcome(), Outcome::Won);
    assert_eq!(session.rounds_played(), 2);
    assert_eq!(
        session.reveal_secret().unwrap(),
        &[Red, Orange, Yellow, Green]
    );
}

#[test]
fn test_scripted_cli_game_to_exit() {
    // Invalid guess, a scored round, then exit; must complete without panics.
    let config = easy_config();
    let input = "ZZZZ\nROYG\nexit\n";
    let mut renderer = CliRenderer::new(Cursor::new(input));
    game_loop(&config, &mut renderer).unwrap();
}

#[test]
fn test_scripted_cli_input_without_trailing_exit_terminates() {
    // Piped input that simply runs out must end the game, not spin on the
    // prompt forever.
    let config = easy_config();
    let input = "ROYG\n";
    let mut renderer = CliRenderer::new(Cursor::new(input));
    game_loop(&config, &mut renderer).unwrap();

    let mut empty = CliRenderer::new(Cursor::new(""));
    game_loop(&config, &mut empty).unwrap();
}

#[test]
fn test_scripted_cli_new_game_then_exit() {
    let config = easy_config();
    let input = "ROYG\nnext\nBPOY\nexit\n";
    let mut renderer = CliRenderer::new(Cursor::new(input));
    game_loop(&config, &mut renderer).unwrap();
}

#[test]
fn test_scripted_cli_seeded_game_is_winnable() {
    // With a seeded generator the secret is known ahead of time, so the
    // script can actually win the game.
    let config = easy_config();
    let mut rng = StdRng::seed_from_u64(77);
    let mut probe =
        Session::start_with_rng(config.clone(), &mut StdRng::seed_from_u64(77)).unwrap();

    // Learn the secret by exhausting a probe session, then script it.
    while !probe.outcome().is_terminal() {
        probe.submit_guess(&[Red, Orange, Yellow, Green]).unwrap();
    }
    let secret: String = probe
        .reveal_secret()
        .unwrap()
        .iter()
        .map(|p| p.code())
        .collect();

    let input = format!("{secret}\nexit\n");
    let mut renderer = CliRenderer::new(Cursor::new(input));
    mastermind::board::game_loop_with_rng(&config, &mut rng, &mut renderer).unwrap();
}

#[test]
fn test_seeded_generator_is_deterministic() {
    let palette = Palette::standard(9);
    let a = mastermind::secret::generate(&mut StdRng::seed_from_u64(5), &palette, 6, false).unwrap();
    let b = mastermind::secret::generate(&mut StdRng::seed_from_u64(5), &palette, 6, false).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_feedback_bound_holds_across_random_sessions() {
    let config = Difficulty::Hard.preset();
    let mut rng = StdRng::seed_from_u64(99);
    for round in 0..50 {
        let mut session = Session::start_with_rng(config.clone(), &mut rng).unwrap();
        let guess = mastermind::secret::generate(
            &mut StdRng::seed_from_u64(round),
            &config.palette,
            config.code_length,
            true,
        )
        .unwrap();
        let result = session.submit_guess(&guess).unwrap();
        assert!(result.exact + result.partial <= config.code_length);
    }
}

#[test]
fn test_session_outcomes_are_exclusive() {
    // Play a full session per difficulty with an arbitrary fixed guess and
    // check the machine lands in exactly one terminal state.
    for difficulty in [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ] {
        let config = difficulty.preset();
        let mut session =
            Session::start_with_rng(config.clone(), &mut StdRng::seed_from_u64(1)).unwrap();
        let guess: Vec<Peg> = config.palette.pegs()[..config.code_length].to_vec();
        while !session.outcome().is_terminal() {
            session.submit_guess(&guess).unwrap();
        }
        match session.outcome() {
            Outcome::Won => {
                let last = session.rounds().last().unwrap().result().unwrap();
                assert_eq!(last.exact, config.code_length);
            }
            Outcome::Lost => {
                assert_eq!(session.rounds_played(), config.max_rounds);
                for round in session.rounds() {
                    assert!(round.result().unwrap().exact < config.code_length);
                }
            }
            Outcome::Pending => panic!("session never terminated"),
        }
    }
}

#[test]
fn test_terminal_session_is_frozen() {
    let mut session =
        Session::with_secret(easy_config(), vec![Red, Orange, Yellow, Green]).unwrap();
    session.submit_guess(&[Red, Orange, Yellow, Green]).unwrap();
    assert_eq!(session.outcome(), Outcome::Won);

    let err = session.submit_guess(&[Red, Orange, Yellow, Green]).unwrap_err();
    assert!(matches!(err, GameError::InvalidState { .. }));
    assert_eq!(session.rounds_played(), 1);
}

#[test]
fn test_duplicate_scoring_through_session() {
    let config = easy_config().with_duplicates(true);
    let mut session = Session::with_secret(config, vec![Red, Red, Green, Peg::Blue]).unwrap();
    let result = session.submit_guess(&[Red, Green, Green, Green]).unwrap();
    assert_eq!((result.exact, result.partial), (1, 1));
}
