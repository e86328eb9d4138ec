use mastermind::board::{BoardRenderer, game_loop, game_loop_with_rng};
use mastermind::cli::{Cli, CliRenderer, parse_cli};
use mastermind::config::GameConfig;
use mastermind::error::GameError;
use mastermind::tui::TuiRenderer;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;

fn run<B: BoardRenderer>(cli: &Cli, config: &GameConfig, renderer: &mut B) -> Result<(), GameError> {
    match cli.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            game_loop_with_rng(config, &mut rng, renderer)
        }
        None => game_loop(config, renderer),
    }
}

fn main() {
    env_logger::init();
    let cli = parse_cli();
    let config = cli.difficulty.preset().with_duplicates(cli.duplicates);

    let result = if cli.tui {
        match TuiRenderer::new() {
            Ok(mut renderer) => run(&cli, &config, &mut renderer),
            Err(e) => {
                eprintln!("Failed to start the terminal interface: {e}");
                return;
            }
        }
    } else {
        let stdin = io::stdin();
        let mut renderer = CliRenderer::new(stdin.lock());
        run(&cli, &config, &mut renderer)
    };

    if let Err(e) = result {
        eprintln!("{e}");
    }
}
