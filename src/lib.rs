// Library interface for mastermind
// This allows integration tests to access internal modules

pub mod board;
pub mod cli;
pub mod config;
pub mod error;
pub mod feedback;
pub mod logging;
pub mod palette;
pub mod secret;
pub mod session;
pub mod tui;

// Re-export commonly used items for easier testing
pub use board::{BoardRenderer, PlayerAction, game_loop};
pub use config::{Difficulty, GameConfig};
pub use error::GameError;
pub use feedback::{FeedbackResult, score};
pub use palette::{Palette, Peg};
pub use session::{Outcome, Round, Session};
