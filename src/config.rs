use crate::error::GameError;
use crate::palette::Palette;
use clap::ValueEnum;
use std::fmt;

/// Difficulty presets.
///
/// Canonical table (the per-variant round caps of the original game were
/// inconsistent; this table is the fixed reference):
///
/// | Difficulty | code length | colors | rounds |
/// |-----------|-------------|--------|--------|
/// | Easy      | 4           | 6      | 12     |
/// | Medium    | 4           | 7      | 10     |
/// | Hard      | 4           | 9      | 8      |
/// | Expert    | 6           | 9      | 12     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub fn preset(self) -> GameConfig {
        let (code_length, palette_size, max_rounds) = match self {
            Difficulty::Easy => (4, 6, 12),
            Difficulty::Medium => (4, 7, 10),
            Difficulty::Hard => (4, 9, 8),
            Difficulty::Expert => (6, 9, 12),
        };
        GameConfig {
            code_length,
            palette: Palette::standard(palette_size),
            allow_duplicates: false,
            max_rounds,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        };
        write!(f, "{name}")
    }
}

/// Immutable parameters for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub code_length: usize,
    pub palette: Palette,
    pub allow_duplicates: bool,
    pub max_rounds: usize,
}

impl GameConfig {
    pub fn with_duplicates(mut self, allow: bool) -> Self {
        self.allow_duplicates = allow;
        self
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.code_length < 1 {
            return Err(GameError::Configuration(
                "code length must be at least 1".to_string(),
            ));
        }
        if self.max_rounds < 1 {
            return Err(GameError::Configuration(
                "round limit must be at least 1".to_string(),
            ));
        }
        if self.palette.is_empty() {
            return Err(GameError::Configuration("palette is empty".to_string()));
        }
        if !self.allow_duplicates && self.code_length > self.palette.len() {
            return Err(GameError::Configuration(format!(
                "code length {} exceeds palette size {} with duplicates disallowed",
                self.code_length,
                self.palette.len()
            )));
        }
        Ok(())
    }
}
