use crate::error::GameError;
use crate::palette::{Palette, Peg};
use rand::Rng;
use rand::seq::SliceRandom;

/// Draw a hidden sequence of `code_length` pegs from `palette`.
///
/// Without duplicates this is a uniform draw without replacement and requires
/// `code_length <= palette.len()`. With duplicates each position is an
/// independent uniform draw.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    palette: &Palette,
    code_length: usize,
    allow_duplicates: bool,
) -> Result<Vec<Peg>, GameError> {
    if palette.is_empty() {
        return Err(GameError::Configuration("palette is empty".to_string()));
    }

    if allow_duplicates {
        let pegs = palette.pegs();
        return Ok((0..code_length)
            .map(|_| pegs[rng.gen_range(0..pegs.len())])
            .collect());
    }

    if code_length > palette.len() {
        return Err(GameError::Configuration(format!(
            "code length {} exceeds palette size {} with duplicates disallowed",
            code_length,
            palette.len()
        )));
    }

    let mut pool = palette.pegs().to_vec();
    pool.shuffle(rng);
    pool.truncate(code_length);
    Ok(pool)
}
