//! Canonical string serialization of a game.
//!
//! ## Format
//!
//! A versioned, pipe-delimited single line:
//!
//! ```text
//! CL1|<81 grid chars, row-major>|<score>|<old_score>|<3 lookahead chars>
//! ```
//!
//! Grid characters are `-` for an empty cell or a color's serial character.
//! The lookahead batch is stored verbatim: it was already shown to the
//! player, so it must survive a process restart exactly rather than being
//! regenerated from a reseeded generator.
//!
//! Decoding is strict: wrong tag, wrong field count, wrong lengths, unknown
//! characters, or unparsable integers all fail with `CorruptState` and never
//! yield a partially-initialized game.

use crate::core::{Cell, Color, GameError, GameRng};
use crate::engine::Game;
use crate::grid::{Grid, GRID_SIZE};
use crate::spawn::{Batch, SPAWN_COUNT};

/// Format version tag. Bump when the layout or rules constants change so
/// older saves fail loudly instead of silently corrupting.
pub const FORMAT_TAG: &str = "CL1";

const FIELD_SEP: char = '|';

/// Serialize a game to its canonical string.
#[must_use]
pub fn encode(game: &Game) -> String {
    let mut out = String::with_capacity(96);
    out.push_str(FORMAT_TAG);
    out.push(FIELD_SEP);
    for pos in Grid::positions() {
        let cell = game.grid().get(pos).unwrap_or(Cell::Empty);
        out.push(cell.serial());
    }
    out.push(FIELD_SEP);
    out.push_str(&game.score().to_string());
    out.push(FIELD_SEP);
    out.push_str(&game.old_score().to_string());
    out.push(FIELD_SEP);
    for &color in game.next_balls() {
        out.push(color.serial());
    }
    out
}

/// Reconstruct a game from its canonical string.
///
/// `seed` drives future spawns only; everything observable is restored
/// verbatim from the string.
pub fn decode(input: &str, seed: u64) -> Result<Game, GameError> {
    let corrupt = |msg: &str| GameError::CorruptState(msg.to_string());

    let mut fields = input.split(FIELD_SEP);
    let tag = fields.next().ok_or_else(|| corrupt("empty input"))?;
    if tag != FORMAT_TAG {
        return Err(corrupt("unknown format tag"));
    }

    let grid_field = fields.next().ok_or_else(|| corrupt("missing grid field"))?;
    let score_field = fields.next().ok_or_else(|| corrupt("missing score field"))?;
    let old_field = fields
        .next()
        .ok_or_else(|| corrupt("missing old score field"))?;
    let batch_field = fields
        .next()
        .ok_or_else(|| corrupt("missing lookahead field"))?;
    if fields.next().is_some() {
        return Err(corrupt("trailing fields"));
    }

    if grid_field.chars().count() != GRID_SIZE * GRID_SIZE {
        return Err(corrupt("grid field has wrong length"));
    }
    let mut grid = Grid::new();
    for (pos, c) in Grid::positions().zip(grid_field.chars()) {
        let cell = Cell::from_serial(c).ok_or_else(|| corrupt("unknown grid character"))?;
        grid.set(pos, cell)?;
    }

    let score: u32 = score_field
        .parse()
        .map_err(|_| corrupt("score is not a non-negative integer"))?;
    let old_score: u32 = old_field
        .parse()
        .map_err(|_| corrupt("old score is not a non-negative integer"))?;

    if batch_field.chars().count() != SPAWN_COUNT {
        return Err(corrupt("lookahead field has wrong length"));
    }
    let next_balls: Batch = batch_field
        .chars()
        .map(Color::from_serial)
        .collect::<Option<Batch>>()
        .ok_or_else(|| corrupt("unknown lookahead character"))?;

    Ok(Game::from_parts(
        grid,
        score,
        old_score,
        next_balls,
        GameRng::new(seed),
    ))
}
