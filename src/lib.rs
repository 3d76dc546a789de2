//! # color-lines
//!
//! A turn-based Color Lines puzzle-game engine: a 9×9 grid of colored balls
//! where the player relocates one ball along an empty-cell path each turn,
//! new balls spawn afterward, and runs of five-or-more same-colored balls
//! are cleared for score.
//!
//! ## Design Principles
//!
//! 1. **Pure value state**: The engine is a synchronous state transformer.
//!    One exclusively owned [`Game`] per call chain; no ambient state, no
//!    locking, every operation O(N²) or better.
//!
//! 2. **Strings as the persistence boundary**: The whole game round-trips
//!    through one canonical, versioned string between turns. The lookahead
//!    batch already shown to the player is serialized verbatim, never
//!    regenerated.
//!
//! 3. **Recoverable failures only**: Illegal moves, corrupt saves, and
//!    operations on finished games surface as [`GameError`] values; nothing
//!    aborts the hosting process, and a failed operation leaves state
//!    untouched.
//!
//! ## Modules
//!
//! - `core`: Positions, colors, cells, RNG, errors
//! - `grid`: The 9×9 board, bounds-checked pure data
//! - `path`: Empty-cell reachability between positions
//! - `matches`: Detection of runs of 5+ same-colored balls
//! - `spawn`: Batch generation and random placement of new balls
//! - `engine`: Turn orchestration, scoring, terminal detection
//! - `codec`: Canonical string serialization
//! - `board`: Caller-facing facade with textual move encoding

pub mod core;
pub mod grid;
pub mod path;
pub mod matches;
pub mod spawn;
pub mod engine;
pub mod codec;
pub mod board;

// Re-export commonly used types
pub use crate::core::{Cell, Color, GameError, GameRng, Pos, EMPTY_GLYPH};

pub use crate::grid::{Grid, GRID_SIZE};

pub use crate::path::exists_path;

pub use crate::matches::{find_matches, MATCH_LEN};

pub use crate::spawn::{BallSpawner, Batch, SPAWN_COUNT};

pub use crate::engine::{Game, GameStatus};

pub use crate::codec::{decode, encode, FORMAT_TAG};

pub use crate::board::Board;
