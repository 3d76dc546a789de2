//! Core engine types: positions, colors, cells, RNG, errors.
//!
//! This module contains the fundamental building blocks the rest of the
//! engine composes. Everything here is pure value data plus the seeded RNG.

pub mod cell;
pub mod error;
pub mod pos;
pub mod rng;

pub use cell::{Cell, Color, EMPTY_GLYPH};
pub use error::GameError;
pub use pos::Pos;
pub use rng::GameRng;
