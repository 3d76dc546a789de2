//! Grid coordinates.
//!
//! ## Pos
//!
//! Type-safe (row, column) coordinate for the 9×9 board.
//! Construction does not bounds-check; the `Grid` owns bounds validation
//! so that out-of-range coordinates surface as `GameError::OutOfBounds`
//! rather than panics.

use serde::{Deserialize, Serialize};

/// A (row, column) coordinate on the board, 0-based.
///
/// Row 0 is the top row, column 0 the leftmost column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// The 4-directionally adjacent positions that stay inside a
    /// `size`×`size` board.
    pub fn neighbors(self, size: u8) -> impl Iterator<Item = Pos> {
        const OFFSETS: [(i16, i16); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

        OFFSETS.into_iter().filter_map(move |(dr, dc)| {
            let row = i16::from(self.row) + dr;
            let col = i16::from(self.col) + dc;
            if (0..i16::from(size)).contains(&row) && (0..i16::from(size)).contains(&col) {
                Some(Pos::new(row as u8, col as u8))
            } else {
                None
            }
        })
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Column letter then row digit, matching the move-text encoding.
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}
