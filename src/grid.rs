//! The game board: a fixed 9×9 array of cells.
//!
//! Pure value data with bounds-checked access. A `Grid` carries no hidden
//! state and is safely copyable and comparable; all behavior beyond
//! accessors (pathfinding, match detection, spawning) lives in the sibling
//! modules.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, GameError, Pos};

/// Board dimension. The board is always `GRID_SIZE` × `GRID_SIZE`.
pub const GRID_SIZE: usize = 9;

/// The 9×9 game board.
///
/// Every coordinate in [0,9)² holds exactly one `Cell`; there are no
/// implicit cells. Stored row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[Cell::Empty; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Is the position inside the board?
    #[must_use]
    pub const fn in_bounds(pos: Pos) -> bool {
        (pos.row as usize) < GRID_SIZE && (pos.col as usize) < GRID_SIZE
    }

    fn check_bounds(pos: Pos) -> Result<(), GameError> {
        if Self::in_bounds(pos) {
            Ok(())
        } else {
            Err(GameError::OutOfBounds { pos })
        }
    }

    /// Get the cell at a position.
    pub fn get(&self, pos: Pos) -> Result<Cell, GameError> {
        Self::check_bounds(pos)?;
        Ok(self.cells[pos.row as usize][pos.col as usize])
    }

    /// Set the cell at a position.
    pub fn set(&mut self, pos: Pos, cell: Cell) -> Result<(), GameError> {
        Self::check_bounds(pos)?;
        self.cells[pos.row as usize][pos.col as usize] = cell;
        Ok(())
    }

    /// Is the in-bounds position empty? Out-of-bounds positions are not
    /// empty (there is no cell there at all).
    #[must_use]
    pub fn is_empty(&self, pos: Pos) -> bool {
        matches!(self.get(pos), Ok(Cell::Empty))
    }

    /// Does the in-bounds position hold a ball?
    #[must_use]
    pub fn has_ball(&self, pos: Pos) -> bool {
        matches!(self.get(pos), Ok(Cell::Ball(_)))
    }

    /// Iterate over all positions in row-major order.
    pub fn positions() -> impl Iterator<Item = Pos> {
        (0..GRID_SIZE as u8)
            .flat_map(|row| (0..GRID_SIZE as u8).map(move |col| Pos::new(row, col)))
    }

    /// All currently empty positions, row-major.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<Pos> {
        Self::positions().filter(|&p| self.is_empty(p)).collect()
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        Self::positions().filter(|&p| self.is_empty(p)).count()
    }
}
