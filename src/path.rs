//! Empty-cell reachability between two board positions.
//!
//! A ball may only be relocated along a chain of 4-directionally adjacent
//! empty cells. The source cell's own occupancy is irrelevant to the walk:
//! it is the start point, never stepped through. The destination must itself
//! be empty since it is the cell being walked onto.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::core::Pos;
use crate::grid::{Grid, GRID_SIZE};

/// Does a chain of empty cells connect `from` to `to`?
///
/// Breadth-first search over 4-adjacent cells, stepping only onto empty
/// cells. Returns false when the destination is occupied or either position
/// is outside the board. The visited set bounds the walk at O(N²).
#[must_use]
pub fn exists_path(grid: &Grid, from: Pos, to: Pos) -> bool {
    if !Grid::in_bounds(from) || !grid.is_empty(to) {
        return false;
    }

    let mut visited: FxHashSet<Pos> = FxHashSet::default();
    let mut queue = VecDeque::new();
    visited.insert(from);
    queue.push_back(from);

    while let Some(pos) = queue.pop_front() {
        if pos == to {
            return true;
        }
        for next in pos.neighbors(GRID_SIZE as u8) {
            if grid.is_empty(next) && visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    false
}
