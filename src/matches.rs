//! Detection of scoring runs.
//!
//! After any placement (player move or spawn) the board is scanned for
//! contiguous runs of at least [`MATCH_LEN`] same-colored balls along the
//! four run-producing axis directions: right, down, down-right, down-left.
//! The result is the set of cells to clear; a cell belonging to several
//! qualifying runs (a cross) appears once.

use rustc_hash::FxHashSet;

use crate::core::Pos;
use crate::grid::{Grid, GRID_SIZE};

/// Minimum run length that scores.
pub const MATCH_LEN: usize = 5;

/// Run-producing directions as (d_row, d_col). Left/up/up-diagonals are
/// redundant: any run is found from its topmost-leftmost member.
const DIRECTIONS: [(i16, i16); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Find every cell belonging to a run of `MATCH_LEN` or more same-colored
/// balls.
///
/// Scans all occupied cells in all four directions; discovery order never
/// affects the resulting set.
#[must_use]
pub fn find_matches(grid: &Grid) -> FxHashSet<Pos> {
    let mut matched: FxHashSet<Pos> = FxHashSet::default();

    for start in Grid::positions() {
        let Ok(cell) = grid.get(start) else { continue };
        let Some(color) = cell.color() else { continue };

        for (dr, dc) in DIRECTIONS {
            let mut run = vec![start];
            let mut row = i16::from(start.row) + dr;
            let mut col = i16::from(start.col) + dc;

            while (0..GRID_SIZE as i16).contains(&row)
                && (0..GRID_SIZE as i16).contains(&col)
            {
                let pos = Pos::new(row as u8, col as u8);
                match grid.get(pos).ok().and_then(|c| c.color()) {
                    Some(c) if c == color => run.push(pos),
                    _ => break,
                }
                row += dr;
                col += dc;
            }

            if run.len() >= MATCH_LEN {
                matched.extend(run);
            }
        }
    }

    matched
}
