//! Ball spawning: batch generation and random placement.
//!
//! Each turn ends by placing a batch of [`SPAWN_COUNT`] new balls on random
//! empty cells. The colors of the batch are shown to the player one turn
//! ahead ("Next: …"), so the engine always holds one already-generated
//! lookahead batch; the spawner only produces fresh batches and places
//! already-committed ones.

use smallvec::SmallVec;

use crate::core::{Cell, Color, GameError, GameRng, Pos};
use crate::grid::Grid;

/// Number of balls spawned per turn.
pub const SPAWN_COUNT: usize = 3;

/// A spawn batch: exactly `SPAWN_COUNT` colors, ordered.
pub type Batch = SmallVec<[Color; SPAWN_COUNT]>;

/// Generates spawn batches and places them on the board.
#[derive(Clone, Debug)]
pub struct BallSpawner {
    rng: GameRng,
}

impl BallSpawner {
    /// Create a spawner driven by the given RNG.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Generate a fresh batch of `SPAWN_COUNT` colors, each chosen
    /// independently and uniformly.
    pub fn batch(&mut self) -> Batch {
        (0..SPAWN_COUNT)
            .map(|_| Color::ALL[self.rng.gen_range_usize(0..Color::ALL.len())])
            .collect()
    }

    /// Place `colors` on uniformly random empty cells.
    ///
    /// When fewer empty cells remain than colors, places as many as fit.
    /// Returns the positions actually filled, in placement order.
    pub fn place(&mut self, grid: &mut Grid, colors: &[Color]) -> Result<Vec<Pos>, GameError> {
        let mut empties = grid.empty_cells();
        let mut placed = Vec::with_capacity(colors.len());

        for &color in colors {
            if empties.is_empty() {
                break;
            }
            let idx = self.rng.gen_range_usize(0..empties.len());
            let pos = empties.swap_remove(idx);
            grid.set(pos, Cell::Ball(color))?;
            placed.push(pos);
        }

        Ok(placed)
    }
}
