//! Turn orchestration: the `Game` state machine.
//!
//! ## Turn structure
//!
//! A turn has two explicit steps, mirroring how the player interacts with
//! the board:
//!
//! 1. [`Game::move_ball`] — relocate one ball along an empty-cell path,
//!    clearing and scoring any runs the move completes. Moving never spawns.
//! 2. [`Game::next`] — the spawn phase: place the lookahead batch on random
//!    empty cells, clear and score runs the spawn completes, then generate a
//!    fresh lookahead. The player may skip straight to this step.
//!
//! ## Terminal state
//!
//! The game is over exactly when fewer empty cells remain than the mandatory
//! spawn size. The status is derived from the grid rather than stored, so it
//! survives serialization for free. Operations on a finished game fail with
//! `GameError::AlreadyOver`.
//!
//! ## Scoring
//!
//! One point per cleared ball. A prior game's final score is carried as
//! `old_score`; deciding what counts as a new high score is the caller's
//! rule, the engine only exposes both numbers.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, Color, GameError, GameRng, Pos};
use crate::grid::Grid;
use crate::matches::find_matches;
use crate::path::exists_path;
use crate::spawn::{BallSpawner, Batch, SPAWN_COUNT};

/// Whether a game is still being played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing,
    Over,
}

/// A single Color Lines game.
///
/// Exclusively owned value state: one mutation per accepted move or spawn
/// phase, no interior sharing. The surrounding persistence layer loads one
/// instance, applies one turn, and saves the result back as a string.
#[derive(Clone, Debug)]
pub struct Game {
    grid: Grid,
    score: u32,
    old_score: u32,
    next_balls: Batch,
    spawner: BallSpawner,
}

impl Game {
    /// Start a fresh game: empty grid, one spawn of [`SPAWN_COUNT`] balls
    /// already placed, lookahead batch generated.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_old_score(0, seed)
    }

    /// Start a fresh game carrying the final score of a previous game.
    #[must_use]
    pub fn with_old_score(old_score: u32, seed: u64) -> Self {
        let mut spawner = BallSpawner::new(GameRng::new(seed));
        let mut grid = Grid::new();

        // The initial spawn cannot form a run of 5, so no clearing pass.
        let initial = spawner.batch();
        let placed = spawner.place(&mut grid, &initial);
        debug_assert!(placed.is_ok(), "initial spawn targets in-bounds cells");

        let next_balls = spawner.batch();

        Self {
            grid,
            score: 0,
            old_score,
            next_balls,
            spawner,
        }
    }

    /// Reassemble a game from its persisted parts. Used by the codec; the
    /// lookahead batch is carried verbatim from the save, never regenerated.
    pub(crate) fn from_parts(
        grid: Grid,
        score: u32,
        old_score: u32,
        next_balls: Batch,
        rng: GameRng,
    ) -> Self {
        Self {
            grid,
            score,
            old_score,
            next_balls,
            spawner: BallSpawner::new(rng),
        }
    }

    // === Accessors ===

    /// The board.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Running score of this game.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Final score carried over from the previous game.
    #[must_use]
    pub fn old_score(&self) -> u32 {
        self.old_score
    }

    /// The lookahead batch: the colors the next spawn phase will place,
    /// shown to the player as "Next: …".
    #[must_use]
    pub fn next_balls(&self) -> &[Color] {
        &self.next_balls
    }

    /// Is the game still in progress?
    ///
    /// Over exactly when the grid cannot accept the full mandatory spawn.
    #[must_use]
    pub fn result(&self) -> GameStatus {
        if self.grid.empty_count() < SPAWN_COUNT {
            GameStatus::Over
        } else {
            GameStatus::Ongoing
        }
    }

    // === Turn operations ===

    /// Relocate the ball at `from` to the empty cell `to`.
    ///
    /// Clears and scores any runs the move completes and returns the number
    /// of balls cleared. Fails with `AlreadyOver` on a finished game and
    /// `InvalidMove` for any illegal move; on failure the pre-move state is
    /// preserved exactly.
    pub fn move_ball(&mut self, from: Pos, to: Pos) -> Result<usize, GameError> {
        if self.result() == GameStatus::Over {
            return Err(GameError::AlreadyOver);
        }
        if !Grid::in_bounds(from) || !Grid::in_bounds(to) {
            return Err(GameError::InvalidMove("coordinate is off the board".into()));
        }
        if from == to {
            return Err(GameError::InvalidMove(
                "source and destination are the same cell".into(),
            ));
        }
        let Some(color) = self.grid.get(from)?.color() else {
            return Err(GameError::InvalidMove("source cell has no ball".into()));
        };
        if !self.grid.is_empty(to) {
            return Err(GameError::InvalidMove("destination cell is occupied".into()));
        }
        if !exists_path(&self.grid, from, to) {
            return Err(GameError::InvalidMove(
                "no open path between the cells".into(),
            ));
        }

        self.grid.set(from, Cell::Empty)?;
        self.grid.set(to, Cell::Ball(color))?;

        self.clear_matches()
    }

    /// Advance to the spawn phase: place the lookahead batch, clear and
    /// score runs the spawn created, then generate a fresh lookahead.
    ///
    /// When fewer empty cells remain than the batch size, places as many
    /// balls as fit; the game is then over. Returns the number of balls
    /// cleared by the spawn. Fails with `AlreadyOver` on a finished game.
    pub fn next(&mut self) -> Result<usize, GameError> {
        if self.result() == GameStatus::Over {
            return Err(GameError::AlreadyOver);
        }

        let batch: Batch = self.next_balls.clone();
        self.spawner.place(&mut self.grid, &batch)?;
        let cleared = self.clear_matches()?;
        self.next_balls = self.spawner.batch();

        Ok(cleared)
    }

    /// Clear all matched runs, add one point per cleared ball, and return
    /// the cleared count.
    fn clear_matches(&mut self) -> Result<usize, GameError> {
        let matched = find_matches(&self.grid);
        for &pos in &matched {
            self.grid.set(pos, Cell::Empty)?;
        }
        self.score += matched.len() as u32;
        Ok(matched.len())
    }
}

/// Games compare by observable state: grid, scores, and lookahead batch.
/// The RNG is deliberately excluded; it is not part of the persisted state.
impl PartialEq for Game {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
            && self.score == other.score
            && self.old_score == other.old_score
            && self.next_balls == other.next_balls
    }
}

impl Eq for Game {}

/// Human-readable board drawing: column letters, then one row per line with
/// its row digit and cell glyphs. Purely presentational.
impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, " ")?;
        for col in 0..crate::grid::GRID_SIZE as u8 {
            write!(f, " {}", (b'a' + col) as char)?;
        }
        for row in 0..crate::grid::GRID_SIZE as u8 {
            write!(f, "\n{}", row + 1)?;
            for col in 0..crate::grid::GRID_SIZE as u8 {
                let cell = self.grid.get(Pos::new(row, col)).map_err(|_| std::fmt::Error)?;
                write!(f, "{}", cell.glyph())?;
            }
        }
        Ok(())
    }
}
