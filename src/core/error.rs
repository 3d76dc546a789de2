//! Error taxonomy.
//!
//! Every failure the engine can produce is local, non-fatal, and
//! caller-recoverable: a rejected move re-prompts the player, a corrupt
//! save string falls back to "no active game". Nothing here should ever
//! abort the hosting process.

use thiserror::Error;

use super::pos::Pos;

/// Errors produced by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Coordinate outside the grid.
    #[error("position {pos} is outside the board")]
    OutOfBounds { pos: Pos },

    /// Illegal move: bad coordinates, empty source, occupied destination,
    /// no connecting path, or malformed move text.
    #[error("invalid move: {0}")]
    InvalidMove(String),

    /// Malformed serialized state. Import never partially initializes a
    /// game; the caller treats the save as absent.
    #[error("corrupt state: {0}")]
    CorruptState(String),

    /// Move or spawn attempted on a finished game.
    #[error("game is already over")]
    AlreadyOver,
}
