//! Caller-facing board facade.
//!
//! This is the boundary consumed by the chat/bot collaborator: convenience
//! constructors, the 4-character textual move encoding, and text rendering.
//! Everything here is a thin wrapper over [`Game`]; no game rules live in
//! this module.
//!
//! ## Move text
//!
//! A move is exactly 4 alphanumeric characters: two coordinates of 2
//! characters each. Each coordinate pairs one column letter (`a`–`i`,
//! case-insensitive) with one row digit (`1`–`9`), in either order, so
//! `a1b2`, `1a2b`, and `A12B` all parse. The upstream collaborator
//! pre-filters chat text (length, alphanumeric, mixed letters and digits);
//! the facade still rejects anything malformed with `InvalidMove`.

use crate::codec;
use crate::core::{Color, GameError, Pos};
use crate::engine::{Game, GameStatus};

/// A playable Color Lines board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    game: Game,
}

impl Board {
    /// Start a new game, score 0, entropy-seeded.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Start a new game carrying a prior game's final score.
    #[must_use]
    pub fn with_old_score(old_score: u32) -> Self {
        Self::with_old_score_seeded(old_score, rand::random())
    }

    /// Start a new game with an explicit seed, for reproducible play.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            game: Game::new(seed),
        }
    }

    /// Start a new seeded game carrying a prior score.
    #[must_use]
    pub fn with_old_score_seeded(old_score: u32, seed: u64) -> Self {
        Self {
            game: Game::with_old_score(old_score, seed),
        }
    }

    /// Reconstruct a board from a serialized state string.
    pub fn import(serialized: &str) -> Result<Self, GameError> {
        Ok(Self {
            game: codec::decode(serialized, rand::random())?,
        })
    }

    /// Serialize to the canonical state string.
    #[must_use]
    pub fn export(&self) -> String {
        codec::encode(&self.game)
    }

    /// Apply a move given as 4-character move text.
    ///
    /// Returns the number of balls cleared by the move.
    pub fn make_move(&mut self, text: &str) -> Result<usize, GameError> {
        let (from, to) = parse_move(text)?;
        self.game.move_ball(from, to)
    }

    /// Skip to the spawn phase. Returns the number of balls cleared.
    pub fn next(&mut self) -> Result<usize, GameError> {
        self.game.next()
    }

    /// Whether the game is ongoing or over.
    #[must_use]
    pub fn result(&self) -> GameStatus {
        self.game.result()
    }

    /// Running score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.game.score()
    }

    /// Carried-over prior score.
    #[must_use]
    pub fn old_score(&self) -> u32 {
        self.game.old_score()
    }

    /// Lookahead batch for the "Next: …" display.
    #[must_use]
    pub fn next_balls(&self) -> &[Color] {
        self.game.next_balls()
    }

    /// The underlying game, for callers that work with coordinates
    /// directly.
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Mutable access to the underlying game.
    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.game.fmt(f)
    }
}

/// Parse 4-character move text into (source, destination).
fn parse_move(text: &str) -> Result<(Pos, Pos), GameError> {
    let invalid = |msg: &str| GameError::InvalidMove(msg.to_string());

    let chars: Vec<char> = text.chars().collect();
    if chars.len() != 4 {
        return Err(invalid("move text must be exactly 4 characters"));
    }
    let from = parse_coord(chars[0], chars[1])
        .ok_or_else(|| invalid("unreadable source coordinate"))?;
    let to = parse_coord(chars[2], chars[3])
        .ok_or_else(|| invalid("unreadable destination coordinate"))?;
    Ok((from, to))
}

/// Parse one coordinate from a letter/digit pair in either order.
fn parse_coord(a: char, b: char) -> Option<Pos> {
    let (letter, digit) = match (a.is_ascii_alphabetic(), b.is_ascii_digit()) {
        (true, true) => (a, b),
        _ if b.is_ascii_alphabetic() && a.is_ascii_digit() => (b, a),
        _ => return None,
    };

    let col = (letter.to_ascii_lowercase() as u8).checked_sub(b'a')?;
    let row = (digit as u8).checked_sub(b'1')?;
    if col >= 9 || row >= 9 {
        return None;
    }
    Some(Pos::new(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coord_letter_digit() {
        assert_eq!(parse_coord('a', '1'), Some(Pos::new(0, 0)));
        assert_eq!(parse_coord('i', '9'), Some(Pos::new(8, 8)));
        assert_eq!(parse_coord('c', '5'), Some(Pos::new(4, 2)));
    }

    #[test]
    fn test_parse_coord_digit_letter() {
        assert_eq!(parse_coord('1', 'a'), Some(Pos::new(0, 0)));
        assert_eq!(parse_coord('7', 'e'), Some(Pos::new(6, 4)));
    }

    #[test]
    fn test_parse_coord_uppercase() {
        assert_eq!(parse_coord('B', '3'), Some(Pos::new(2, 1)));
    }

    #[test]
    fn test_parse_coord_rejects_out_of_range() {
        assert_eq!(parse_coord('j', '1'), None);
        assert_eq!(parse_coord('a', '0'), None);
        assert_eq!(parse_coord('z', '9'), None);
    }

    #[test]
    fn test_parse_coord_rejects_same_kind_pairs() {
        assert_eq!(parse_coord('a', 'b'), None);
        assert_eq!(parse_coord('1', '2'), None);
    }

    #[test]
    fn test_parse_move_shapes() {
        assert_eq!(
            parse_move("a1b2").unwrap(),
            (Pos::new(0, 0), Pos::new(1, 1))
        );
        assert_eq!(
            parse_move("1a2b").unwrap(),
            (Pos::new(0, 0), Pos::new(1, 1))
        );
        assert_eq!(
            parse_move("A1B2").unwrap(),
            (Pos::new(0, 0), Pos::new(1, 1))
        );
    }

    #[test]
    fn test_parse_move_rejects_malformed() {
        for text in ["", "a1b", "a1b2c", "abcd", "1234", "a1!2", "a0b2", "j1a2"] {
            assert!(
                matches!(parse_move(text), Err(GameError::InvalidMove(_))),
                "accepted: {text:?}"
            );
        }
    }

    #[test]
    fn test_board_round_trip() {
        let board = Board::with_seed(42);
        let restored = Board::import(&board.export()).unwrap();
        assert_eq!(restored, board);
    }

    #[test]
    fn test_board_import_rejects_garbage() {
        assert!(matches!(
            Board::import("not a save"),
            Err(GameError::CorruptState(_))
        ));
    }

    #[test]
    fn test_board_move_between_empty_cells_fails() {
        // Hand-written empty board: any move has an empty source.
        let empty = format!("CL1|{}|0|0|rgb", "-".repeat(81));
        let mut board = Board::import(&empty).unwrap();
        let before = board.export();

        let err = board.make_move("a1b2").unwrap_err();
        assert!(matches!(err, GameError::InvalidMove(_)));
        assert_eq!(board.export(), before);
    }
}
