//! Ball colors and cell states.
//!
//! ## Color
//!
//! Closed enumeration of the 7 ball colors. The original game treated colors
//! as loose single characters; the enum makes every comparison and the codec
//! exhaustive and compiler-checked. Each color has two stable
//! representations:
//!
//! - a **serial character** used by the persistence codec (`r`, `g`, …);
//! - a **display glyph** used only for rendering.
//!
//! ## Cell
//!
//! A board cell is either `Empty` or holds a ball of one color.

use serde::{Deserialize, Serialize};

/// A ball color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Purple,
    Maroon,
}

/// Display glyph for an empty cell.
pub const EMPTY_GLYPH: &str = "⬜";

impl Color {
    /// All colors, in serial order.
    pub const ALL: [Color; 7] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Orange,
        Color::Purple,
        Color::Maroon,
    ];

    /// The stable single-character serial form used by the codec.
    #[must_use]
    pub const fn serial(self) -> char {
        match self {
            Color::Red => 'r',
            Color::Green => 'g',
            Color::Blue => 'b',
            Color::Yellow => 'y',
            Color::Orange => 'o',
            Color::Purple => 'p',
            Color::Maroon => 'm',
        }
    }

    /// Parse the serial form back into a color.
    #[must_use]
    pub const fn from_serial(c: char) -> Option<Self> {
        match c {
            'r' => Some(Color::Red),
            'g' => Some(Color::Green),
            'b' => Some(Color::Blue),
            'y' => Some(Color::Yellow),
            'o' => Some(Color::Orange),
            'p' => Some(Color::Purple),
            'm' => Some(Color::Maroon),
            _ => None,
        }
    }

    /// Display glyph for rendering. Presentational only; never used in
    /// comparisons or the codec.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Color::Red => "🔴",
            Color::Green => "🟢",
            Color::Blue => "🔵",
            Color::Yellow => "🟡",
            Color::Orange => "🟠",
            Color::Purple => "🟣",
            Color::Maroon => "🟤",
        }
    }
}

/// A single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Ball(Color),
}

impl Cell {
    /// Is this cell empty?
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The ball color, if any.
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Ball(c) => Some(c),
        }
    }

    /// Serial character for the codec (`-` for empty).
    #[must_use]
    pub const fn serial(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Ball(c) => c.serial(),
        }
    }

    /// Parse a codec character into a cell.
    #[must_use]
    pub const fn from_serial(c: char) -> Option<Self> {
        match c {
            '-' => Some(Cell::Empty),
            _ => match Color::from_serial(c) {
                Some(color) => Some(Cell::Ball(color)),
                None => None,
            },
        }
    }

    /// Display glyph for rendering.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Cell::Empty => EMPTY_GLYPH,
            Cell::Ball(c) => c.glyph(),
        }
    }
}
