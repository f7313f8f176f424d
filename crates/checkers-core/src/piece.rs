//! Checkers piece representation.

use crate::Color;
use serde::{Deserialize, Serialize};

/// A piece on the board: a man or a king of one color.
///
/// The `king` flag flips exactly once, from `false` to `true`, when the
/// piece reaches its crowning row. Kings may move and capture in either
/// diagonal direction; men only forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub king: bool,
}

impl Piece {
    /// Creates a man (non-king piece) of the given color.
    #[inline]
    pub const fn man(color: Color) -> Self {
        Piece { color, king: false }
    }

    /// Creates a king of the given color.
    #[inline]
    pub const fn king(color: Color) -> Self {
        Piece { color, king: true }
    }

    /// Promotes this piece to a king. Promoting a king is a no-op.
    #[inline]
    pub fn promote(&mut self) {
        self.king = true;
    }

    /// Returns the notation character: `g`/`w` for men, `G`/`W` for kings.
    pub const fn to_char(self) -> char {
        match (self.color, self.king) {
            (Color::Green, false) => 'g',
            (Color::Green, true) => 'G',
            (Color::White, false) => 'w',
            (Color::White, true) => 'W',
        }
    }

    /// Parses a notation character into a piece.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'g' => Some(Piece::man(Color::Green)),
            'G' => Some(Piece::king(Color::Green)),
            'w' => Some(Piece::man(Color::White)),
            'W' => Some(Piece::king(Color::White)),
            _ => None,
        }
    }
}
