//! Board position representation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A square on the 8x8 board, addressed by (row, col) with both in 0..8.
///
/// Row 0 is Green's back row; row 7 is White's. The algebraic text form
/// writes the column as a letter and the row as a 1-based digit, so
/// (0, 0) is `a1` and (7, 7) is `h8`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    /// Creates a position, returning `None` if either coordinate is out of bounds.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Pos { row, col })
        } else {
            None
        }
    }

    /// Returns the position offset by (drow, dcol), or `None` if it leaves the board.
    #[inline]
    pub const fn offset(self, drow: i8, dcol: i8) -> Option<Self> {
        let row = self.row as i8 + drow;
        let col = self.col as i8 + dcol;
        if row >= 0 && col >= 0 {
            Pos::new(row as u8, col as u8)
        } else {
            None
        }
    }

    /// Returns true if this is a dark square, i.e. (row + col) is odd.
    ///
    /// Pieces only ever start on dark squares; the move rules preserve this.
    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// Parses a position from algebraic notation (e.g. "b3").
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let col = match bytes[0].to_ascii_lowercase() {
            c @ b'a'..=b'h' => c - b'a',
            _ => return None,
        };
        let row = match bytes[1] {
            r @ b'1'..=b'8' => r - b'1',
            _ => return None,
        };
        Pos::new(row, col)
    }

    /// Returns the algebraic notation for this position.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

impl fmt::Debug for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pos({})", self.to_algebraic())
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
