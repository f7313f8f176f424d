//! The 8x8 board.

use checkers_core::{parse_placement, placement_to_string, Cells, Color, NotationError, Piece, Pos};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An 8x8 grid of optional pieces, indexed by [`Pos`].
///
/// The board itself does not enforce the dark-square convention; the
/// standard placement starts pieces on dark squares and the diagonal
/// move rules keep them there.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: Cells,
}

impl Board {
    /// Creates an empty board.
    pub const fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Creates a board with the standard starting placement: green men on
    /// rows 0-2, white men on rows 5-7, dark squares only.
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for row in 0..8u8 {
            let color = match row {
                0..=2 => Color::Green,
                5..=7 => Color::White,
                _ => continue,
            };
            for col in 0..8u8 {
                if (row + col) % 2 == 1 {
                    board.cells[row as usize][col as usize] = Some(Piece::man(color));
                }
            }
        }
        board
    }

    /// Creates a board from a raw cell grid.
    pub const fn from_cells(cells: Cells) -> Self {
        Board { cells }
    }

    /// Parses a board from its placement string.
    pub fn from_placement(s: &str) -> Result<Self, NotationError> {
        Ok(Board {
            cells: parse_placement(s)?,
        })
    }

    /// Returns the placement string for this board.
    pub fn to_placement(&self) -> String {
        placement_to_string(&self.cells)
    }

    /// Returns the raw cell grid.
    pub const fn cells(&self) -> &Cells {
        &self.cells
    }

    /// Returns the piece at the given position, if any.
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Piece> {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Sets the cell at the given position.
    #[inline]
    pub fn set(&mut self, pos: Pos, piece: Option<Piece>) {
        self.cells[pos.row as usize][pos.col as usize] = piece;
    }

    /// Removes and returns the piece at the given position.
    #[inline]
    pub fn take(&mut self, pos: Pos) -> Option<Piece> {
        self.cells[pos.row as usize][pos.col as usize].take()
    }

    /// Counts the live pieces of one color.
    pub fn count(&self, color: Color) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| matches!(cell, Some(p) if p.color == color))
            .count()
    }

    /// Iterates over all pieces of one color with their positions.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Pos, Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(move |(row, cols)| {
            cols.iter().enumerate().filter_map(move |(col, cell)| {
                let piece = (*cell)?;
                if piece.color != color {
                    return None;
                }
                let pos = Pos::new(row as u8, col as u8)?;
                Some((pos, piece))
            })
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_placement())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_placement())
    }
}

// On the wire a board is its placement string.
impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_placement())
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Board::from_placement(&s).map_err(D::Error::custom)
    }
}
