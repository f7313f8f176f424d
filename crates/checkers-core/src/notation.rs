//! Board and game-state text notation.
//!
//! The placement form is FEN-like: eight row groups separated by `/`,
//! row 0 first, with runs of empty squares written as digits and pieces
//! as their character codes (`g`/`w` for men, `G`/`W` for kings).
//!
//! The full state form appends the side to move and both scores:
//! `"<placement> <g|w> <green_score> <white_score>"`.

use crate::{Color, Piece};
use std::fmt;
use thiserror::Error;

/// Raw 8x8 cell grid, indexed `[row][col]`.
///
/// This is the exchange format between the notation layer and the board
/// type in the engine crate, which owns the gameplay operations.
pub type Cells = [[Option<Piece>; 8]; 8];

/// The standard starting placement: green men on rows 0-2, white men on
/// rows 5-7, dark squares only.
pub const START_PLACEMENT: &str =
    "1g1g1g1g/g1g1g1g1/1g1g1g1g/8/8/w1w1w1w1/1w1w1w1w/w1w1w1w1";

/// Errors that can occur when parsing notation strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid placement: expected 8 rows, got {0}")]
    RowCount(usize),

    #[error("invalid placement: row {row} covers {width} columns")]
    RowWidth { row: usize, width: usize },

    #[error("invalid piece character '{0}'")]
    BadPiece(char),

    #[error("invalid state: expected 4 fields, got {0}")]
    FieldCount(usize),

    #[error("invalid turn: expected 'g' or 'w', got '{0}'")]
    BadTurn(String),

    #[error("invalid score: '{0}'")]
    BadScore(String),
}

/// Parses a placement string into a cell grid.
pub fn parse_placement(s: &str) -> Result<Cells, NotationError> {
    let rows: Vec<&str> = s.split('/').collect();
    if rows.len() != 8 {
        return Err(NotationError::RowCount(rows.len()));
    }

    let mut cells: Cells = [[None; 8]; 8];
    for (row, text) in rows.iter().enumerate() {
        let mut col = 0usize;
        for c in text.chars() {
            if let Some(run) = c.to_digit(10) {
                if run == 0 || run == 9 {
                    return Err(NotationError::BadPiece(c));
                }
                col += run as usize;
            } else {
                let piece = Piece::from_char(c).ok_or(NotationError::BadPiece(c))?;
                if col >= 8 {
                    return Err(NotationError::RowWidth { row, width: col + 1 });
                }
                cells[row][col] = Some(piece);
                col += 1;
            }
        }
        if col != 8 {
            return Err(NotationError::RowWidth { row, width: col });
        }
    }
    Ok(cells)
}

/// Serializes a cell grid into its placement string.
pub fn placement_to_string(cells: &Cells) -> String {
    let mut out = String::new();
    for (row, cols) in cells.iter().enumerate() {
        if row > 0 {
            out.push('/');
        }
        let mut run = 0u32;
        for cell in cols {
            match cell {
                None => run += 1,
                Some(piece) => {
                    if run > 0 {
                        out.push(char::from_digit(run, 10).unwrap());
                        run = 0;
                    }
                    out.push(piece.to_char());
                }
            }
        }
        if run > 0 {
            out.push(char::from_digit(run, 10).unwrap());
        }
    }
    out
}

/// Parsed full game-state notation.
///
/// Holds the raw parsed components; the engine converts this into its
/// own game representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateNotation {
    pub cells: Cells,
    pub turn: Color,
    pub green_score: u32,
    pub white_score: u32,
}

impl StateNotation {
    /// The standard starting state.
    pub const START: &'static str =
        "1g1g1g1g/g1g1g1g1/1g1g1g1g/8/8/w1w1w1w1/1w1w1w1w/w1w1w1w1 g 0 0";

    /// Parses a full state string.
    pub fn parse(s: &str) -> Result<Self, NotationError> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        if parts.len() != 4 {
            return Err(NotationError::FieldCount(parts.len()));
        }

        let cells = parse_placement(parts[0])?;
        let turn = match parts[1] {
            "g" => Color::Green,
            "w" => Color::White,
            other => return Err(NotationError::BadTurn(other.to_string())),
        };
        let green_score = parts[2]
            .parse()
            .map_err(|_| NotationError::BadScore(parts[2].to_string()))?;
        let white_score = parts[3]
            .parse()
            .map_err(|_| NotationError::BadScore(parts[3].to_string()))?;

        Ok(StateNotation {
            cells,
            turn,
            green_score,
            white_score,
        })
    }
}

impl fmt::Display for StateNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let turn = match self.turn {
            Color::Green => 'g',
            Color::White => 'w',
        };
        write!(
            f,
            "{} {} {} {}",
            placement_to_string(&self.cells),
            turn,
            self.green_score,
            self.white_score
        )
    }
}
