//! Player color representation.

use serde::{Deserialize, Serialize};

/// Represents the two players in checkers.
///
/// Green starts at rows 0-2 and moves toward row 7; White starts at
/// rows 5-7 and moves toward row 0. Green always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Color {
    Green = 0,
    White = 1,
}

impl Color {
    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Green => Color::White,
            Color::White => Color::Green,
        }
    }

    /// Returns the index (0 for Green, 1 for White).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the forward row direction for this color (+1 for Green, -1 for White).
    ///
    /// A non-king piece may only step or jump in this direction.
    #[inline]
    pub const fn forward_dir(self) -> i8 {
        match self {
            Color::Green => 1,
            Color::White => -1,
        }
    }

    /// Returns the crowning row for this color (7 for Green, 0 for White).
    ///
    /// A piece reaching this row becomes a king.
    #[inline]
    pub const fn crowning_row(self) -> u8 {
        match self {
            Color::Green => 7,
            Color::White => 0,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Green => write!(f, "Green"),
            Color::White => write!(f, "White"),
        }
    }
}
