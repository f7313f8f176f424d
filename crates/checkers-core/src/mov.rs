//! Move representation.

use crate::Pos;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A proposed move from one square to another.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Pos,
    pub to: Pos,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Pos, to: Pos) -> Self {
        Move { from, to }
    }

    /// Returns the (row, col) delta from source to destination.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        (
            self.to.row as i8 - self.from.row as i8,
            self.to.col as i8 - self.from.col as i8,
        )
    }

    /// Returns the text form of this move (e.g. "b3c4").
    pub fn to_text(self) -> String {
        format!("{}{}", self.from, self.to)
    }

    /// Parses a move from its text form.
    pub fn from_text(s: &str) -> Option<Self> {
        if s.len() != 4 {
            return None;
        }
        let from = Pos::from_algebraic(&s[0..2])?;
        let to = Pos::from_algebraic(&s[2..4])?;
        Some(Move::new(from, to))
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_text())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

/// The outcome of validating a move.
///
/// An invalid move is represented as `Option::<MoveKind>::None` by the
/// validator; a valid move is either a plain diagonal step or a jump
/// capturing the piece at the midpoint square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// A one-square diagonal step.
    Step,
    /// A two-square diagonal jump capturing the piece at the given square.
    Jump(Pos),
}

impl MoveKind {
    /// Returns the captured square, if any.
    #[inline]
    pub const fn captured(self) -> Option<Pos> {
        match self {
            MoveKind::Step => None,
            MoveKind::Jump(mid) => Some(mid),
        }
    }

    /// Returns true if this move captures a piece.
    #[inline]
    pub const fn is_jump(self) -> bool {
        matches!(self, MoveKind::Jump(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: u8, col: u8) -> Pos {
        Pos::new(row, col).unwrap()
    }

    #[test]
    fn move_text_round_trip() {
        let m = Move::new(pos(2, 1), pos(3, 2));
        assert_eq!(m.to_text(), "b3c4");
        assert_eq!(Move::from_text("b3c4"), Some(m));
        assert!(Move::from_text("b3").is_none());
        assert!(Move::from_text("b3c9").is_none());
        assert!(Move::from_text("b3c4d5").is_none());
    }

    #[test]
    fn move_delta() {
        assert_eq!(Move::new(pos(2, 1), pos(3, 2)).delta(), (1, 1));
        assert_eq!(Move::new(pos(5, 4), pos(3, 2)).delta(), (-2, -2));
        assert_eq!(Move::new(pos(4, 4), pos(4, 4)).delta(), (0, 0));
    }

    #[test]
    fn kind_captured() {
        assert_eq!(MoveKind::Step.captured(), None);
        assert!(!MoveKind::Step.is_jump());
        let mid = pos(3, 2);
        assert_eq!(MoveKind::Jump(mid).captured(), Some(mid));
        assert!(MoveKind::Jump(mid).is_jump());
    }

    #[test]
    fn move_debug_display() {
        let m = Move::new(pos(2, 1), pos(4, 3));
        assert_eq!(format!("{:?}", m), "Move(b3d5)");
        assert_eq!(format!("{}", m), "b3d5");
    }
}
