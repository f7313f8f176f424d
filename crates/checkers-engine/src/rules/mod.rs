//! Rule set abstraction.
//!
//! This module provides the [`RuleSet`] trait which separates the rule
//! variant from the game-state plumbing. The only implementation is
//! [`SimplifiedDraughts`]; the seam exists so that the validator stays a
//! pure function of (board, acting color, move) and can be exercised
//! independently of whose turn it nominally is.

mod simplified;

pub use simplified::SimplifiedDraughts;

use crate::Board;
use checkers_core::{Color, Move, MoveKind, Pos};

/// Trait for implementing checkers rule variants.
///
/// # Example
///
/// ```
/// use checkers_engine::{Board, SimplifiedDraughts};
/// use checkers_engine::rules::RuleSet;
/// use checkers_core::Color;
///
/// let board = SimplifiedDraughts.initial_board();
/// let moves = SimplifiedDraughts.moves_for(&board, Color::Green);
/// assert_eq!(moves.len(), 7);
/// ```
pub trait RuleSet {
    /// Returns the initial board for this variant.
    fn initial_board(&self) -> Board;

    /// Validates a move for the given acting color.
    ///
    /// Returns `None` for an illegal move, [`MoveKind::Step`] for a legal
    /// plain step, or [`MoveKind::Jump`] carrying the captured square.
    /// Pure: the acting color is explicit, so callers may probe moves for
    /// either side regardless of whose turn it is.
    fn validate(&self, board: &Board, mover: Color, from: Pos, to: Pos) -> Option<MoveKind>;

    /// Enumerates every legal move for the given color.
    fn moves_for(&self, board: &Board, color: Color) -> Vec<(Move, MoveKind)>;

    /// Returns the winner derived from piece counts, if the game is over.
    fn winner(&self, board: &Board) -> Option<Color>;

    /// Applies a validated move to the board: relocation, capture
    /// removal, and crowning. Returns true if the piece was promoted.
    ///
    /// The move must have come from [`validate`](RuleSet::validate);
    /// applying an unvalidated move leaves the board in an unspecified
    /// state. Scores and turn alternation are handled by
    /// [`Game`](crate::Game).
    fn apply(&self, board: &mut Board, mov: Move, kind: MoveKind) -> bool;
}
