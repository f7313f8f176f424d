//! Computer opponent for checkers.
//!
//! The policy is deliberately simple: enumerate every legal move for the
//! bot's color, prefer captures, and pick uniformly at random within the
//! preferred set. A chosen move is committed through
//! [`Game::try_move`](checkers_engine::Game::try_move) exactly like a
//! human move.

use checkers_core::{Color, Move, MoveKind};
use checkers_engine::rules::RuleSet;
use checkers_engine::{Board, SimplifiedDraughts};
use rand::seq::IndexedRandom;
use rand::Rng;

/// A random-move opponent that prefers captures.
#[derive(Debug, Clone, Copy)]
pub struct RandomBot {
    color: Color,
}

impl RandomBot {
    /// Creates a bot playing the given color.
    pub const fn new(color: Color) -> Self {
        RandomBot { color }
    }

    /// Returns the color this bot plays.
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Chooses a move for the bot's color on the given board.
    ///
    /// Moves are enumerated under the bot's own color regardless of
    /// whose turn it nominally is; the caller decides when to invoke the
    /// bot. If any capture is available, the choice is uniform among
    /// captures; otherwise uniform among all legal moves. Returns `None`
    /// when the bot has no legal move at all, in which case no move is
    /// made and no result is declared.
    pub fn choose<R: Rng>(&self, board: &Board, rng: &mut R) -> Option<(Move, MoveKind)> {
        let moves = SimplifiedDraughts.moves_for(board, self.color);

        let jumps: Vec<&(Move, MoveKind)> =
            moves.iter().filter(|(_, kind)| kind.is_jump()).collect();
        if let Some(&&choice) = jumps.choose(rng) {
            return Some(choice);
        }
        moves.choose(rng).copied()
    }
}
