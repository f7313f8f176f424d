//! Full game state management.
//!
//! [`Game`] is the authoritative state aggregate exchanged between all
//! interaction modes: board, side to move, pending selection, winner,
//! and capture scores. Every committed move, whether from a human click,
//! the computer opponent, or a remote peer, routes through
//! [`Game::try_move`] so scores, crowning, and turn alternation stay
//! consistent.

use crate::rules::{RuleSet, SimplifiedDraughts};
use crate::Board;
use checkers_core::{Color, Move, MoveKind, NotationError, Pos, StateNotation};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Capture counts per player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub green: u32,
    pub white: u32,
}

impl Scores {
    /// Returns the score for one color.
    pub fn get(&self, color: Color) -> u32 {
        match color {
            Color::Green => self.green,
            Color::White => self.white,
        }
    }

    /// Adds one capture for the given color.
    pub fn add(&mut self, color: Color) {
        match color {
            Color::Green => self.green += 1,
            Color::White => self.white += 1,
        }
    }
}

/// Error type for move attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The move is not legal in the current state.
    IllegalMove(Move),
    /// The game has already ended.
    GameOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::IllegalMove(m) => write!(f, "illegal move: {}", m),
            GameError::GameOver => write!(f, "game has already ended"),
        }
    }
}

impl std::error::Error for GameError {}

/// Outcome of a cell activation (a single click or tap).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Nothing happened: no selection and the cell holds no friendly
    /// piece, or the game is already over.
    Ignored,
    /// The cell was selected as the move source.
    Selected(Pos),
    /// A move was committed.
    Moved(MoveKind),
    /// The attempted move was illegal; the selection was cleared and the
    /// piece must be re-selected.
    Rejected,
}

/// A complete checkers game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    turn: Color,
    selected: Option<Pos>,
    winner: Option<Color>,
    scores: Scores,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game: standard placement, Green to move, scores 0/0.
    pub fn new() -> Self {
        Game {
            board: SimplifiedDraughts.initial_board(),
            turn: Color::Green,
            selected: None,
            winner: None,
            scores: Scores::default(),
        }
    }

    /// Parses a game from state notation (see [`StateNotation`]).
    ///
    /// The winner is derived from the parsed board, so a one-sided
    /// position loads as already finished.
    pub fn from_notation(s: &str) -> Result<Self, NotationError> {
        let state = StateNotation::parse(s)?;
        let board = Board::from_cells(state.cells);
        let winner = SimplifiedDraughts.winner(&board);
        Ok(Game {
            board,
            turn: state.turn,
            selected: None,
            winner,
            scores: Scores {
                green: state.green_score,
                white: state.white_score,
            },
        })
    }

    /// Returns the state notation for this game.
    pub fn to_notation(&self) -> String {
        StateNotation {
            cells: *self.board.cells(),
            turn: self.turn,
            green_score: self.scores.green,
            white_score: self.scores.white,
        }
        .to_string()
    }

    /// Replaces the whole state with a fresh game.
    pub fn reset(&mut self) {
        *self = Game::new();
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Returns the pending selection, if any.
    pub fn selected(&self) -> Option<Pos> {
        self.selected
    }

    /// Returns the winner, if the game has ended.
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// Returns true if the game has ended.
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Returns the capture scores.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Returns every legal move for the side to move.
    pub fn legal_moves(&self) -> Vec<(Move, MoveKind)> {
        SimplifiedDraughts.moves_for(&self.board, self.turn)
    }

    /// Attempts to commit a move for the side to move.
    ///
    /// This is the sole mutating entry point for committed moves. On
    /// success, in order: the piece is relocated (capturing on a jump,
    /// with the mover's score incremented by one), crowned if it reached
    /// its baseline, the winner is recomputed, and if the game is not
    /// over the turn passes to the other side. Once a winner is set the
    /// turn never advances again.
    pub fn try_move(&mut self, from: Pos, to: Pos) -> Result<MoveKind, GameError> {
        if self.winner.is_some() {
            return Err(GameError::GameOver);
        }

        let mov = Move::new(from, to);
        let kind = SimplifiedDraughts
            .validate(&self.board, self.turn, from, to)
            .ok_or(GameError::IllegalMove(mov))?;

        SimplifiedDraughts.apply(&mut self.board, mov, kind);
        if kind.is_jump() {
            self.scores.add(self.turn);
        }
        self.winner = SimplifiedDraughts.winner(&self.board);
        if self.winner.is_none() {
            self.turn = self.turn.opposite();
        }
        Ok(kind)
    }

    /// Handles a single cell activation, the only input event the core
    /// receives.
    ///
    /// With no pending selection, activating a cell holding a piece of
    /// the side to move selects it; anything else is ignored. With a
    /// pending selection, the activation attempts a move to the cell.
    /// The selection is cleared whether or not the move is legal, so an
    /// illegal attempt requires re-selecting, even when the activated
    /// cell holds another friendly piece. After the game ends every
    /// activation is ignored.
    pub fn activate(&mut self, pos: Pos) -> Activation {
        if self.winner.is_some() {
            return Activation::Ignored;
        }

        match self.selected.take() {
            None => match self.board.get(pos) {
                Some(p) if p.color == self.turn => {
                    self.selected = Some(pos);
                    Activation::Selected(pos)
                }
                _ => Activation::Ignored,
            },
            Some(from) => match self.try_move(from, pos) {
                Ok(kind) => Activation::Moved(kind),
                Err(_) => Activation::Rejected,
            },
        }
    }
}
