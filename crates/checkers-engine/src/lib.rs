//! Simplified checkers rules engine.
//!
//! This crate provides:
//! - [`Board`] - 8x8 grid of optional pieces with the standard placement
//! - [`RuleSet`] - trait seam for the rule variant, implemented by
//!   [`SimplifiedDraughts`]
//! - [`Game`] - full game state: board, turn, selection, winner, scores
//!
//! The rule set is deliberately simplified and preserved as such:
//! single-step captures only, no forced captures or capture chains, and
//! no flying kings. A side with no legal moves is not declared lost; the
//! game simply waits for input that validates.
//!
//! # Example
//!
//! ```
//! use checkers_engine::{Game, Activation};
//! use checkers_core::Pos;
//!
//! let mut game = Game::new();
//! // Two-click move: select b3, then step to c4.
//! game.activate(Pos::from_algebraic("b3").unwrap());
//! let outcome = game.activate(Pos::from_algebraic("c4").unwrap());
//! assert!(matches!(outcome, Activation::Moved(_)));
//! ```

mod board;
mod game;
pub mod rules;

pub use board::Board;
pub use game::{Activation, Game, GameError, Scores};
pub use rules::{RuleSet, SimplifiedDraughts};
