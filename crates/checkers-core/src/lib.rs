//! Core types for checkers.
//!
//! This crate provides the fundamental types used across the checkers engine:
//! - [`Color`] and [`Piece`] for piece representation
//! - [`Pos`] for board coordinates
//! - [`Move`] and [`MoveKind`] for move representation
//! - Board notation parsing and serialization

mod color;
mod mov;
mod notation;
mod piece;
mod pos;

pub use color::Color;
pub use mov::{Move, MoveKind};
pub use notation::{
    parse_placement, placement_to_string, Cells, NotationError, StateNotation, START_PLACEMENT,
};
pub use piece::Piece;
pub use pos::Pos;
