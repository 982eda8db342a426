//! Core chess types.
//!
//! This module contains the fundamental types used throughout the rules engine:
//! - `Piece` and `Color` - chess piece kinds and colors
//! - `Square` - (rank, file) board coordinates and their algebraic names
//! - `Move` - a move candidate with optional promotion
//! - `MoveTable` - per-square destination lists
//! - `CastlingRights` - castling state

mod castling;
mod move_table;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use move_table::MoveTable;
pub use moves::Move;
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use piece::PROMOTION_PIECES;
