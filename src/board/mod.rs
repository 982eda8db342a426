//! Chess position model and rules.
//!
//! A [`Position`] is a plain 8x8 grid of optional `(Color, Piece)` cells plus
//! side to move, castling rights, en passant target and move counters.
//! Move generation, legality filtering and move application are all pure
//! functions over positions.
//!
//! # Example
//! ```
//! use chess_rules::board::{Position, Square};
//!
//! let position = Position::new();
//! let analysis = position.analyze();
//! assert_eq!(analysis.legal_moves.move_count(), 20);
//! assert!(analysis.legal_moves.contains(Square(1, 4), Square(3, 4)));
//! ```

mod apply;
mod attack_tables;
mod builder;
mod error;
mod fen;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{FenError, MoveError, MoveParseError, SquareError};
pub use fen::START_FEN;
pub use movegen::Analysis;
pub use state::Position;
pub use types::{CastlingRights, Color, Move, MoveTable, Piece, Square};

pub(crate) use types::PROMOTION_PIECES;
