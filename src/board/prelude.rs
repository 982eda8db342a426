//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let game = Game::new();
//! assert_eq!(game.side_to_move(), Color::White);
//! ```

pub use super::{
    Analysis, CastlingRights, Color, FenError, Move, MoveError, MoveParseError, MoveTable, Piece,
    Position, PositionBuilder, Square, SquareError,
};
pub use crate::game::{DrawReason, DrawStatus, Game, GameStatus};
