//! Chess rules engine: legal move generation, check and terminal-state
//! detection, and move application for standard chess.
//!
//! [`Game`] is the stateful entry point. The pure position-level API lives in
//! [`board`].

pub mod board;
pub mod game;

pub use board::{Color, Move, Piece, Position, Square};
pub use game::{DrawReason, DrawStatus, Game, GameStatus};
