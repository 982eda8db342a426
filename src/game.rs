//! Game orchestrator.
//!
//! [`Game`] owns the current [`Position`] together with its cached
//! [`Analysis`]. Every accepted move replaces both; a rejected move changes
//! nothing.
//!
//! # Example
//! ```
//! use chess_rules::{Game, GameStatus, Square};
//!
//! let mut game = Game::new();
//! game.apply_uci("f2f3").unwrap();
//! game.apply_uci("e7e5").unwrap();
//! game.apply_uci("g2g4").unwrap();
//! game.apply_uci("d8h4").unwrap();
//! assert!(game.is_checkmate());
//! assert!(matches!(game.status(), GameStatus::Checkmate { .. }));
//! assert!(game.apply_move(Square(0, 4), Square(1, 5), None).is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::board::{
    Analysis, Color, FenError, Move, MoveError, MoveParseError, MoveTable, Piece, Position, Square,
};

/// Why a game is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrawReason {
    Stalemate,
    InsufficientMaterial,
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawReason::Stalemate => write!(f, "Stalemate"),
            DrawReason::InsufficientMaterial => write!(f, "Insufficient Material"),
        }
    }
}

/// Result of [`Game::is_draw`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawStatus {
    pub drawn: bool,
    pub reason: Option<DrawReason>,
}

/// Overall state of a game, recomputed after every move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    Checkmate { winner: Color },
    Stalemate,
    Draw(DrawReason),
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Active => write!(f, "Active"),
            GameStatus::Checkmate { winner } => write!(f, "Checkmate, {winner} wins"),
            GameStatus::Stalemate => write!(f, "Stalemate"),
            GameStatus::Draw(reason) => write!(f, "Draw ({reason})"),
        }
    }
}

/// A game in progress: the current position and its legal moves.
#[derive(Clone, Debug)]
pub struct Game {
    position: Position,
    analysis: Analysis,
}

impl Game {
    /// Game from the standard starting position
    #[must_use]
    pub fn new() -> Self {
        Game::from_position(Position::new())
    }

    /// Game from a FEN record.
    ///
    /// # Errors
    /// Returns the first validation failure; no game is created.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        match Position::try_from_fen(fen) {
            Ok(position) => Ok(Game::from_position(position)),
            Err(err) => {
                #[cfg(feature = "logging")]
                log::warn!("Rejected FEN '{fen}': {err}");
                Err(err)
            }
        }
    }

    #[must_use]
    pub fn from_position(position: Position) -> Self {
        let analysis = position.analyze();
        Game { position, analysis }
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[must_use]
    pub fn analysis(&self) -> &Analysis {
        &self.analysis
    }

    /// Legal destinations for every square of the side to move
    #[must_use]
    pub fn legal_moves(&self) -> &MoveTable {
        &self.analysis.legal_moves
    }

    /// Legal moves as a flat list, one entry per promotion choice
    #[must_use]
    pub fn legal_move_list(&self) -> Vec<Move> {
        self.position.legal_move_list()
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    /// Current position in FEN
    #[must_use]
    pub fn to_fen(&self) -> String {
        self.position.to_fen()
    }

    /// Every occupied square with its piece
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        self.position.pieces()
    }

    #[must_use]
    pub fn is_promotion_move(&self, from: Square, to: Square) -> bool {
        self.position.is_promotion_move(from, to)
    }

    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.analysis.in_check
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.analysis.checkmate
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.analysis.stalemate
    }

    /// Draw state; stalemate is reported ahead of insufficient material
    #[must_use]
    pub fn is_draw(&self) -> DrawStatus {
        let reason = if self.analysis.stalemate {
            Some(DrawReason::Stalemate)
        } else if self.analysis.insufficient_material {
            Some(DrawReason::InsufficientMaterial)
        } else {
            None
        };
        DrawStatus {
            drawn: reason.is_some(),
            reason,
        }
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.analysis.checkmate {
            GameStatus::Checkmate {
                winner: self.side_to_move().opponent(),
            }
        } else if self.analysis.stalemate {
            GameStatus::Stalemate
        } else if self.analysis.insufficient_material {
            GameStatus::Draw(DrawReason::InsufficientMaterial)
        } else {
            GameStatus::Active
        }
    }

    /// Plays `from` to `to` for the side to move.
    ///
    /// `promotion` picks the piece for a promoting pawn and defaults to a
    /// queen. Castling is entered as the king moving onto its own rook (or
    /// the rook onto its king).
    ///
    /// # Errors
    /// [`MoveError::IllegalMove`] if `to` is not a legal destination of
    /// `from`, or if a promotion to a pawn or king is requested. The game is
    /// left unchanged.
    pub fn apply_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<(), MoveError> {
        let legal = self.analysis.legal_moves.contains(from, to)
            && !(self.position.is_promotion_move(from, to)
                && promotion.is_some_and(|piece| !piece.is_promotion_choice()));

        if !legal {
            #[cfg(feature = "logging")]
            log::debug!("Illegal move {from}{to} in {}", self.position.to_fen());
            return Err(MoveError::IllegalMove { from, to });
        }

        let mut next = self.position.apply_move(from, to, promotion);
        next.side_to_move = self.position.side_to_move().opponent();
        self.analysis = next.analyze();
        self.position = next;

        #[cfg(feature = "logging")]
        {
            log::debug!("Applied {from}{to}, now {}", self.position.to_fen());
            let status = self.status();
            if status != GameStatus::Active {
                log::info!("Game over: {status}");
            }
        }

        Ok(())
    }

    /// Parses a move such as `"e2e4"` or `"e7e8n"` and applies it.
    ///
    /// # Errors
    /// A [`MoveParseError`] for malformed text or an illegal move.
    pub fn apply_uci(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        let mv: Move = notation.parse()?;
        self.apply_move(mv.from(), mv.to(), mv.promotion())?;
        Ok(mv)
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl FromStr for Game {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Game::from_fen(s)
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.position)?;
        write!(f, "{} to move, {}", self.side_to_move(), self.status())
    }
}
