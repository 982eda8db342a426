//! Fluent construction of positions without going through notation.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, Piece, PositionBuilder, Square};
//!
//! let position = PositionBuilder::new()
//!     .piece(Square(0, 4), Color::White, Piece::King)
//!     .piece(Square(7, 4), Color::Black, Piece::King)
//!     .piece(Square(6, 0), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(position.to_fen(), "4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
//! ```

use super::{CastlingRights, Color, Piece, Position, Square};

/// Builds a [`Position`] square by square.
///
/// Later placements on the same square replace earlier ones. Nothing is
/// validated; a position without kings is accepted.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    position: Position,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Empty board, White to move, no castling rights
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            position: Position::empty(),
        }
    }

    /// Standard initial position with full castling rights
    #[must_use]
    pub fn starting_position() -> Self {
        PositionBuilder {
            position: Position::new(),
        }
    }

    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.position.set_piece(square, color, piece);
        self
    }

    /// Remove whatever stands on `square`
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.position.clear_square(square);
        self
    }

    #[must_use]
    pub fn side_to_move(mut self, color: Color) -> Self {
        self.position.side_to_move = color;
        self
    }

    /// Replace all castling rights
    #[must_use]
    pub fn castling(mut self, rights: CastlingRights) -> Self {
        self.position.castling_rights = rights;
        self
    }

    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.position.castling_rights.set(color, true);
        self
    }

    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.position.castling_rights.set(color, false);
        self
    }

    #[must_use]
    pub fn no_castling_rights(mut self) -> Self {
        self.position.castling_rights = CastlingRights::none();
        self
    }

    #[must_use]
    pub fn en_passant(mut self, target: Square) -> Self {
        self.position.en_passant_target = Some(target);
        self
    }

    #[must_use]
    pub fn halfmove_clock(mut self, clock: u64) -> Self {
        self.position.halfmove_clock = clock;
        self
    }

    #[must_use]
    pub fn fullmove_number(mut self, number: u64) -> Self {
        self.position.fullmove_number = number;
        self
    }

    #[must_use]
    pub fn build(self) -> Position {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position() {
        let built = PositionBuilder::starting_position().build();
        assert_eq!(built, Position::new());
        assert_eq!(built.to_fen(), super::super::START_FEN);
    }

    #[test]
    fn test_kings_only() {
        let position = PositionBuilder::new()
            .piece(Square(0, 4), Color::White, Piece::King)
            .piece(Square(7, 4), Color::Black, Piece::King)
            .build();

        assert_eq!(position.pieces().count(), 2);
        assert!(position.piece_at(Square(0, 0)).is_none());
        assert_eq!(position.to_fen(), "4k3/8/8/8/8/8/8/4K3 w - - 0 1");
    }

    #[test]
    fn test_castling_rights() {
        let position = PositionBuilder::starting_position()
            .no_castling_rights()
            .castle_kingside(Color::White)
            .castle_queenside(Color::Black)
            .build();

        let rights = position.castling_rights();
        assert!(rights.has(Color::White, true));
        assert!(!rights.has(Color::White, false));
        assert!(!rights.has(Color::Black, true));
        assert!(rights.has(Color::Black, false));
    }

    #[test]
    fn test_side_en_passant_and_counters() {
        let position = PositionBuilder::starting_position()
            .clear(Square(6, 3))
            .piece(Square(4, 3), Color::Black, Piece::Pawn)
            .side_to_move(Color::Black)
            .en_passant(Square(5, 3))
            .halfmove_clock(0)
            .fullmove_number(2)
            .build();

        assert_eq!(
            position.to_fen(),
            "rnbqkbnr/ppp1pppp/8/3p4/8/8/PPPPPPPP/RNBQKBNR b KQkq d6 0 2"
        );
    }

    #[test]
    fn test_later_piece_replaces_earlier() {
        let position = PositionBuilder::starting_position()
            .piece(Square(0, 0), Color::Black, Piece::Queen)
            .build();
        assert_eq!(
            position.piece_at(Square(0, 0)),
            Some((Color::Black, Piece::Queen))
        );
    }
}
