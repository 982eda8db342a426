//! Move application.
//!
//! [`Position::apply_move`] is pure: it returns the next position and leaves
//! `self` untouched. It does not flip the side to move, so the generator can
//! use it to test candidate moves. [`Position::make_move`] is a full turn.

use super::{Color, Move, Piece, Position, Square};

impl Position {
    /// Returns the position after moving the piece on `from` to `to`.
    ///
    /// Handles en passant captures, castling (encoded as king and rook of one
    /// color swapping onto each other's square), castling-right updates,
    /// promotion and the move counters. `promotion` defaults to a queen and is
    /// ignored unless the move promotes. The side to move is unchanged.
    #[must_use]
    pub fn apply_move(&self, from: Square, to: Square, promotion: Option<Piece>) -> Position {
        let mut next = self.clone();
        let Some((color, piece)) = self.piece_at(from) else {
            return next;
        };

        let is_capture = self.color_on(to) == Some(color.opponent());
        let mut captured_en_passant = false;

        if piece == Piece::Pawn && Some(to) == self.en_passant_target {
            if let Some(victim) = to.offset(-color.pawn_direction(), 0) {
                if next.piece_at(victim) == Some((color.opponent(), Piece::Pawn)) {
                    next.clear_square(victim);
                    captured_en_passant = true;
                }
            }
        }

        next.en_passant_target = if piece == Piece::Pawn && from.rank().abs_diff(to.rank()) == 2 {
            Square::new((from.rank() + to.rank()) / 2, from.file())
        } else {
            None
        };

        if self.is_castling_move(from, to) {
            next.castle(color, from, to);
        } else {
            next.update_castling_rights(piece, color, from, to);
            let placed = if self.is_promotion_move(from, to) {
                promotion
                    .filter(|p| p.is_promotion_choice())
                    .unwrap_or(Piece::Queen)
            } else {
                piece
            };
            next.clear_square(from);
            next.set_piece(to, color, placed);
        }

        if piece == Piece::Pawn || is_capture || captured_en_passant {
            next.halfmove_clock = 0;
        } else {
            next.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if color == Color::Black {
            next.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        next
    }

    /// Applies `mv` and hands the turn to the other side
    #[must_use]
    pub fn make_move(&self, mv: Move) -> Position {
        let mut next = self.apply_move(mv.from(), mv.to(), mv.promotion());
        next.side_to_move = self.side_to_move.opponent();
        next
    }

    /// Returns true if the piece on `from` is a pawn and `to` is on its
    /// promotion rank
    #[must_use]
    pub fn is_promotion_move(&self, from: Square, to: Square) -> bool {
        matches!(
            self.piece_at(from),
            Some((color, Piece::Pawn)) if to.rank() == color.pawn_promotion_rank()
        )
    }

    /// Returns true if `from` and `to` hold a king and a rook of one color with
    /// one of them on a corner file
    #[must_use]
    pub fn is_castling_move(&self, from: Square, to: Square) -> bool {
        if !matches!(from.file(), 0 | 7) && !matches!(to.file(), 0 | 7) {
            return false;
        }
        match (self.piece_at(from), self.piece_at(to)) {
            (Some((mover, a)), Some((owner, b))) if mover == owner => matches!(
                (a, b),
                (Piece::King, Piece::Rook) | (Piece::Rook, Piece::King)
            ),
            _ => false,
        }
    }

    fn castle(&mut self, color: Color, from: Square, to: Square) {
        let back = color.back_rank();
        let kingside = from.file() == 7 || to.file() == 7;
        let (king_file, rook_file) = if kingside { (6, 5) } else { (2, 3) };

        self.clear_square(from);
        self.clear_square(to);
        self.set_piece(Square(back, king_file), color, Piece::King);
        self.set_piece(Square(back, rook_file), color, Piece::Rook);
        self.castling_rights.remove_color(color);
    }

    fn update_castling_rights(&mut self, piece: Piece, color: Color, from: Square, to: Square) {
        if piece == Piece::King {
            self.castling_rights.remove_color(color);
        }
        self.castling_rights.remove_corner(from);
        self.castling_rights.remove_corner(to);
    }
}
