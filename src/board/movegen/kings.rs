use super::super::attack_tables::{BISHOP_DIRECTIONS, KING_TARGETS, KNIGHT_TARGETS, ROOK_DIRECTIONS};
use super::super::{Color, MoveTable, Piece, Position, Square};

/// Rook file and the files strictly between king and rook, queenside first
const CASTLING_PATHS: [(bool, usize, &[usize]); 2] = [(false, 0, &[1, 2, 3]), (true, 7, &[5, 6])];

const KING_FILE: usize = 4;

impl Position {
    pub(crate) fn king_targets(&self, from: Square, color: Color) -> Vec<Square> {
        self.leaper_targets(&KING_TARGETS[from.as_index()], color)
    }

    /// Adds castling entries for `color` to `table` in both directions
    /// (king to rook and rook to king).
    ///
    /// A side may castle when it still holds the right, the king sits on its
    /// original square, the rook sits on the corner and every square between
    /// them is empty and not attacked. A pawn only attacks occupied squares,
    /// so pawn diagonals never block the path. Whether the king is currently
    /// in check is left to the caller.
    pub(crate) fn add_castling_targets(&self, table: &mut MoveTable, color: Color) {
        let back = color.back_rank();
        let king_sq = Square(back, KING_FILE);
        if self.piece_at(king_sq) != Some((color, Piece::King)) {
            return;
        }

        let enemy = color.opponent();
        for (kingside, rook_file, between) in CASTLING_PATHS {
            if !self.castling_rights.has(color, kingside) {
                continue;
            }
            let rook_sq = Square(back, rook_file);
            if self.piece_at(rook_sq) != Some((color, Piece::Rook)) {
                continue;
            }
            let path_is_safe = between.iter().all(|&file| {
                let sq = Square(back, file);
                self.is_empty(sq) && !self.is_attacked_by_pieces(sq, enemy)
            });
            if path_is_safe {
                table.push(rook_sq, king_sq);
                table.push(king_sq, rook_sq);
            }
        }
    }

    /// Returns true if any piece of `attacker` could capture on `square`.
    ///
    /// Pawns attack diagonally only. Sliders are stopped by the first piece on
    /// each ray.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        self.is_attacked_by_pawn(square, attacker) || self.is_attacked_by_pieces(square, attacker)
    }

    /// Attacks on `square` by every piece of `attacker` except pawns
    fn is_attacked_by_pieces(&self, square: Square, attacker: Color) -> bool {
        let holds = |sq: &Square, piece: Piece| self.piece_at(*sq) == Some((attacker, piece));
        if KNIGHT_TARGETS[square.as_index()]
            .iter()
            .any(|sq| holds(sq, Piece::Knight))
        {
            return true;
        }
        if KING_TARGETS[square.as_index()]
            .iter()
            .any(|sq| holds(sq, Piece::King))
        {
            return true;
        }

        let ray_hits = |directions: &[(isize, isize)], slider: Piece| {
            directions.iter().any(|&dir| {
                matches!(
                    self.first_piece_along(square, dir),
                    Some((color, piece)) if color == attacker && (piece == slider || piece == Piece::Queen)
                )
            })
        };
        ray_hits(&ROOK_DIRECTIONS, Piece::Rook) || ray_hits(&BISHOP_DIRECTIONS, Piece::Bishop)
    }

    /// Returns true if the king of `color` is attacked. A side without a king
    /// is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.find_king(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opponent()))
    }
}
