//! Move generation and legality filtering.
//!
//! Pseudo-legal targets are produced per square by the piece files in this
//! module. [`Position::analyze`] adds castling, removes every move that would
//! leave the mover's king attacked and classifies the result.

mod kings;
mod knights;
mod pawns;
mod sliders;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use sliders::SliderType;

use super::{Color, Move, MoveTable, Piece, Position, Square, PROMOTION_PIECES};

/// Legal moves and status of a position for its side to move.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Analysis {
    /// Legal destinations for every square; empty for squares without a
    /// piece of the side to move
    pub legal_moves: MoveTable,
    pub king_square: Option<Square>,
    pub in_check: bool,
    pub checkmate: bool,
    pub stalemate: bool,
    pub insufficient_material: bool,
}

impl Analysis {
    /// Returns true when no legal move remains
    #[must_use]
    pub fn has_no_moves(&self) -> bool {
        self.legal_moves.is_empty()
    }
}

impl Position {
    /// Pseudo-legal destinations of the piece on `from`, ignoring checks and
    /// castling. Empty when the square is empty.
    #[must_use]
    pub fn piece_targets(&self, from: Square) -> Vec<Square> {
        let Some((color, piece)) = self.piece_at(from) else {
            return Vec::new();
        };
        match piece {
            Piece::Pawn => self.pawn_targets(from, color),
            Piece::Knight => self.knight_targets(from, color),
            Piece::Bishop => self.slider_targets(from, color, SliderType::Bishop),
            Piece::Rook => self.slider_targets(from, color, SliderType::Rook),
            Piece::Queen => self.slider_targets(from, color, SliderType::Queen),
            Piece::King => self.king_targets(from, color),
        }
    }

    /// Pseudo-legal table for `color`, including castling pairs
    #[must_use]
    pub fn pseudo_legal_moves(&self, color: Color) -> MoveTable {
        let mut table = MoveTable::new();
        for (sq, c, _) in self.pieces() {
            if c == color {
                table.set(sq, self.piece_targets(sq));
            }
        }
        self.add_castling_targets(&mut table, color);
        table
    }

    /// Computes the legal move table and terminal status for the side to move.
    ///
    /// Every pseudo-legal candidate is applied to a copy of the position and
    /// kept only if the mover's king is not attacked afterwards. Castling is
    /// dropped while the king is in check.
    #[must_use]
    pub fn analyze(&self) -> Analysis {
        let color = self.side_to_move;
        let king_square = self.find_king(color);
        let in_check = king_square.is_some_and(|sq| self.is_square_attacked(sq, color.opponent()));

        let mut legal_moves = MoveTable::new();
        for (from, to) in self.pseudo_legal_moves(color).moves() {
            if in_check && self.is_castling_move(from, to) {
                continue;
            }
            if !self.apply_move(from, to, None).is_in_check(color) {
                legal_moves.push(from, to);
            }
        }

        let no_moves = legal_moves.is_empty();
        Analysis {
            legal_moves,
            king_square,
            in_check,
            checkmate: in_check && no_moves,
            stalemate: !in_check && no_moves,
            insufficient_material: self.is_insufficient_material(),
        }
    }

    /// Legal move table for the side to move
    #[must_use]
    pub fn legal_moves(&self) -> MoveTable {
        self.analyze().legal_moves
    }

    /// Flat list of distinct legal moves.
    ///
    /// Each castling move appears once in its king-to-rook form and each
    /// promotion is expanded into the four promotion choices.
    #[must_use]
    pub fn legal_move_list(&self) -> Vec<Move> {
        let mut list = Vec::new();
        for (from, to) in self.legal_moves().moves() {
            if self.is_castling_move(from, to) && self.piece_on(from) == Some(Piece::Rook) {
                continue;
            }
            if self.is_promotion_move(from, to) {
                list.extend(
                    PROMOTION_PIECES
                        .iter()
                        .map(|&piece| Move::with_promotion(from, to, piece)),
                );
            } else {
                list.push(Move::new(from, to));
            }
        }
        list
    }

    /// Counts leaf nodes of the legal move tree to `depth`
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.legal_move_list();
        if depth == 1 {
            return moves.len() as u64;
        }
        moves
            .into_iter()
            .map(|mv| self.make_move(mv).perft(depth - 1))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position_analysis() {
        let analysis = Position::new().analyze();
        assert_eq!(analysis.legal_moves.move_count(), 20);
        assert_eq!(analysis.king_square, Some(Square(0, 4)));
        assert!(!analysis.in_check);
        assert!(!analysis.checkmate);
        assert!(!analysis.stalemate);
        assert!(!analysis.insufficient_material);
    }

    #[test]
    fn test_empty_square_has_no_targets() {
        let position = Position::new();
        assert!(position.piece_targets(Square(3, 3)).is_empty());
        assert!(position.legal_moves().get(Square(3, 3)).is_empty());
    }

    #[test]
    fn test_opponent_squares_are_empty_in_legal_table() {
        let position = Position::new();
        let legal = position.legal_moves();
        assert!(legal.get(Square(6, 4)).is_empty());
        assert!(!position.pseudo_legal_moves(Color::Black).get(Square(6, 4)).is_empty());
    }

    #[test]
    fn test_castling_listed_once() {
        let position: Position = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1".parse().unwrap();
        let legal = position.legal_moves();
        assert!(legal.contains(Square(0, 0), Square(0, 4)));
        let list = position.legal_move_list();
        assert!(list.contains(&Move::new(Square(0, 4), Square(0, 0))));
        assert!(!list.contains(&Move::new(Square(0, 0), Square(0, 4))));
        assert_eq!(list.len(), 26);
    }

    #[test]
    fn test_promotions_expand_in_list() {
        let position: Position = "4k3/P7/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        let list = position.legal_move_list();
        let promotions: Vec<_> = list
            .iter()
            .filter(|mv| mv.from() == Square(6, 0))
            .collect();
        assert_eq!(promotions.len(), 4);
        assert_eq!(promotions[0].promotion(), Some(Piece::Queen));
    }

    #[test]
    fn test_perft_shallow() {
        let position = Position::new();
        assert_eq!(position.perft(0), 1);
        assert_eq!(position.perft(1), 20);
        assert_eq!(position.perft(2), 400);
    }
}
