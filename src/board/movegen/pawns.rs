use super::super::{Color, Piece, Position, Square};

impl Position {
    /// Pushes, double push from the start rank, diagonal captures, then en passant.
    pub(crate) fn pawn_targets(&self, from: Square, color: Color) -> Vec<Square> {
        let mut targets = Vec::new();
        let dir = color.pawn_direction();

        let Some(forward) = from.offset(dir, 0) else {
            return targets;
        };

        if self.is_empty(forward) {
            targets.push(forward);
            if from.rank() == color.pawn_start_rank() {
                if let Some(double) = forward.offset(dir, 0) {
                    if self.is_empty(double) {
                        targets.push(double);
                    }
                }
            }
        }

        for df in [1, -1] {
            if let Some(target) = from.offset(dir, df) {
                if self.color_on(target) == Some(color.opponent()) {
                    targets.push(target);
                }
            }
        }

        if let Some(ep) = self.en_passant_target {
            if from.rank() == color.en_passant_rank()
                && ep.rank() == forward.rank()
                && ep.file().abs_diff(from.file()) == 1
                && self.is_empty(ep)
            {
                targets.push(ep);
            }
        }

        targets
    }

    /// Returns true if a pawn of `attacker` attacks `target` diagonally.
    pub(crate) fn is_attacked_by_pawn(&self, target: Square, attacker: Color) -> bool {
        let back = -attacker.pawn_direction();
        [1, -1].into_iter().any(|df| {
            target
                .offset(back, df)
                .is_some_and(|sq| self.piece_at(sq) == Some((attacker, Piece::Pawn)))
        })
    }
}
