use super::super::attack_tables::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use super::super::{Color, Piece, Position, Square};

/// Type of sliding piece for move generation
#[derive(Clone, Copy, Debug)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    fn directions(self) -> &'static [(isize, isize)] {
        match self {
            SliderType::Bishop => &BISHOP_DIRECTIONS,
            SliderType::Rook => &ROOK_DIRECTIONS,
            SliderType::Queen => &QUEEN_DIRECTIONS,
        }
    }
}

impl Position {
    /// Walks each ray until the board edge, an own piece (excluded) or an
    /// enemy piece (included).
    pub(crate) fn slider_targets(&self, from: Square, color: Color, slider: SliderType) -> Vec<Square> {
        let mut targets = Vec::new();
        for &(dr, df) in slider.directions() {
            let mut current = from;
            while let Some(next) = current.offset(dr, df) {
                match self.color_on(next) {
                    None => targets.push(next),
                    Some(c) if c == color => break,
                    Some(_) => {
                        targets.push(next);
                        break;
                    }
                }
                current = next;
            }
        }
        targets
    }

    /// First piece met walking from `from` (exclusive) along a direction
    pub(crate) fn first_piece_along(
        &self,
        from: Square,
        (dr, df): (isize, isize),
    ) -> Option<(Color, Piece)> {
        let mut current = from;
        while let Some(next) = current.offset(dr, df) {
            if let Some(found) = self.piece_at(next) {
                return Some(found);
            }
            current = next;
        }
        None
    }
}
