use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::{Color, Position, Square};

impl Position {
    pub(crate) fn knight_targets(&self, from: Square, color: Color) -> Vec<Square> {
        self.leaper_targets(&KNIGHT_TARGETS[from.as_index()], color)
    }

    /// Table destinations that do not hold a piece of `color`
    pub(crate) fn leaper_targets(&self, table: &[Square], color: Color) -> Vec<Square> {
        table
            .iter()
            .copied()
            .filter(|&to| self.color_on(to) != Some(color))
            .collect()
    }
}
