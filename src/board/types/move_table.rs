//! Legal-move table: destination lists for every square on the board.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// Destination lists indexed by origin square.
///
/// Every one of the 64 squares has an entry; squares without a piece of the
/// side to move map to an empty list. Destinations keep generation order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveTable {
    targets: Vec<Vec<Square>>,
}

impl MoveTable {
    /// Create a table with an empty list for every square
    #[must_use]
    pub fn new() -> Self {
        MoveTable {
            targets: vec![Vec::new(); 64],
        }
    }

    pub(crate) fn push(&mut self, from: Square, to: Square) {
        self.targets[from.as_index()].push(to);
    }

    pub(crate) fn set(&mut self, from: Square, targets: Vec<Square>) {
        self.targets[from.as_index()] = targets;
    }

    /// Destinations reachable from `from`; empty for off-board squares
    #[must_use]
    pub fn get(&self, from: Square) -> &[Square] {
        match Square::new(from.rank(), from.file()) {
            Some(sq) => &self.targets[sq.as_index()],
            None => &[],
        }
    }

    /// Returns true if `to` is listed for `from`
    #[must_use]
    pub fn contains(&self, from: Square, to: Square) -> bool {
        self.get(from).contains(&to)
    }

    /// Iterate over all 64 squares in index order with their destinations
    pub fn iter(&self) -> impl Iterator<Item = (Square, &[Square])> + '_ {
        Square::all().map(move |sq| (sq, self.get(sq)))
    }

    /// Iterate over every (from, to) pair
    pub fn moves(&self) -> impl Iterator<Item = (Square, Square)> + '_ {
        self.iter()
            .flat_map(|(from, targets)| targets.iter().map(move |&to| (from, to)))
    }

    /// Total number of (from, to) entries across all squares
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.targets.iter().map(Vec::len).sum()
    }

    /// Returns true if no square has any destination
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.iter().all(Vec::is_empty)
    }
}

impl Default for MoveTable {
    fn default() -> Self {
        MoveTable::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_covers_all_squares() {
        let table = MoveTable::new();
        assert_eq!(table.iter().count(), 64);
        assert!(table.is_empty());
        assert_eq!(table.move_count(), 0);
    }

    #[test]
    fn test_push_keeps_order() {
        let mut table = MoveTable::new();
        let e2 = Square(1, 4);
        table.push(e2, Square(2, 4));
        table.push(e2, Square(3, 4));
        assert_eq!(table.get(e2), &[Square(2, 4), Square(3, 4)]);
        assert!(table.contains(e2, Square(3, 4)));
        assert!(!table.contains(Square(3, 4), e2));
        assert_eq!(table.move_count(), 2);
        assert_eq!(
            table.moves().collect::<Vec<_>>(),
            vec![(e2, Square(2, 4)), (e2, Square(3, 4))]
        );
    }

    #[test]
    fn test_off_board_square_has_no_destinations() {
        let mut table = MoveTable::new();
        table.push(Square(0, 0), Square(1, 0));
        assert!(table.get(Square(8, 0)).is_empty());
        assert!(table.get(Square(0, 8)).is_empty());
        assert!(!table.contains(Square(8, 0), Square(1, 0)));
    }
}
