use once_cell::sync::Lazy;

use super::Square;

/// Knight offsets as (rank, file) deltas
pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
];

/// King offsets as (rank, file) deltas
pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (0, 1),
    (1, 0),
    (1, 1),
    (-1, -1),
    (0, -1),
    (-1, 0),
    (-1, 1),
    (1, -1),
];

pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (-1, 0), (0, -1)];

pub(crate) const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (0, 1),
    (1, 0),
    (-1, 0),
    (0, -1),
];

fn leaper_table(offsets: &[(isize, isize)]) -> Vec<Vec<Square>> {
    Square::all()
        .map(|sq| {
            offsets
                .iter()
                .filter_map(|&(dr, df)| sq.offset(dr, df))
                .collect()
        })
        .collect()
}

/// On-board knight destinations for each square index, in offset order
pub(crate) static KNIGHT_TARGETS: Lazy<Vec<Vec<Square>>> =
    Lazy::new(|| leaper_table(&KNIGHT_OFFSETS));

/// On-board king destinations for each square index, in offset order
pub(crate) static KING_TARGETS: Lazy<Vec<Vec<Square>>> = Lazy::new(|| leaper_table(&KING_OFFSETS));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knight_targets_corner_and_center() {
        assert_eq!(KNIGHT_TARGETS[Square(0, 0).as_index()].len(), 2);
        assert_eq!(KNIGHT_TARGETS[Square(3, 3).as_index()].len(), 8);
        assert_eq!(
            KNIGHT_TARGETS[Square(0, 0).as_index()],
            vec![Square(2, 1), Square(1, 2)]
        );
    }

    #[test]
    fn test_king_targets_never_wrap() {
        assert_eq!(KING_TARGETS[Square(0, 7).as_index()].len(), 3);
        assert_eq!(KING_TARGETS[Square(4, 4).as_index()].len(), 8);
        for targets in KING_TARGETS.iter() {
            assert!(targets.iter().all(|sq| sq.rank() < 8 && sq.file() < 8));
        }
    }
}
