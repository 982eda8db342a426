//! Square type and coordinate conversions.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board, represented as (rank, file).
///
/// Rank 0 is rank "1" and file 0 is file "a", so `Square(3, 4)` is e4.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (rank, file)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(rank: usize, file: usize) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square(rank, file))
        } else {
            None
        }
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.0
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.1
    }

    /// Get the square's index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 * 8 + self.1
    }

    /// Create a square from an index (0-63)
    #[must_use]
    pub fn from_index(idx: usize) -> Option<Self> {
        if idx < 64 {
            Some(Square(idx / 8, idx % 8))
        } else {
            None
        }
    }

    /// Step by (rank, file) deltas, returning `None` when the step leaves the board.
    #[inline]
    #[must_use]
    pub fn offset(self, d_rank: isize, d_file: isize) -> Option<Self> {
        let rank = self.0 as isize + d_rank;
        let file = self.1 as isize + d_file;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Square(rank as usize, file as usize))
        } else {
            None
        }
    }

    /// All 64 squares in index order (a1, b1, ..., h8)
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(|idx| Square(idx / 8, idx % 8))
    }

    /// File letter ('a'..='h')
    #[inline]
    #[must_use]
    pub const fn file_char(self) -> char {
        (self.1 as u8).wrapping_add(b'a') as char
    }

    /// Rank digit ('1'..='8')
    #[inline]
    #[must_use]
    pub const fn rank_char(self) -> char {
        (self.0 as u8).wrapping_add(b'1') as char
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_index().cmp(&other.as_index())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square(rank, file))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let mut chars = s.chars();
        let (Some(file_c), Some(rank_c), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let file = match file_c {
            'a'..='h' => file_c as usize - 'a' as usize,
            _ => return Err(invalid()),
        };
        let rank = match rank_c {
            '1'..='8' => rank_c as usize - '1' as usize,
            _ => return Err(invalid()),
        };

        Ok(Square(rank, file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip_all_squares() {
        for sq in Square::all() {
            let name = sq.to_string();
            assert_eq!(name.parse::<Square>().unwrap(), sq);
            assert_eq!(Square::try_from((sq.rank(), sq.file())).unwrap(), sq);
        }
        assert_eq!(Square::all().count(), 64);
    }

    #[test]
    fn test_known_names() {
        assert_eq!(Square(3, 4).to_string(), "e4");
        assert_eq!(Square(0, 0).to_string(), "a1");
        assert_eq!(Square(7, 7).to_string(), "h8");
        assert_eq!("e4".parse::<Square>().unwrap(), Square(3, 4));
    }

    #[test]
    fn test_invalid_names() {
        for bad in ["", "e", "e9", "i1", "e44", "E4", "4e"] {
            assert!(
                matches!(bad.parse::<Square>(), Err(SquareError::InvalidNotation { .. })),
                "{bad} should not parse"
            );
        }
    }

    #[test]
    fn test_out_of_bounds() {
        assert_eq!(Square::new(8, 0), None);
        assert_eq!(
            Square::try_from((0, 8)),
            Err(SquareError::FileOutOfBounds { file: 8 })
        );
        assert_eq!(
            Square::try_from((9, 0)),
            Err(SquareError::RankOutOfBounds { rank: 9 })
        );
    }

    #[test]
    fn test_offset_does_not_wrap() {
        assert_eq!(Square(0, 7).offset(0, 1), None);
        assert_eq!(Square(0, 0).offset(-1, 0), None);
        assert_eq!(Square(3, 3).offset(1, -1), Some(Square(4, 2)));
    }

    #[test]
    fn test_index_round_trip() {
        for idx in 0..64 {
            assert_eq!(Square::from_index(idx).unwrap().as_index(), idx);
        }
        assert_eq!(Square::from_index(64), None);
    }
}
