//! Castling rights type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

const CASTLE_WHITE_K: u8 = 1 << 0;
const CASTLE_WHITE_Q: u8 = 1 << 1;
const CASTLE_BLACK_K: u8 = 1 << 2;
const CASTLE_BLACK_Q: u8 = 1 << 3;

/// All castling rights combined
const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// FEN letters in canonical order, paired with their bits
const FEN_ORDER: [(char, u8); 4] = [
    ('K', CASTLE_WHITE_K),
    ('Q', CASTLE_WHITE_Q),
    ('k', CASTLE_BLACK_K),
    ('q', CASTLE_BLACK_Q),
];

/// Castling rights represented as a 4-bit mask
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, kingside: bool) -> bool {
        self.0 & Self::bit_for(color, kingside) != 0
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, color: Color, kingside: bool) {
        self.0 |= Self::bit_for(color, kingside);
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, kingside: bool) {
        self.0 &= !Self::bit_for(color, kingside);
    }

    /// Remove both rights of one color
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.remove(color, true);
        self.remove(color, false);
    }

    /// Remove the right tied to a rook corner, if `square` is one
    pub fn remove_corner(&mut self, square: Square) {
        let kingside = match square.file() {
            0 => false,
            7 => true,
            _ => return,
        };
        match square.rank() {
            0 => self.remove(Color::White, kingside),
            7 => self.remove(Color::Black, kingside),
            _ => {}
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the raw bitmask value
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Create from raw bitmask value (bits above the four rights are dropped)
    #[inline]
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        CastlingRights(value & ALL_CASTLING_RIGHTS)
    }

    /// Parse the FEN castling field: "-" or a non-empty ordered subset of "KQkq".
    #[must_use]
    pub fn from_fen_field(field: &str) -> Option<Self> {
        if field == "-" {
            return Some(CastlingRights::none());
        }
        if field.is_empty() {
            return None;
        }

        let mut rights = 0u8;
        let mut next_allowed = 0;
        for c in field.chars() {
            let pos = FEN_ORDER[next_allowed..]
                .iter()
                .position(|&(letter, _)| letter == c)?;
            let idx = next_allowed + pos;
            rights |= FEN_ORDER[idx].1;
            next_allowed = idx + 1;
        }
        Some(CastlingRights(rights))
    }

    #[inline]
    const fn bit_for(color: Color, kingside: bool) -> u8 {
        match (color, kingside) {
            (Color::White, true) => CASTLE_WHITE_K,
            (Color::White, false) => CASTLE_WHITE_Q,
            (Color::Black, true) => CASTLE_BLACK_K,
            (Color::Black, false) => CASTLE_BLACK_Q,
        }
    }
}

impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        for (letter, bit) in FEN_ORDER {
            if self.0 & bit != 0 {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_and_none() {
        assert_eq!(CastlingRights::all().to_string(), "KQkq");
        assert_eq!(CastlingRights::none().to_string(), "-");
        assert!(CastlingRights::none().is_empty());
    }

    #[test]
    fn test_remove_color_keeps_other_side() {
        let mut rights = CastlingRights::all();
        rights.remove_color(Color::White);
        assert_eq!(rights.to_string(), "kq");
        rights.remove(Color::Black, false);
        assert_eq!(rights.to_string(), "k");
    }

    #[test]
    fn test_remove_corner() {
        let mut rights = CastlingRights::all();
        rights.remove_corner(Square(0, 7));
        assert!(!rights.has(Color::White, true));
        assert!(rights.has(Color::White, false));
        rights.remove_corner(Square(7, 0));
        assert!(!rights.has(Color::Black, false));
        rights.remove_corner(Square(3, 0));
        rights.remove_corner(Square(7, 4));
        assert_eq!(rights.to_string(), "Qk");
    }

    #[test]
    fn test_parse_fen_field() {
        for ok in ["-", "KQkq", "K", "Qk", "kq", "q", "KQ", "Kq"] {
            let rights = CastlingRights::from_fen_field(ok).unwrap();
            assert_eq!(rights.to_string(), ok);
        }
        for bad in ["", "QK", "KK", "x", "kQ", "K-", "--"] {
            assert_eq!(CastlingRights::from_fen_field(bad), None, "{bad}");
        }
    }

    #[test]
    fn test_from_u8_masks_extra_bits() {
        assert_eq!(CastlingRights::from_u8(0xFF), CastlingRights::all());
    }
}
