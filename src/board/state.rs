use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{CastlingRights, Color, Piece, Square};

/// Contents of one board square
pub(crate) type Cell = Option<(Color, Piece)>;

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// A chess position: the 8x8 grid plus side to move, castling rights,
/// en passant target and move counters.
///
/// Positions are plain values. Applying a move returns a new position and
/// never touches the one it was applied to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub(crate) squares: [[Cell; 8]; 8], // [rank][file]
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u64,
    pub(crate) fullmove_number: u64,
}

impl Position {
    /// The standard starting position
    #[must_use]
    pub fn new() -> Self {
        let mut position = Position::empty();
        for (file, piece) in BACK_RANK.iter().enumerate() {
            position.set_piece(Square(0, file), Color::White, *piece);
            position.set_piece(Square(7, file), Color::Black, *piece);
            position.set_piece(Square(1, file), Color::White, Piece::Pawn);
            position.set_piece(Square(6, file), Color::Black, Piece::Pawn);
        }
        position.castling_rights = CastlingRights::all();
        position
    }

    /// An empty board, White to move, no rights, counters at 0 and 1
    #[must_use]
    pub fn empty() -> Self {
        Position {
            squares: [[None; 8]; 8],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u64 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u64 {
        self.fullmove_number
    }

    /// Color and kind of the piece on `sq`, if any
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.rank()][sq.file()]
    }

    /// Get just the piece kind on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.rank()][sq.file()] = Some((color, piece));
    }

    pub(crate) fn clear_square(&mut self, sq: Square) {
        self.squares[sq.rank()][sq.file()] = None;
    }

    /// Every occupied square with its piece, in square index order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(move |sq| {
            self.piece_at(sq)
                .map(|(color, piece)| (sq, color, piece))
        })
    }

    /// Square of the first king of `color` in index order
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|&(_, c, piece)| c == color && piece == Piece::King)
            .map(|(sq, _, _)| sq)
    }

    /// Copy of this position with the other side to move
    #[must_use]
    pub fn with_side_flipped(&self) -> Self {
        let mut next = self.clone();
        next.side_to_move = self.side_to_move.opponent();
        next
    }

    /// Returns true when neither side has mating material.
    ///
    /// Kings are ignored. Any pawn, rook or queen means there is material.
    /// Otherwise the position is drawn when each side has at most one minor
    /// piece, or when one side has exactly two knights and the other side has
    /// no minor pieces.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let mut knights = [0u32; 2];
        let mut bishops = [0u32; 2];

        for (_, color, piece) in self.pieces() {
            match piece {
                Piece::King => {}
                Piece::Knight => knights[color.index()] += 1,
                Piece::Bishop => bishops[color.index()] += 1,
                _ => return false,
            }
        }

        let white = Color::White.index();
        let black = Color::Black.index();
        let minors = [
            knights[white] + bishops[white],
            knights[black] + bishops[black],
        ];

        if minors[white] <= 1 && minors[black] <= 1 {
            return true;
        }

        let two_knights_only = |side: usize| knights[side] == 2 && bishops[side] == 0;
        (two_knights_only(white) && minors[black] == 0)
            || (two_knights_only(black) && minors[white] == 0)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for rank in (0..8).rev() {
            write!(f, "{} |", rank + 1)?;
            for file in 0..8 {
                let ch = self
                    .piece_at(Square(rank, file))
                    .map_or('.', |(color, piece)| piece.to_fen_char(color));
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
            writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        }
        write!(f, "    a   b   c   d   e   f   g   h")
    }
}
