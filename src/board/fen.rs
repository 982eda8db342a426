use std::str::FromStr;

use super::error::FenError;
use super::{CastlingRights, Color, Piece, Position, Square};

/// FEN of the standard starting position
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Position {
    /// Parse a board position from FEN notation.
    ///
    /// The string must have exactly six fields separated by single spaces.
    /// No partial position is produced on failure.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split(' ').collect();
        let [placement, side, castling, en_passant, halfmove, fullmove] = parts[..] else {
            return Err(FenError::WrongFieldCount { found: parts.len() });
        };

        let mut position = Position::empty();
        parse_placement(&mut position, placement)?;

        position.side_to_move = match side {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        position.castling_rights =
            CastlingRights::from_fen_field(castling).ok_or_else(|| FenError::InvalidCastling {
                found: castling.to_string(),
            })?;

        position.en_passant_target = parse_en_passant(en_passant)?;
        position.halfmove_clock = parse_counter(halfmove)?;
        position.fullmove_number = parse_counter(fullmove)?;

        Ok(position)
    }

    /// Convert the position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            self.side_to_move.to_fen_char(),
            self.castling_rights,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::try_from_fen(s)
    }
}

fn parse_placement(position: &mut Position, placement: &str) -> Result<(), FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    // The first rank listed is rank 8.
    for (idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - idx;
        let rank_number = rank + 1;
        let mut file = 0usize;
        let mut previous_was_digit = false;

        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                if previous_was_digit {
                    return Err(FenError::ConsecutiveDigits { rank: rank_number });
                }
                previous_was_digit = true;
                file += skip as usize;
                continue;
            }

            let piece = Piece::from_char(c).ok_or(FenError::InvalidSymbol {
                rank: rank_number,
                char: c,
            })?;
            previous_was_digit = false;
            if file >= 8 {
                return Err(FenError::WrongFileCount {
                    rank: rank_number,
                    files: file + 1,
                });
            }
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            position.set_piece(Square(rank, file), color, piece);
            file += 1;
        }

        if file != 8 {
            return Err(FenError::WrongFileCount {
                rank: rank_number,
                files: file,
            });
        }
    }

    Ok(())
}

fn parse_en_passant(field: &str) -> Result<Option<Square>, FenError> {
    if field == "-" {
        return Ok(None);
    }
    match field.parse::<Square>() {
        Ok(sq) if sq.rank() == 2 || sq.rank() == 5 => Ok(Some(sq)),
        _ => Err(FenError::InvalidEnPassant {
            found: field.to_string(),
        }),
    }
}

fn parse_counter(field: &str) -> Result<u64, FenError> {
    let invalid = || FenError::InvalidMoveCounter {
        found: field.to_string(),
    };
    if field.is_empty() || !field.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    field.parse().map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_round_trip() {
        let board = Position::try_from_fen(START_FEN).unwrap();
        assert_eq!(board.to_fen(), START_FEN);
        assert_eq!(board, Position::new());
    }

    #[test]
    fn test_fen_round_trip_assorted() {
        for fen in [
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
            "4k3/8/8/8/8/8/8/4K2R w Kq - 12 40",
        ] {
            let board: Position = fen.parse().unwrap();
            assert_eq!(board.to_fen(), fen);
        }
    }

    #[test]
    fn test_fen_black_to_move() {
        let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
        let board = Position::try_from_fen(fen).unwrap();
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.en_passant_target(), Some(Square(2, 4)));
    }

    #[test]
    fn test_fen_counters() {
        let board = Position::try_from_fen("8/8/8/8/8/8/8/K1k5 w - - 42 17").unwrap();
        assert_eq!(board.halfmove_clock(), 42);
        assert_eq!(board.fullmove_number(), 17);
    }

    #[test]
    fn test_fen_counters_past_u32() {
        let fen = "8/8/8/8/8/8/8/K1k5 w - - 0 4294967296";
        let board = Position::try_from_fen(fen).unwrap();
        assert_eq!(board.fullmove_number(), 4_294_967_296);
        assert_eq!(board.to_fen(), fen);
    }

    #[test]
    fn test_fen_error_field_count() {
        let result = Position::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w");
        assert_eq!(result, Err(FenError::WrongFieldCount { found: 2 }));
        let result =
            Position::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 x");
        assert_eq!(result, Err(FenError::WrongFieldCount { found: 7 }));
        let result =
            Position::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR  w KQkq - 0 1");
        assert!(result.is_err());
    }

    #[test]
    fn test_fen_error_rank_count() {
        let result = Position::try_from_fen("rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(result, Err(FenError::WrongRankCount { found: 7 }));
    }

    #[test]
    fn test_fen_error_invalid_symbol() {
        let result =
            Position::try_from_fen("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(result, Err(FenError::InvalidSymbol { rank: 7, char: 'x' }));
        let result =
            Position::try_from_fen("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidSymbol { char: '9', .. })));
        let result =
            Position::try_from_fen("rnbqkbnr/pppppppp/08/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidSymbol { char: '0', .. })));
    }

    #[test]
    fn test_fen_error_consecutive_digits() {
        let result =
            Position::try_from_fen("rnbqkbnr/pppppppp/44/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(result, Err(FenError::ConsecutiveDigits { rank: 6 }));
    }

    #[test]
    fn test_fen_error_file_count() {
        let result =
            Position::try_from_fen("rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(result, Err(FenError::WrongFileCount { rank: 7, files: 7 }));
        let result =
            Position::try_from_fen("rnbqkbnr/ppppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(result, Err(FenError::WrongFileCount { rank: 7, files: 9 }));
        let result =
            Position::try_from_fen("rnbqkbnr/pppppppp/7p1/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(result, Err(FenError::WrongFileCount { rank: 6, files: 9 }));
    }

    #[test]
    fn test_fen_error_invalid_side_to_move() {
        let result =
            Position::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidSideToMove { .. })));
        let result =
            Position::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR W KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidSideToMove { .. })));
    }

    #[test]
    fn test_fen_error_invalid_castling() {
        for castling in ["XQkq", "QK", "KQkqK", ""] {
            let fen = format!("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w {castling} - 0 1");
            assert!(
                matches!(
                    Position::try_from_fen(&fen),
                    Err(FenError::InvalidCastling { .. })
                ),
                "castling field '{castling}' should be rejected"
            );
        }
    }

    #[test]
    fn test_fen_partial_castling() {
        let board =
            Position::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w Kq - 0 1")
                .unwrap();
        let rights = board.castling_rights();
        assert!(rights.has(Color::White, true));
        assert!(!rights.has(Color::White, false));
        assert!(!rights.has(Color::Black, true));
        assert!(rights.has(Color::Black, false));
    }

    #[test]
    fn test_fen_error_invalid_en_passant() {
        for ep in ["z9", "e4", "e", "e33"] {
            let fen = format!("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq {ep} 0 1");
            assert!(
                matches!(
                    Position::try_from_fen(&fen),
                    Err(FenError::InvalidEnPassant { .. })
                ),
                "en passant field '{ep}' should be rejected"
            );
        }
    }

    #[test]
    fn test_fen_error_invalid_counters() {
        for (half, full) in [("-1", "1"), ("x", "1"), ("0", "1.5"), ("0", "+1")] {
            let fen = format!("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - {half} {full}");
            assert!(
                matches!(
                    Position::try_from_fen(&fen),
                    Err(FenError::InvalidMoveCounter { .. })
                ),
                "counters '{half} {full}' should be rejected"
            );
        }
    }

    #[test]
    fn test_from_str_trait() {
        let board: Position = START_FEN.parse().unwrap();
        assert_eq!(board.side_to_move(), Color::White);
    }
}
