//! Position notation: encoding a board and side to move, and reading it back.
//!
//! The engine tracks neither castling rights, en passant targets nor move
//! counters. The encoded suffix is therefore the constant `KQkq - 0 1`, and
//! those fields are only checked for shape when parsing.

use crate::board::Board;
use crate::error::FenError;
use crate::piece::Piece;
use crate::side::Side;
use crate::square::Square;

/// Position text of the standard initial setup with White to move.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Castling field written for every position. Placeholder, not derived from history.
pub const CASTLING_PLACEHOLDER: &str = "KQkq";
/// En passant field written for every position. Placeholder.
pub const EN_PASSANT_PLACEHOLDER: &str = "-";
/// Half-move and full-move counters written for every position. Placeholder.
pub const COUNTERS_PLACEHOLDER: &str = "0 1";

/// Encode the piece placement field alone: ranks from row 0 to row 7,
/// runs of empty squares as digits, ranks joined by `/`.
pub fn encode_placement(board: &Board) -> String {
    let mut out = String::with_capacity(71);
    let mut empty_run = 0u8;

    for sq in Square::all() {
        match board.piece_at(sq) {
            Some(piece) => {
                if empty_run > 0 {
                    out.push(char::from(b'0' + empty_run));
                    empty_run = 0;
                }
                out.push(piece.fen_char());
            }
            None => empty_run += 1,
        }

        if sq.col() == 7 {
            if empty_run > 0 {
                out.push(char::from(b'0' + empty_run));
                empty_run = 0;
            }
            if sq.row() < 7 {
                out.push('/');
            }
        }
    }

    out
}

/// Encode `board` with `side_to_move` as a full six-field position string.
pub fn encode_position(board: &Board, side_to_move: Side) -> String {
    format!(
        "{} {} {} {} {}",
        encode_placement(board),
        side_to_move,
        CASTLING_PLACEHOLDER,
        EN_PASSANT_PLACEHOLDER,
        COUNTERS_PLACEHOLDER
    )
}

/// Parse a six-field position string into a board and the side to move.
///
/// King count is not validated; the rules treat a missing king as never in check.
pub fn parse_position(fen: &str) -> Result<(Board, Side), FenError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(FenError::WrongFieldCount {
            found: fields.len(),
        });
    }

    let board = parse_placement(fields[0])?;

    let side = match fields[1] {
        "w" => Side::White,
        "b" => Side::Black,
        other => {
            return Err(FenError::InvalidSide {
                found: other.to_string(),
            });
        }
    };

    let castling = fields[2];
    let castling_ok = castling == "-"
        || (!castling.is_empty() && castling.chars().all(|c| "KQkq".contains(c)));
    if !castling_ok {
        return Err(FenError::InvalidCastling {
            found: castling.to_string(),
        });
    }

    if fields[3] != "-" && Square::from_algebraic(fields[3]).is_none() {
        return Err(FenError::InvalidEnPassant {
            found: fields[3].to_string(),
        });
    }

    for (field, value) in [("halfmove clock", fields[4]), ("fullmove number", fields[5])] {
        if value.parse::<u16>().is_err() {
            return Err(FenError::InvalidMoveCounter {
                field,
                found: value.to_string(),
            });
        }
    }

    Ok((board, side))
}

fn parse_placement(placement: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut board = Board::empty();
    for (rank_index, rank_str) in ranks.iter().enumerate() {
        let row = rank_index as u8;
        let mut col: usize = 0;

        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                if !(1..=8).contains(&digit) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                col += digit as usize;
                continue;
            }

            let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
            let sq = u8::try_from(col)
                .ok()
                .and_then(|col| Square::new(row, col).ok())
                .ok_or(FenError::BadRankLength {
                    rank_index,
                    length: col + 1,
                })?;
            board = board.with_piece(sq, Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err(FenError::BadRankLength {
                rank_index,
                length: col,
            });
        }
    }

    Ok(board)
}
