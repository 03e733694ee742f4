//! Error types for coordinates, position text, move text and game transitions.

use crate::chess_move::Move;
use crate::square::Square;
use crate::status::GameStatus;

/// Errors from building board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A row or column lies outside 0..=7.
    #[error("coordinate ({row}, {col}) is off the board")]
    OutOfRange {
        /// Requested row.
        row: u8,
        /// Requested column.
        col: u8,
    },
}

/// Errors that occur when parsing a position string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The string does not have exactly 6 space-separated fields.
    #[error("expected 6 position fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The placement section does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index, which is also the board row.
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The side-to-move field is not "w" or "b".
    #[error("invalid side to move: \"{found}\"")]
    InvalidSide {
        /// The invalid field.
        found: String,
    },
    /// The castling field is not "-" or made of `KQkq` letters.
    #[error("invalid castling field: \"{found}\"")]
    InvalidCastling {
        /// The invalid field.
        found: String,
    },
    /// The en passant field is not "-" or an algebraic square.
    #[error("invalid en passant field: \"{found}\"")]
    InvalidEnPassant {
        /// The invalid field.
        found: String,
    },
    /// A move counter is not a number.
    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter {
        /// "halfmove clock" or "fullmove number".
        field: &'static str,
        /// The invalid field.
        found: String,
    },
}

/// Errors from parsing coordinate move text such as `e2e4` or `e7e8q`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveParseError {
    #[error("move text \"{text}\" must be 4 or 5 characters")]
    BadLength { text: String },
    #[error("move text \"{text}\" names a square off the board")]
    BadSquare { text: String },
    #[error("'{character}' is not a promotion piece")]
    BadPromotion { character: char },
}

/// Reasons a game refuses a move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The game already ended.
    #[error("game is over ({status})")]
    GameOver { status: GameStatus },
    /// The origin square is empty.
    #[error("no piece on {square}")]
    NoPiece { square: Square },
    /// The origin square holds the opponent's piece.
    #[error("piece on {square} belongs to the opponent")]
    WrongSide { square: Square },
    /// The piece cannot move that way.
    #[error("{mv} is not a legal move")]
    IllegalMove { mv: Move },
    /// A pawn reached the far rank without a promotion kind.
    #[error("{mv} needs a promotion piece")]
    PromotionRequired { mv: Move },
    /// The promotion kind is missing where required or present where not allowed.
    #[error("{mv} has an invalid promotion")]
    InvalidPromotion { mv: Move },
    /// The move would leave the mover's king attacked.
    #[error("{mv} leaves the king in check")]
    LeavesKingInCheck { mv: Move },
}
