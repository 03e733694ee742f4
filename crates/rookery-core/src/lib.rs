//! Chess rules core: board snapshots, move-shape validation, check and mate
//! detection, and position/move notation.

mod board;
mod chess_move;
mod error;
mod fen;
mod game;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod san;
mod side;
mod square;
mod status;

pub use board::{Board, PrettyBoard};
pub use chess_move::Move;
pub use error::{BoardError, FenError, MoveError, MoveParseError};
pub use fen::{STARTING_FEN, encode_placement, encode_position, parse_position};
pub use game::{Game, Outcome, PlayedMove};
pub use movegen::{candidate_moves, is_legal_shape};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use san::encode_move;
pub use side::Side;
pub use square::Square;
pub use status::{
    GameStatus, has_any_legal_move, is_checkmate, is_in_check, is_stalemate, legal_moves, status,
};
