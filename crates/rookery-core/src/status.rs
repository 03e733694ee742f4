//! Check, checkmate and stalemate detection.
//!
//! Built directly on [`is_legal_shape`]: an attack on the king is any legal-shape
//! move an enemy piece could make onto the king's square, and a legal move is a
//! legal-shape move whose resulting board leaves the mover out of check.

use std::fmt;

use crate::board::Board;
use crate::chess_move::Move;
use crate::movegen::{candidate_moves, is_legal_shape};
use crate::side::Side;

/// Where a side to move stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Normal,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    /// Checkmate and stalemate end the game.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameStatus::Normal => "normal",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        f.write_str(s)
    }
}

/// Return `true` if `side`'s king is attacked by any opposing piece.
///
/// A board without a king for `side` is never in check.
pub fn is_in_check(board: &Board, side: Side) -> bool {
    let Some(king) = board.king_square(side) else {
        return false;
    };
    board
        .pieces(side.flip())
        .any(|(from, piece)| is_legal_shape(board, from, king, piece))
}

/// Lazily enumerate the moves of `side` that do not leave its own king in check.
pub fn legal_moves(board: &Board, side: Side) -> impl Iterator<Item = Move> + Clone + '_ {
    candidate_moves(board, side).filter(move |&mv| !is_in_check(&board.apply(mv), side))
}

/// Return `true` if `side` has at least one legal move. Stops at the first one found.
pub fn has_any_legal_move(board: &Board, side: Side) -> bool {
    legal_moves(board, side).next().is_some()
}

/// In check with no way out.
pub fn is_checkmate(board: &Board, side: Side) -> bool {
    is_in_check(board, side) && !has_any_legal_move(board, side)
}

/// Not in check, but no legal move either.
pub fn is_stalemate(board: &Board, side: Side) -> bool {
    !is_in_check(board, side) && !has_any_legal_move(board, side)
}

/// Classify the position for `side` to move.
pub fn status(board: &Board, side: Side) -> GameStatus {
    let in_check = is_in_check(board, side);
    let can_move = has_any_legal_move(board, side);
    match (in_check, can_move) {
        (true, true) => GameStatus::Check,
        (true, false) => GameStatus::Checkmate,
        (false, true) => GameStatus::Normal,
        (false, false) => GameStatus::Stalemate,
    }
}
