//! Rook and bishop rays with path clearance. The queen uses both.

use crate::board::Board;
use crate::square::Square;

/// Same row or same column, nothing strictly between.
pub(super) fn rook_shape(board: &Board, from: Square, to: Square) -> bool {
    (from.row() == to.row() || from.col() == to.col()) && path_clear(board, from, to)
}

/// Same diagonal, nothing strictly between.
pub(super) fn bishop_shape(board: &Board, from: Square, to: Square) -> bool {
    from != to
        && from.row().abs_diff(to.row()) == from.col().abs_diff(to.col())
        && path_clear(board, from, to)
}

/// Walk from `from` toward `to` one step at a time, failing on any occupied
/// square before `to`. The endpoint itself is not inspected.
fn path_clear(board: &Board, from: Square, to: Square) -> bool {
    let drow = (to.row() as i8 - from.row() as i8).signum();
    let dcol = (to.col() as i8 - from.col() as i8).signum();

    let mut current = from;
    while let Some(next) = current.offset(drow, dcol) {
        if next == to {
            return true;
        }
        if !board.is_empty(next) {
            return false;
        }
        current = next;
    }
    false
}
