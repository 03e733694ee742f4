//! Pawn pushes, double pushes from the start row, and diagonal captures.

use crate::board::Board;
use crate::side::Side;
use crate::square::Square;

/// Pawn movement for `side`. No en passant.
pub(super) fn pawn_shape(board: &Board, from: Square, to: Square, side: Side) -> bool {
    let dir = side.forward();
    let drow = to.row() as i8 - from.row() as i8;
    let dcol = to.col() as i8 - from.col() as i8;

    if dcol == 0 {
        if drow == dir {
            return board.is_empty(to);
        }
        if drow == 2 * dir && from.row() == side.pawn_start_row() {
            let Some(middle) = from.offset(dir, 0) else {
                return false;
            };
            return board.is_empty(middle) && board.is_empty(to);
        }
        return false;
    }

    // Own pieces on `to` were already rejected, so any occupant is an enemy.
    dcol.abs() == 1 && drow == dir && !board.is_empty(to)
}
