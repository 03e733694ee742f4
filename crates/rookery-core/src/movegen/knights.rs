//! Knight jumps.

use crate::square::Square;

/// A (2, 1) or (1, 2) jump. Nothing in between matters.
pub(super) fn knight_shape(from: Square, to: Square) -> bool {
    let drow = from.row().abs_diff(to.row());
    let dcol = from.col().abs_diff(to.col());
    matches!((drow, dcol), (2, 1) | (1, 2))
}
