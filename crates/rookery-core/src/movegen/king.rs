//! King steps. No castling.

use crate::square::Square;

/// One square in any direction. `from == to` is rejected by the caller.
pub(super) fn king_shape(from: Square, to: Square) -> bool {
    from.row().abs_diff(to.row()) <= 1 && from.col().abs_diff(to.col()) <= 1
}
