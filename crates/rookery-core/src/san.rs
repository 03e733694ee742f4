//! Move notation in the short algebraic style.
//!
//! Two simplifications apply: no disambiguation is added when two pieces of one
//! kind could reach the same square, and promotions carry no `=Q` suffix.

use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Encode one played move.
///
/// Piece letter (none for pawns), then for captures the origin file for a pawn
/// and `x`, then the destination square, then `#` for mate or `+` for check.
pub fn encode_move(
    from: Square,
    to: Square,
    piece: Piece,
    is_capture: bool,
    is_check: bool,
    is_checkmate: bool,
) -> String {
    let mut out = String::with_capacity(7);

    if let Some(letter) = piece.kind().move_letter() {
        out.push(letter);
    }

    if is_capture {
        if piece.kind() == PieceKind::Pawn {
            out.push(from.file_char());
        }
        out.push('x');
    }

    out.push(to.file_char());
    out.push(to.rank_char());

    if is_checkmate {
        out.push('#');
    } else if is_check {
        out.push('+');
    }

    out
}
