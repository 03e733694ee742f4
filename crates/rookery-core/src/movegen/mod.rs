//! Move-shape validation and candidate move enumeration.
//!
//! Everything here is geometric: a move passes when the piece can travel that
//! way on the given board. Whether it leaves the mover's own king attacked is
//! decided one layer up, in [`crate::status`].

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::side::Side;
use crate::square::Square;

use self::king::king_shape;
use self::knights::knight_shape;
use self::pawns::pawn_shape;
use self::sliders::{bishop_shape, rook_shape};

/// Return `true` if `piece` standing on `from` may move to `to` on `board`.
///
/// The move is refused outright when `from == to` or when `to` holds a piece of
/// `piece`'s own side. `piece` is taken as given; it does not have to match
/// what actually stands on `from`.
pub fn is_legal_shape(board: &Board, from: Square, to: Square, piece: Piece) -> bool {
    if from == to {
        return false;
    }
    if board.piece_at(to).is_some_and(|target| target.side() == piece.side()) {
        return false;
    }

    match piece.kind() {
        PieceKind::Pawn => pawn_shape(board, from, to, piece.side()),
        PieceKind::Knight => knight_shape(from, to),
        PieceKind::Bishop => bishop_shape(board, from, to),
        PieceKind::Rook => rook_shape(board, from, to),
        PieceKind::Queen => rook_shape(board, from, to) || bishop_shape(board, from, to),
        PieceKind::King => king_shape(from, to),
    }
}

/// Lazily enumerate every legal-shape move for `side`.
///
/// Origins are visited in board order and, for each, every destination square
/// is tried. A pawn move onto its promotion row is expanded into one move per
/// promotion kind. Callers can stop at the first hit; nothing is materialized.
pub fn candidate_moves(board: &Board, side: Side) -> impl Iterator<Item = Move> + Clone + '_ {
    board.pieces(side).flat_map(move |(from, piece)| {
        Square::all()
            .filter(move |&to| is_legal_shape(board, from, to, piece))
            .flat_map(move |to| expand_promotions(piece, from, to))
    })
}

/// Yield `from -> to`, or its four promotion variants for a pawn reaching the far rank.
fn expand_promotions(
    piece: Piece,
    from: Square,
    to: Square,
) -> impl Iterator<Item = Move> + Clone {
    let promotes = piece.kind() == PieceKind::Pawn && to.row() == piece.side().promotion_row();
    let plain = (!promotes).then(|| Move::new(from, to));
    let promoted = PieceKind::PROMOTIONS
        .into_iter()
        .filter(move |_| promotes)
        .map(move |kind| Move::with_promotion(from, to, kind));
    plain.into_iter().chain(promoted)
}
