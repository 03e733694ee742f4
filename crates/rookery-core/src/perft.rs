//! Perft node counting, for checking move enumeration against known totals.

use crate::board::Board;
use crate::side::Side;
use crate::status::legal_moves;

/// Count the leaf nodes of the legal move tree at `depth` plies.
///
/// Depth 0 returns 1. Castling and en passant are never generated, so totals
/// match the published figures only while neither could have occurred.
pub fn perft(board: &Board, side: Side, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }
    if depth == 1 {
        return legal_moves(board, side).count() as u64;
    }
    legal_moves(board, side)
        .map(|mv| perft(&board.apply(mv), side.flip(), depth - 1))
        .sum()
}

/// Per-move breakdown at `depth`, sorted by coordinate text.
pub fn divide(board: &Board, side: Side, depth: usize) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = legal_moves(board, side)
        .map(|mv| {
            let child = board.apply(mv);
            let count = if depth <= 1 {
                1
            } else {
                perft(&child, side.flip(), depth - 1)
            };
            (mv.to_string(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
