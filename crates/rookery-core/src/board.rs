//! The board: an 8x8 grid of optional pieces.

use std::fmt;

use crate::chess_move::Move;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::side::Side;
use crate::square::Square;

/// Back-rank order from the a-file to the h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An immutable board snapshot.
///
/// No material or king bookkeeping is cached: every derived fact is read
/// straight off the grid. Transitions return a new `Board`, so older snapshots
/// stay valid for history and undo.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// A board with no pieces.
    pub const fn empty() -> Board {
        Board {
            squares: [None; Square::COUNT],
        }
    }

    /// The standard initial setup.
    pub fn starting_position() -> Board {
        let mut squares = [None; Square::COUNT];
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            squares[col] = Some(Piece::new(kind, Side::Black));
            squares[8 + col] = Some(Piece::BLACK_PAWN);
            squares[48 + col] = Some(Piece::WHITE_PAWN);
            squares[56 + col] = Some(Piece::new(kind, Side::White));
        }
        Board { squares }
    }

    /// Return the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Return `true` if nothing stands on `sq`.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    /// Iterate over the squares holding a piece of `side`, in board order.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + Clone + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some(piece) if piece.side() == side => Some((sq, piece)),
            _ => None,
        })
    }

    /// Return the square of `side`'s king, or `None` if it has no king.
    ///
    /// A board is expected to hold one king per side; with more than one, the
    /// first in board order is returned.
    pub fn king_square(&self, side: Side) -> Option<Square> {
        self.pieces(side)
            .find(|(_, piece)| piece.kind() == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Return a copy with `sq` set to `piece`.
    #[must_use]
    pub fn with_piece(&self, sq: Square, piece: Option<Piece>) -> Board {
        let mut board = *self;
        board.squares[sq.index()] = piece;
        board
    }

    /// Apply a move and return the resulting board. `self` is not modified.
    ///
    /// The piece on `mv.from` lands on `mv.to`, replaced by the promotion kind
    /// when the move is a pawn promotion, and `mv.from` is cleared. Legality is
    /// not checked here. An empty origin yields an unchanged copy.
    #[must_use]
    pub fn apply(&self, mv: Move) -> Board {
        let mut board = *self;
        let Some(piece) = board.squares[mv.from.index()].take() else {
            return board;
        };
        let landed = match mv.promotion {
            Some(kind) if piece.kind() == PieceKind::Pawn => piece.with_kind(kind),
            _ => piece,
        };
        board.squares[mv.to.index()] = Some(landed);
        board
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", crate::fen::encode_placement(self))
    }
}

/// Wrapper for printing a board as an 8x8 grid, rank 8 at the top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sq in Square::all() {
            if sq.col() == 0 {
                write!(f, "{}  ", sq.rank_char())?;
            }
            let c = self.0.piece_at(sq).map_or('.', Piece::fen_char);
            if sq.col() < 7 {
                write!(f, "{c} ")?;
            } else {
                writeln!(f, "{c}")?;
            }
        }
        write!(f, "   a b c d e f g h")
    }
}
