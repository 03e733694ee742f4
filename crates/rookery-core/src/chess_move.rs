//! Candidate moves: origin, destination and an optional promotion kind.

use std::fmt;

use crate::error::MoveParseError;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A move from one square to another.
///
/// `promotion` only has meaning for a pawn landing on the far rank; the board
/// transition ignores it for any other piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl Move {
    /// Create a move without promotion.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    /// Create a promoting move.
    #[inline]
    pub const fn with_promotion(from: Square, to: Square, kind: PieceKind) -> Move {
        Move {
            from,
            to,
            promotion: Some(kind),
        }
    }

    /// Parse coordinate text: `e2e4`, or `e7e8q` with a promotion letter.
    pub fn from_coord(text: &str) -> Result<Move, MoveParseError> {
        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return Err(MoveParseError::BadLength {
                text: text.to_string(),
            });
        }

        let bad_square = || MoveParseError::BadSquare {
            text: text.to_string(),
        };
        let from = Square::from_algebraic(&text[0..2]).ok_or_else(bad_square)?;
        let to = Square::from_algebraic(&text[2..4]).ok_or_else(bad_square)?;

        let promotion = match text[4..].chars().next() {
            None => None,
            Some(c) => {
                let kind = PieceKind::from_fen_char(c)
                    .filter(|k| k.is_promotion_target())
                    .ok_or(MoveParseError::BadPromotion { character: c })?;
                Some(kind)
            }
        };

        Ok(Move {
            from,
            to,
            promotion,
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.fen_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::Move;
    use crate::error::MoveParseError;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn parse_plain_move() {
        let mv = Move::from_coord("e2e4").unwrap();
        assert_eq!(mv, Move::new(Square::E2, Square::E4));
        assert_eq!(mv.to_string(), "e2e4");
    }

    #[test]
    fn parse_promotion() {
        let mv = Move::from_coord("a7a8n").unwrap();
        assert_eq!(
            mv,
            Move::with_promotion(Square::A7, Square::A8, PieceKind::Knight)
        );
        assert_eq!(mv.to_string(), "a7a8n");
        assert!(Move::from_coord("a7a8Q").is_ok());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            Move::from_coord("e2"),
            Err(MoveParseError::BadLength { .. })
        ));
        assert!(matches!(
            Move::from_coord("z2e4"),
            Err(MoveParseError::BadSquare { .. })
        ));
        assert!(matches!(
            Move::from_coord("e7e8k"),
            Err(MoveParseError::BadPromotion { character: 'k' })
        ));
        assert!(matches!(
            Move::from_coord("e7e8p"),
            Err(MoveParseError::BadPromotion { .. })
        ));
        assert!(Move::from_coord("é2e4").is_err());
    }

    #[test]
    fn debug_shows_coordinates() {
        assert_eq!(format!("{:?}", Move::new(Square::G1, Square::F3)), "Move(g1f3)");
    }
}
