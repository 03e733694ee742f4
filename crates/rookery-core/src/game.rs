//! The game record: board, side to move and move history, replaced on every move.

use tracing::{debug, trace};

use crate::board::Board;
use crate::chess_move::Move;
use crate::error::{FenError, MoveError};
use crate::fen::{encode_position, parse_position};
use crate::movegen::is_legal_shape;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::san::encode_move;
use crate::side::Side;
use crate::status::{self, GameStatus, is_in_check};

/// What a move did, derived from the boards before and after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Outcome {
    pub is_capture: bool,
    pub puts_opponent_in_check: bool,
    pub is_checkmate: bool,
    pub is_stalemate: bool,
}

impl Outcome {
    /// Evaluate `mv` played on `before`, producing `after`, with `opponent` to move next.
    pub fn evaluate(before: &Board, mv: Move, after: &Board, opponent: Side) -> Outcome {
        let next = status::status(after, opponent);
        Outcome {
            is_capture: before.piece_at(mv.to).is_some(),
            puts_opponent_in_check: matches!(next, GameStatus::Check | GameStatus::Checkmate),
            is_checkmate: next == GameStatus::Checkmate,
            is_stalemate: next == GameStatus::Stalemate,
        }
    }
}

/// One entry of the move history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedMove {
    /// The move as played, promotion included.
    pub mv: Move,
    /// The piece that moved, before any promotion.
    pub piece: Piece,
    /// The board the move was played on.
    pub board_before: Board,
    /// Move notation, e.g. `Nf3` or `exd5+`.
    pub notation: String,
    pub outcome: Outcome,
}

/// An immutable game state. [`Game::play`] returns a new record; the old one
/// stays usable, which is all undo needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    side_to_move: Side,
    history: Vec<PlayedMove>,
}

impl Game {
    /// The standard initial setup with White to move.
    pub fn new() -> Game {
        Game::from_board(Board::starting_position(), Side::White)
    }

    /// Start from an arbitrary board.
    pub fn from_board(board: Board, side_to_move: Side) -> Game {
        Game {
            board,
            side_to_move,
            history: Vec::new(),
        }
    }

    /// Start from position text.
    pub fn from_fen(fen: &str) -> Result<Game, FenError> {
        let (board, side) = parse_position(fen)?;
        Ok(Game::from_board(board, side))
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Every move played so far, oldest first.
    #[inline]
    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    /// The most recent move, if any.
    pub fn last_move(&self) -> Option<&PlayedMove> {
        self.history.last()
    }

    /// Status of the side to move.
    pub fn status(&self) -> GameStatus {
        status::status(&self.board, self.side_to_move)
    }

    /// Position text of the current board.
    pub fn fen(&self) -> String {
        encode_position(&self.board, self.side_to_move)
    }

    /// Legal moves for the side to move.
    pub fn legal_moves(&self) -> impl Iterator<Item = Move> + '_ {
        status::legal_moves(&self.board, self.side_to_move)
    }

    /// Play `mv` for the side to move and return the resulting game.
    ///
    /// The move must start on one of the mover's pieces, have a legal shape,
    /// carry a promotion kind exactly when a pawn reaches the far rank, and not
    /// leave the mover's king attacked. Nothing is accepted once the game is over.
    pub fn play(&self, mv: Move) -> Result<Game, MoveError> {
        let current = self.status();
        if current.is_terminal() {
            return Err(MoveError::GameOver { status: current });
        }

        let piece = self
            .board
            .piece_at(mv.from)
            .ok_or(MoveError::NoPiece { square: mv.from })?;
        if piece.side() != self.side_to_move {
            return Err(MoveError::WrongSide { square: mv.from });
        }
        if !is_legal_shape(&self.board, mv.from, mv.to, piece) {
            return Err(MoveError::IllegalMove { mv });
        }

        let promotes =
            piece.kind() == PieceKind::Pawn && mv.to.row() == piece.side().promotion_row();
        match (promotes, mv.promotion) {
            (true, None) => return Err(MoveError::PromotionRequired { mv }),
            (true, Some(kind)) if !kind.is_promotion_target() => {
                return Err(MoveError::InvalidPromotion { mv });
            }
            (false, Some(_)) => return Err(MoveError::InvalidPromotion { mv }),
            _ => {}
        }

        let after = self.board.apply(mv);
        if is_in_check(&after, self.side_to_move) {
            return Err(MoveError::LeavesKingInCheck { mv });
        }

        let opponent = self.side_to_move.flip();
        let outcome = Outcome::evaluate(&self.board, mv, &after, opponent);
        let notation = encode_move(
            mv.from,
            mv.to,
            piece,
            outcome.is_capture,
            outcome.puts_opponent_in_check,
            outcome.is_checkmate,
        );
        trace!(%mv, %notation, "move played");
        if outcome.is_checkmate || outcome.is_stalemate {
            debug!(%notation, ?outcome, "game over");
        }

        let mut history = Vec::with_capacity(self.history.len() + 1);
        history.extend_from_slice(&self.history);
        history.push(PlayedMove {
            mv,
            piece,
            board_before: self.board,
            notation,
            outcome,
        });

        Ok(Game {
            board: after,
            side_to_move: opponent,
            history,
        })
    }

    /// The game as it was before the last move, or `None` at the start.
    pub fn undo(&self) -> Option<Game> {
        let (last, earlier) = self.history.split_last()?;
        Some(Game {
            board: last.board_before,
            side_to_move: last.piece.side(),
            history: earlier.to_vec(),
        })
    }

    /// Numbered move text, e.g. `1. e4 e5 2. Qh5`.
    ///
    /// A game that started with Black to move opens with `1... `.
    pub fn move_list(&self) -> String {
        let offset = match self.history.first() {
            Some(first) if first.piece.side() == Side::Black => 1,
            _ => 0,
        };

        let mut parts = Vec::with_capacity(self.history.len());
        for (i, played) in self.history.iter().enumerate() {
            let ply = i + offset;
            let number = ply / 2 + 1;
            if ply % 2 == 0 {
                parts.push(format!("{number}. {}", played.notation));
            } else if i == 0 {
                parts.push(format!("{number}... {}", played.notation));
            } else {
                parts.push(played.notation.clone());
            }
        }
        parts.join(" ")
    }

    /// Status line for display, or `None` when play simply continues.
    pub fn status_message(&self) -> Option<String> {
        match self.status() {
            GameStatus::Checkmate => Some(format!(
                "Checkmate! {} wins!",
                self.side_to_move.flip().name()
            )),
            GameStatus::Stalemate => Some("Stalemate! Game is drawn.".to_string()),
            GameStatus::Check => Some(format!("{} is in check!", self.side_to_move.name())),
            GameStatus::Normal => None,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::Square;

    fn play_all(game: Game, moves: &[&str]) -> Game {
        moves.iter().fold(game, |game, text| {
            let mv = Move::from_coord(text).unwrap();
            game.play(mv).unwrap_or_else(|e| panic!("{text}: {e}"))
        })
    }

    #[test]
    fn opening_move_records_notation() {
        let game = Game::new().play(Move::new(Square::E2, Square::E4)).unwrap();
        assert_eq!(game.side_to_move(), Side::Black);
        let last = game.last_move().unwrap();
        assert_eq!(last.notation, "e4");
        assert_eq!(last.piece, Piece::WHITE_PAWN);
        assert!(!last.outcome.is_capture);
        assert_eq!(
            game.fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1"
        );
    }

    #[test]
    fn previous_record_is_untouched() {
        let start = Game::new();
        let next = start.play(Move::new(Square::G1, Square::F3)).unwrap();
        assert_eq!(start, Game::new());
        assert_ne!(start, next);
        assert!(start.history().is_empty());
        assert_eq!(next.history().len(), 1);
    }

    #[test]
    fn refusals() {
        let game = Game::new();
        assert_eq!(
            game.play(Move::new(Square::E4, Square::E5)),
            Err(MoveError::NoPiece { square: Square::E4 })
        );
        assert_eq!(
            game.play(Move::new(Square::E7, Square::E5)),
            Err(MoveError::WrongSide { square: Square::E7 })
        );
        let jump = Move::new(Square::E2, Square::E5);
        assert_eq!(game.play(jump), Err(MoveError::IllegalMove { mv: jump }));
        let odd = Move::with_promotion(Square::E2, Square::E4, PieceKind::Queen);
        assert_eq!(game.play(odd), Err(MoveError::InvalidPromotion { mv: odd }));
    }

    #[test]
    fn cannot_walk_into_check() {
        let game = Game::from_fen("4k3/8/8/8/8/8/3r4/4K3 w - - 0 1").unwrap();
        let mv = Move::new(Square::E1, Square::E2);
        assert_eq!(game.play(mv), Err(MoveError::LeavesKingInCheck { mv }));
        assert!(game.play(Move::new(Square::E1, Square::D2)).is_ok());
    }

    #[test]
    fn promotion_needs_a_kind() {
        let game = Game::from_fen("4k3/1P6/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let bare = Move::new(Square::B7, Square::B8);
        assert_eq!(game.play(bare), Err(MoveError::PromotionRequired { mv: bare }));
        let king = Move::with_promotion(Square::B7, Square::B8, PieceKind::King);
        assert_eq!(game.play(king), Err(MoveError::InvalidPromotion { mv: king }));

        let promoted = game
            .play(Move::with_promotion(Square::B7, Square::B8, PieceKind::Queen))
            .unwrap();
        assert_eq!(promoted.board().piece_at(Square::B8), Some(Piece::WHITE_QUEEN));
        assert_eq!(promoted.last_move().unwrap().notation, "b8+");
    }

    #[test]
    fn fools_mate() {
        let game = play_all(Game::new(), &["f2f3", "e7e5", "g2g4", "d8h4"]);
        assert_eq!(game.status(), GameStatus::Checkmate);
        assert!(status::is_checkmate(game.board(), Side::White));
        let last = game.last_move().unwrap();
        assert_eq!(last.notation, "Qh4#");
        assert!(last.outcome.is_checkmate);
        assert_eq!(game.move_list(), "1. f3 e5 2. g4 Qh4#");
        assert_eq!(game.status_message().as_deref(), Some("Checkmate! black wins!"));

        let after_mate = game.play(Move::new(Square::A2, Square::A3));
        assert_eq!(
            after_mate,
            Err(MoveError::GameOver {
                status: GameStatus::Checkmate
            })
        );
    }

    #[test]
    fn captures_and_checks_in_notation() {
        let game = play_all(Game::new(), &["e2e4", "d7d5", "e4d5", "d8d5", "b1c3", "d5e5"]);
        let notations: Vec<&str> = game.history().iter().map(|p| p.notation.as_str()).collect();
        assert_eq!(notations, ["e4", "d5", "exd5", "Qxd5", "Nc3", "Qe5+"]);
        assert_eq!(game.status(), GameStatus::Check);
        assert_eq!(game.status_message().as_deref(), Some("white is in check!"));
    }

    #[test]
    fn stalemating_move_is_flagged() {
        let game = Game::from_fen("7k/5K2/8/6Q1/8/8/8/8 w - - 0 1").unwrap();
        let game = game.play(Move::new(Square::G5, Square::G6)).unwrap();
        let last = game.last_move().unwrap();
        assert!(last.outcome.is_stalemate);
        assert!(!last.outcome.puts_opponent_in_check);
        assert_eq!(game.status(), GameStatus::Stalemate);
        assert_eq!(game.status_message().as_deref(), Some("Stalemate! Game is drawn."));
    }

    #[test]
    fn undo_restores_previous_record() {
        let start = Game::new();
        let one = start.play(Move::new(Square::D2, Square::D4)).unwrap();
        let two = one.play(Move::new(Square::D7, Square::D5)).unwrap();
        assert_eq!(two.undo(), Some(one.clone()));
        assert_eq!(two.undo().and_then(|g| g.undo()), Some(start.clone()));
        assert_eq!(start.undo(), None);
    }

    #[test]
    fn move_list_from_black_to_move() {
        let game = Game::from_fen("4k3/8/8/8/8/8/4P3/4K3 b - - 0 1").unwrap();
        let game = play_all(game, &["e8d7", "e2e4"]);
        assert_eq!(game.move_list(), "1... Kd7 2. e4");
    }
}
