//! Command parsing.

use rookery_core::{Game, Move};

use crate::error::PlayError;

/// A runtime option changed with `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOption {
    /// Print the board after every accepted move.
    ShowBoard(bool),
    /// Promote to a queen when a move reaching the far rank names no piece.
    AutoQueen(bool),
}

/// A parsed protocol command.
#[derive(Debug)]
pub enum Command {
    /// `new` -- reset to the initial setup.
    New,
    /// `position` -- set up a position with optional moves applied.
    Position(Game),
    /// `move e2e4`, or the bare coordinate text on its own.
    Move(Move),
    /// `undo` -- take back the last move.
    Undo,
    /// `fen` -- print the position text.
    Fen,
    /// `board` -- print the board.
    Board,
    /// `moves` -- list legal moves for the side to move.
    Moves,
    /// `history` -- print the numbered move list.
    History,
    /// `status` -- print the state of the side to move.
    Status,
    /// `set <Name> <value>` -- change a session option.
    Set(SessionOption),
    /// `quit` -- leave the session.
    Quit,
    /// Unrecognized command.
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, PlayError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&head) = tokens.first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match head {
        "new" => Ok(Command::New),
        "undo" => Ok(Command::Undo),
        "fen" => Ok(Command::Fen),
        "board" => Ok(Command::Board),
        "moves" => Ok(Command::Moves),
        "history" => Ok(Command::History),
        "status" => Ok(Command::Status),
        "quit" => Ok(Command::Quit),
        "position" => parse_position(&tokens[1..]),
        "set" => parse_set(&tokens[1..]),
        "move" => {
            let text = tokens.get(1).ok_or(PlayError::MissingArgument { command: "move" })?;
            Ok(Command::Move(Move::from_coord(text)?))
        }
        other => match Move::from_coord(other) {
            Ok(mv) if tokens.len() == 1 => Ok(Command::Move(mv)),
            _ => Ok(Command::Unknown(other.to_string())),
        },
    }
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position startpos [moves e2e4 e7e5 ...]`
/// - `position fen <six fields> [moves e2e4 e7e5 ...]`
fn parse_position(tokens: &[&str]) -> Result<Command, PlayError> {
    let (mut game, rest) = match tokens.first() {
        Some(&"startpos") => (Game::new(), &tokens[1..]),
        Some(&"fen") => {
            let end = tokens.len().min(7);
            let fen = tokens[1..end].join(" ");
            let game = Game::from_fen(&fen).map_err(|source| PlayError::InvalidFen {
                fen: fen.clone(),
                source,
            })?;
            (game, &tokens[end..])
        }
        _ => return Err(PlayError::MalformedPosition),
    };

    if rest.first() == Some(&"moves") {
        for text in &rest[1..] {
            let mv = Move::from_coord(text)?;
            game = game.play(mv).map_err(|source| PlayError::Rejected {
                text: text.to_string(),
                source,
            })?;
        }
    }

    Ok(Command::Position(game))
}

/// Parse `set <Name> <value>`. Names are case-insensitive; values are `true`/`false`.
fn parse_set(tokens: &[&str]) -> Result<Command, PlayError> {
    let name = tokens.first().ok_or(PlayError::MissingArgument { command: "set" })?;
    let value = tokens.get(1).ok_or(PlayError::MissingArgument { command: "set" })?;

    let (canonical, build): (&'static str, fn(bool) -> SessionOption) =
        match name.to_ascii_lowercase().as_str() {
            "showboard" => ("ShowBoard", SessionOption::ShowBoard),
            "autoqueen" => ("AutoQueen", SessionOption::AutoQueen),
            _ => {
                return Err(PlayError::UnknownOption {
                    name: name.to_string(),
                });
            }
        };

    let flag = value
        .parse::<bool>()
        .map_err(|_| PlayError::InvalidOptionValue {
            name: canonical,
            value: value.to_string(),
        })?;
    Ok(Command::Set(build(flag)))
}

#[cfg(test)]
mod tests {
    use rookery_core::{GameStatus, Side, Square};

    use super::*;

    #[test]
    fn parse_simple_commands() {
        assert!(matches!(parse_command("new").unwrap(), Command::New));
        assert!(matches!(parse_command("undo").unwrap(), Command::Undo));
        assert!(matches!(parse_command("fen").unwrap(), Command::Fen));
        assert!(matches!(parse_command("board").unwrap(), Command::Board));
        assert!(matches!(parse_command("moves").unwrap(), Command::Moves));
        assert!(matches!(parse_command("history").unwrap(), Command::History));
        assert!(matches!(parse_command("status").unwrap(), Command::Status));
        assert!(matches!(parse_command("quit").unwrap(), Command::Quit));
    }

    #[test]
    fn parse_move_forms() {
        let expected = Move::new(Square::E2, Square::E4);
        match parse_command("move e2e4").unwrap() {
            Command::Move(mv) => assert_eq!(mv, expected),
            other => panic!("expected Move, got {other:?}"),
        }
        match parse_command("  e2e4 ").unwrap() {
            Command::Move(mv) => assert_eq!(mv, expected),
            other => panic!("expected Move, got {other:?}"),
        }
    }

    #[test]
    fn parse_move_errors() {
        assert!(matches!(
            parse_command("move"),
            Err(PlayError::MissingArgument { command: "move" })
        ));
        assert!(matches!(
            parse_command("move e2e9"),
            Err(PlayError::MoveText(_))
        ));
    }

    #[test]
    fn parse_position_startpos_with_moves() {
        match parse_command("position startpos moves e2e4 e7e5").unwrap() {
            Command::Position(game) => {
                assert_eq!(game.history().len(), 2);
                assert_eq!(game.side_to_move(), Side::White);
            }
            other => panic!("expected Position, got {other:?}"),
        }
    }

    #[test]
    fn parse_position_fen() {
        let cmd = parse_command(
            "position fen rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1 moves e7e5",
        )
        .unwrap();
        match cmd {
            Command::Position(game) => {
                assert_eq!(game.side_to_move(), Side::White);
                assert_eq!(game.move_list(), "1... e5");
            }
            other => panic!("expected Position, got {other:?}"),
        }
    }

    #[test]
    fn parse_position_reaching_mate() {
        match parse_command("position startpos moves f2f3 e7e5 g2g4 d8h4").unwrap() {
            Command::Position(game) => assert_eq!(game.status(), GameStatus::Checkmate),
            other => panic!("expected Position, got {other:?}"),
        }
    }

    #[test]
    fn parse_position_errors() {
        assert!(matches!(
            parse_command("position"),
            Err(PlayError::MalformedPosition)
        ));
        assert!(matches!(
            parse_command("position fen invalid"),
            Err(PlayError::InvalidFen { .. })
        ));
        assert!(matches!(
            parse_command("position startpos moves e2e5"),
            Err(PlayError::Rejected { .. })
        ));
    }

    #[test]
    fn parse_set_options() {
        assert!(matches!(
            parse_command("set ShowBoard true").unwrap(),
            Command::Set(SessionOption::ShowBoard(true))
        ));
        assert!(matches!(
            parse_command("set autoqueen false").unwrap(),
            Command::Set(SessionOption::AutoQueen(false))
        ));
        assert!(matches!(
            parse_command("set Hash 16"),
            Err(PlayError::UnknownOption { .. })
        ));
        assert!(matches!(
            parse_command("set ShowBoard maybe"),
            Err(PlayError::InvalidOptionValue { name: "ShowBoard", .. })
        ));
        assert!(matches!(
            parse_command("set ShowBoard"),
            Err(PlayError::MissingArgument { command: "set" })
        ));
    }

    #[test]
    fn parse_unknown_and_empty() {
        assert!(matches!(parse_command("foobar").unwrap(), Command::Unknown(_)));
        assert!(matches!(parse_command("e2e4 extra").unwrap(), Command::Unknown(_)));
        assert!(matches!(parse_command("").unwrap(), Command::Unknown(_)));
    }
}
