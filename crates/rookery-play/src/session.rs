//! The play loop: holds the current game and answers commands line by line.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use rookery_core::{Game, Move, MoveError, PieceKind};

use crate::command::{Command, SessionOption, parse_command};
use crate::error::PlayError;

/// Options adjustable via `set`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Print the board after every accepted move.
    pub show_board: bool,
    /// Promote to a queen instead of prompting.
    pub auto_queen: bool,
}

/// A game session.
///
/// The session owns turn alternation, history and promotion prompting; it
/// never judges legality itself, it only asks the current [`Game`] and swaps
/// in the record that comes back.
#[derive(Debug, Default)]
pub struct Session {
    game: Game,
    config: SessionConfig,
}

impl Session {
    /// Create a session at the initial setup with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with the given options.
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            game: Game::new(),
            config,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Read commands from `input` until `quit` or end of input, writing replies to `output`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<(), PlayError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.handle(cmd, &mut output)?,
                Err(e) => {
                    warn!(error = %e, "command parse error");
                    writeln!(output, "error {e}")?;
                }
            }
            output.flush()?;
        }

        info!("session closed");
        Ok(())
    }

    /// Handle one parsed command.
    pub fn handle<W: Write>(&mut self, cmd: Command, output: &mut W) -> Result<(), PlayError> {
        match cmd {
            Command::New => {
                self.game = Game::new();
                writeln!(output, "fen {}", self.game.fen())?;
            }
            Command::Position(game) => {
                self.game = game;
                writeln!(output, "fen {}", self.game.fen())?;
                self.write_status(output)?;
            }
            Command::Move(mv) => self.handle_move(mv, output)?,
            Command::Undo => match self.game.undo() {
                Some(previous) => {
                    self.game = previous;
                    writeln!(output, "fen {}", self.game.fen())?;
                }
                None => writeln!(output, "illegal nothing to undo")?,
            },
            Command::Fen => writeln!(output, "fen {}", self.game.fen())?,
            Command::Board => writeln!(output, "{}", self.game.board().pretty())?,
            Command::Moves => {
                let moves: Vec<String> = self.game.legal_moves().map(|mv| mv.to_string()).collect();
                writeln!(output, "moves {}", moves.join(" "))?;
            }
            Command::History => writeln!(output, "history {}", self.game.move_list())?,
            Command::Status => writeln!(output, "status {}", self.game.status())?,
            Command::Set(option) => self.handle_set(option),
            Command::Quit => {}
            Command::Unknown(name) => {
                if !name.is_empty() {
                    warn!(command = %name, "unknown command ignored");
                }
            }
        }
        Ok(())
    }

    fn handle_move<W: Write>(&mut self, mv: Move, output: &mut W) -> Result<(), PlayError> {
        let result = match self.game.play(mv) {
            Err(MoveError::PromotionRequired { .. }) if self.config.auto_queen => self
                .game
                .play(Move::with_promotion(mv.from, mv.to, PieceKind::Queen)),
            other => other,
        };

        match result {
            Ok(next) => {
                self.game = next;
                if let Some(played) = self.game.last_move() {
                    writeln!(output, "played {}", played.notation)?;
                }
                writeln!(output, "fen {}", self.game.fen())?;
                if self.config.show_board {
                    writeln!(output, "{}", self.game.board().pretty())?;
                }
                self.write_status(output)?;
            }
            Err(MoveError::PromotionRequired { mv }) => {
                writeln!(output, "promote {}{} n b r q", mv.from, mv.to)?;
            }
            Err(e) => {
                debug!(%mv, reason = %e, "move refused");
                writeln!(output, "illegal {e}")?;
            }
        }
        Ok(())
    }

    fn handle_set(&mut self, option: SessionOption) {
        match option {
            SessionOption::ShowBoard(on) => self.config.show_board = on,
            SessionOption::AutoQueen(on) => self.config.auto_queen = on,
        }
        debug!(?option, "option set");
    }

    fn write_status<W: Write>(&self, output: &mut W) -> Result<(), PlayError> {
        if let Some(message) = self.game.status_message() {
            writeln!(output, "status {message}")?;
        }
        Ok(())
    }
}
