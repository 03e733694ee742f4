//! Protocol errors.

use rookery_core::{FenError, MoveError, MoveParseError};

/// Errors that can occur while reading and handling protocol commands.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    /// The `position` command is missing `startpos` or `fen` keyword.
    #[error("malformed position command: missing startpos or fen keyword")]
    MalformedPosition,

    /// Failed to parse position text.
    #[error("invalid position \"{fen}\": {source}")]
    InvalidFen {
        /// The position text that failed to parse.
        fen: String,
        /// Why it failed.
        source: FenError,
    },

    /// Move text could not be parsed.
    #[error("invalid move: {0}")]
    MoveText(#[from] MoveParseError),

    /// A move listed after `position ... moves` was refused.
    #[error("cannot play {text}: {source}")]
    Rejected {
        /// The move text as given.
        text: String,
        /// Why the game refused it.
        source: MoveError,
    },

    /// A command needs an argument that was not given.
    #[error("{command} needs an argument")]
    MissingArgument {
        /// The command name.
        command: &'static str,
    },

    /// `set` named an option that does not exist.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name as given.
        name: String,
    },

    /// `set` gave a value the option cannot take.
    #[error("invalid value for {name}: {value}")]
    InvalidOptionValue {
        /// The option name.
        name: &'static str,
        /// The value as given.
        value: String,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
