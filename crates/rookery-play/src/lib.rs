//! Line-oriented text protocol for playing a game against the rules core.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, SessionOption, parse_command};
pub use error::PlayError;
pub use session::{Session, SessionConfig};
