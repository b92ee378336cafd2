use std::str::FromStr;
use thiserror::Error;

/// A user action read from the menu prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `1`: remove the front piece
    Play,
    /// `2`: generate a piece and append it
    Insert,
    /// `0`: leave the loop
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown option {0:?}")]
    Unknown(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Command::Play),
            "2" => Ok(Command::Insert),
            "0" => Ok(Command::Exit),
            other => Err(CommandError::Unknown(other.to_owned())),
        }
    }
}
