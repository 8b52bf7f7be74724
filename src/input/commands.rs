//! # Command Definitions
//!
//! The abstract commands the core accepts from an input collaborator.

use crate::{Direction, WarrenError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Attack,
}

impl Command {
    /// The direction of a move command; `None` for attacks.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Command::MoveUp => Some(Direction::North),
            Command::MoveDown => Some(Direction::South),
            Command::MoveLeft => Some(Direction::West),
            Command::MoveRight => Some(Direction::East),
            Command::Attack => None,
        }
    }

    /// Maps a single key to a command: `w a s d` move and space attacks.
    ///
    /// Any other key yields `None` and should be ignored by the caller.
    ///
    /// ```
    /// use warren::Command;
    ///
    /// assert_eq!(Command::from_key('W'), Some(Command::MoveUp));
    /// assert_eq!(Command::from_key(' '), Some(Command::Attack));
    /// assert_eq!(Command::from_key('x'), None);
    /// ```
    pub fn from_key(key: char) -> Option<Command> {
        match key.to_ascii_lowercase() {
            'w' => Some(Command::MoveUp),
            'a' => Some(Command::MoveLeft),
            's' => Some(Command::MoveDown),
            'd' => Some(Command::MoveRight),
            ' ' => Some(Command::Attack),
            _ => None,
        }
    }
}

impl FromStr for Command {
    type Err = WarrenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Command::MoveUp),
            "down" => Ok(Command::MoveDown),
            "left" => Ok(Command::MoveLeft),
            "right" => Ok(Command::MoveRight),
            "attack" => Ok(Command::Attack),
            other => Err(WarrenError::InvalidCommand(other.to_string())),
        }
    }
}
