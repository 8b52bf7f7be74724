//! # Input Module
//!
//! Commands accepted by the core and helpers for text front-ends.

pub mod commands;

pub use commands::*;

/// Translates a line of key presses into commands, dropping unknown keys.
///
/// # Examples
///
/// ```
/// use warren::{parse_keys, Command};
///
/// assert_eq!(parse_keys("dd? "), vec![Command::MoveRight, Command::MoveRight, Command::Attack]);
/// ```
pub fn parse_keys(line: &str) -> Vec<Command> {
    line.chars().filter_map(Command::from_key).collect()
}

/// Parses a line as either one command word or a run of keys.
pub fn parse_line(line: &str) -> Vec<Command> {
    match line.parse::<Command>() {
        Ok(command) => vec![command],
        Err(_) => parse_keys(line),
    }
}
