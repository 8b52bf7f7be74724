//! # Warren
//!
//! A small single-player dungeon crawler built around two subsystems:
//!
//! - **Generation**: a procedural grid map with padded rooms and full-span corridors,
//!   followed by placement of the hero, items and enemies on free floor cells
//! - **Turn resolution**: a state machine that applies one player command, runs the
//!   enemy turn, resolves pickups and detects victory or defeat
//!
//! Rendering and input devices are external collaborators. They talk to the core through
//! [`Command`] values and the immutable [`GameSnapshot`] produced after every turn.
//!
//! ```
//! use warren::{Command, GenerationConfig, TurnController};
//!
//! let mut game = TurnController::from_config(&GenerationConfig::for_testing(7)).unwrap();
//! let snapshot = game.process(Command::Attack);
//! assert!(!snapshot.events.is_empty() || snapshot.game_over);
//! ```

pub mod game;
pub mod generation;
pub mod input;
pub mod utils;

pub use game::*;
pub use generation::*;
pub use input::*;
pub use utils::*;

/// Core error type for the Warren engine.
///
/// Gameplay outcomes (blocked moves, empty attacks, game over) are never errors;
/// they are reported as [`GameEvent`] values. Errors only come from the edges:
/// configuration, file I/O and broken invariants.
#[derive(thiserror::Error, Debug)]
pub enum WarrenError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Configuration cannot be used for generation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Game state is invalid
    #[error("Invalid game state: {0}")]
    InvalidState(String),

    /// Command text could not be understood
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Generation failed
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
}

/// Result type used throughout the Warren codebase.
pub type WarrenResult<T> = Result<T, WarrenError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Default map width in cells
    pub const DEFAULT_MAP_WIDTH: u32 = 40;

    /// Default map height in cells
    pub const DEFAULT_MAP_HEIGHT: u32 = 24;

    /// Default smallest room side
    pub const DEFAULT_ROOM_MIN_SIZE: u32 = 3;

    /// Default largest room side
    pub const DEFAULT_ROOM_MAX_SIZE: u32 = 8;

    pub const DEFAULT_MIN_ROOMS: u32 = 5;
    pub const DEFAULT_MAX_ROOMS: u32 = 10;
    pub const DEFAULT_MIN_CORRIDORS: u32 = 3;
    pub const DEFAULT_MAX_CORRIDORS: u32 = 5;

    pub const DEFAULT_SWORD_COUNT: usize = 2;
    pub const DEFAULT_POTION_COUNT: usize = 10;
    pub const DEFAULT_ENEMY_COUNT: usize = 10;

    /// Gap kept around every room; rooms never touch
    pub const ROOM_PADDING: i32 = 1;

    /// Health ceiling for every actor, also the starting health
    pub const MAX_HEALTH: i32 = 100;

    /// Attack power of a freshly placed actor
    pub const STARTING_POWER: i32 = 1;

    /// Damage dealt by the hero per point of power
    pub const DAMAGE_PER_POWER: i32 = 10;

    /// Damage an adjacent enemy deals at the end of its move
    pub const ENEMY_CONTACT_DAMAGE: i32 = 5;

    /// Health restored by a potion
    pub const POTION_HEAL: i32 = 20;

    /// Power gained from a sword
    pub const SWORD_POWER_BONUS: i32 = 1;

    /// Probability that an enemy chases instead of wandering
    pub const CHASE_CHANCE: f64 = 0.5;

    /// Probability that a chasing enemy tries the horizontal step first
    pub const HORIZONTAL_CHASE_CHANCE: f64 = 0.5;
}
