//! # Entities
//!
//! The hero, enemies and the items lying on the floor.
//!
//! Hero and enemy are separate types so that role-specific rules (health clamping,
//! power growth, removal on death) are checked by the compiler. The shared surface
//! lives in the [`Actor`] trait.

use crate::config::{MAX_HEALTH, STARTING_POWER};
use crate::Position;
use serde::{Deserialize, Serialize};

/// Behaviour shared by everything that moves and fights.
pub trait Actor {
    /// Current position on the grid.
    fn position(&self) -> Position;

    /// Moves the actor. Callers validate the destination first.
    fn set_position(&mut self, position: Position);

    /// Current health.
    fn health(&self) -> i32;

    /// Attack power.
    fn power(&self) -> i32;

    /// Whether the actor still has health left.
    fn is_alive(&self) -> bool {
        self.health() > 0
    }
}

/// The player character. Exactly one exists per game.
///
/// Health always stays in `0..=MAX_HEALTH`; power only grows.
///
/// # Examples
///
/// ```
/// use warren::{Actor, Hero, Position};
///
/// let mut hero = Hero::new(Position::new(3, 4));
/// hero.take_damage(30);
/// hero.heal(50);
/// assert_eq!(hero.health(), 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    position: Position,
    health: i32,
    power: i32,
}

impl Hero {
    /// Creates a hero at full health with starting power.
    pub fn new(position: Position) -> Self {
        Self {
            position,
            health: MAX_HEALTH,
            power: STARTING_POWER,
        }
    }

    /// Creates a hero with explicit stats, clamping health into range.
    pub fn with_stats(position: Position, health: i32, power: i32) -> Self {
        Self {
            position,
            health: health.clamp(0, MAX_HEALTH),
            power: power.max(STARTING_POWER),
        }
    }

    /// Applies damage, stopping at zero. Returns the damage actually taken.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let before = self.health;
        self.health = (self.health - amount.max(0)).max(0);
        before - self.health
    }

    /// Restores health, capped at the maximum. Returns the amount healed.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.health;
        self.health = (self.health + amount.max(0)).min(MAX_HEALTH);
        self.health - before
    }

    /// Raises attack power.
    pub fn gain_power(&mut self, amount: i32) {
        self.power += amount.max(0);
    }
}

impl Actor for Hero {
    fn position(&self) -> Position {
        self.position
    }

    fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    fn health(&self) -> i32 {
        self.health
    }

    fn power(&self) -> i32 {
        self.power
    }
}

/// A hostile actor. Enemies have no identity beyond their place in the enemy list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    position: Position,
    health: i32,
    power: i32,
}

impl Enemy {
    /// Creates an enemy at full health with starting power.
    pub fn new(position: Position) -> Self {
        Self {
            position,
            health: MAX_HEALTH,
            power: STARTING_POWER,
        }
    }

    /// Creates an enemy with a specific health value.
    pub fn with_health(position: Position, health: i32) -> Self {
        Self {
            position,
            health: health.min(MAX_HEALTH),
            power: STARTING_POWER,
        }
    }

    /// Applies damage. Health may drop below zero; the caller removes dead enemies.
    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount.max(0);
    }
}

impl Actor for Enemy {
    fn position(&self) -> Position {
        self.position
    }

    fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    fn health(&self) -> i32 {
        self.health
    }

    fn power(&self) -> i32 {
        self.power
    }
}

/// The kinds of item that can be picked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Sword,
    Potion,
}

/// An item lying on a floor cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub kind: ItemKind,
    pub position: Position,
}

impl Item {
    pub fn sword(position: Position) -> Self {
        Self {
            kind: ItemKind::Sword,
            position,
        }
    }

    pub fn potion(position: Position) -> Self {
        Self {
            kind: ItemKind::Potion,
            position,
        }
    }
}
