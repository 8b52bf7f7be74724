//! # Game Events
//!
//! Discrete outcomes produced while a turn resolves.
//!
//! Events are transient: each snapshot carries the events of the turn that produced
//! it. How long a message stays on screen is up to the renderer.

use crate::{Direction, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Something that happened during a turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The hero's step was blocked; no turn was consumed
    MoveRejected { direction: Direction },
    /// The hero attacked with no enemy in reach; no turn was consumed
    AttackNoTarget,
    /// The hero wounded an enemy
    AttackHit {
        target: Position,
        damage: i32,
        remaining_health: i32,
    },
    /// The hero killed an enemy, which was removed
    AttackKill { target: Position, damage: i32 },
    /// An adjacent enemy struck the hero
    EnemyAttacked { attacker: Position, damage: i32 },
    /// The hero drank a potion
    PickupPotion { position: Position, healed: i32 },
    /// The hero picked up a sword
    PickupSword { position: Position, power: i32 },
    /// Every enemy is dead
    GameOverVictory,
    /// The hero died
    GameOverDefeat,
}

impl GameEvent {
    /// Human-readable text for the event.
    ///
    /// ```
    /// use warren::GameEvent;
    ///
    /// assert_eq!(GameEvent::AttackNoTarget.message(), "No enemies nearby to attack");
    /// ```
    pub fn message(&self) -> &'static str {
        match self {
            GameEvent::MoveRejected { .. } => "You can't move there",
            GameEvent::AttackNoTarget => "No enemies nearby to attack",
            GameEvent::AttackHit { .. } => "You attacked an enemy!",
            GameEvent::AttackKill { .. } => "Enemy defeated!",
            GameEvent::EnemyAttacked { .. } => "An enemy attacked you!",
            GameEvent::PickupPotion { .. } => "You found a health potion! +20 health",
            GameEvent::PickupSword { .. } => "You found a sword! Attack power increased",
            GameEvent::GameOverVictory => "Victory! All enemies defeated.",
            GameEvent::GameOverDefeat => "Game over! You died.",
        }
    }

    /// Terminal events end the session; renderers keep their message on screen.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameEvent::GameOverVictory | GameEvent::GameOverDefeat)
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
