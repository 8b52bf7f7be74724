//! # Game State Module
//!
//! The single mutable aggregate of a running game and the snapshots taken from it.
//!
//! `GameState` owns the grid, the hero, the enemy list and the item lists. Only the
//! turn resolvers in this crate mutate it; everyone else reads it through accessors
//! or through an owned [`GameSnapshot`].

use crate::{
    Actor, Enemy, GameEvent, Grid, Hero, Item, Position, WarrenError, WarrenResult,
};
use crate::config::MAX_HEALTH;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Victory,
    Defeat,
}

/// Turn-controller state. `Over` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    Over(GameOutcome),
}

/// Running totals for the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatistics {
    /// Accepted player actions
    pub turns_taken: u64,
    /// Number of enemies defeated
    pub enemies_defeated: u32,
    /// Total damage dealt by the hero
    pub damage_dealt: u64,
    /// Total damage taken by the hero
    pub damage_taken: u64,
    pub potions_collected: u32,
    pub swords_collected: u32,
}

impl GameStatistics {
    /// Creates new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates statistics based on a game event.
    pub fn update_from_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::AttackHit { damage, .. } => {
                self.damage_dealt += *damage as u64;
            }
            GameEvent::AttackKill { damage, .. } => {
                self.damage_dealt += *damage as u64;
                self.enemies_defeated += 1;
            }
            GameEvent::EnemyAttacked { damage, .. } => {
                self.damage_taken += *damage as u64;
            }
            GameEvent::PickupPotion { .. } => {
                self.potions_collected += 1;
            }
            GameEvent::PickupSword { .. } => {
                self.swords_collected += 1;
            }
            _ => {}
        }
    }
}

/// Central game state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    grid: Grid,
    hero: Hero,
    enemies: Vec<Enemy>,
    swords: Vec<Item>,
    potions: Vec<Item>,
    phase: GamePhase,
    initial_enemy_count: usize,
    statistics: GameStatistics,
}

impl GameState {
    /// Assembles a game from a grid and already-placed entities.
    ///
    /// Fails when the layout breaks an invariant (overlapping actors, entities off the
    /// floor). A layout with no enemies starts already won.
    ///
    /// # Examples
    ///
    /// ```
    /// use warren::{CellKind, Enemy, GameState, Grid, Hero, Position};
    ///
    /// let mut grid = Grid::new(4, 3);
    /// grid.set_kind(Position::new(1, 1), CellKind::Floor).unwrap();
    /// grid.set_kind(Position::new(2, 1), CellKind::Floor).unwrap();
    ///
    /// let state = GameState::from_parts(
    ///     grid,
    ///     Hero::new(Position::new(1, 1)),
    ///     vec![Enemy::new(Position::new(2, 1))],
    ///     Vec::new(),
    ///     Vec::new(),
    /// )
    /// .unwrap();
    /// assert!(!state.is_over());
    /// ```
    pub fn from_parts(
        grid: Grid,
        hero: Hero,
        enemies: Vec<Enemy>,
        swords: Vec<Item>,
        potions: Vec<Item>,
    ) -> WarrenResult<Self> {
        let initial_enemy_count = enemies.len();
        let mut state = Self {
            grid,
            hero,
            enemies,
            swords,
            potions,
            phase: GamePhase::Playing,
            initial_enemy_count,
            statistics: GameStatistics::new(),
        };
        state.check_game_over();
        state.validate_invariants()?;
        Ok(state)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    /// Live enemies in resolution order.
    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn swords(&self) -> &[Item] {
        &self.swords
    }

    pub fn potions(&self) -> &[Item] {
        &self.potions
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn statistics(&self) -> &GameStatistics {
        &self.statistics
    }

    /// Whether the game has reached a terminal phase.
    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::Over(_))
    }

    /// The outcome, once the game is over.
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.phase {
            GamePhase::Playing => None,
            GamePhase::Over(outcome) => Some(outcome),
        }
    }

    /// Index of the enemy standing at `pos`, if any.
    pub fn enemy_index_at(&self, pos: Position) -> Option<usize> {
        self.enemies.iter().position(|enemy| enemy.position() == pos)
    }

    pub(crate) fn hero_mut(&mut self) -> &mut Hero {
        &mut self.hero
    }

    pub(crate) fn enemies_mut(&mut self) -> &mut Vec<Enemy> {
        &mut self.enemies
    }

    pub(crate) fn swords_mut(&mut self) -> &mut Vec<Item> {
        &mut self.swords
    }

    pub(crate) fn potions_mut(&mut self) -> &mut Vec<Item> {
        &mut self.potions
    }

    pub(crate) fn statistics_mut(&mut self) -> &mut GameStatistics {
        &mut self.statistics
    }

    /// Moves to a terminal phase when the hero is dead or no enemies remain.
    ///
    /// Defeat is checked first, so it wins when both hold. Returns the terminal event
    /// on the transition and `None` when nothing changed.
    pub fn check_game_over(&mut self) -> Option<GameEvent> {
        if self.is_over() {
            return None;
        }

        if self.hero.health() <= 0 {
            self.phase = GamePhase::Over(GameOutcome::Defeat);
            info!("Hero died; game over");
            Some(GameEvent::GameOverDefeat)
        } else if self.enemies.is_empty() {
            self.phase = GamePhase::Over(GameOutcome::Victory);
            info!("All enemies defeated; victory");
            Some(GameEvent::GameOverVictory)
        } else {
            None
        }
    }

    /// Checks the data-model invariants, reporting the first violation.
    pub fn validate_invariants(&self) -> WarrenResult<()> {
        let invalid = |message: String| Err(WarrenError::InvalidState(message));

        if self.enemies.len() > self.initial_enemy_count {
            return invalid(format!(
                "{} enemies exceed the initial {}",
                self.enemies.len(),
                self.initial_enemy_count
            ));
        }

        let health = self.hero.health();
        if !(0..=MAX_HEALTH).contains(&health) {
            return invalid(format!("Hero health {} is out of range", health));
        }

        let mut occupied = HashSet::new();
        let actors = std::iter::once(self.hero.position())
            .chain(self.enemies.iter().map(|enemy| enemy.position()));
        for pos in actors {
            if !occupied.insert(pos) {
                return invalid(format!("Two actors share ({}, {})", pos.x, pos.y));
            }
        }

        let positions = occupied
            .iter()
            .copied()
            .chain(self.swords.iter().map(|item| item.position))
            .chain(self.potions.iter().map(|item| item.position));
        for pos in positions {
            if !self.grid.is_floor(pos) {
                return invalid(format!("Entity at ({}, {}) is not on floor", pos.x, pos.y));
            }
        }

        let should_be_over = health <= 0 || self.enemies.is_empty();
        if should_be_over != self.is_over() {
            return invalid(format!(
                "Game over flag {} disagrees with hero health {} and {} enemies",
                self.is_over(),
                health,
                self.enemies.len()
            ));
        }

        Ok(())
    }

    /// Takes an owned snapshot of the state.
    pub fn snapshot(&self, turn: u64, events: Vec<GameEvent>) -> GameSnapshot {
        GameSnapshot {
            grid: self.grid.clone(),
            hero: self.hero.clone(),
            enemies: self.enemies.clone(),
            swords: self.swords.clone(),
            potions: self.potions.clone(),
            game_over: self.is_over(),
            outcome: self.outcome(),
            turn,
            events,
            statistics: self.statistics.clone(),
        }
    }
}

/// Read-only view of the game after a processed command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub grid: Grid,
    pub hero: Hero,
    pub enemies: Vec<Enemy>,
    pub swords: Vec<Item>,
    pub potions: Vec<Item>,
    pub game_over: bool,
    pub outcome: Option<GameOutcome>,
    /// Number of accepted player actions so far
    pub turn: u64,
    /// Events produced by the command that led to this snapshot
    pub events: Vec<GameEvent>,
    pub statistics: GameStatistics,
}

impl GameSnapshot {
    /// Messages for this turn's events, in order.
    pub fn messages(&self) -> Vec<&'static str> {
        self.events.iter().map(GameEvent::message).collect()
    }

    /// Serializes the snapshot for renderers that consume JSON.
    pub fn to_json(&self) -> WarrenResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
