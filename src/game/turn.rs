//! # Turn Controller
//!
//! Sequences one player command through the resolvers and emits a snapshot.
//!
//! A move that succeeds and an attack that lands each consume a turn: exactly one
//! enemy pass follows, then (for moves) the pickup check, then the game-over check.
//! A blocked move or an attack with nothing in reach is reported but consumes no
//! turn. Once the game is over every command is a no-op.

use crate::{
    attack, check_pickups, resolve_enemy_turn, try_move, AttackOutcome, Command, EntityPlacer,
    GameEvent, GameSnapshot, GameState, GenerationConfig, MapGenerator, Mover, RandomSource,
    SeededRandom, WarrenResult,
};
use log::debug;

/// Owner of the game state and the only writer to it during play.
///
/// # Examples
///
/// ```
/// use warren::{Command, GenerationConfig, TurnController};
///
/// let mut game = TurnController::from_config(&GenerationConfig::new(2024)).unwrap();
/// let snapshot = game.process(Command::MoveUp);
/// assert!(snapshot.turn <= 1);
/// assert_eq!(snapshot.turn, game.turn());
/// ```
#[derive(Debug, Clone)]
pub struct TurnController<R: RandomSource = SeededRandom> {
    state: GameState,
    rng: R,
    turn: u64,
    last_events: Vec<GameEvent>,
}

impl TurnController<SeededRandom> {
    /// Generates a map, places entities and starts a game, all from one config.
    pub fn from_config(config: &GenerationConfig) -> WarrenResult<Self> {
        let mut rng = SeededRandom::new(config.seed);
        let grid = MapGenerator::new().generate(config, &mut rng)?;
        let placement = EntityPlacer::new().place(&grid, &config.placement_counts(), &mut rng)?;
        let state = GameState::from_parts(
            grid,
            placement.hero,
            placement.enemies,
            placement.swords,
            placement.potions,
        )?;
        debug!("Started game with seed {}", config.seed);
        Ok(Self::new(state, rng))
    }
}

impl<R: RandomSource> TurnController<R> {
    /// Wraps an existing state; `rng` drives the enemy AI.
    pub fn new(state: GameState, rng: R) -> Self {
        Self {
            state,
            rng,
            turn: 0,
            last_events: Vec::new(),
        }
    }

    /// Read-only access to the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Number of accepted player actions.
    pub fn turn(&self) -> u64 {
        self.turn
    }

    /// Snapshot of the current state with the events of the last command.
    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot(self.turn, self.last_events.clone())
    }

    /// Applies one command and returns the resulting snapshot.
    pub fn process(&mut self, command: Command) -> GameSnapshot {
        let events = self.resolve(command);
        for event in &events {
            self.state.statistics_mut().update_from_event(event);
        }
        debug_assert!(
            self.state.validate_invariants().is_ok(),
            "invariant broken after {:?}: {:?}",
            command,
            self.state.validate_invariants()
        );
        self.last_events = events;
        self.snapshot()
    }

    fn resolve(&mut self, command: Command) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.state.is_over() {
            return events;
        }

        match command {
            Command::Attack => {
                if attack(&mut self.state, &mut events) == AttackOutcome::None {
                    return events;
                }
                self.begin_turn();
                resolve_enemy_turn(&mut self.state, &mut self.rng, &mut events);
            }
            _ => {
                let Some(direction) = command.direction() else {
                    return events;
                };
                if !try_move(&mut self.state, Mover::Hero, direction) {
                    events.push(GameEvent::MoveRejected { direction });
                    return events;
                }
                self.begin_turn();
                resolve_enemy_turn(&mut self.state, &mut self.rng, &mut events);
                check_pickups(&mut self.state, &mut events);
            }
        }

        if let Some(event) = self.state.check_game_over() {
            events.push(event);
        }
        events
    }

    fn begin_turn(&mut self) {
        self.turn += 1;
        self.state.statistics_mut().turns_taken += 1;
        debug!("Turn {}", self.turn);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::random::testing::ScriptedRandom;
    use crate::{Actor, CellKind, Enemy, GameOutcome, Grid, Hero, Item, Position};

    fn corridor_state(hero: Hero, enemies: Vec<Enemy>, potions: Vec<Item>) -> GameState {
        let mut grid = Grid::new(8, 3);
        for x in 1..7 {
            grid.set_kind(Position::new(x, 1), CellKind::Floor).unwrap();
        }
        GameState::from_parts(grid, hero, enemies, Vec::new(), potions).unwrap()
    }

    #[test]
    fn test_blocked_move_consumes_no_turn() {
        let state = corridor_state(
            Hero::new(Position::new(1, 1)),
            vec![Enemy::new(Position::new(6, 1))],
            Vec::new(),
        );
        let mut game = TurnController::new(state, ScriptedRandom::new());

        let snapshot = game.process(Command::MoveUp);
        assert_eq!(snapshot.turn, 0);
        assert_eq!(
            snapshot.events,
            vec![GameEvent::MoveRejected {
                direction: crate::Direction::North
            }]
        );
        assert_eq!(snapshot.enemies[0].position(), Position::new(6, 1));
    }

    #[test]
    fn test_move_runs_enemies_then_pickups() {
        let state = corridor_state(
            Hero::with_stats(Position::new(1, 1), 50, 1),
            vec![Enemy::new(Position::new(6, 1))],
            vec![Item::potion(Position::new(2, 1))],
        );
        // Enemy chases west along the corridor.
        let mut game = TurnController::new(state, ScriptedRandom::new().with_coins(&[true, true]));

        let snapshot = game.process(Command::MoveRight);
        assert_eq!(snapshot.turn, 1);
        assert_eq!(snapshot.hero.position(), Position::new(2, 1));
        assert_eq!(snapshot.hero.health(), 70);
        assert_eq!(snapshot.enemies[0].position(), Position::new(5, 1));
        assert!(snapshot.potions.is_empty());
        assert_eq!(snapshot.statistics.potions_collected, 1);
        assert_eq!(snapshot.statistics.turns_taken, 1);
    }

    #[test]
    fn test_enemy_strikes_before_potion_is_drunk() {
        let state = corridor_state(
            Hero::with_stats(Position::new(1, 1), 95, 1),
            vec![Enemy::new(Position::new(4, 1))],
            vec![Item::potion(Position::new(2, 1))],
        );
        // Enemy chases west to (3, 1), next to the hero's new cell.
        let mut game = TurnController::new(state, ScriptedRandom::new().with_coins(&[true, true]));

        let snapshot = game.process(Command::MoveRight);
        assert_eq!(snapshot.hero.position(), Position::new(2, 1));
        assert_eq!(snapshot.enemies[0].position(), Position::new(3, 1));
        // 95 - 5 = 90, then +20 capped at 100. Drinking first would leave 95.
        assert_eq!(snapshot.hero.health(), 100);
        assert_eq!(
            snapshot.events,
            vec![
                GameEvent::EnemyAttacked {
                    attacker: Position::new(3, 1),
                    damage: 5
                },
                GameEvent::PickupPotion {
                    position: Position::new(2, 1),
                    healed: 10
                },
            ]
        );
    }

    #[test]
    fn test_missed_attack_skips_enemy_turn() {
        let state = corridor_state(
            Hero::new(Position::new(1, 1)),
            vec![Enemy::new(Position::new(6, 1))],
            Vec::new(),
        );
        let mut game = TurnController::new(state, ScriptedRandom::new().with_coins(&[true, true]));

        let snapshot = game.process(Command::Attack);
        assert_eq!(snapshot.events, vec![GameEvent::AttackNoTarget]);
        assert_eq!(snapshot.enemies[0].position(), Position::new(6, 1));
        assert_eq!(snapshot.turn, 0);
    }

    #[test]
    fn test_killing_last_enemy_wins() {
        let state = corridor_state(
            Hero::new(Position::new(1, 1)),
            vec![Enemy::with_health(Position::new(2, 1), 10)],
            Vec::new(),
        );
        let mut game = TurnController::new(state, ScriptedRandom::new());

        let snapshot = game.process(Command::Attack);
        assert!(snapshot.game_over);
        assert_eq!(snapshot.outcome, Some(GameOutcome::Victory));
        assert_eq!(snapshot.events.last(), Some(&GameEvent::GameOverVictory));

        let after = game.process(Command::MoveRight);
        assert!(after.events.is_empty());
        assert_eq!(after.hero, snapshot.hero);
        assert_eq!(after.turn, snapshot.turn);
    }

    #[test]
    fn test_snapshot_reflects_last_command() {
        let state = corridor_state(
            Hero::new(Position::new(1, 1)),
            vec![Enemy::new(Position::new(6, 1))],
            Vec::new(),
        );
        let mut game = TurnController::new(state, ScriptedRandom::new());
        assert!(game.snapshot().events.is_empty());

        game.process(Command::Attack);
        assert_eq!(game.snapshot().events, vec![GameEvent::AttackNoTarget]);
        assert_eq!(game.turn(), 0);
    }

    #[test]
    fn test_from_config_is_reproducible() {
        let config = GenerationConfig::new(777);
        let mut first = TurnController::from_config(&config).unwrap();
        let mut second = TurnController::from_config(&config).unwrap();
        assert_eq!(first.snapshot(), second.snapshot());

        for command in [Command::MoveLeft, Command::Attack, Command::MoveDown] {
            assert_eq!(first.process(command), second.process(command));
        }
    }
}
