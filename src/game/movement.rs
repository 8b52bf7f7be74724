//! # Movement
//!
//! Single-step movement for the hero and for enemies.

use crate::{Actor, Direction, GameState};
use log::trace;

/// Who is trying to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mover {
    Hero,
    /// The enemy at this index of the enemy list
    Enemy(usize),
}

/// Tries to move one actor a single cardinal step.
///
/// The step is rejected when the target lies outside the grid, is a wall, or is
/// occupied by another live actor (the hero or any other enemy). A rejected step
/// leaves the state untouched and returns `false`.
///
/// # Examples
///
/// ```
/// use warren::{try_move, Actor, CellKind, Direction, Enemy, GameState, Grid, Hero, Mover, Position};
///
/// let mut grid = Grid::new(5, 3);
/// for x in 1..4 {
///     grid.set_kind(Position::new(x, 1), CellKind::Floor).unwrap();
/// }
/// let mut state = GameState::from_parts(
///     grid,
///     Hero::new(Position::new(1, 1)),
///     vec![Enemy::new(Position::new(3, 1))],
///     Vec::new(),
///     Vec::new(),
/// )
/// .unwrap();
///
/// assert!(try_move(&mut state, Mover::Hero, Direction::East));
/// assert!(!try_move(&mut state, Mover::Hero, Direction::East)); // enemy in the way
/// assert_eq!(state.hero().position(), Position::new(2, 1));
/// ```
pub fn try_move(state: &mut GameState, mover: Mover, direction: Direction) -> bool {
    let from = match mover {
        Mover::Hero => state.hero().position(),
        Mover::Enemy(index) => match state.enemies().get(index) {
            Some(enemy) => enemy.position(),
            None => return false,
        },
    };
    let target = from.step(direction);

    if !state.grid().is_floor(target) {
        return false;
    }

    let blocked = match mover {
        Mover::Hero => state.enemy_index_at(target).is_some(),
        Mover::Enemy(index) => {
            state.hero().position() == target
                || state
                    .enemies()
                    .iter()
                    .enumerate()
                    .any(|(other, enemy)| other != index && enemy.position() == target)
        }
    };
    if blocked {
        return false;
    }

    match mover {
        Mover::Hero => state.hero_mut().set_position(target),
        Mover::Enemy(index) => state.enemies_mut()[index].set_position(target),
    }
    trace!("{:?} moved {:?} to ({}, {})", mover, direction, target.x, target.y);
    true
}
