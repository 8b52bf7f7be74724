//! # Enemy AI
//!
//! One pass over every live enemy: a biased chase or a random wander, followed by
//! contact damage when the enemy ends up next to the hero.

use crate::config::{CHASE_CHANCE, ENEMY_CONTACT_DAMAGE, HORIZONTAL_CHASE_CHANCE};
use crate::{try_move, Actor, Direction, GameEvent, GameState, Mover, Position, RandomSource};
use log::trace;

/// Resolves the enemy turn.
///
/// Enemies act in list order, each exactly once. A chasing enemy tries a single step
/// toward the hero, horizontal first on a coin flip when it is not already in the
/// hero's column, vertical otherwise. A wandering enemy tries one random cardinal
/// step. Blocked steps are simply lost. Afterwards any enemy within one cell of the
/// hero (diagonals included) deals contact damage; hero health stops at zero, and a
/// strike that finds nothing left to take is not reported.
pub fn resolve_enemy_turn<R: RandomSource>(
    state: &mut GameState,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) {
    for index in 0..state.enemies().len() {
        let hero_pos = state.hero().position();
        let enemy_pos = state.enemies()[index].position();
        let dx = (hero_pos.x - enemy_pos.x).signum();
        let dy = (hero_pos.y - enemy_pos.y).signum();

        if rng.chance(CHASE_CHANCE) {
            let prefer_horizontal = rng.chance(HORIZONTAL_CHASE_CHANCE);
            let step = if prefer_horizontal && dx != 0 {
                Direction::from_delta(Position::new(dx, 0))
            } else if dy != 0 {
                Direction::from_delta(Position::new(0, dy))
            } else {
                None
            };
            if let Some(direction) = step {
                let moved = try_move(state, Mover::Enemy(index), direction);
                trace!("Enemy {} chases {:?}: moved={}", index, direction, moved);
            }
        } else {
            let roll = rng.int_inclusive(0, 3) as usize;
            let direction = Direction::all()[roll];
            let moved = try_move(state, Mover::Enemy(index), direction);
            trace!("Enemy {} wanders {:?}: moved={}", index, direction, moved);
        }

        let attacker = state.enemies()[index].position();
        if attacker.chebyshev_distance(state.hero().position()) <= 1 {
            let damage = state.hero_mut().take_damage(ENEMY_CONTACT_DAMAGE);
            trace!("Enemy {} hits hero for {}", index, damage);
            if damage > 0 {
                events.push(GameEvent::EnemyAttacked { attacker, damage });
            }
        }
    }
}
