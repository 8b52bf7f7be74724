//! # Combat
//!
//! The hero's melee attack against every enemy in the surrounding eight cells.

use crate::config::DAMAGE_PER_POWER;
use crate::{Actor, GameEvent, GameState};
use log::debug;

/// Summary of a single attack command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    /// No enemy was in reach; nothing changed
    None,
    /// At least one enemy was wounded and none died
    Hit,
    /// At least one enemy died
    Kills,
}

/// Resolves a hero attack.
///
/// Each of the 8 neighbouring cells is checked in row order from the north-west.
/// Every enemy found loses `DAMAGE_PER_POWER * power` health and is removed when its
/// health drops to zero or below. One event is pushed per enemy struck, or a single
/// `AttackNoTarget` when nothing was in reach.
pub fn attack(state: &mut GameState, events: &mut Vec<GameEvent>) -> AttackOutcome {
    let origin = state.hero().position();
    let damage = DAMAGE_PER_POWER * state.hero().power();
    let mut outcome = AttackOutcome::None;

    for target in origin.adjacent_positions() {
        let Some(index) = state.enemy_index_at(target) else {
            continue;
        };

        let enemy = &mut state.enemies_mut()[index];
        enemy.take_damage(damage);

        if enemy.is_alive() {
            let remaining_health = enemy.health();
            debug!(
                "Hit enemy at ({}, {}), {} health left",
                target.x, target.y, remaining_health
            );
            events.push(GameEvent::AttackHit {
                target,
                damage,
                remaining_health,
            });
            if outcome == AttackOutcome::None {
                outcome = AttackOutcome::Hit;
            }
        } else {
            state.enemies_mut().remove(index);
            debug!("Killed enemy at ({}, {})", target.x, target.y);
            events.push(GameEvent::AttackKill { target, damage });
            outcome = AttackOutcome::Kills;
        }
    }

    if outcome == AttackOutcome::None {
        events.push(GameEvent::AttackNoTarget);
    }
    outcome
}
