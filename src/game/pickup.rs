//! # Pickups
//!
//! Items are collected by stepping onto them.

use crate::config::{POTION_HEAL, SWORD_POWER_BONUS};
use crate::{Actor, GameEvent, GameState};
use log::debug;

/// Collects whatever lies under the hero.
///
/// The potion and sword checks are independent: at most one item of each kind is
/// taken per call. A potion heals up to the health cap; a sword raises power.
pub fn check_pickups(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let position = state.hero().position();

    if let Some(index) = state
        .potions()
        .iter()
        .position(|potion| potion.position == position)
    {
        state.potions_mut().remove(index);
        let healed = state.hero_mut().heal(POTION_HEAL);
        debug!("Potion at ({}, {}) healed {}", position.x, position.y, healed);
        events.push(GameEvent::PickupPotion { position, healed });
    }

    if let Some(index) = state
        .swords()
        .iter()
        .position(|sword| sword.position == position)
    {
        state.swords_mut().remove(index);
        state.hero_mut().gain_power(SWORD_POWER_BONUS);
        let power = state.hero().power();
        debug!("Sword at ({}, {}), power now {}", position.x, position.y, power);
        events.push(GameEvent::PickupSword { position, power });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CellKind, Enemy, Grid, Hero, Item, Position};

    fn state_with(hero: Hero, swords: Vec<Item>, potions: Vec<Item>) -> GameState {
        let mut grid = Grid::new(5, 5);
        for y in 1..4 {
            for x in 1..4 {
                grid.set_kind(Position::new(x, y), CellKind::Floor).unwrap();
            }
        }
        GameState::from_parts(
            grid,
            hero,
            vec![Enemy::new(Position::new(3, 3))],
            swords,
            potions,
        )
        .unwrap()
    }

    #[test]
    fn test_potion_heals_and_is_removed() {
        let mut state = state_with(
            Hero::with_stats(Position::new(1, 1), 50, 1),
            Vec::new(),
            vec![Item::potion(Position::new(1, 1)), Item::potion(Position::new(2, 2))],
        );
        let mut events = Vec::new();

        check_pickups(&mut state, &mut events);
        assert_eq!(state.hero().health(), 70);
        assert_eq!(state.potions(), &[Item::potion(Position::new(2, 2))]);
        assert_eq!(
            events,
            vec![GameEvent::PickupPotion {
                position: Position::new(1, 1),
                healed: 20
            }]
        );
    }

    #[test]
    fn test_potion_heal_is_capped() {
        let mut state = state_with(
            Hero::with_stats(Position::new(1, 1), 95, 1),
            Vec::new(),
            vec![Item::potion(Position::new(1, 1))],
        );
        let mut events = Vec::new();

        check_pickups(&mut state, &mut events);
        assert_eq!(state.hero().health(), 100);
        assert!(state.potions().is_empty());
    }

    #[test]
    fn test_sword_raises_power() {
        let mut state = state_with(
            Hero::new(Position::new(2, 1)),
            vec![Item::sword(Position::new(2, 1))],
            Vec::new(),
        );
        let mut events = Vec::new();

        check_pickups(&mut state, &mut events);
        assert_eq!(state.hero().power(), 2);
        assert!(state.swords().is_empty());
    }

    #[test]
    fn test_both_items_on_one_cell() {
        let mut state = state_with(
            Hero::with_stats(Position::new(2, 2), 40, 1),
            vec![Item::sword(Position::new(2, 2)), Item::sword(Position::new(2, 2))],
            vec![Item::potion(Position::new(2, 2))],
        );
        let mut events = Vec::new();

        check_pickups(&mut state, &mut events);
        assert_eq!(events.len(), 2);
        assert_eq!(state.hero().health(), 60);
        assert_eq!(state.hero().power(), 2);
        // Only one sword is taken per check.
        assert_eq!(state.swords().len(), 1);
    }

    #[test]
    fn test_nothing_underfoot() {
        let mut state = state_with(
            Hero::new(Position::new(1, 2)),
            vec![Item::sword(Position::new(2, 2))],
            vec![Item::potion(Position::new(1, 1))],
        );
        let mut events = Vec::new();

        check_pickups(&mut state, &mut events);
        assert!(events.is_empty());
        assert_eq!(state.swords().len(), 1);
        assert_eq!(state.potions().len(), 1);
    }
}
