//! # Entity Placement
//!
//! Seats the hero, items and enemies on distinct floor cells.

use crate::{Enemy, Grid, Hero, Item, PlacementCounts, RandomSource, WarrenError, WarrenResult};
use log::debug;

/// The starting layout produced by [`EntityPlacer::place`].
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub hero: Hero,
    pub enemies: Vec<Enemy>,
    pub swords: Vec<Item>,
    pub potions: Vec<Item>,
}

/// Draws floor cells without replacement.
///
/// Floor cells are shuffled once and then consumed from the back: the hero first,
/// then swords, potions and enemies. Each class stops early when cells run out, so
/// a cramped map yields fewer entities rather than an error.
#[derive(Debug, Clone, Default)]
pub struct EntityPlacer;

impl EntityPlacer {
    pub fn new() -> Self {
        Self
    }

    /// Places entities on `grid`.
    ///
    /// Fails only when the grid has no floor for the hero.
    ///
    /// # Examples
    ///
    /// ```
    /// use warren::{CellKind, EntityPlacer, Grid, PlacementCounts, Position, SeededRandom};
    ///
    /// let mut grid = Grid::new(5, 3);
    /// for x in 1..4 {
    ///     grid.set_kind(Position::new(x, 1), CellKind::Floor).unwrap();
    /// }
    /// let counts = PlacementCounts { swords: 1, potions: 5, enemies: 5 };
    /// let placement = EntityPlacer::new()
    ///     .place(&grid, &counts, &mut SeededRandom::new(3))
    ///     .unwrap();
    /// assert_eq!(placement.swords.len(), 1);
    /// assert_eq!(placement.potions.len(), 1);
    /// assert!(placement.enemies.is_empty());
    /// ```
    pub fn place<R: RandomSource>(
        &self,
        grid: &Grid,
        counts: &PlacementCounts,
        rng: &mut R,
    ) -> WarrenResult<Placement> {
        let mut free = grid.floor_positions();
        rng.shuffle(&mut free);

        let hero_pos = free.pop().ok_or_else(|| {
            WarrenError::GenerationFailed("No floor cell available for the hero".to_string())
        })?;

        let swords: Vec<Item> = take_from_back(&mut free, counts.swords)
            .into_iter()
            .map(Item::sword)
            .collect();
        let potions: Vec<Item> = take_from_back(&mut free, counts.potions)
            .into_iter()
            .map(Item::potion)
            .collect();
        let enemies: Vec<Enemy> = take_from_back(&mut free, counts.enemies)
            .into_iter()
            .map(Enemy::new)
            .collect();

        debug!(
            "Placed hero at {:?}, {} swords, {} potions, {} enemies ({} floor cells left)",
            hero_pos,
            swords.len(),
            potions.len(),
            enemies.len(),
            free.len()
        );

        Ok(Placement {
            hero: Hero::new(hero_pos),
            enemies,
            swords,
            potions,
        })
    }
}

/// Pops up to `count` items off the back of `free`, in pop order.
fn take_from_back<T>(free: &mut Vec<T>, count: usize) -> Vec<T> {
    let mut taken = Vec::with_capacity(count.min(free.len()));
    while taken.len() < count {
        match free.pop() {
            Some(item) => taken.push(item),
            None => break,
        }
    }
    taken
}
