//! # Generation Module
//!
//! Procedural map generation and entity placement.
//!
//! Generation runs once, before play: the [`MapGenerator`] carves a grid and the
//! [`EntityPlacer`] seats the hero, items and enemies on its floor cells. Both draw
//! from the same injected [`RandomSource`](crate::RandomSource), so a seed fixes the
//! whole starting layout.

pub mod dungeon;
pub mod placement;

pub use dungeon::*;
pub use placement::*;

use crate::config::{
    DEFAULT_ENEMY_COUNT, DEFAULT_MAP_HEIGHT, DEFAULT_MAP_WIDTH, DEFAULT_MAX_CORRIDORS,
    DEFAULT_MAX_ROOMS, DEFAULT_MIN_CORRIDORS, DEFAULT_MIN_ROOMS, DEFAULT_POTION_COUNT,
    DEFAULT_ROOM_MAX_SIZE, DEFAULT_ROOM_MIN_SIZE, DEFAULT_SWORD_COUNT, ROOM_PADDING,
};
use crate::{Position, WarrenError, WarrenResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for a new game.
///
/// Read once at generation time; nothing here is consulted during play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Random seed for reproducible generation and AI
    pub seed: u64,
    /// Map width in cells
    pub width: u32,
    /// Map height in cells
    pub height: u32,
    /// Minimum room side
    pub min_room_size: u32,
    /// Maximum room side
    pub max_room_size: u32,
    /// Minimum number of room placement attempts
    pub min_rooms: u32,
    /// Maximum number of room placement attempts
    pub max_rooms: u32,
    /// Minimum corridors per axis
    pub min_corridors: u32,
    /// Maximum corridors per axis
    pub max_corridors: u32,
    pub sword_count: usize,
    pub potion_count: usize,
    pub enemy_count: usize,
}

impl GenerationConfig {
    /// Creates the standard configuration: a 40x24 map with ten enemies.
    ///
    /// # Examples
    ///
    /// ```
    /// use warren::GenerationConfig;
    ///
    /// let config = GenerationConfig::new(12345);
    /// assert_eq!(config.width, 40);
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            width: DEFAULT_MAP_WIDTH,
            height: DEFAULT_MAP_HEIGHT,
            min_room_size: DEFAULT_ROOM_MIN_SIZE,
            max_room_size: DEFAULT_ROOM_MAX_SIZE,
            min_rooms: DEFAULT_MIN_ROOMS,
            max_rooms: DEFAULT_MAX_ROOMS,
            min_corridors: DEFAULT_MIN_CORRIDORS,
            max_corridors: DEFAULT_MAX_CORRIDORS,
            sword_count: DEFAULT_SWORD_COUNT,
            potion_count: DEFAULT_POTION_COUNT,
            enemy_count: DEFAULT_ENEMY_COUNT,
        }
    }

    /// Creates a configuration for testing with smaller, simpler maps.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            seed,
            width: 20,
            height: 12,
            min_room_size: 2,
            max_room_size: 4,
            min_rooms: 2,
            max_rooms: 4,
            min_corridors: 1,
            max_corridors: 2,
            sword_count: 1,
            potion_count: 2,
            enemy_count: 3,
        }
    }

    /// The entity counts handed to the placer.
    pub fn placement_counts(&self) -> PlacementCounts {
        PlacementCounts {
            swords: self.sword_count,
            potions: self.potion_count,
            enemies: self.enemy_count,
        }
    }

    /// Checks that every range can be sampled and every room fits with its border.
    pub fn validate(&self) -> WarrenResult<()> {
        let invalid = |message: String| Err(WarrenError::InvalidConfig(message));

        // The generator samples in `i32`; anything larger cannot be represented there.
        let sampled = [
            ("width", self.width),
            ("height", self.height),
            ("min_room_size", self.min_room_size),
            ("max_room_size", self.max_room_size),
            ("min_rooms", self.min_rooms),
            ("max_rooms", self.max_rooms),
            ("min_corridors", self.min_corridors),
            ("max_corridors", self.max_corridors),
        ];
        if let Some((name, value)) = sampled
            .iter()
            .find(|(_, value)| i32::try_from(*value).is_err())
        {
            return invalid(format!("{} = {} exceeds {}", name, value, i32::MAX));
        }

        if self.width < 3 || self.height < 3 {
            return invalid(format!(
                "Map {}x{} has no interior; need at least 3x3",
                self.width, self.height
            ));
        }
        if self.min_room_size < 1 {
            return invalid("Rooms must be at least 1 cell wide".to_string());
        }
        if self.min_room_size > self.max_room_size {
            return invalid(format!(
                "Room size range {}..={} is empty",
                self.min_room_size, self.max_room_size
            ));
        }

        // A room plus its border on both sides must fit: size + 2 < dimension.
        let border = 2 * ROOM_PADDING as u32;
        if self.max_room_size >= self.width.saturating_sub(border)
            || self.max_room_size >= self.height.saturating_sub(border)
        {
            return invalid(format!(
                "Rooms up to {} cells do not fit inside a {}x{} map",
                self.max_room_size, self.width, self.height
            ));
        }
        if self.min_rooms > self.max_rooms {
            return invalid(format!(
                "Room count range {}..={} is empty",
                self.min_rooms, self.max_rooms
            ));
        }
        if self.min_corridors > self.max_corridors {
            return invalid(format!(
                "Corridor count range {}..={} is empty",
                self.min_corridors, self.max_corridors
            ));
        }
        Ok(())
    }

    /// Parses a configuration from JSON and validates it.
    pub fn from_json(json: &str) -> WarrenResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration as pretty JSON.
    pub fn to_json(&self) -> WarrenResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Loads and validates a JSON configuration file.
    pub fn load_from_file(path: impl AsRef<Path>) -> WarrenResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(42)
    }
}

/// How many of each entity the placer tries to seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlacementCounts {
    pub swords: usize,
    pub potions: usize,
    pub enemies: usize,
}

/// A rectangular room. Only exists while a map is being generated.
///
/// Every cell of the rectangle becomes floor; the wall border lies outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Top-left corner of the room
    pub top_left: Position,
    pub width: u32,
    pub height: u32,
}

impl Room {
    /// Creates a new room.
    ///
    /// # Examples
    ///
    /// ```
    /// use warren::{Position, Room};
    ///
    /// let room = Room::new(Position::new(5, 5), 4, 3);
    /// assert_eq!(room.bottom_right(), Position::new(8, 7));
    /// assert_eq!(room.positions().len(), 12);
    /// ```
    pub fn new(top_left: Position, width: u32, height: u32) -> Self {
        Self {
            top_left,
            width,
            height,
        }
    }

    /// Gets the bottom-right corner of the room.
    pub fn bottom_right(&self) -> Position {
        Position::new(
            self.top_left.x + self.width as i32 - 1,
            self.top_left.y + self.height as i32 - 1,
        )
    }

    /// Whether the room and a `padding`-cell border around it lie strictly inside the map.
    ///
    /// The far border may not reach the last row or column.
    pub fn fits_within(&self, map_width: u32, map_height: u32, padding: i32) -> bool {
        self.top_left.x >= padding
            && self.top_left.y >= padding
            && self.top_left.x + self.width as i32 + padding < map_width as i32
            && self.top_left.y + self.height as i32 + padding < map_height as i32
    }

    /// Checks if this room comes closer than `padding` free cells to another.
    ///
    /// With a padding of 1 two rooms must keep at least two wall cells between them,
    /// so their borders never touch either.
    pub fn overlaps_with_padding(&self, other: &Room, padding: i32) -> bool {
        let gap = padding + 1;
        !(self.top_left.x > other.bottom_right().x + gap
            || self.bottom_right().x + gap < other.top_left.x
            || self.top_left.y > other.bottom_right().y + gap
            || self.bottom_right().y + gap < other.top_left.y)
    }

    /// Gets all positions within this room.
    pub fn positions(&self) -> Vec<Position> {
        let mut positions = Vec::new();

        for y in self.top_left.y..(self.top_left.y + self.height as i32) {
            for x in self.top_left.x..(self.top_left.x + self.width as i32) {
                positions.push(Position::new(x, y));
            }
        }

        positions
    }
}

/// Utility functions for generation algorithms.
pub mod utils {
    use super::*;
    use crate::Grid;
    use std::collections::{HashSet, VecDeque};

    /// Floor cells reachable from `start` by cardinal steps.
    ///
    /// Empty when `start` is not a floor cell.
    pub fn reachable_floor(grid: &Grid, start: Position) -> HashSet<Position> {
        let mut visited = HashSet::new();
        if !grid.is_floor(start) {
            return visited;
        }

        let mut queue = VecDeque::new();
        visited.insert(start);
        queue.push_back(start);

        while let Some(pos) = queue.pop_front() {
            for adjacent_pos in pos.cardinal_adjacent_positions() {
                if grid.is_floor(adjacent_pos) && visited.insert(adjacent_pos) {
                    queue.push_back(adjacent_pos);
                }
            }
        }

        visited
    }

    /// Whether every floor cell can reach every other one.
    ///
    /// A grid without floor counts as connected.
    pub fn is_fully_connected(grid: &Grid) -> bool {
        let floors = grid.floor_positions();
        match floors.first() {
            Some(&start) => reachable_floor(grid, start).len() == floors.len(),
            None => true,
        }
    }

    /// Validates that a grid meets the basic playability requirement.
    pub fn validate_grid(grid: &Grid) -> WarrenResult<()> {
        if !grid.has_floor() {
            return Err(WarrenError::GenerationFailed(
                "Grid has no floor cells".to_string(),
            ));
        }
        Ok(())
    }
}
