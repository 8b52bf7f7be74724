//! # Dungeon Generation
//!
//! Procedural map layout using padded rooms and full-span corridors.
//!
//! The generator:
//! 1. Fills the grid with wall
//! 2. Samples a number of room candidates and keeps the ones that fit and do not crowd
//!    an accepted room; rejected candidates are dropped, not retried
//! 3. Carves the accepted rooms
//! 4. Carves the same number of full-width rows and full-height columns
//! 5. Forces one random interior cell to floor if nothing was carved at all
//!
//! Only the last step is a guarantee. Rooms are not necessarily reachable from each
//! other; [`utils::is_fully_connected`](crate::generation::utils::is_fully_connected)
//! reports on that for diagnostics.

use crate::config::ROOM_PADDING;
use crate::generation::utils;
use crate::{
    CellKind, GenerationConfig, Grid, Position, RandomSource, Room, WarrenResult,
};
use log::{debug, warn};

/// Everything the generator produced, for inspection.
#[derive(Debug, Clone)]
pub struct GeneratedMap {
    pub grid: Grid,
    /// Rooms that passed validation, in acceptance order
    pub rooms: Vec<Room>,
    /// Number of room candidates sampled
    pub rooms_attempted: u32,
    /// Corridors carved along each axis
    pub corridor_count: u32,
}

/// Map generator using the room-and-corridor algorithm.
#[derive(Debug, Clone, Default)]
pub struct MapGenerator;

impl MapGenerator {
    /// Creates a new map generator.
    ///
    /// # Examples
    ///
    /// ```
    /// use warren::{GenerationConfig, MapGenerator, SeededRandom};
    ///
    /// let config = GenerationConfig::new(7);
    /// let grid = MapGenerator::new()
    ///     .generate(&config, &mut SeededRandom::new(config.seed))
    ///     .unwrap();
    /// assert_eq!((grid.width, grid.height), (40, 24));
    /// assert!(grid.has_floor());
    /// ```
    pub fn new() -> Self {
        Self
    }

    /// Generates a grid.
    ///
    /// Fails only when the configuration itself is invalid.
    pub fn generate<R: RandomSource>(
        &self,
        config: &GenerationConfig,
        rng: &mut R,
    ) -> WarrenResult<Grid> {
        Ok(self.generate_layout(config, rng)?.grid)
    }

    /// Generates a grid and reports the rooms and corridors behind it.
    pub fn generate_layout<R: RandomSource>(
        &self,
        config: &GenerationConfig,
        rng: &mut R,
    ) -> WarrenResult<GeneratedMap> {
        config.validate()?;

        let mut grid = Grid::new(config.width, config.height);

        let rooms_attempted =
            rng.int_inclusive(config.min_rooms as i32, config.max_rooms as i32) as u32;
        let rooms = self.place_rooms(&mut grid, config, rng, rooms_attempted)?;

        let corridor_count =
            rng.int_inclusive(config.min_corridors as i32, config.max_corridors as i32) as u32;
        self.carve_corridors(&mut grid, rng, corridor_count)?;

        self.ensure_floor(&mut grid, rng)?;
        utils::validate_grid(&grid)?;

        let connected = utils::is_fully_connected(&grid);
        debug!(
            "Generated {}x{} map: {}/{} rooms, {} corridors per axis, {} floor cells, connected={}",
            grid.width,
            grid.height,
            rooms.len(),
            rooms_attempted,
            corridor_count,
            grid.floor_count(),
            connected
        );
        if !connected {
            warn!("Generated map has unreachable floor regions");
        }

        Ok(GeneratedMap {
            grid,
            rooms,
            rooms_attempted,
            corridor_count,
        })
    }

    /// Samples `attempts` room candidates and carves the valid ones.
    fn place_rooms<R: RandomSource>(
        &self,
        grid: &mut Grid,
        config: &GenerationConfig,
        rng: &mut R,
        attempts: u32,
    ) -> WarrenResult<Vec<Room>> {
        let mut rooms: Vec<Room> = Vec::new();

        for _ in 0..attempts {
            let room = self.generate_room_candidate(config, rng);
            if self.is_room_valid(config, &room, &rooms) {
                self.carve_room(grid, &room)?;
                rooms.push(room);
            }
        }

        Ok(rooms)
    }

    /// Samples a room whose border stays strictly inside the map.
    fn generate_room_candidate<R: RandomSource>(
        &self,
        config: &GenerationConfig,
        rng: &mut R,
    ) -> Room {
        let width = rng.int_inclusive(config.min_room_size as i32, config.max_room_size as i32);
        let height = rng.int_inclusive(config.min_room_size as i32, config.max_room_size as i32);
        let x = rng.int_inclusive(ROOM_PADDING, config.width as i32 - width - ROOM_PADDING - 1);
        let y = rng.int_inclusive(ROOM_PADDING, config.height as i32 - height - ROOM_PADDING - 1);

        Room::new(Position::new(x, y), width as u32, height as u32)
    }

    /// A candidate is valid when it fits and keeps its padding from every accepted room.
    fn is_room_valid(&self, config: &GenerationConfig, room: &Room, existing_rooms: &[Room]) -> bool {
        room.fits_within(config.width, config.height, ROOM_PADDING)
            && !existing_rooms
                .iter()
                .any(|existing| room.overlaps_with_padding(existing, ROOM_PADDING))
    }

    /// Carves out a room by setting all its cells to floor.
    fn carve_room(&self, grid: &mut Grid, room: &Room) -> WarrenResult<()> {
        for pos in room.positions() {
            grid.set_kind(pos, CellKind::Floor)?;
        }
        Ok(())
    }

    /// Carves `count` full-width rows, then `count` full-height columns.
    ///
    /// Corridors ignore rooms and each other; the outer ring of the map stays wall.
    fn carve_corridors<R: RandomSource>(
        &self,
        grid: &mut Grid,
        rng: &mut R,
        count: u32,
    ) -> WarrenResult<()> {
        let (width, height) = (grid.width as i32, grid.height as i32);

        for _ in 0..count {
            let y = rng.int_inclusive(1, height - 2);
            for x in 1..width - 1 {
                grid.set_kind(Position::new(x, y), CellKind::Floor)?;
            }
        }

        for _ in 0..count {
            let x = rng.int_inclusive(1, width - 2);
            for y in 1..height - 1 {
                grid.set_kind(Position::new(x, y), CellKind::Floor)?;
            }
        }

        Ok(())
    }

    /// Forces one random interior cell to floor when the grid has none.
    fn ensure_floor<R: RandomSource>(&self, grid: &mut Grid, rng: &mut R) -> WarrenResult<()> {
        if grid.has_floor() {
            return Ok(());
        }

        let x = rng.int_inclusive(1, grid.width as i32 - 2);
        let y = rng.int_inclusive(1, grid.height as i32 - 2);
        debug!("No floor carved; opening ({}, {})", x, y);
        grid.set_kind(Position::new(x, y), CellKind::Floor)
    }
}
