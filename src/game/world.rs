//! # World Representation
//!
//! The fixed-size grid of wall and floor cells the game is played on.
//!
//! Cell kinds are written only while a map is generated. During play the grid is
//! read-only; resolvers consult it for bounds and passability.

use crate::{Position, WarrenError, WarrenResult};
use serde::{Deserialize, Serialize};

/// The two kinds of cell on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    Wall,
    Floor,
}

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub kind: CellKind,
    pub position: Position,
}

impl Cell {
    /// Creates a wall cell at `position`.
    pub fn wall(position: Position) -> Self {
        Self {
            kind: CellKind::Wall,
            position,
        }
    }
}

/// A `width` × `height` grid of cells, indexed `cells[y][x]`.
///
/// # Examples
///
/// ```
/// use warren::{CellKind, Grid, Position};
///
/// let mut grid = Grid::new(5, 5);
/// assert!(!grid.is_floor(Position::new(2, 2)));
///
/// grid.set_kind(Position::new(2, 2), CellKind::Floor).unwrap();
/// assert!(grid.is_floor(Position::new(2, 2)));
/// assert_eq!(grid.floor_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub width: u32,
    pub height: u32,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Creates a grid where every cell is a wall.
    pub fn new(width: u32, height: u32) -> Self {
        let cells = (0..height as i32)
            .map(|y| {
                (0..width as i32)
                    .map(|x| Cell::wall(Position::new(x, y)))
                    .collect()
            })
            .collect();

        Self {
            width,
            height,
            cells,
        }
    }

    /// Checks whether a position lies inside the grid.
    pub fn is_valid_position(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
    }

    /// Gets the cell at a position, if it is inside the grid.
    pub fn get_cell(&self, pos: Position) -> Option<&Cell> {
        if !self.is_valid_position(pos) {
            return None;
        }
        self.cells
            .get(pos.y as usize)
            .and_then(|row| row.get(pos.x as usize))
    }

    /// Gets the cell kind at a position; out-of-bounds reads as wall.
    pub fn kind_at(&self, pos: Position) -> CellKind {
        self.get_cell(pos)
            .map(|cell| cell.kind)
            .unwrap_or(CellKind::Wall)
    }

    /// Whether the position is an in-bounds floor cell.
    pub fn is_floor(&self, pos: Position) -> bool {
        self.kind_at(pos) == CellKind::Floor
    }

    /// Sets the kind of the cell at a position.
    pub fn set_kind(&mut self, pos: Position, kind: CellKind) -> WarrenResult<()> {
        if !self.is_valid_position(pos) {
            return Err(WarrenError::InvalidState(format!(
                "Position ({}, {}) is outside the {}x{} grid",
                pos.x, pos.y, self.width, self.height
            )));
        }
        self.cells[pos.y as usize][pos.x as usize].kind = kind;
        Ok(())
    }

    /// Iterates over every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flat_map(|row| row.iter())
    }

    /// Collects all floor positions in row-major order.
    pub fn floor_positions(&self) -> Vec<Position> {
        self.cells()
            .filter(|cell| cell.kind == CellKind::Floor)
            .map(|cell| cell.position)
            .collect()
    }

    /// Counts the floor cells.
    pub fn floor_count(&self) -> usize {
        self.cells()
            .filter(|cell| cell.kind == CellKind::Floor)
            .count()
    }

    /// Whether the grid has at least one floor cell.
    pub fn has_floor(&self) -> bool {
        self.cells().any(|cell| cell.kind == CellKind::Floor)
    }
}
