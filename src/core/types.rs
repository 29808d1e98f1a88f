//! Core type definitions used throughout the engine

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Grid coordinate, 0 <= x,y < grid size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn manhattan_distance(&self, other: &Self) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// Direction of a wall, move, or probe relative to a cell.
///
/// Row 0 is the top of the grid, so `Down` means increasing y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    /// Neighbor of (x, y) in this direction, None at the grid edge.
    pub fn offset(self, x: usize, y: usize, size: usize) -> Option<Position> {
        let (dx, dy) = self.delta();
        let nx = x as i64 + dx;
        let ny = y as i64 + dy;
        if nx < 0 || ny < 0 || nx >= size as i64 || ny >= size as i64 {
            return None;
        }
        Some(Position::new(nx as usize, ny as usize))
    }
}

/// Item name -> held count. Absent and zero count are equivalent.
pub type Inventory = AHashMap<String, u32>;

pub const ITEM_LANTERN: &str = "lantern";
pub const ITEM_TORCH: &str = "torch";
pub const ITEM_SECRET_SENSE: &str = "secret_sense";
