//! Grid cells: wall flags and the single feature occupying the cell

use serde::{Deserialize, Serialize};

use crate::core::types::Direction;
use crate::dungeon::secret::SecretPassage;

/// Wall flags for one cell, all present by default.
///
/// Walls are shared: the matching flag on the neighboring cell must
/// always agree. Only `Grid::carve` may change them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Walls {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Default for Walls {
    fn default() -> Self {
        Self {
            top: true,
            right: true,
            bottom: true,
            left: true,
        }
    }
}

impl Walls {
    pub fn get(&self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.top,
            Direction::Right => self.right,
            Direction::Down => self.bottom,
            Direction::Left => self.left,
        }
    }

    pub fn set(&mut self, dir: Direction, present: bool) {
        match dir {
            Direction::Up => self.top = present,
            Direction::Right => self.right = present,
            Direction::Down => self.bottom = present,
            Direction::Left => self.left = present,
        }
    }
}

/// What occupies a cell. Discriminant order is the rendering priority.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellFeature {
    Exit,
    Portal,
    StairUp,
    StairDown,
    Chest { opened: bool },
    Trap { triggered: bool },
    Minion { defeated: bool },
    Secret(SecretPassage),
    #[default]
    Empty,
}

/// One grid cell
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub walls: Walls,
    /// Generation-time scratch flag; always false outside the carver.
    #[serde(skip)]
    pub visited: bool,
    #[serde(default)]
    pub feature: CellFeature,
}

/// Rendering tag handed to the (external) display layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellType {
    Exit,
    Portal,
    StairUp,
    StairDown,
    Chest,
    Trap,
    Minion,
    Floor,
}

/// Resolve a cell to a single rendering tag with fixed priority:
/// exit > portal > stairs > unopened chest > untriggered trap >
/// undefeated minion > floor. Spent features and secret passages
/// (hidden by definition) render as floor.
pub fn cell_type(cell: &Cell) -> CellType {
    match &cell.feature {
        CellFeature::Exit => CellType::Exit,
        CellFeature::Portal => CellType::Portal,
        CellFeature::StairUp => CellType::StairUp,
        CellFeature::StairDown => CellType::StairDown,
        CellFeature::Chest { opened: false } => CellType::Chest,
        CellFeature::Trap { triggered: false } => CellType::Trap,
        CellFeature::Minion { defeated: false } => CellType::Minion,
        _ => CellType::Floor,
    }
}
