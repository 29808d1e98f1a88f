//! Square cell arena with symmetric wall carving

use serde::{Deserialize, Serialize};

use crate::core::error::{DelveError, Result};
use crate::core::types::{Direction, Position};
use crate::dungeon::cell::Cell;

/// N x N grid of cells, row-major. The grid exclusively owns its cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Fully-walled grid with every feature slot empty.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(DelveError::InvalidGridSize(0));
        }
        Ok(Self {
            size,
            cells: vec![Cell::default(); size * size],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        if x < self.size && y < self.size {
            Some(&self.cells[self.idx(x, y)])
        } else {
            None
        }
    }

    #[inline]
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut Cell> {
        if x < self.size && y < self.size {
            let i = self.idx(x, y);
            Some(&mut self.cells[i])
        } else {
            None
        }
    }

    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.get(pos.x, pos.y)
    }

    pub fn cell_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        self.get_mut(pos.x, pos.y)
    }

    /// Open the wall between `pos` and its neighbor in `dir`.
    ///
    /// Both sides are updated so the shared-wall invariant holds. Carving
    /// at a grid edge is a no-op.
    pub fn carve(&mut self, pos: Position, dir: Direction) {
        let Some(neighbor) = dir.offset(pos.x, pos.y, self.size) else {
            return;
        };
        let a = self.idx(pos.x, pos.y);
        let b = self.idx(neighbor.x, neighbor.y);
        self.cells[a].walls.set(dir, false);
        self.cells[b].walls.set(dir.opposite(), false);
    }

    /// Is the wall on `dir` of (x, y) open? Out of bounds reads as walled.
    pub fn is_open(&self, x: usize, y: usize, dir: Direction) -> bool {
        self.get(x, y).map(|c| !c.walls.get(dir)).unwrap_or(false)
    }

    /// Orthogonal neighbors reachable from (x, y) through open walls.
    pub fn open_neighbors(&self, x: usize, y: usize) -> Vec<Position> {
        Direction::ALL
            .iter()
            .filter_map(|&dir| {
                let neighbor = dir.offset(x, y, self.size)?;
                self.is_open(x, y, dir).then_some(neighbor)
            })
            .collect()
    }

    /// Every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.size)
            .flat_map(move |y| (0..self.size).map(move |x| Position::new(x, y)))
    }

    pub fn is_visited(&self, pos: Position) -> bool {
        self.cell(pos).map(|c| c.visited).unwrap_or(false)
    }

    pub(crate) fn set_visited(&mut self, pos: Position, visited: bool) {
        if let Some(cell) = self.cell_mut(pos) {
            cell.visited = visited;
        }
    }

    /// Clear every generation-time scratch flag.
    pub(crate) fn reset_visited(&mut self) {
        for cell in &mut self.cells {
            cell.visited = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(Grid::new(0), Err(DelveError::InvalidGridSize(0))));
    }

    #[test]
    fn test_carve_updates_both_sides() {
        let mut grid = Grid::new(3).unwrap();
        grid.carve(Position::new(1, 1), Direction::Right);

        assert!(!grid.get(1, 1).unwrap().walls.right);
        assert!(!grid.get(2, 1).unwrap().walls.left);
        // Unrelated walls untouched
        assert!(grid.get(1, 1).unwrap().walls.top);
        assert!(grid.get(2, 1).unwrap().walls.right);
    }

    #[test]
    fn test_carve_at_edge_is_noop() {
        let mut grid = Grid::new(2).unwrap();
        grid.carve(Position::new(0, 0), Direction::Up);
        assert!(grid.get(0, 0).unwrap().walls.top);
    }

    #[test]
    fn test_open_neighbors_respect_walls() {
        let mut grid = Grid::new(3).unwrap();
        assert!(grid.open_neighbors(1, 1).is_empty());

        grid.carve(Position::new(1, 1), Direction::Down);
        grid.carve(Position::new(1, 1), Direction::Left);
        let mut neighbors = grid.open_neighbors(1, 1);
        neighbors.sort();
        assert_eq!(neighbors, vec![Position::new(0, 1), Position::new(1, 2)]);
    }

    #[test]
    fn test_out_of_bounds_reads_as_walled() {
        let grid = Grid::new(2).unwrap();
        assert!(grid.get(2, 0).is_none());
        assert!(!grid.is_open(5, 5, Direction::Up));
    }
}
