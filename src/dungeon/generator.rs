//! Maze generation: randomized depth-first backtracking
//!
//! Carves a perfect maze - the open-wall graph is a spanning tree of the
//! cell grid, so every cell is reachable from (0,0) and no cycles exist.
//! The walk keeps an explicit stack instead of recursing, so memory stays
//! bounded on large grids.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::core::error::Result;
use crate::core::types::{Direction, Position};
use crate::dungeon::grid::Grid;

/// Generate a `size` x `size` perfect maze with the given rng.
///
/// A 1x1 maze is a single fully-walled cell. All `visited` scratch flags
/// are cleared before the grid is returned.
pub fn generate(size: usize, rng: &mut ChaCha8Rng) -> Result<Grid> {
    let mut grid = Grid::new(size)?;
    let mut stack: Vec<Position> = Vec::with_capacity(size * size);
    let mut current = Position::new(0, 0);
    grid.set_visited(current, true);

    loop {
        let unvisited = unvisited_neighbors(&grid, current);
        if unvisited.is_empty() {
            match stack.pop() {
                Some(prev) => current = prev,
                None => break,
            }
        } else {
            let (dir, next) = unvisited[rng.gen_range(0..unvisited.len())];
            grid.carve(current, dir);
            grid.set_visited(next, true);
            stack.push(current);
            current = next;
        }
    }

    grid.reset_visited();
    tracing::debug!("Generated {}x{} maze", size, size);
    Ok(grid)
}

fn unvisited_neighbors(grid: &Grid, pos: Position) -> Vec<(Direction, Position)> {
    Direction::ALL
        .iter()
        .filter_map(|&dir| {
            let neighbor = dir.offset(pos.x, pos.y, grid.size())?;
            (!grid.is_visited(neighbor)).then_some((dir, neighbor))
        })
        .collect()
}
