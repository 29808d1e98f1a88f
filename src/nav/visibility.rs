//! Sight radius and wall-aware line of sight

use serde::{Deserialize, Serialize};

use crate::core::config::{LANTERN_SIGHT_BONUS, MIN_SIGHT_RADIUS, TORCH_SIGHT_BONUS};
use crate::core::types::{Direction, Inventory, Position, ITEM_LANTERN, ITEM_TORCH};
use crate::dungeon::grid::Grid;

/// An agent's sight configuration
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Visibility {
    pub base_radius: u32,
    pub temp_bonus: u32,
    pub perm_bonus: u32,
}

impl Visibility {
    /// Sight radius in cells: base and bonuses stack additively, light
    /// sources stack on top, and the result never drops below 1.
    pub fn radius(&self, inventory: &Inventory) -> u32 {
        let mut radius = self.base_radius + self.temp_bonus + self.perm_bonus;
        if holds(inventory, ITEM_LANTERN) {
            radius += LANTERN_SIGHT_BONUS;
        }
        if holds(inventory, ITEM_TORCH) {
            radius += TORCH_SIGHT_BONUS;
        }
        radius.max(MIN_SIGHT_RADIUS)
    }
}

fn holds(inventory: &Inventory, item: &str) -> bool {
    inventory.get(item).copied().unwrap_or(0) > 0
}

/// Can `from` see `to`?
///
/// Walks a Bresenham line between the two cells. Sight is blocked by any
/// closed wall the line crosses and by the grid edge. A cell trivially
/// sees itself.
pub fn has_line_of_sight(grid: &Grid, from: Position, to: Position) -> bool {
    if from == to {
        return true;
    }

    let (mut x, mut y) = (from.x as i64, from.y as i64);
    let (tx, ty) = (to.x as i64, to.y as i64);
    let dx = (tx - x).abs();
    let dy = (ty - y).abs();
    let step_x: i64 = if tx > x { 1 } else { -1 };
    let step_y: i64 = if ty > y { 1 } else { -1 };
    let mut err = dx - dy;

    while x != tx || y != ty {
        let e2 = 2 * err;
        if e2 > -dy {
            let dir = if step_x > 0 {
                Direction::Right
            } else {
                Direction::Left
            };
            if !wall_open(grid, x, y, dir) {
                return false;
            }
            err -= dy;
            x += step_x;
        }
        if e2 < dx {
            let dir = if step_y > 0 {
                Direction::Down
            } else {
                Direction::Up
            };
            if !wall_open(grid, x, y, dir) {
                return false;
            }
            err += dx;
            y += step_y;
        }
        // The line must stay on the grid.
        if x < 0 || y < 0 || grid.get(x as usize, y as usize).is_none() {
            return false;
        }
    }
    true
}

fn wall_open(grid: &Grid, x: i64, y: i64, dir: Direction) -> bool {
    if x < 0 || y < 0 {
        return false;
    }
    grid.is_open(x as usize, y as usize, dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_grid(size: usize) -> Grid {
        let mut grid = Grid::new(size).unwrap();
        for pos in grid.positions().collect::<Vec<_>>() {
            grid.carve(pos, Direction::Right);
            grid.carve(pos, Direction::Down);
        }
        grid
    }

    #[test]
    fn test_radius_stacks_bonuses_and_lights() {
        let vis = Visibility {
            base_radius: 3,
            temp_bonus: 0,
            perm_bonus: 0,
        };
        let mut inventory = Inventory::default();
        assert_eq!(vis.radius(&inventory), 3);

        inventory.insert(ITEM_TORCH.to_string(), 1);
        inventory.insert(ITEM_LANTERN.to_string(), 1);
        assert_eq!(vis.radius(&inventory), 6);
    }

    #[test]
    fn test_radius_never_below_one() {
        let vis = Visibility::default();
        assert_eq!(vis.radius(&Inventory::default()), 1);
    }

    #[test]
    fn test_zero_item_count_gives_no_bonus() {
        let vis = Visibility {
            base_radius: 2,
            temp_bonus: 0,
            perm_bonus: 0,
        };
        let mut inventory = Inventory::default();
        inventory.insert(ITEM_TORCH.to_string(), 0);
        assert_eq!(vis.radius(&inventory), 2);
    }

    #[test]
    fn test_same_cell_is_visible() {
        let grid = Grid::new(2).unwrap();
        assert!(has_line_of_sight(&grid, Position::new(1, 1), Position::new(1, 1)));
    }

    #[test]
    fn test_closed_wall_blocks_sight() {
        let mut grid = Grid::new(2).unwrap();
        assert!(!has_line_of_sight(&grid, Position::new(0, 0), Position::new(1, 0)));

        grid.carve(Position::new(0, 0), Direction::Right);
        assert!(has_line_of_sight(&grid, Position::new(0, 0), Position::new(1, 0)));
    }

    #[test]
    fn test_open_corridor_is_visible_both_ways() {
        let grid = open_grid(5);
        assert!(has_line_of_sight(&grid, Position::new(0, 2), Position::new(4, 2)));
        assert!(has_line_of_sight(&grid, Position::new(4, 2), Position::new(0, 2)));
    }

    #[test]
    fn test_diagonal_sight_through_open_cells() {
        let grid = open_grid(3);
        assert!(has_line_of_sight(&grid, Position::new(0, 0), Position::new(2, 2)));
    }

    #[test]
    fn test_mid_corridor_wall_blocks_long_sight() {
        // Only vertical walls open: horizontal sight along a row fails at
        // the very first crossing.
        let mut sealed = Grid::new(5).unwrap();
        for pos in sealed.positions().collect::<Vec<_>>() {
            sealed.carve(pos, Direction::Down);
        }
        assert!(!has_line_of_sight(&sealed, Position::new(0, 2), Position::new(4, 2)));
        assert!(has_line_of_sight(&sealed, Position::new(2, 0), Position::new(2, 4)));
    }
}
