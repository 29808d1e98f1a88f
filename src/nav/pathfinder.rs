//! A* pathfinding over the open-wall cell graph
//!
//! Uniform edge cost, Manhattan heuristic (admissible and consistent on a
//! 4-connected grid, so returned paths are optimal). The closed set is
//! capped so a search over a pathological grid terminates early.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use ahash::{AHashMap, AHashSet};

use crate::core::config::{DEFAULT_PATH_STEPS, SEARCH_BUDGET_FACTOR};
use crate::core::types::Position;
use crate::dungeon::grid::Grid;

/// Node in the A* open set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PathNode {
    pos: Position,
    f_cost: usize, // g_cost + heuristic
}

impl Ord for PathNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for a min-heap; ties broken on position so every
        // run expands nodes in the same order.
        other
            .f_cost
            .cmp(&self.f_cost)
            .then_with(|| other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for PathNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest path from `start` to `goal`, excluding the start cell and
/// including the goal.
///
/// Returns `Some(vec![])` when start == goal. Returns `None` when no
/// route exists or the closed set outgrows `max_steps * 4` - a work
/// budget, not a path-length cap.
pub fn find_path(
    grid: &Grid,
    start: Position,
    goal: Position,
    max_steps: usize,
) -> Option<Vec<Position>> {
    if grid.cell(start).is_none() || grid.cell(goal).is_none() {
        return None;
    }
    if start == goal {
        return Some(Vec::new());
    }

    let budget = max_steps.saturating_mul(SEARCH_BUDGET_FACTOR);
    let mut open_set = BinaryHeap::new();
    let mut closed_set: AHashSet<Position> = AHashSet::new();
    let mut came_from: AHashMap<Position, Position> = AHashMap::new();
    let mut g_scores: AHashMap<Position, usize> = AHashMap::new();

    g_scores.insert(start, 0);
    open_set.push(PathNode {
        pos: start,
        f_cost: start.manhattan_distance(&goal),
    });

    while let Some(current) = open_set.pop() {
        if current.pos == goal {
            return Some(reconstruct_path(&came_from, current.pos));
        }
        if !closed_set.insert(current.pos) {
            continue; // stale heap entry
        }
        if closed_set.len() > budget {
            tracing::debug!(
                "Path search from {:?} to {:?} exhausted its budget ({})",
                start,
                goal,
                budget
            );
            return None;
        }

        let Some(&current_g) = g_scores.get(&current.pos) else {
            continue;
        };

        for neighbor in grid.open_neighbors(current.pos.x, current.pos.y) {
            let tentative_g = current_g + 1;
            let neighbor_g = g_scores.get(&neighbor).copied().unwrap_or(usize::MAX);

            if tentative_g < neighbor_g {
                came_from.insert(neighbor, current.pos);
                g_scores.insert(neighbor, tentative_g);
                open_set.push(PathNode {
                    pos: neighbor,
                    f_cost: tentative_g + neighbor.manhattan_distance(&goal),
                });
            }
        }
    }

    None // No path found
}

/// `find_path` with the default search budget.
pub fn find_path_default(grid: &Grid, start: Position, goal: Position) -> Option<Vec<Position>> {
    find_path(grid, start, goal, DEFAULT_PATH_STEPS)
}

/// Orthogonal moves reachable through open walls, for minion local
/// movement without a full path search.
pub fn valid_moves(grid: &Grid, x: usize, y: usize) -> Vec<Position> {
    grid.open_neighbors(x, y)
}

/// Walk the came_from chain back from the goal. The start cell carries no
/// came_from entry, so it is pushed last and dropped.
fn reconstruct_path(came_from: &AHashMap<Position, Position>, mut current: Position) -> Vec<Position> {
    let mut path = vec![current];
    while let Some(&prev) = came_from.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.pop();
    path.reverse();
    path
}
