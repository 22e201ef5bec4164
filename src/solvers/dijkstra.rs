use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap, HashSet},
};

use super::{Exploration, reconstruct_path};
use crate::maze::{Grid, Position, open_neighbors};

/// Frontier entry for best-first searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(super) struct TrackedCell {
    /// Cost to reach this cell from the start plus the heuristic estimate.
    /// Compared first, so it must stay the first field.
    pub total_cost: usize,
    /// Estimated cost to reach the goal from this cell (0 for Dijkstra)
    pub heuristic_cost: usize,
    /// Coordinates of the cell in the grid
    pub coord: Position,
}

/// Best-first search shared by Dijkstra and A*. Entries popped for an already
/// finalized cell are stale and dropped (lazy deletion), and only finalized cells
/// count as visited.
pub(super) fn best_first<H>(grid: &Grid, start: Position, goal: Position, heuristic: H) -> Exploration
where
    H: Fn(Position) -> usize,
{
    // Using Reverse to turn the max-heap into a min-heap
    let mut pq: BinaryHeap<Reverse<TrackedCell>> = BinaryHeap::new();
    let start_h = heuristic(start);
    pq.push(Reverse(TrackedCell {
        total_cost: start_h,
        heuristic_cost: start_h,
        coord: start,
    }));

    // Minimum known cost to reach each cell
    let mut costs: HashMap<Position, usize> = HashMap::from([(start, 0)]);
    let mut parents: HashMap<Position, Position> = HashMap::new();
    let mut finalized: HashSet<Position> = HashSet::new();

    while let Some(Reverse(current)) = pq.pop() {
        if !finalized.insert(current.coord) {
            continue;
        }
        if current.coord == goal {
            return Exploration {
                path: reconstruct_path(&parents, start, goal),
                visited_count: finalized.len(),
            };
        }

        let new_cost = costs[&current.coord] + 1; // Uniform cost for each step
        for neighbor in open_neighbors(grid, current.coord) {
            if finalized.contains(&neighbor) {
                continue;
            }
            // Only consider neighbors that we can reach with a lower cost
            let is_cheaper = costs
                .get(&neighbor)
                .is_none_or(|&existing_cost| new_cost < existing_cost);
            if !is_cheaper {
                continue;
            }
            costs.insert(neighbor, new_cost);
            parents.insert(neighbor, current.coord);
            let h = heuristic(neighbor);
            pq.push(Reverse(TrackedCell {
                total_cost: new_cost + h,
                heuristic_cost: h,
                coord: neighbor,
            }));
        }
    }

    Exploration {
        path: Vec::new(),
        visited_count: finalized.len(),
    }
}

/// Dijkstra's algorithm: best-first on distance from the start alone. On a
/// unit-cost grid it finds the same path lengths as BFS.
pub fn solve_dijkstra(grid: &Grid, start: Position, goal: Position) -> Exploration {
    best_first(grid, start, goal, |_| 0)
}
