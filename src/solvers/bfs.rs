use std::collections::{HashMap, HashSet, VecDeque};

use super::{Exploration, reconstruct_path};
use crate::maze::{Grid, Position, open_neighbors};

/// Breadth-first search. With unit step costs the first path to reach the goal
/// has the fewest cells, so the goal is accepted as soon as it is discovered.
pub fn solve_bfs(grid: &Grid, start: Position, goal: Position) -> Exploration {
    let mut queue = VecDeque::from([start]);
    let mut seen = HashSet::from([start]);
    let mut parents: HashMap<Position, Position> = HashMap::new();
    let mut visited_count = 0;

    while let Some(current) = queue.pop_front() {
        visited_count += 1;
        if current == goal {
            return Exploration {
                path: reconstruct_path(&parents, start, goal),
                visited_count,
            };
        }

        for neighbor in open_neighbors(grid, current) {
            if !seen.insert(neighbor) {
                continue;
            }
            parents.insert(neighbor, current);
            if neighbor == goal {
                // The goal counts as visited once reached
                return Exploration {
                    path: reconstruct_path(&parents, start, goal),
                    visited_count: visited_count + 1,
                };
            }
            queue.push_back(neighbor);
        }
    }

    Exploration {
        path: Vec::new(),
        visited_count,
    }
}
