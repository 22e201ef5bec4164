use std::collections::{HashMap, HashSet};

use super::{Exploration, reconstruct_path};
use crate::maze::{Grid, Position, open_neighbors};

/// Depth-first search with an explicit stack. Finds a path whenever one exists,
/// but not necessarily the shortest.
pub fn solve_dfs(grid: &Grid, start: Position, goal: Position) -> Exploration {
    let mut stack = vec![start];
    let mut visited: HashSet<Position> = HashSet::new();
    let mut parents: HashMap<Position, Position> = HashMap::new();

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        if current == goal {
            return Exploration {
                path: reconstruct_path(&parents, start, goal),
                visited_count: visited.len(),
            };
        }

        let neighbors = open_neighbors(grid, current)
            .filter(|next| !visited.contains(next))
            .collect::<Vec<_>>();
        // Push in reverse so the first direction is explored first
        for neighbor in neighbors.into_iter().rev() {
            // The latest push is popped first, so it owns the parent link
            parents.insert(neighbor, current);
            stack.push(neighbor);
        }
    }

    Exploration {
        path: Vec::new(),
        visited_count: visited.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Cell;

    #[test]
    fn test_dfs_prefers_first_direction() {
        // Open 3x3: north is tried before east
        let grid = Grid::new(3, 3, Cell::Empty);
        let result = solve_dfs(&grid, Position::new(0, 2), Position::new(0, 0));
        assert_eq!(result.path.first(), Some(&Position::new(0, 2)));
        assert_eq!(result.path.last(), Some(&Position::new(0, 0)));
        assert_eq!(result.path[1], Position::new(0, 1));
        assert!(
            result
                .path
                .windows(2)
                .all(|pair| pair[0].manhattan_distance(pair[1]) == 1)
        );
    }

    #[test]
    fn test_dfs_parent_links_stay_valid_after_overwrite() {
        // (1, 1) is pushed from both (1, 0) and (0, 1); the path must still be simple
        let grid = Grid::new(4, 4, Cell::Empty);
        let result = solve_dfs(&grid, Position::new(0, 0), Position::new(3, 3));
        let unique = result.path.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), result.path.len());
        assert_eq!(result.path.last(), Some(&Position::new(3, 3)));
    }
}
