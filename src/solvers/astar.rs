use super::{Exploration, dijkstra::best_first};
use crate::maze::{Grid, Position};

/// A* search with the Manhattan distance heuristic.
///
/// Manhattan distance never overestimates on a 4-connected unit-cost grid and
/// changes by at most one per step, so every cell is finalized with its true
/// distance and the result is as short as Dijkstra's.
pub fn solve_astar(grid: &Grid, start: Position, goal: Position) -> Exploration {
    best_first(grid, start, goal, |pos| pos.manhattan_distance(goal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Cell;
    use crate::solvers::solve_dijkstra;

    #[test]
    fn test_astar_heads_straight_for_goal() {
        let grid = Grid::new(7, 7, Cell::Empty);
        let start = Position::new(3, 3);
        let goal = Position::new(3, 0);
        let result = solve_astar(&grid, start, goal);
        assert_eq!(result.path.len(), 4);
        // Only the straight line has f == 3 with the lowest heuristic at each step
        assert_eq!(result.visited_count, 4);
        assert!(result.visited_count < solve_dijkstra(&grid, start, goal).visited_count);
    }

    #[test]
    fn test_astar_routes_around_wall() {
        let grid = Grid::from_rows(&[
            [0u8, 0, 0, 0, 0],
            [0, 1, 1, 1, 0],
            [0, 0, 0, 1, 0],
        ])
        .unwrap();
        let result = solve_astar(&grid, Position::new(2, 2), Position::new(4, 2));
        // Left around the wall and back down the right side
        assert_eq!(result.path.len(), 11);
        assert_eq!(result.path.first(), Some(&Position::new(2, 2)));
        assert_eq!(result.path.last(), Some(&Position::new(4, 2)));
    }
}
