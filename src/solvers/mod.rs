use std::{collections::HashMap, str::FromStr, time::Duration, time::Instant};

mod astar;
mod bfs;
mod dfs;
mod dijkstra;

pub use astar::solve_astar;
pub use bfs::solve_bfs;
pub use dfs::solve_dfs;
pub use dijkstra::solve_dijkstra;

use crate::{
    error::{MazeError, Result},
    maze::{Grid, Position},
};

/// What a single search produced, before timing is attached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exploration {
    /// Start to goal inclusive, or empty if the goal was not reached.
    pub path: Vec<Position>,
    /// Number of cells expanded.
    pub visited_count: usize,
}

/// Result of one solve call. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    path: Vec<Position>,
    visited_count: usize,
    elapsed: Duration,
}

impl SearchResult {
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    pub fn visited_count(&self) -> usize {
        self.visited_count
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of cells on the path, start and goal included.
    pub fn path_len(&self) -> usize {
        self.path.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Solver {
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
}

impl Solver {
    pub const ALL: [Solver; 4] = [Solver::Bfs, Solver::Dfs, Solver::Dijkstra, Solver::AStar];

    pub fn id(self) -> &'static str {
        match self {
            Solver::Bfs => "bfs",
            Solver::Dfs => "dfs",
            Solver::Dijkstra => "dijkstra",
            Solver::AStar => "astar",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Solver::Bfs => "FIFO frontier; fewest cells on unit-cost grids",
            Solver::Dfs => "LIFO frontier; finds a path, not the shortest one",
            Solver::Dijkstra => "Priority frontier on distance from the start",
            Solver::AStar => "Priority on distance plus Manhattan distance to the goal",
        }
    }

    /// Whether the returned path is guaranteed to be a shortest one.
    pub fn is_optimal(self) -> bool {
        !matches!(self, Solver::Dfs)
    }

    fn explore(self, grid: &Grid, start: Position, goal: Position) -> Exploration {
        match self {
            Solver::Bfs => solve_bfs(grid, start, goal),
            Solver::Dfs => solve_dfs(grid, start, goal),
            Solver::Dijkstra => solve_dijkstra(grid, start, goal),
            Solver::AStar => solve_astar(grid, start, goal),
        }
    }
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::Dijkstra => write!(f, "Dijkstra's Algorithm"),
            Solver::AStar => write!(f, "A* Search"),
        }
    }
}

impl FromStr for Solver {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        Solver::ALL
            .into_iter()
            .find(|solver| solver.id() == s)
            .ok_or_else(|| MazeError::UnknownSolver(s.to_string()))
    }
}

/// Rejects endpoints outside the grid or on a wall.
fn validate_endpoint(grid: &Grid, position: Position) -> Result<()> {
    if !grid.in_bounds(position) {
        return Err(MazeError::OutOfBounds {
            position,
            width: grid.width(),
            height: grid.height(),
        });
    }
    if grid[position].is_wall() {
        return Err(MazeError::BlockedPosition { position });
    }
    Ok(())
}

/// Solves `grid` from `start` to `goal`. Endpoints are validated before the search
/// starts; an unreachable goal is not an error but a result with an empty path.
pub fn solve_maze(
    grid: &Grid,
    solver: Solver,
    start: Position,
    goal: Position,
) -> Result<SearchResult> {
    for endpoint in [start, goal] {
        if let Err(err) = validate_endpoint(grid, endpoint) {
            tracing::warn!("[solve] rejected {} request: {}", solver.id(), err);
            return Err(err);
        }
    }

    let started = Instant::now();
    let Exploration {
        path,
        visited_count,
    } = solver.explore(grid, start, goal);
    let elapsed = started.elapsed();

    tracing::debug!(
        "[solve] {} from {} to {}: path of {} cells, {} visited, {:?}",
        solver,
        start,
        goal,
        path.len(),
        visited_count,
        elapsed
    );
    Ok(SearchResult {
        path,
        visited_count,
        elapsed,
    })
}

/// Looks a solver up by its string id and runs it.
pub fn solve_by_id(id: &str, grid: &Grid, start: Position, goal: Position) -> Result<SearchResult> {
    let solver = id.parse::<Solver>()?;
    solve_maze(grid, solver, start, goal)
}

/// Walks the parent map back from `goal` to `start` and returns the path in
/// start-to-goal order.
fn reconstruct_path(
    parents: &HashMap<Position, Position>,
    start: Position,
    goal: Position,
) -> Vec<Position> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        match parents.get(&current) {
            Some(&parent) => {
                path.push(parent);
                current = parent;
            }
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{Generator, generate_maze};
    use crate::maze::{Cell, Lattice, fill_spaced_cells};
    use proptest::prelude::*;

    fn is_connected_path(grid: &Grid, path: &[Position]) -> bool {
        path.iter().all(|&pos| grid.is_open(pos))
            && path.windows(2).all(|pair| pair[0].manhattan_distance(pair[1]) == 1)
    }

    /// 5x5 spaced lattice of 2x2 cells with all four inner walls removed.
    fn open_lattice() -> Grid {
        let mut grid = Grid::new(5, 5, Cell::Wall);
        fill_spaced_cells(&mut grid);
        for (x, y) in [(2, 1), (1, 2), (3, 2), (2, 3)] {
            grid[Position::new(x, y)] = Cell::Empty;
        }
        grid
    }

    #[test]
    fn test_open_lattice_bfs() {
        let grid = open_lattice();
        let start = Lattice::to_grid(Position::new(0, 0));
        let goal = Lattice::to_grid(Position::new(1, 1));
        let result = solve_maze(&grid, Solver::Bfs, start, goal).unwrap();
        assert!(result.found());
        assert_eq!(result.path_len(), 5);
        // Every open cell except the far corner of the lattice is expanded
        assert_eq!(result.visited_count(), 7);
        // Over logical cells: Manhattan distance 2 plus the start cell
        assert_eq!(Lattice::project_path(result.path()).len(), 3);
        assert!(is_connected_path(&grid, result.path()));
    }

    #[test]
    fn test_open_grid_bfs_visits_few_cells() {
        let grid = Grid::new(5, 5, Cell::Empty);
        let result =
            solve_maze(&grid, Solver::Bfs, Position::new(0, 0), Position::new(1, 1)).unwrap();
        assert_eq!(result.path_len(), 3);
        assert!((3..=4).contains(&result.visited_count()));
    }

    #[test]
    fn test_start_equals_goal() {
        let grid = open_lattice();
        let pos = Position::new(3, 1);
        for solver in Solver::ALL {
            let result = solve_maze(&grid, solver, pos, pos).unwrap();
            assert!(result.found(), "{}", solver);
            assert_eq!(result.path(), &[pos]);
            assert!(result.visited_count() >= 1);
        }
    }

    #[test]
    fn test_invalid_endpoints_rejected() {
        let grid = open_lattice();
        for solver in Solver::ALL {
            assert!(matches!(
                solve_maze(&grid, solver, Position::new(0, 0), Position::new(1, 1)),
                Err(MazeError::BlockedPosition { position }) if position == Position::new(0, 0)
            ));
            assert!(matches!(
                solve_maze(&grid, solver, Position::new(1, 1), Position::new(2, 2)),
                Err(MazeError::BlockedPosition { .. })
            ));
            assert!(matches!(
                solve_maze(&grid, solver, Position::new(1, 1), Position::new(5, 1)),
                Err(MazeError::OutOfBounds { width: 5, height: 5, .. })
            ));
        }
    }

    #[test]
    fn test_unreachable_goal_exhausts_component() {
        // Left pocket of 3 open cells sealed from the right pocket
        let grid = Grid::from_rows(&[
            [1u8, 1, 1, 1, 1],
            [1, 0, 1, 0, 1],
            [1, 0, 1, 0, 1],
            [1, 0, 1, 1, 1],
            [1, 1, 1, 1, 1],
        ])
        .unwrap();
        for solver in Solver::ALL {
            let result = solve_maze(&grid, solver, Position::new(1, 1), Position::new(3, 1)).unwrap();
            assert!(!result.found(), "{}", solver);
            assert!(result.path().is_empty());
            assert_eq!(result.visited_count(), 3, "{}", solver);
        }
    }

    #[test]
    fn test_registry_lookup() {
        for solver in Solver::ALL {
            assert_eq!(solver.id().parse::<Solver>().unwrap(), solver);
        }
        assert!(matches!(
            "greedy".parse::<Solver>(),
            Err(MazeError::UnknownSolver(_))
        ));
        let grid = open_lattice();
        let result = solve_by_id("astar", &grid, Position::new(1, 1), Position::new(3, 3)).unwrap();
        assert_eq!(result.path_len(), 5);
    }

    #[test]
    fn test_reconstruct_path_follows_parents() {
        let parents = HashMap::from([
            (Position::new(2, 0), Position::new(1, 0)),
            (Position::new(1, 0), Position::new(0, 0)),
        ]);
        assert_eq!(
            reconstruct_path(&parents, Position::new(0, 0), Position::new(2, 0)),
            vec![Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)]
        );
        assert!(reconstruct_path(&parents, Position::new(0, 0), Position::new(4, 4)).is_empty());
    }

    #[test]
    fn test_solvers_agree_on_perfect_mazes() {
        for generator in Generator::ALL.into_iter().filter(|g| g.is_perfect()) {
            for seed in 0..3 {
                let grid = generate_maze(generator, 25, 19, Some(seed)).unwrap().grid;
                let start = grid.first_open().unwrap();
                let goal = grid.last_open().unwrap();
                let results = Solver::ALL.map(|solver| solve_maze(&grid, solver, start, goal).unwrap());
                let [bfs, dfs, dijkstra, astar] = &results;

                assert!(results.iter().all(|r| r.found()));
                assert!(results.iter().all(|r| is_connected_path(&grid, r.path())));
                assert!(results.iter().all(|r| r.path().first() == Some(&start)));
                assert!(results.iter().all(|r| r.path().last() == Some(&goal)));
                // A perfect maze has exactly one simple path, so even DFS finds it
                assert_eq!(bfs.path(), dfs.path(), "{}", generator);
                assert_eq!(bfs.path_len(), dijkstra.path_len());
                assert_eq!(bfs.path_len(), astar.path_len());
                assert!(astar.visited_count() <= dijkstra.visited_count());
            }
        }
    }

    #[test]
    fn test_dfs_path_is_connected_on_open_grid() {
        let grid = Grid::new(12, 9, Cell::Empty);
        let start = Position::new(0, 0);
        let goal = Position::new(11, 8);
        let dfs = solve_maze(&grid, Solver::Dfs, start, goal).unwrap();
        let bfs = solve_maze(&grid, Solver::Bfs, start, goal).unwrap();
        assert!(is_connected_path(&grid, dfs.path()));
        assert!(dfs.path_len() >= bfs.path_len());
        assert_eq!(bfs.path_len(), start.manhattan_distance(goal) + 1);
    }

    #[test]
    fn test_concurrent_solves_are_independent() {
        let grid = generate_maze(Generator::Kruskal, 41, 41, Some(5)).unwrap().grid;
        let start = grid.first_open().unwrap();
        let goal = grid.last_open().unwrap();
        let grid = &grid;
        std::thread::scope(|scope| {
            let handles = Solver::ALL
                .into_iter()
                .flat_map(|solver| [solver, solver])
                .map(|solver| scope.spawn(move || solve_maze(grid, solver, start, goal).unwrap()))
                .collect::<Vec<_>>();
            let results = handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect::<Vec<_>>();
            for pair in results.chunks(2) {
                assert_eq!(pair[0].path(), pair[1].path());
                assert_eq!(pair[0].visited_count(), pair[1].visited_count());
            }
        });
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_optimal_solvers_agree_on_random_grids(seed in any::<u64>(), width in 2usize..20, height in 2usize..20) {
            let grid = generate_maze(Generator::Random, width, height, Some(seed)).unwrap().grid;
            let (Some(start), Some(goal)) = (grid.first_open(), grid.last_open()) else {
                return Ok(());
            };
            let bfs = solve_maze(&grid, Solver::Bfs, start, goal).unwrap();
            let dfs = solve_maze(&grid, Solver::Dfs, start, goal).unwrap();
            let dijkstra = solve_maze(&grid, Solver::Dijkstra, start, goal).unwrap();
            let astar = solve_maze(&grid, Solver::AStar, start, goal).unwrap();

            prop_assert_eq!(bfs.found(), dfs.found());
            prop_assert_eq!(bfs.path_len(), dijkstra.path_len());
            prop_assert_eq!(bfs.path_len(), astar.path_len());
            prop_assert!(astar.visited_count() <= dijkstra.visited_count());
            prop_assert!(is_connected_path(&grid, dfs.path()));
            prop_assert!(dfs.path_len() >= bfs.path_len());
            if !bfs.found() {
                // Exhaustive searches cover the same component
                prop_assert_eq!(dijkstra.visited_count(), astar.visited_count());
                prop_assert_eq!(dfs.visited_count(), dijkstra.visited_count());
            }
        }
    }
}
