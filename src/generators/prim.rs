use rand::Rng;

use crate::maze::{Direction, Grid, Lattice, Position, fill_spaced_cells};

/// Randomized Prim's algorithm over a list of frontier walls.
///
/// A wall is carved only when exactly one of the two cells it separates is
/// already part of the maze, which is what keeps the result acyclic.
pub fn randomized_prim<R: Rng>(grid: &mut Grid, rng: &mut R) {
    fill_spaced_cells(grid);
    let lattice = Lattice::of(grid);
    if lattice.is_empty() {
        return;
    }

    let mut in_maze = vec![false; lattice.len()];

    // Initialize the starting point
    let start = Position::new(
        rng.random_range(0..lattice.width()),
        rng.random_range(0..lattice.height()),
    );
    in_maze[lattice.index(start)] = true;

    // Each frontier wall is stored as the cell it was discovered from plus the
    // direction of the wall, so the wall position is `wall_between(cell, dir)`.
    let mut frontier: Vec<(Position, Direction)> = Vec::new();
    push_walls(&lattice, start, &mut frontier);

    while !frontier.is_empty() {
        // Randomly select a wall from the frontier
        let idx = rng.random_range(0..frontier.len());
        let (cell, dir) = frontier.swap_remove(idx);
        let Some(next) = lattice.neighbor(cell, dir) else {
            continue;
        };

        let adjacent_in_maze =
            in_maze[lattice.index(cell)] as u8 + in_maze[lattice.index(next)] as u8;
        if adjacent_in_maze != 1 {
            // Both sides already connected; opening this wall would close a loop
            continue;
        }

        let outside = if in_maze[lattice.index(next)] {
            cell
        } else {
            next
        };
        Lattice::carve(grid, cell, dir);
        in_maze[lattice.index(outside)] = true;

        push_walls(&lattice, outside, &mut frontier);
    }
}

/// Add the walls of `cell` that lead to another lattice cell.
fn push_walls(lattice: &Lattice, cell: Position, frontier: &mut Vec<(Position, Direction)>) {
    frontier.extend(lattice.neighbors(cell).map(|(dir, _)| (cell, dir)));
}
