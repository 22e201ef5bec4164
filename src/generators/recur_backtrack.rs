use rand::Rng;

use crate::maze::{Grid, Lattice, Position, fill_spaced_cells};

/// Depth-first carving over the lattice with an explicit stack.
pub fn recursive_backtrack<R: Rng>(grid: &mut Grid, rng: &mut R) {
    fill_spaced_cells(grid);
    let lattice = Lattice::of(grid);
    if lattice.is_empty() {
        return;
    }

    let mut visited = vec![false; lattice.len()];

    // Initialize the starting point
    let start = Position::new(
        rng.random_range(0..lattice.width()),
        rng.random_range(0..lattice.height()),
    );
    visited[lattice.index(start)] = true;

    // The stack keeps only carved cells
    let mut stack = vec![start];

    while let Some(cell) = stack.pop() {
        let neighbors = lattice
            .neighbors(cell)
            .filter(|&(_, next)| !visited[lattice.index(next)])
            .collect::<Vec<_>>();

        if !neighbors.is_empty() {
            let (dir, neighbor) = neighbors[rng.random_range(0..neighbors.len())];
            Lattice::carve(grid, cell, dir);
            visited[lattice.index(neighbor)] = true;
            // Put the cell back first so we can look at another neighbor of this cell later
            stack.push(cell);
            // Put the neighbor to carve the maze in that neighbor's direction
            stack.push(neighbor);
        }
    }
}
