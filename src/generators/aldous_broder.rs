use rand::Rng;

use crate::maze::{Grid, Lattice, Position, fill_spaced_cells};

/// Aldous-Broder: an uncommitted random walk that carves only on first entry
/// into a cell. Produces a uniform spanning tree in expected O(n²) steps.
pub fn aldous_broder<R: Rng>(grid: &mut Grid, rng: &mut R) {
    fill_spaced_cells(grid);
    let lattice = Lattice::of(grid);
    if lattice.is_empty() {
        return;
    }

    let mut visited = vec![false; lattice.len()];
    let mut remaining = lattice.len() - 1;

    let mut current = Position::new(
        rng.random_range(0..lattice.width()),
        rng.random_range(0..lattice.height()),
    );
    visited[lattice.index(current)] = true;

    let mut steps = 0usize;
    while remaining > 0 {
        let neighbors = lattice.neighbors(current).collect::<Vec<_>>();
        // A lattice with more than one cell gives every cell at least one neighbor
        let (dir, next) = neighbors[rng.random_range(0..neighbors.len())];

        if !visited[lattice.index(next)] {
            Lattice::carve(grid, current, dir);
            visited[lattice.index(next)] = true;
            remaining -= 1;
        }
        current = next;
        steps += 1;
    }
    tracing::trace!("[aldous-broder] walk finished after {} steps", steps);
}
