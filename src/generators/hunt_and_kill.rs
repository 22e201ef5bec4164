use rand::Rng;

use crate::maze::{Grid, Lattice, Position, fill_spaced_cells};

/// Hunt-and-kill: random-walk carving until stuck ("kill"), then a row-major scan
/// for the first unvisited cell bordering the maze ("hunt") to resume from.
pub fn hunt_and_kill<R: Rng>(grid: &mut Grid, rng: &mut R) {
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

    let mut hunts = 0usize;
    while remaining > 0 {
        // Kill
        loop {
            let unvisited = lattice
                .neighbors(current)
                .filter(|&(_, next)| !visited[lattice.index(next)])
                .collect::<Vec<_>>();
            if unvisited.is_empty() {
                break;
            }
            let (dir, next) = unvisited[rng.random_range(0..unvisited.len())];
            Lattice::carve(grid, current, dir);
            visited[lattice.index(next)] = true;
            remaining -= 1;
            current = next;
        }

        if remaining == 0 {
            break;
        }

        // Hunt
        let Some(found) = hunt(&lattice, &visited) else {
            break;
        };
        hunts += 1;
        let anchors = lattice
            .neighbors(found)
            .filter(|&(_, next)| visited[lattice.index(next)])
            .collect::<Vec<_>>();
        let (dir, _) = anchors[rng.random_range(0..anchors.len())];
        Lattice::carve(grid, found, dir);
        visited[lattice.index(found)] = true;
        remaining -= 1;
        current = found;
    }
    tracing::trace!("[hunt-and-kill] finished after {} hunts", hunts);
}

/// First unvisited cell in row-major order with at least one visited neighbor.
fn hunt(lattice: &Lattice, visited: &[bool]) -> Option<Position> {
    lattice.cells().find(|&cell| {
        !visited[lattice.index(cell)]
            && lattice
                .neighbors(cell)
                .any(|(_, next)| visited[lattice.index(next)])
    })
}
