use rand::{Rng, seq::SliceRandom};

use crate::maze::{DisjointSet, Direction, Grid, Lattice, Position, fill_spaced_cells};

/// Wall edge between a cell and its east or south neighbor
#[derive(Clone, Copy)]
struct Edge {
    cell: Position,
    dir: Direction,
}

pub fn randomized_kruskal<R: Rng>(grid: &mut Grid, rng: &mut R) {
    fill_spaced_cells(grid);
    let lattice = Lattice::of(grid);
    if lattice.is_empty() {
        return;
    }

    // Initialize Union-Find for all cells
    let mut sets = DisjointSet::new(lattice.len());

    // Collect all possible edges (walls between adjacent cells)
    let mut edges: Vec<Edge> = lattice
        .cells()
        .flat_map(|cell| {
            [
                (cell.x + 1 < lattice.width()).then_some(Edge {
                    cell,
                    dir: Direction::East,
                }),
                (cell.y + 1 < lattice.height()).then_some(Edge {
                    cell,
                    dir: Direction::South,
                }),
            ]
        })
        .flatten()
        .collect();

    // Shuffle edges randomly
    edges.shuffle(rng);

    let mut components = lattice.len();
    for edge in edges {
        if components == 1 {
            break;
        }
        let Some(other) = lattice.neighbor(edge.cell, edge.dir) else {
            continue;
        };

        // If cells are not yet connected, remove the wall between them
        if sets.union(lattice.index(edge.cell), lattice.index(other)) {
            Lattice::carve(grid, edge.cell, edge.dir);
            components -= 1;
        }
    }
}
