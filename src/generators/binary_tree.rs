use rand::Rng;

use crate::maze::{Direction, Grid, Lattice, fill_spaced_cells};

/// Binary tree: every cell opens either north or east.
///
/// Cells on the top row can only go east and cells in the last column can only
/// go north, so both always end up as straight corridors.
pub fn binary_tree<R: Rng>(grid: &mut Grid, rng: &mut R) {
    fill_spaced_cells(grid);
    let lattice = Lattice::of(grid);

    for cell in lattice.cells() {
        let can_go_north = cell.y > 0;
        let can_go_east = cell.x + 1 < lattice.width();

        let dir = match (can_go_north, can_go_east) {
            (true, true) => {
                if rng.random_bool(0.5) {
                    Direction::North
                } else {
                    Direction::East
                }
            }
            (true, false) => Direction::North,
            (false, true) => Direction::East,
            // The north-east corner is the root of the tree
            (false, false) => continue,
        };
        Lattice::carve(grid, cell, dir);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{Cell, Position};
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_top_row_and_right_column_are_open() {
        for seed in 0..5 {
            let mut grid = Grid::new(13, 11, Cell::Wall);
            binary_tree(&mut grid, &mut StdRng::seed_from_u64(seed));
            assert!((1..12).all(|x| grid[Position::new(x, 1)] == Cell::Empty));
            assert!((1..10).all(|y| grid[Position::new(11, y)] == Cell::Empty));
        }
    }
}
