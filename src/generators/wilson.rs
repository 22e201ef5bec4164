use rand::{Rng, seq::SliceRandom};

use crate::maze::{Direction, Grid, Lattice, Position, fill_spaced_cells};

/// Wilson's algorithm: repeated loop-erased random walks into the growing maze.
///
/// Each walk records, per cell, the direction it last left that cell in. When the
/// walk crosses its own trail the newer exit overwrites the older one, so
/// retracing the exits from the starting cell follows the loop-erased path and
/// skips every loop the walk made.
pub fn wilson<R: Rng>(grid: &mut Grid, rng: &mut R) {
    fill_spaced_cells(grid);
    let lattice = Lattice::of(grid);
    if lattice.is_empty() {
        return;
    }

    let mut in_maze = vec![false; lattice.len()];
    // Exit directions of the current walk. Entries left over from earlier walks
    // are never read: retracing only follows cells the current walk rewrote.
    let mut exits: Vec<Option<Direction>> = vec![None; lattice.len()];

    let root = rng.random_range(0..lattice.len());
    in_maze[root] = true;

    // Every cell starts a walk once, in random order, unless a previous walk absorbed it
    let mut starts = (0..lattice.len()).collect::<Vec<_>>();
    starts.shuffle(rng);

    for start_idx in starts {
        if in_maze[start_idx] {
            continue;
        }
        let start = lattice.cell_at(start_idx);

        // Walk until the maze is hit, overwriting exits on every revisit
        let mut current = start;
        while !in_maze[lattice.index(current)] {
            let neighbors = lattice.neighbors(current).collect::<Vec<_>>();
            let (dir, next) = neighbors[rng.random_range(0..neighbors.len())];
            exits[lattice.index(current)] = Some(dir);
            current = next;
        }

        carve_walk(grid, &lattice, start, &exits, &mut in_maze);
    }
}

/// Carve the loop-erased path from `start` by following the recorded exits
/// until the existing maze is reached.
fn carve_walk(
    grid: &mut Grid,
    lattice: &Lattice,
    start: Position,
    exits: &[Option<Direction>],
    in_maze: &mut [bool],
) {
    let mut current = start;
    while !in_maze[lattice.index(current)] {
        let Some(dir) = exits[lattice.index(current)] else {
            break;
        };
        Lattice::carve(grid, current, dir);
        in_maze[lattice.index(current)] = true;
        match lattice.neighbor(current, dir) {
            Some(next) => current = next,
            None => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::checks::assert_spanning_tree;
    use crate::maze::Cell;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_retrace_skips_erased_loop() {
        // A walk 0,0 -> 1,0 -> 1,1 -> 0,1 -> 0,0 -> 0,1 -> 0,2 (maze) where the
        // loop around the square has been overwritten at 0,0 and 0,1.
        let mut grid = Grid::new(5, 7, Cell::Wall);
        fill_spaced_cells(&mut grid);
        let lattice = Lattice::of(&grid);
        let mut in_maze = vec![false; lattice.len()];
        in_maze[lattice.index(Position::new(0, 2))] = true;

        let mut exits = vec![None; lattice.len()];
        exits[lattice.index(Position::new(1, 0))] = Some(Direction::South);
        exits[lattice.index(Position::new(1, 1))] = Some(Direction::West);
        exits[lattice.index(Position::new(0, 0))] = Some(Direction::South);
        exits[lattice.index(Position::new(0, 1))] = Some(Direction::South);

        carve_walk(&mut grid, &lattice, Position::new(0, 0), &exits, &mut in_maze);

        assert!(Lattice::is_passage(&grid, Position::new(0, 0), Direction::South));
        assert!(Lattice::is_passage(&grid, Position::new(0, 1), Direction::South));
        // The loop through column 1 was erased
        assert!(!Lattice::is_passage(&grid, Position::new(0, 0), Direction::East));
        assert!(!Lattice::is_passage(&grid, Position::new(1, 0), Direction::South));
        assert!(!in_maze[lattice.index(Position::new(1, 0))]);
    }

    #[test]
    fn test_wilson_wide_grid() {
        let mut grid = Grid::new(61, 5, Cell::Wall);
        wilson(&mut grid, &mut StdRng::seed_from_u64(11));
        assert_spanning_tree(&grid);
    }
}
