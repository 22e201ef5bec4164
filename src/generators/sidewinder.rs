use rand::Rng;

use super::RowCarving;
use crate::maze::{Direction, Grid, Lattice, Position, fill_spaced_cells};

/// Row-by-row Sidewinder state. Holds only the current run, so its memory is
/// bounded by the lattice width no matter how many rows are produced.
#[derive(Debug, Clone)]
pub struct SidewinderRows {
    width: usize,
    first_row: bool,
    run: Vec<usize>,
}

impl SidewinderRows {
    pub fn new(width: usize) -> Self {
        SidewinderRows {
            width,
            first_row: true,
            run: Vec::with_capacity(width),
        }
    }

    /// Carving for the next row down. `vertical` marks the northward passages.
    pub fn next_row<R: Rng>(&mut self, rng: &mut R) -> RowCarving {
        let mut carving = RowCarving::closed(self.width);

        if self.first_row {
            // Nothing above the first row: one corridor across
            carving.east.fill(true);
            self.first_row = false;
            return carving;
        }

        self.run.clear();
        for x in 0..self.width {
            self.run.push(x);

            let close_run = x + 1 == self.width || rng.random_bool(0.5);
            if close_run {
                let member = self.run[rng.random_range(0..self.run.len())];
                carving.vertical[member] = true;
                self.run.clear();
            } else {
                carving.east[x] = true;
            }
        }
        carving
    }

    /// Capacity reserved for the current run.
    pub fn working_capacity(&self) -> usize {
        self.run.capacity()
    }
}

pub fn sidewinder<R: Rng>(grid: &mut Grid, rng: &mut R) {
    fill_spaced_cells(grid);
    let lattice = Lattice::of(grid);
    if lattice.is_empty() {
        return;
    }

    let mut rows = SidewinderRows::new(lattice.width());
    for y in 0..lattice.height() {
        let carving = rows.next_row(rng);
        for (x, _) in carving.east.iter().enumerate().filter(|(_, open)| **open) {
            Lattice::carve(grid, Position::new(x, y), Direction::East);
        }
        for (x, _) in carving.vertical.iter().enumerate().filter(|(_, open)| **open) {
            Lattice::carve(grid, Position::new(x, y), Direction::North);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Cell;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_top_row_is_a_corridor() {
        let mut grid = Grid::new(15, 9, Cell::Wall);
        sidewinder(&mut grid, &mut StdRng::seed_from_u64(4));
        assert!((1..14).all(|x| grid[Position::new(x, 1)] == Cell::Empty));
    }

    #[test]
    fn test_each_run_opens_exactly_one_north_passage() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut rows = SidewinderRows::new(12);
        rows.next_row(&mut rng);
        for _ in 0..50 {
            let carving = rows.next_row(&mut rng);
            // Runs end wherever east is closed, plus the last column
            let runs = carving.east.iter().filter(|open| !**open).count() + 1;
            let north = carving.vertical.iter().filter(|open| **open).count();
            assert_eq!(runs, north);
        }
    }

    #[test]
    fn test_working_set_independent_of_height() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut rows = SidewinderRows::new(16);
        rows.next_row(&mut rng);
        rows.next_row(&mut rng);
        let capacity = rows.working_capacity();
        for _ in 0..10_000 {
            rows.next_row(&mut rng);
        }
        assert_eq!(rows.working_capacity(), capacity);
        assert!(capacity >= 16);
    }
}
