use std::collections::BTreeMap;

use rand::Rng;

use super::RowCarving;
use crate::maze::{Direction, Grid, Lattice, Position, fill_spaced_cells};

/// Row-by-row state of Eller's algorithm.
///
/// Only the set id of each cell in the current row is kept, so the working set is
/// O(width) and rows can be produced forever without looking back.
#[derive(Debug, Clone)]
pub struct EllerRows {
    /// Set id per column of the current row; 0 means not yet assigned.
    sets: Vec<usize>,
    next_set: usize,
}

impl EllerRows {
    pub fn new(width: usize) -> Self {
        EllerRows {
            sets: vec![0; width],
            next_set: 1,
        }
    }

    /// Carving for the next row. `vertical` marks the southward passages, and is
    /// all closed when `last` is set because the final row joins every set
    /// horizontally instead.
    pub fn next_row<R: Rng>(&mut self, rng: &mut R, last: bool) -> RowCarving {
        let width = self.sets.len();
        let mut carving = RowCarving::closed(width);

        for set in self.sets.iter_mut().filter(|set| **set == 0) {
            *set = self.next_set;
            self.next_set += 1;
        }

        // Join neighbors in different sets: randomly, or always on the last row
        for x in 0..width.saturating_sub(1) {
            if self.sets[x] != self.sets[x + 1] && (last || rng.random_bool(0.5)) {
                carving.east[x] = true;
                let (from, into) = (self.sets[x + 1], self.sets[x]);
                self.merge(from, into);
            }
        }

        if last {
            return carving;
        }

        // Every set must continue into the next row through at least one member
        let mut members: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for (x, &set) in self.sets.iter().enumerate() {
            members.entry(set).or_default().push(x);
        }
        for cells in members.values() {
            let guaranteed = cells[rng.random_range(0..cells.len())];
            for &x in cells {
                if x == guaranteed || rng.random_bool(0.5) {
                    carving.vertical[x] = true;
                }
            }
        }

        // Cells without a passage down start fresh in the next row
        for (set, &down) in self.sets.iter_mut().zip(&carving.vertical) {
            if !down {
                *set = 0;
            }
        }
        carving
    }

    fn merge(&mut self, from: usize, into: usize) {
        for set in self.sets.iter_mut().filter(|set| **set == from) {
            *set = into;
        }
    }

    /// Number of cells tracked between rows.
    pub fn working_len(&self) -> usize {
        self.sets.len()
    }
}

pub fn eller<R: Rng>(grid: &mut Grid, rng: &mut R) {
    fill_spaced_cells(grid);
    let lattice = Lattice::of(grid);
    if lattice.is_empty() {
        return;
    }

    let mut rows = EllerRows::new(lattice.width());
    for y in 0..lattice.height() {
        let carving = rows.next_row(rng, y + 1 == lattice.height());
        for (x, _) in carving.east.iter().enumerate().filter(|(_, open)| **open) {
            Lattice::carve(grid, Position::new(x, y), Direction::East);
        }
        for (x, _) in carving.vertical.iter().enumerate().filter(|(_, open)| **open) {
            Lattice::carve(grid, Position::new(x, y), Direction::South);
        }
    }
}
