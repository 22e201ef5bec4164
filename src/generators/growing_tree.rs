use rand::Rng;

use crate::maze::{Grid, Lattice, Position, fill_spaced_cells};

/// How the growing tree picks the next active cell to extend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionPolicy {
    /// Always the most recently added cell; behaves like the recursive backtracker.
    Newest,
    /// Always the oldest cell; grows breadth-first rings from the start.
    Oldest,
    /// A uniformly random cell; behaves like Prim's algorithm.
    Random,
    /// The newest cell with probability `newest_weight`, otherwise a random one.
    Mixed { newest_weight: f64 },
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        SelectionPolicy::Mixed { newest_weight: 0.5 }
    }
}

impl SelectionPolicy {
    fn select<R: Rng>(self, len: usize, rng: &mut R) -> usize {
        match self {
            SelectionPolicy::Newest => len - 1,
            SelectionPolicy::Oldest => 0,
            SelectionPolicy::Random => rng.random_range(0..len),
            SelectionPolicy::Mixed { newest_weight } => {
                if rng.random_bool(newest_weight.clamp(0.0, 1.0)) {
                    len - 1
                } else {
                    rng.random_range(0..len)
                }
            }
        }
    }
}

/// Growing tree: keep a list of active cells, extend one chosen by `policy`
/// toward a random unvisited neighbor, and retire it once it has none left.
pub fn growing_tree<R: Rng>(grid: &mut Grid, rng: &mut R, policy: SelectionPolicy) {
    fill_spaced_cells(grid);
    let lattice = Lattice::of(grid);
    if lattice.is_empty() {
        return;
    }

    let mut visited = vec![false; lattice.len()];
    let start = Position::new(
        rng.random_range(0..lattice.width()),
        rng.random_range(0..lattice.height()),
    );
    visited[lattice.index(start)] = true;
    let mut active = vec![start];

    while !active.is_empty() {
        let idx = policy.select(active.len(), rng);
        let cell = active[idx];

        let unvisited = lattice
            .neighbors(cell)
            .filter(|&(_, next)| !visited[lattice.index(next)])
            .collect::<Vec<_>>();

        if unvisited.is_empty() {
            // Order matters for the Newest/Oldest policies, so no swap_remove
            active.remove(idx);
            continue;
        }

        let (dir, next) = unvisited[rng.random_range(0..unvisited.len())];
        Lattice::carve(grid, cell, dir);
        visited[lattice.index(next)] = true;
        active.push(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::checks::assert_spanning_tree;
    use crate::generators::recursive_backtrack;
    use crate::maze::Cell;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_every_policy_is_perfect() {
        let policies = [
            SelectionPolicy::Newest,
            SelectionPolicy::Oldest,
            SelectionPolicy::Random,
            SelectionPolicy::Mixed { newest_weight: 0.25 },
            SelectionPolicy::Mixed { newest_weight: 0.9 },
            SelectionPolicy::default(),
        ];
        for policy in policies {
            for seed in 0..3 {
                let mut grid = Grid::new(19, 13, Cell::Wall);
                growing_tree(&mut grid, &mut StdRng::seed_from_u64(seed), policy);
                assert_spanning_tree(&grid);
            }
        }
    }

    #[test]
    fn test_out_of_range_weight_is_clamped() {
        let mut grid = Grid::new(9, 9, Cell::Wall);
        growing_tree(
            &mut grid,
            &mut StdRng::seed_from_u64(1),
            SelectionPolicy::Mixed { newest_weight: 7.0 },
        );
        assert_spanning_tree(&grid);
    }

    /// Dead ends in a perfect maze: open cells with exactly one passage.
    fn dead_ends(grid: &Grid) -> usize {
        let lattice = Lattice::of(grid);
        lattice
            .cells()
            .filter(|&cell| {
                lattice
                    .neighbors(cell)
                    .filter(|&(dir, _)| Lattice::is_passage(grid, cell, dir))
                    .count()
                    == 1
            })
            .count()
    }

    #[test]
    fn test_newest_has_fewer_dead_ends_than_random() {
        let (mut newest, mut random, mut backtrack) = (0, 0, 0);
        for seed in 0..5 {
            let mut grid = Grid::new(41, 41, Cell::Wall);
            growing_tree(&mut grid, &mut StdRng::seed_from_u64(seed), SelectionPolicy::Newest);
            newest += dead_ends(&grid);
            growing_tree(&mut grid, &mut StdRng::seed_from_u64(seed), SelectionPolicy::Random);
            random += dead_ends(&grid);
            recursive_backtrack(&mut grid, &mut StdRng::seed_from_u64(seed));
            backtrack += dead_ends(&grid);
        }
        // Long corridors on the backtracker end, many short branches on the Prim end
        assert!(newest < random);
        assert!(backtrack < random);
    }
}
