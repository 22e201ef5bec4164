use std::{str::FromStr, time::Duration, time::Instant};

use rand::{Rng, SeedableRng, rngs::StdRng};

mod aldous_broder;
mod binary_tree;
mod eller;
mod growing_tree;
mod hunt_and_kill;
mod kruskal;
mod prim;
mod random;
mod recur_backtrack;
mod recur_div;
mod sidewinder;
mod wilson;

pub use aldous_broder::aldous_broder;
pub use binary_tree::binary_tree;
pub use eller::{EllerRows, eller};
pub use growing_tree::{SelectionPolicy, growing_tree};
pub use hunt_and_kill::hunt_and_kill;
pub use kruskal::randomized_kruskal;
pub use prim::randomized_prim;
pub use random::{WALL_PROBABILITY, random_walls};
pub use recur_backtrack::recursive_backtrack;
pub use recur_div::recursive_division;
pub use sidewinder::{SidewinderRows, sidewinder};
pub use wilson::wilson;

use crate::{
    error::{MazeError, Result},
    maze::{Cell, Grid},
};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Passages opened in one row of the logical lattice by a row-streaming generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowCarving {
    /// `east[x]` opens the wall between cells `x` and `x + 1`.
    pub east: Vec<bool>,
    /// `vertical[x]` opens the wall above (Sidewinder) or below (Eller) cell `x`.
    pub vertical: Vec<bool>,
}

impl RowCarving {
    fn closed(width: usize) -> Self {
        RowCarving {
            east: vec![false; width.saturating_sub(1)],
            vertical: vec![false; width],
        }
    }
}

/// Largest grid, in cells, any generator allocates.
pub const MAX_CELLS: usize = 1 << 28;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generator {
    RecurBacktrack,
    Prim,
    Kruskal,
    AldousBroder,
    Wilson,
    HuntAndKill,
    GrowingTree,
    Sidewinder,
    Eller,
    BinaryTree,
    RecurDiv,
    Random,
}

impl Generator {
    pub const ALL: [Generator; 12] = [
        Generator::RecurBacktrack,
        Generator::Prim,
        Generator::Kruskal,
        Generator::AldousBroder,
        Generator::Wilson,
        Generator::HuntAndKill,
        Generator::GrowingTree,
        Generator::Sidewinder,
        Generator::Eller,
        Generator::BinaryTree,
        Generator::RecurDiv,
        Generator::Random,
    ];

    /// Stable identifier used to select the generator from the outside.
    pub fn id(self) -> &'static str {
        match self {
            Generator::RecurBacktrack => "recursive",
            Generator::Prim => "prim",
            Generator::Kruskal => "kruskal",
            Generator::AldousBroder => "aldous-broder",
            Generator::Wilson => "wilson",
            Generator::HuntAndKill => "hunt-kill",
            Generator::GrowingTree => "growing-tree",
            Generator::Sidewinder => "sidewinder",
            Generator::Eller => "eller",
            Generator::BinaryTree => "binary",
            Generator::RecurDiv => "recursive-division",
            Generator::Random => "random",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Generator::RecurBacktrack => "Depth-first carving; long winding corridors",
            Generator::Prim => "Random frontier walls; many short branches",
            Generator::Kruskal => "Shuffled walls joined by union-find; unbiased texture",
            Generator::AldousBroder => "Uncommitted random walk; uniform spanning tree, slow",
            Generator::Wilson => "Loop-erased random walks; uniform spanning tree",
            Generator::HuntAndKill => "Random walk until stuck, then scan for a new start",
            Generator::GrowingTree => "Active cell list, half newest half random",
            Generator::Sidewinder => "Row by row with horizontal runs; north-east bias",
            Generator::Eller => "Single pass over rows with O(width) working set",
            Generator::BinaryTree => "North or east per cell; strong diagonal bias",
            Generator::RecurDiv => "Bisects open rooms with walls, one gap per wall",
            Generator::Random => "Each cell a wall with 30% probability; may be unsolvable",
        }
    }

    /// Whether every output is a spanning tree over the logical lattice.
    pub fn is_perfect(self) -> bool {
        !matches!(self, Generator::Random)
    }

    /// Smallest grid this generator accepts.
    pub fn min_dimensions(self) -> (usize, usize) {
        match self {
            Generator::Random => (1, 1),
            _ => (3, 3),
        }
    }

    fn validate_dimensions(self, width: usize, height: usize) -> Result<()> {
        let (min_width, min_height) = self.min_dimensions();
        let too_large = width
            .checked_mul(height)
            .is_none_or(|cells| cells > MAX_CELLS);
        if width < min_width || height < min_height || too_large {
            return Err(MazeError::InvalidDimensions {
                width,
                height,
                min_width,
                min_height,
            });
        }
        Ok(())
    }

    /// Generates a `width x height` grid.
    ///
    /// Every generator except [`Generator::Random`] works on the spaced-cell lattice
    /// and expects odd dimensions; with an even dimension the last column or row
    /// stays solid wall and is not part of the maze.
    pub fn generate<R: Rng>(self, width: usize, height: usize, rng: &mut R) -> Result<Grid> {
        self.validate_dimensions(width, height)?;
        let mut grid = Grid::new(width, height, Cell::Wall);
        self.carve(&mut grid, rng);
        Ok(grid)
    }

    fn carve<R: Rng>(self, grid: &mut Grid, rng: &mut R) {
        match self {
            Generator::RecurBacktrack => recursive_backtrack(grid, rng),
            Generator::Prim => randomized_prim(grid, rng),
            Generator::Kruskal => randomized_kruskal(grid, rng),
            Generator::AldousBroder => aldous_broder(grid, rng),
            Generator::Wilson => wilson(grid, rng),
            Generator::HuntAndKill => hunt_and_kill(grid, rng),
            Generator::GrowingTree => growing_tree(grid, rng, SelectionPolicy::default()),
            Generator::Sidewinder => sidewinder(grid, rng),
            Generator::Eller => eller(grid, rng),
            Generator::BinaryTree => binary_tree(grid, rng),
            Generator::RecurDiv => recursive_division(grid, rng),
            Generator::Random => random_walls(grid, rng),
        }
    }
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::RecurBacktrack => write!(f, "Recursive Backtracking"),
            Generator::Prim => write!(f, "Prim's Algorithm"),
            Generator::Kruskal => write!(f, "Kruskal's Algorithm"),
            Generator::AldousBroder => write!(f, "Aldous-Broder Algorithm"),
            Generator::Wilson => write!(f, "Wilson's Algorithm"),
            Generator::HuntAndKill => write!(f, "Hunt-and-Kill Algorithm"),
            Generator::GrowingTree => write!(f, "Growing Tree Algorithm (Mixed)"),
            Generator::Sidewinder => write!(f, "Sidewinder Algorithm"),
            Generator::Eller => write!(f, "Eller's Algorithm"),
            Generator::BinaryTree => write!(f, "Binary Tree"),
            Generator::RecurDiv => write!(f, "Recursive Division"),
            Generator::Random => write!(f, "Random (30% walls)"),
        }
    }
}

impl FromStr for Generator {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        Generator::ALL
            .into_iter()
            .find(|generator| generator.id() == s)
            .ok_or_else(|| MazeError::UnknownGenerator(s.to_string()))
    }
}

/// A generated grid together with what produced it and how long it took.
#[derive(Debug, Clone)]
pub struct GeneratedMaze {
    pub grid: Grid,
    pub generator: Generator,
    /// Time spent inside the algorithm body only.
    pub elapsed: Duration,
}

impl GeneratedMaze {
    pub fn algorithm_name(&self) -> String {
        self.generator.to_string()
    }
}

pub fn generate_maze(
    generator: Generator,
    width: usize,
    height: usize,
    seed: Option<u64>,
) -> Result<GeneratedMaze> {
    let mut rng = get_rng(seed);
    generate_maze_with(generator, width, height, &mut rng)
}

/// Like [`generate_maze`] but drawing randomness from a caller-owned source.
pub fn generate_maze_with<R: Rng>(
    generator: Generator,
    width: usize,
    height: usize,
    rng: &mut R,
) -> Result<GeneratedMaze> {
    timed(generator, width, height, |grid| generator.carve(grid, rng))
}

/// Growing tree with a caller-chosen selection policy instead of the registry's
/// default mix.
pub fn generate_growing_tree<R: Rng>(
    width: usize,
    height: usize,
    policy: SelectionPolicy,
    rng: &mut R,
) -> Result<GeneratedMaze> {
    timed(Generator::GrowingTree, width, height, |grid| {
        growing_tree(grid, rng, policy)
    })
}

/// Validates, then times only the carving itself.
fn timed<F>(generator: Generator, width: usize, height: usize, carve: F) -> Result<GeneratedMaze>
where
    F: FnOnce(&mut Grid),
{
    if let Err(err) = generator.validate_dimensions(width, height) {
        tracing::warn!("[generate] rejected {} request: {}", generator.id(), err);
        return Err(err);
    }
    let mut grid = Grid::new(width, height, Cell::Wall);
    let started = Instant::now();
    carve(&mut grid);
    let elapsed = started.elapsed();
    tracing::debug!(
        "[generate] {} produced a {}x{} grid in {:?}",
        generator,
        width,
        height,
        elapsed
    );
    Ok(GeneratedMaze {
        grid,
        generator,
        elapsed,
    })
}

/// Looks a generator up by its string id and runs it.
pub fn generate_by_id(
    id: &str,
    width: usize,
    height: usize,
    seed: Option<u64>,
) -> Result<GeneratedMaze> {
    let generator = id.parse::<Generator>()?;
    generate_maze(generator, width, height, seed)
}
