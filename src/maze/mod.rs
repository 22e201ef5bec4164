pub mod cell;
pub mod disjoint_set;
pub mod grid;

use std::fmt;

pub use cell::Cell;
pub use disjoint_set::DisjointSet;
pub use grid::Grid;

/// A coordinate pair. Used both for grid cells and for logical lattice cells,
/// depending on context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Position { x, y }
    }

    pub fn manhattan_distance(self, other: Position) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Moves one step in `dir`. `None` on underflow; the upper bound is left to the caller.
    pub fn step(self, dir: Direction) -> Option<Position> {
        let (dx, dy) = dir.delta();
        Some(Position {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Position { x, y }
    }
}

/// The four orthogonal directions, with y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Scan order shared by every generator and solver: up, right, down, left.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

/// Get the open neighbors of a grid position: in-bounds, non-wall cells one step
/// away in the cardinal directions, in [`Direction::ALL`] order.
pub fn open_neighbors(grid: &Grid, pos: Position) -> impl Iterator<Item = Position> + '_ {
    Direction::ALL
        .into_iter()
        .filter_map(move |dir| pos.step(dir))
        .filter(move |&next| grid.is_open(next))
}

/// The logical cell graph embedded in a spaced-cell grid.
///
/// Logical cell `(cx, cy)` lives at grid coordinate `(2cx + 1, 2cy + 1)`; the wall
/// between two adjacent logical cells is the grid cell exactly between them. A
/// `width x height` grid holds `(width - 1) / 2` by `(height - 1) / 2` logical
/// cells. With an even dimension the last grid column (or row) lies outside the
/// lattice and is left untouched by the lattice generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lattice {
    width: usize,
    height: usize,
}

impl Lattice {
    /// The lattice embedded in a grid of the given dimensions.
    pub fn for_grid(grid_width: usize, grid_height: usize) -> Self {
        Lattice {
            width: grid_width.saturating_sub(1) / 2,
            height: grid_height.saturating_sub(1) / 2,
        }
    }

    pub fn of(grid: &Grid) -> Self {
        Lattice::for_grid(grid.width(), grid.height())
    }

    /// Number of logical cells per row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of logical rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of logical cells.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, cell: Position) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// Flattened index `y * width + x`.
    pub fn index(&self, cell: Position) -> usize {
        cell.y * self.width + cell.x
    }

    pub fn cell_at(&self, index: usize) -> Position {
        Position::new(index % self.width, index / self.width)
    }

    /// All logical cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Position> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }

    pub fn to_grid(cell: Position) -> Position {
        Position::new(cell.x * 2 + 1, cell.y * 2 + 1)
    }

    /// Grid coordinate of the wall separating `cell` from its neighbor in `dir`.
    /// The neighbor itself need not exist; border walls are computed the same way.
    pub fn wall_between(cell: Position, dir: Direction) -> Position {
        let (dx, dy) = dir.delta();
        let grid = Lattice::to_grid(cell);
        // The odd grid coordinate is at least 1, so a unit step never underflows.
        Position::new(
            grid.x.wrapping_add_signed(dx),
            grid.y.wrapping_add_signed(dy),
        )
    }

    /// The logical neighbor of `cell` in `dir`, if it lies inside the lattice.
    pub fn neighbor(&self, cell: Position, dir: Direction) -> Option<Position> {
        cell.step(dir).filter(|&next| self.contains(next))
    }

    /// In-lattice neighbors of `cell` with the direction leading to each.
    pub fn neighbors(&self, cell: Position) -> impl Iterator<Item = (Direction, Position)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.neighbor(cell, dir).map(|next| (dir, next)))
    }

    /// Opens the wall between `cell` and its neighbor in `dir`.
    pub fn carve(grid: &mut Grid, cell: Position, dir: Direction) {
        grid[Lattice::wall_between(cell, dir)] = Cell::Empty;
    }

    /// Whether the wall between `cell` and its neighbor in `dir` has been opened.
    pub fn is_passage(grid: &Grid, cell: Position, dir: Direction) -> bool {
        grid[Lattice::wall_between(cell, dir)] == Cell::Empty
    }

    /// Reduces a grid path to the logical cells it passes through, dropping the
    /// wall cells in between.
    pub fn project_path(path: &[Position]) -> Vec<Position> {
        path.iter()
            .filter(|pos| pos.x % 2 == 1 && pos.y % 2 == 1)
            .map(|pos| Position::new(pos.x / 2, pos.y / 2))
            .collect()
    }
}

/// Resets `grid` to all walls.
pub fn fill_walls(grid: &mut Grid) {
    grid.fill(Cell::Wall);
}

/// Resets `grid` to all walls with every logical lattice cell opened, so that
/// carving only has to remove the walls between cells.
pub fn fill_spaced_cells(grid: &mut Grid) {
    fill_walls(grid);
    let lattice = Lattice::of(grid);
    for cell in lattice.cells() {
        grid[Lattice::to_grid(cell)] = Cell::Empty;
    }
}
