use rand::Rng;

use crate::maze::{Cell, Grid, Lattice, Position, fill_walls};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Orientation {
    Horizontal,
    Vertical,
}

/// Recursive division: the one generator that starts from open space and adds
/// walls. Each room is split by a wall line along a lattice wall row or column,
/// with a single gap, until rooms are one cell thin.
///
/// Recursion depth is bounded by the lattice width plus height, which is the
/// only place the generators recurse instead of using an explicit stack.
pub fn recursive_division<R: Rng>(grid: &mut Grid, rng: &mut R) {
    let lattice = Lattice::of(grid);
    open_interior(grid, &lattice);
    if lattice.is_empty() {
        return;
    }

    divide(grid, Position::new(0, 0), lattice.width(), lattice.height(), rng);

    fn divide<R: Rng>(
        grid: &mut Grid,
        top_left: Position,
        width: usize,
        height: usize,
        rng: &mut R,
    ) {
        if width < 2 || height < 2 {
            return;
        }

        let Position { x, y } = top_left;

        let orientation = match width.cmp(&height) {
            std::cmp::Ordering::Less => Orientation::Horizontal,
            std::cmp::Ordering::Greater => Orientation::Vertical,
            std::cmp::Ordering::Equal => {
                if rng.random_bool(0.5) {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                }
            }
        };

        match orientation {
            Orientation::Horizontal => {
                // Randomly choose the row the wall goes under
                let diff = rng.random_range(0..height - 1);
                let y_wall = y + diff;

                // Randomly choose a position for the hole in the wall
                let x_hole = x + rng.random_range(0..width);

                insert_wall_line_after(grid, y_wall, x, x + width - 1, Orientation::Horizontal);
                grid[Position::new(x_hole * 2 + 1, y_wall * 2 + 2)] = Cell::Empty;

                let upper_height = diff + 1;
                let lower_height = height - upper_height;

                // Recursively divide the regions above and below the wall
                divide(grid, top_left, width, upper_height, rng);
                divide(grid, Position::new(x, y_wall + 1), width, lower_height, rng);
            }
            Orientation::Vertical => {
                // Randomly choose the column the wall goes after
                let diff = rng.random_range(0..width - 1);
                let x_wall = x + diff;

                // Randomly choose a position for the hole in the wall
                let y_hole = y + rng.random_range(0..height);

                insert_wall_line_after(grid, x_wall, y, y + height - 1, Orientation::Vertical);
                grid[Position::new(x_wall * 2 + 2, y_hole * 2 + 1)] = Cell::Empty;

                let left_width = diff + 1;
                let right_width = width - left_width;

                // Recursively divide the regions left and right of the wall
                divide(grid, top_left, left_width, height, rng);
                divide(grid, Position::new(x_wall + 1, y), right_width, height, rng);
            }
        }
    }
}

/// Walls everywhere except the rectangle spanned by the lattice cells, which is
/// cleared completely (cells, walls between them and the pillars).
fn open_interior(grid: &mut Grid, lattice: &Lattice) {
    fill_walls(grid);
    for y in 1..lattice.height() * 2 {
        for x in 1..lattice.width() * 2 {
            grid[Position::new(x, y)] = Cell::Empty;
        }
    }
}

/// Inserts a line of walls after logical row (or column) `from`, spanning logical
/// cells `start..=end` across, including the pillars between them.
fn insert_wall_line_after(
    grid: &mut Grid,
    from: usize,
    start: usize,
    end: usize,
    orientation: Orientation,
) {
    let wall = from * 2 + 2;
    for along in start * 2 + 1..=end * 2 + 1 {
        let pos = match orientation {
            Orientation::Horizontal => Position::new(along, wall),
            Orientation::Vertical => Position::new(wall, along),
        };
        grid[pos] = Cell::Wall;
    }
}
