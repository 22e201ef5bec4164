use super::{Position, cell::Cell};
use crate::error::{MazeError, Result};

/// Rectangular array of cells stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[Cell]>,
    width: usize,
    height: usize,
}

impl Grid {
    pub fn new(width: usize, height: usize, cell: Cell) -> Self {
        let data = vec![cell; width * height].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    /// Builds a grid from 0/1 rows as exchanged with callers.
    /// Rejects empty input, rows of unequal length and markers other than 0 or 1.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        if height == 0 || width == 0 {
            return Err(MazeError::EmptyGrid);
        }

        let mut data = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(MazeError::JaggedGrid {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, &value) in row.iter().enumerate() {
                let cell = Cell::from_value(value).ok_or(MazeError::InvalidCellValue {
                    position: Position::new(x, y),
                    value,
                })?;
                data.push(cell);
            }
        }

        Ok(Grid {
            data: data.into_boxed_slice(),
            width,
            height,
        })
    }

    /// Returns the grid as 0/1 rows (0 = empty, 1 = wall).
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.data
            .chunks(self.width)
            .map(|row| row.iter().map(|cell| cell.value()).collect())
            .collect()
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Whether `pos` is inside the grid and not a wall.
    pub fn is_open(&self, pos: Position) -> bool {
        self.in_bounds(pos) && self[pos] == Cell::Empty
    }

    pub fn fill(&mut self, cell: Cell) {
        self.data.fill(cell);
    }

    pub fn wall_count(&self) -> usize {
        self.data.iter().filter(|cell| cell.is_wall()).count()
    }

    /// Iterates over the grid rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.data.chunks(self.width)
    }

    /// First open cell in row-major order.
    pub fn first_open(&self) -> Option<Position> {
        self.data
            .iter()
            .position(|&cell| cell == Cell::Empty)
            .map(|idx| self.unravel_index(idx))
    }

    /// Last open cell in row-major order.
    pub fn last_open(&self) -> Option<Position> {
        self.data
            .iter()
            .rposition(|&cell| cell == Cell::Empty)
            .map(|idx| self.unravel_index(idx))
    }

    fn ravel_index(&self, pos: Position) -> usize {
        pos.y * self.width + pos.x
    }

    fn unravel_index(&self, idx: usize) -> Position {
        Position::new(idx % self.width, idx / self.width)
    }
}

impl std::ops::Index<Position> for Grid {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.data[self.ravel_index(pos)]
    }
}

impl std::ops::IndexMut<Position> for Grid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        let idx = self.ravel_index(pos);
        &mut self.data[idx]
    }
}
