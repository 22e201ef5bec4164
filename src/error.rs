use thiserror::Error;

use crate::maze::Position;

#[derive(Error, Debug)]
pub enum MazeError {
    #[error(
        "invalid dimensions {width}x{height}: need at least {min_width}x{min_height} and at most {max} cells",
        max = crate::generators::MAX_CELLS
    )]
    InvalidDimensions {
        width: usize,
        height: usize,
        min_width: usize,
        min_height: usize,
    },

    #[error("unknown maze generator: {0}")]
    UnknownGenerator(String),

    #[error("unknown maze solver: {0}")]
    UnknownSolver(String),

    #[error("position {position} is outside the {width}x{height} grid")]
    OutOfBounds {
        position: Position,
        width: usize,
        height: usize,
    },

    #[error("position {position} is a wall")]
    BlockedPosition { position: Position },

    #[error("row {row} has {found} cells, expected {expected}")]
    JaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("grid has no cells")]
    EmptyGrid,

    #[error("cell {position} holds {value}, expected 0 (empty) or 1 (wall)")]
    InvalidCellValue { position: Position, value: u8 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MazeError>;
