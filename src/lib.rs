pub mod app;
pub mod error;
pub mod generators;
pub mod maze;
pub mod solvers;

pub use error::{MazeError, Result};
pub use generators::{GeneratedMaze, Generator, generate_by_id, generate_maze};
pub use maze::{Cell, Grid, Position};
pub use solvers::{SearchResult, Solver, solve_by_id, solve_maze};
