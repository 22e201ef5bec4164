use rand::Rng;

use crate::maze::{Cell, Grid, Position};

/// Probability that any single cell becomes a wall.
pub const WALL_PROBABILITY: f64 = 0.3;

/// Independent Bernoulli walls over the whole grid. No structure and no
/// connectivity guarantee; meant as adversarial solver input.
pub fn random_walls<R: Rng>(grid: &mut Grid, rng: &mut R) {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            grid[Position::new(x, y)] = if rng.random_bool(WALL_PROBABILITY) {
                Cell::Wall
            } else {
                Cell::Empty
            };
        }
    }
}
