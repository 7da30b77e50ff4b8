//! Random obstacle generation.

use rand::{Rng, RngExt};

use crate::grid::Grid;

/// Grid generator driven by an injectable random source.
///
/// Any [`Rng`] works: `rand::rng()` for fresh grids every run, or a seeded
/// `StdRng` for reproducible ones.
pub struct MapGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MapGen<R> {
    /// Create a generator around `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// A `columns × rows` grid in which every cell is independently a wall
    /// with probability `wall_probability`.
    ///
    /// The probability is clamped to `[0, 1]` (NaN counts as 0), so 0 gives
    /// an open grid and 1 a solid one. Cells are drawn in row-major order.
    pub fn random_obstacles(&mut self, columns: i32, rows: i32, wall_probability: f64) -> Grid {
        let p = if wall_probability.is_nan() {
            0.0
        } else {
            wall_probability.clamp(0.0, 1.0)
        };
        let grid = Grid::from_fn(columns, rows, |_| self.rng.random::<f64>() < p);
        log::debug!(
            "generated {}x{} grid: {} walls (p = {p:.2})",
            grid.columns(),
            grid.rows(),
            grid.wall_count()
        );
        grid
    }
}

/// Shorthand for [`MapGen::random_obstacles`] with a borrowed random source.
pub fn generate(columns: i32, rows: i32, wall_probability: f64, rng: &mut impl Rng) -> Grid {
    MapGen::new(rng).random_obstacles(columns, rows, wall_probability)
}
