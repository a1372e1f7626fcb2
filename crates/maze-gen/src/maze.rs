//! Building a maze from a [`MazeConfig`] request.

use crate::generator::MazeGenerator;
use crate::grid::Grid;
use crate::placement::{placements, WallPlacement};
use maze_core::{MazeConfig, Result, MIN_SIZE};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// A generated maze together with the seed that reproduces it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Maze {
    pub seed: u64,
    pub grid: Grid,
}

impl Maze {
    pub fn placements(&self) -> impl Iterator<Item = WallPlacement> + '_ {
        placements(&self.grid)
    }
}

/// Raise requested dimensions to the minimum supported size.
pub fn clamp_dimensions(rows: i32, cols: i32) -> (i32, i32) {
    (rows.max(MIN_SIZE), cols.max(MIN_SIZE))
}

/// Clamp the requested size, seed the generator and build the layout.
#[instrument(skip(config), fields(rows = config.rows, cols = config.cols))]
pub fn build_maze(config: &MazeConfig) -> Result<Maze> {
    let generator = MazeGenerator::new(config.generator.clone())?;

    let (rows, cols) = clamp_dimensions(config.rows, config.cols);
    if (rows, cols) != (config.rows, config.cols) {
        warn!(
            "Requested {}x{} is below the minimum, using {}x{}",
            config.rows, config.cols, rows, cols
        );
    }

    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let grid = generator.generate(rows, cols, &mut rng)?;

    info!(seed, rows, cols, exit = %grid.exit(), "Built maze");
    Ok(Maze { seed, grid })
}
