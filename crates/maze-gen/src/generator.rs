//! Randomized maze layout generation.
//!
//! A layout is produced in four passes over a fresh grid: outer walls on the
//! border, paired inner walls on even interior cells, a cleared 3x3 start block
//! at the center, and a single exit carved into the border. Later passes win.

use crate::grid::Grid;
use maze_core::{
    CellKind, Direction, Error, ExitPlacement, GeneratorConfig, GridIndex, Result, MIN_SIZE,
};
use rand::Rng;
use tracing::{debug, instrument, trace};

/// An inner wall and the neighbour it was extended into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WallPair {
    pub anchor: GridIndex,
    pub neighbour: GridIndex,
}

#[derive(Debug, Clone, Default)]
pub struct MazeGenerator {
    config: GeneratorConfig,
}

impl MazeGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a layout of `rows` x `cols` cells.
    ///
    /// Does not clamp: anything smaller than [`MIN_SIZE`] in either dimension is
    /// rejected before a grid is allocated.
    #[instrument(
        skip(self, rng),
        fields(density = self.config.inner_wall_density, exit = ?self.config.exit_placement)
    )]
    pub fn generate<R: Rng + ?Sized>(&self, rows: i32, cols: i32, rng: &mut R) -> Result<Grid> {
        if rows < MIN_SIZE || cols < MIN_SIZE {
            return Err(Error::InvalidDimensions {
                rows,
                cols,
                min: MIN_SIZE,
            });
        }

        let mut grid = Grid::new(rows as usize, cols as usize);

        place_outer_walls(&mut grid);
        let pairs = self.place_inner_walls(&mut grid, rng);
        clear_start_block(&mut grid);
        let exit = self.carve_exit(&mut grid, rng);

        debug!(
            inner_pairs = pairs.len(),
            inner_walls = grid.count(CellKind::InnerWall),
            %exit,
            "Generated maze layout"
        );

        Ok(grid)
    }

    pub(crate) fn place_inner_walls<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        rng: &mut R,
    ) -> Vec<WallPair> {
        let density = f64::from(self.config.inner_wall_density);
        let mut pairs = Vec::new();

        for row in (2..grid.row_count() - 1).step_by(2) {
            for col in (2..grid.col_count() - 1).step_by(2) {
                if !rng.gen_bool(density) {
                    continue;
                }

                let anchor = GridIndex::new(row, col);
                let (d_row, d_col) = pick_direction(rng).to_delta();
                // Anchors sit at row/col >= 2, so the offset never underflows.
                let Some(neighbour) = anchor.offset(d_row, d_col) else {
                    continue;
                };

                grid.set(anchor, CellKind::InnerWall);
                // Border cells keep their outer wall.
                if grid.get(neighbour.row, neighbour.col) != Some(CellKind::OuterWall) {
                    grid.set(neighbour, CellKind::InnerWall);
                }

                trace!(%anchor, %neighbour, "Placed inner wall pair");
                pairs.push(WallPair { anchor, neighbour });
            }
        }

        pairs
    }

    fn carve_exit<R: Rng + ?Sized>(&self, grid: &mut Grid, rng: &mut R) -> GridIndex {
        let last_row = grid.row_count() - 1;
        let last_col = grid.col_count() - 1;

        let exit = if rng.gen_bool(0.5) {
            let row = if rng.gen_bool(0.5) { 0 } else { last_row };
            GridIndex::new(row, self.position_along_edge(grid.col_count(), rng))
        } else {
            let col = if rng.gen_bool(0.5) { 0 } else { last_col };
            GridIndex::new(self.position_along_edge(grid.row_count(), rng), col)
        };

        grid.set_exit(exit);
        exit
    }

    fn position_along_edge<R: Rng + ?Sized>(&self, len: usize, rng: &mut R) -> usize {
        match self.config.exit_placement {
            ExitPlacement::FixedMidpoint => len / 2,
            ExitPlacement::RandomAlongEdge => rng.gen_range(1..len - 1),
        }
    }
}

fn place_outer_walls(grid: &mut Grid) {
    let border: Vec<GridIndex> = grid
        .indices()
        .filter(|index| grid.is_border(*index))
        .collect();

    for index in border {
        grid.set(index, CellKind::OuterWall);
    }
}

fn clear_start_block(grid: &mut Grid) {
    let center = grid.center();
    for d_row in -1..=1 {
        for d_col in -1..=1 {
            if let Some(index) = center.offset(d_row, d_col) {
                grid.set(index, CellKind::Empty);
            }
        }
    }
}

/// First coin picks the axis, second the sign.
fn pick_direction<R: Rng + ?Sized>(rng: &mut R) -> Direction {
    match (rng.gen_bool(0.5), rng.gen_bool(0.5)) {
        (true, true) => Direction::Left,
        (true, false) => Direction::Right,
        (false, true) => Direction::Down,
        (false, false) => Direction::Up,
    }
}
