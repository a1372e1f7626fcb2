//! Wall placement plan for a renderer.

use crate::coords::grid_index_to_scene_offset;
use crate::grid::Grid;
use maze_core::{CellKind, GridIndex, ScenePosition};
use serde::Serialize;

/// Depth step per row, so lower rows draw in front of higher ones
pub const ROW_DEPTH_STEP: f32 = -0.1;

/// One wall object to instantiate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WallPlacement {
    pub index: GridIndex,
    pub kind: CellKind,
    pub position: ScenePosition,
}

/// Walls of `grid` in row-major order. Empty cells are skipped.
pub fn placements(grid: &Grid) -> impl Iterator<Item = WallPlacement> + '_ {
    let row_count = grid.row_count();
    let col_count = grid.col_count();

    grid.iter()
        .filter(|(_, kind)| kind.is_wall())
        .map(move |(index, kind)| {
            let offset = grid_index_to_scene_offset(row_count, col_count, index);
            WallPlacement {
                index,
                kind,
                position: ScenePosition {
                    x: offset.x,
                    y: offset.y,
                    z: (row_count - index.row) as f32 * ROW_DEPTH_STEP,
                },
            }
        })
}
