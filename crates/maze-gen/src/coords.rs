//! Conversion between grid indices and centered scene offsets.
//!
//! Index (0, 0) maps to the bottom-left corner; the grid is centered on the
//! scene origin, so odd dimensions put a cell exactly at 0 and even
//! dimensions straddle it at half-unit offsets.

use maze_core::{GridIndex, SceneOffset};

fn half_span(count: usize) -> f32 {
    (count as f32 - 1.0) / 2.0
}

pub fn grid_index_to_scene_offset(
    row_count: usize,
    col_count: usize,
    index: GridIndex,
) -> SceneOffset {
    SceneOffset::new(
        index.col as f32 - half_span(col_count),
        index.row as f32 - half_span(row_count),
    )
}

/// Nearest grid index for a scene offset, `None` if it falls outside the grid.
pub fn scene_offset_to_grid_index(
    row_count: usize,
    col_count: usize,
    offset: SceneOffset,
) -> Option<GridIndex> {
    let row = (offset.y + half_span(row_count)).round();
    let col = (offset.x + half_span(col_count)).round();

    if !(row >= 0.0 && col >= 0.0) {
        return None;
    }

    let index = GridIndex::new(row as usize, col as usize);
    (index.row < row_count && index.col < col_count).then_some(index)
}
