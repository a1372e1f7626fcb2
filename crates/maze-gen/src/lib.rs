//! Maze layout generation.
//!
//! Builds rectangular occupancy grids of outer walls, paired inner walls and
//! open cells, plus the scene-space mapping a renderer needs to place them.

pub mod coords;
pub mod generator;
pub mod grid;
pub mod maze;
pub mod placement;

pub use coords::{grid_index_to_scene_offset, scene_offset_to_grid_index};
pub use generator::MazeGenerator;
pub use grid::Grid;
pub use maze::{build_maze, clamp_dimensions, Maze};
pub use placement::{placements, WallPlacement};
