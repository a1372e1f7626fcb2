//! Core type definitions for maze layouts.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest row or column count the generator accepts.
pub const MIN_SIZE: i32 = 5;

/// Occupancy of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellKind {
    #[default]
    Empty = 0,
    InnerWall = 1,
    OuterWall = 2,
}

impl CellKind {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn is_wall(self) -> bool {
        self != CellKind::Empty
    }

    /// Single character used by the text rendering of a grid
    pub fn symbol(self) -> char {
        match self {
            CellKind::Empty => '.',
            CellKind::InnerWall => '+',
            CellKind::OuterWall => '#',
        }
    }
}

impl TryFrom<u8> for CellKind {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(CellKind::Empty),
            1 => Ok(CellKind::InnerWall),
            2 => Ok(CellKind::OuterWall),
            other => Err(Error::InvalidCell(other)),
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellKind::Empty => "empty",
            CellKind::InnerWall => "inner_wall",
            CellKind::OuterWall => "outer_wall",
        };
        f.write_str(name)
    }
}

/// Row/column index into a grid. (0, 0) is the bottom-left corner in scene space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridIndex {
    pub row: usize,
    pub col: usize,
}

impl GridIndex {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Offset by a signed delta, `None` if it would underflow
    pub fn offset(&self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

impl fmt::Display for GridIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Centered 2D offset of a cell in scene units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneOffset {
    pub x: f32,
    pub y: f32,
}

impl SceneOffset {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Scene position of a placed wall, with depth for draw ordering
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenePosition {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Where the exit is carved along the chosen edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExitPlacement {
    /// Exact midpoint of the edge
    #[default]
    FixedMidpoint,
    /// Any non-corner cell of the edge
    RandomAlongEdge,
}

/// Orthogonal neighbour directions, in row/column deltas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn to_delta(&self) -> (isize, isize) {
        match self {
            Direction::Up => (1, 0),
            Direction::Down => (-1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn all() -> [Direction; 4] {
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
    }
}
