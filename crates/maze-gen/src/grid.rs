//! Occupancy grid for a generated maze.

use maze_core::{CellKind, Error, GridIndex, MIN_SIZE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A row-major occupancy grid. Read-only outside this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    row_count: usize,
    col_count: usize,
    cells: Vec<CellKind>,
    exit: GridIndex,
}

impl Grid {
    pub(crate) fn new(row_count: usize, col_count: usize) -> Self {
        Self {
            row_count,
            col_count,
            cells: vec![CellKind::Empty; row_count * col_count],
            exit: GridIndex::new(0, 0),
        }
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn col_count(&self) -> usize {
        self.col_count
    }

    /// Cell at (row, col), `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<CellKind> {
        self.index_of(row, col).map(|i| self.cells[i])
    }

    /// Cell at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if the index is outside the grid.
    pub fn cell_at(&self, row: usize, col: usize) -> CellKind {
        match self.get(row, col) {
            Some(kind) => kind,
            None => panic!(
                "cell ({}, {}) out of bounds for {}x{} grid",
                row, col, self.row_count, self.col_count
            ),
        }
    }

    /// The border cell carved open as the exit
    pub fn exit(&self) -> GridIndex {
        self.exit
    }

    pub(crate) fn set_exit(&mut self, exit: GridIndex) {
        self.set(exit, CellKind::Empty);
        self.exit = exit;
    }

    pub(crate) fn set(&mut self, index: GridIndex, kind: CellKind) {
        if let Some(i) = self.index_of(index.row, index.col) {
            self.cells[i] = kind;
        }
    }

    pub fn contains(&self, index: GridIndex) -> bool {
        index.row < self.row_count && index.col < self.col_count
    }

    pub fn is_border(&self, index: GridIndex) -> bool {
        index.row == 0
            || index.col == 0
            || index.row == self.row_count - 1
            || index.col == self.col_count - 1
    }

    /// Center cell of the start block
    pub fn center(&self) -> GridIndex {
        GridIndex::new(self.row_count / 2, self.col_count / 2)
    }

    fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.row_count && col < self.col_count).then(|| row * self.col_count + col)
    }

    fn index_to_grid_index(&self, index: usize) -> GridIndex {
        GridIndex::new(index / self.col_count, index % self.col_count)
    }

    /// Iterator over all indices, row-major
    pub fn indices(&self) -> impl Iterator<Item = GridIndex> + '_ {
        (0..self.cells.len()).map(move |i| self.index_to_grid_index(i))
    }

    /// Iterator over all cells with their indices, row-major
    pub fn iter(&self) -> impl Iterator<Item = (GridIndex, CellKind)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, kind)| (self.index_to_grid_index(i), *kind))
    }

    /// Iterator over the border cells
    pub fn border(&self) -> impl Iterator<Item = (GridIndex, CellKind)> + '_ {
        self.iter().filter(move |(index, _)| self.is_border(*index))
    }

    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|c| **c == kind).count()
    }
}

/// Unchecked wire form of a [`Grid`]
#[derive(Deserialize)]
struct RawGrid {
    row_count: usize,
    col_count: usize,
    cells: Vec<CellKind>,
    exit: GridIndex,
}

impl TryFrom<RawGrid> for Grid {
    type Error = Error;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        let min = MIN_SIZE as usize;
        if raw.row_count < min || raw.col_count < min {
            return Err(Error::InvalidGrid(format!(
                "{}x{} is below the minimum {}x{}",
                raw.row_count, raw.col_count, min, min
            )));
        }

        let expected = raw.row_count.checked_mul(raw.col_count);
        if expected != Some(raw.cells.len()) {
            return Err(Error::InvalidGrid(format!(
                "{} cells for a {}x{} grid",
                raw.cells.len(),
                raw.row_count,
                raw.col_count
            )));
        }

        let grid = Grid {
            row_count: raw.row_count,
            col_count: raw.col_count,
            cells: raw.cells,
            exit: raw.exit,
        };

        if !grid.contains(grid.exit) || !grid.is_border(grid.exit) {
            return Err(Error::InvalidGrid(format!(
                "exit {} is not on the border",
                grid.exit
            )));
        }

        for (index, kind) in grid.border() {
            let expected = if index == grid.exit {
                CellKind::Empty
            } else {
                CellKind::OuterWall
            };
            if kind != expected {
                return Err(Error::InvalidGrid(format!(
                    "border cell {} is {}, expected {}",
                    index, kind, expected
                )));
            }
        }

        Ok(grid)
    }
}

/// Renders with the highest row first, so the output reads like the scene.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.row_count).rev() {
            let start = row * self.col_count;
            let line: String = self.cells[start..start + self.col_count]
                .iter()
                .map(|kind| kind.symbol())
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(5, 7);
        assert_eq!(grid.row_count(), 5);
        assert_eq!(grid.col_count(), 7);
        assert_eq!(grid.cells.len(), 35);
        assert_eq!(grid.count(CellKind::Empty), 35);
    }

    #[test]
    fn test_row_major_indexing() {
        let mut grid = Grid::new(5, 7);
        grid.set(GridIndex::new(1, 3), CellKind::InnerWall);

        assert_eq!(grid.cells[7 + 3], CellKind::InnerWall);
        assert_eq!(grid.cell_at(1, 3), CellKind::InnerWall);
        assert_eq!(grid.get(3, 1), Some(CellKind::Empty));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = Grid::new(5, 5);
        assert_eq!(grid.get(5, 0), None);
        assert_eq!(grid.get(0, 5), None);

        // Out of bounds writes are ignored
        grid.set(GridIndex::new(9, 9), CellKind::OuterWall);
        assert_eq!(grid.count(CellKind::OuterWall), 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_cell_at_panics() {
        Grid::new(5, 5).cell_at(5, 5);
    }

    #[test]
    fn test_border_and_center() {
        let grid = Grid::new(6, 8);
        assert!(grid.is_border(GridIndex::new(0, 3)));
        assert!(grid.is_border(GridIndex::new(5, 3)));
        assert!(grid.is_border(GridIndex::new(2, 7)));
        assert!(!grid.is_border(GridIndex::new(2, 6)));
        assert_eq!(grid.center(), GridIndex::new(3, 4));
        assert_eq!(grid.border().count(), 2 * 8 + 2 * 4);
    }

    #[test]
    fn test_iter_order() {
        let grid = Grid::new(5, 6);
        let indices: Vec<_> = grid.indices().take(7).collect();
        assert_eq!(indices[0], GridIndex::new(0, 0));
        assert_eq!(indices[5], GridIndex::new(0, 5));
        assert_eq!(indices[6], GridIndex::new(1, 0));
    }

    #[test]
    fn test_display_top_row_first() {
        let mut grid = Grid::new(5, 5);
        grid.set(GridIndex::new(4, 0), CellKind::OuterWall);
        grid.set(GridIndex::new(0, 4), CellKind::InnerWall);

        let text = grid.to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "#....");
        assert_eq!(lines[4], "....+");
    }

    fn walled(rows: usize, cols: usize, exit: GridIndex) -> Grid {
        let mut grid = Grid::new(rows, cols);
        let border: Vec<_> = grid.indices().filter(|i| grid.is_border(*i)).collect();
        for index in border {
            grid.set(index, CellKind::OuterWall);
        }
        grid.set_exit(exit);
        grid
    }

    #[test]
    fn test_deserialize_checked_grid() {
        let grid = walled(5, 6, GridIndex::new(0, 3));
        let json = serde_json::to_string(&grid).unwrap();
        let parsed: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, grid);
    }

    #[test]
    fn test_deserialize_rejects_wrong_cell_count() {
        let json = r#"{"row_count":5,"col_count":5,"cells":["Empty"],"exit":{"row":3,"col":3}}"#;
        let err = serde_json::from_str::<Grid>(json).unwrap_err();
        assert!(err.to_string().contains("1 cells for a 5x5 grid"), "{}", err);
    }

    #[test]
    fn test_deserialize_rejects_broken_invariants() {
        // Exit off the border
        let mut value = serde_json::to_value(walled(5, 5, GridIndex::new(0, 2))).unwrap();
        value["exit"] = serde_json::json!({"row": 2, "col": 2});
        assert!(serde_json::from_value::<Grid>(value).is_err());

        // Border cell left open besides the exit
        let mut value = serde_json::to_value(walled(5, 5, GridIndex::new(0, 2))).unwrap();
        value["cells"][1] = serde_json::json!("Empty");
        assert!(serde_json::from_value::<Grid>(value).is_err());

        // Too small
        let json = r#"{"row_count":3,"col_count":3,"cells":["OuterWall","OuterWall","OuterWall","Empty","Empty","OuterWall","OuterWall","OuterWall","OuterWall"],"exit":{"row":1,"col":0}}"#;
        assert!(serde_json::from_str::<Grid>(json).is_err());
    }
}
