use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell on the landmark grid, addressed by `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPoint {
    pub row: i32,
    pub col: i32,
}

impl GridPoint {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// True when `other` is the same cell or one of its eight neighbours.
    pub fn is_adjacent_to(&self, other: &GridPoint) -> bool {
        (self.row - other.row).abs() <= 1 && (self.col - other.col).abs() <= 1
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A landmark: a grid cell plus its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedPoint {
    #[serde(flatten)]
    pub point: GridPoint,
    pub name: String,
}

impl NamedPoint {
    pub fn new(row: i32, col: i32, name: impl Into<String>) -> Self {
        Self {
            point: GridPoint::new(row, col),
            name: name.into(),
        }
    }
}

/// Ordered cells visited by a rasterized line, endpoints included.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GridPath {
    pub cells: Vec<GridPoint>,
}

impl GridPath {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn first(&self) -> Option<&GridPoint> {
        self.cells.first()
    }

    pub fn last(&self) -> Option<&GridPoint> {
        self.cells.last()
    }

    pub fn contains(&self, point: &GridPoint) -> bool {
        self.cells.contains(point)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GridPoint> {
        self.cells.iter()
    }

    /// Same cells, opposite direction.
    pub fn reversed(&self) -> GridPath {
        let mut cells = self.cells.clone();
        cells.reverse();
        GridPath { cells }
    }
}

impl From<Vec<GridPoint>> for GridPath {
    fn from(cells: Vec<GridPoint>) -> Self {
        Self { cells }
    }
}

impl<'a> IntoIterator for &'a GridPath {
    type Item = &'a GridPoint;
    type IntoIter = std::slice::Iter<'a, GridPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceResult {
    pub distance_km: f64,
    /// Hours when speed is given in km/h.
    pub time: f64,
}

/// Extent of the grid; valid cells are `[0, rows) x [0, cols)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBounds {
    pub rows: i32,
    pub cols: i32,
}

impl GridBounds {
    pub const fn square(size: i32) -> Self {
        Self { rows: size, cols: size }
    }

    pub fn contains(&self, point: &GridPoint) -> bool {
        point.row >= 0 && point.row < self.rows && point.col >= 0 && point.col < self.cols
    }
}

impl Default for GridBounds {
    fn default() -> Self {
        Self::square(20)
    }
}

/// Pixel layout of the grid used by renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellGeometry {
    pub cell_width: i32,
    pub cell_height: i32,
}

impl CellGeometry {
    /// Pixel centre `(x, y)` of a cell; columns run along x.
    pub fn center_of(&self, point: &GridPoint) -> (i32, i32) {
        (
            point.col * self.cell_width + self.cell_width / 2,
            point.row * self.cell_height + self.cell_height / 2,
        )
    }
}

impl Default for CellGeometry {
    fn default() -> Self {
        Self {
            cell_width: 80,
            cell_height: 80,
        }
    }
}
