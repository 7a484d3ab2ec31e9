use crate::common::DomainResult;
use crate::domains::route_map::ports::PathRenderer;
use crate::domains::route_map::types::{GridBounds, GridPath, NamedPoint};

const EMPTY: char = '.';
const PATH: char = '*';
const LANDMARK: char = 'o';
const LANDMARK_ON_PATH: char = '@';

/// Draws the grid as text, one line per row. Cells outside the bounds are skipped.
pub struct AsciiGridRenderer {
    bounds: GridBounds,
}

impl AsciiGridRenderer {
    pub fn new(bounds: GridBounds) -> Self {
        Self { bounds }
    }
}

impl PathRenderer for AsciiGridRenderer {
    fn render(&self, landmarks: &[NamedPoint], path: &GridPath) -> DomainResult<String> {
        let rows = self.bounds.rows.max(0) as usize;
        let cols = self.bounds.cols.max(0) as usize;
        let mut canvas = vec![vec![EMPTY; cols]; rows];

        for cell in path.iter().filter(|c| self.bounds.contains(c)) {
            canvas[cell.row as usize][cell.col as usize] = PATH;
        }
        for landmark in landmarks.iter().filter(|l| self.bounds.contains(&l.point)) {
            let slot = &mut canvas[landmark.point.row as usize][landmark.point.col as usize];
            *slot = if *slot == PATH { LANDMARK_ON_PATH } else { LANDMARK };
        }

        let mut out = String::with_capacity(rows * (cols + 1));
        for row in canvas {
            out.extend(row);
            out.push('\n');
        }
        Ok(out)
    }
}
