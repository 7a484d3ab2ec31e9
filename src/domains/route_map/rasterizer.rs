use crate::common::{DomainError, DomainResult};
use crate::domains::route_map::types::{GridPath, GridPoint};

/// Integer Bresenham line between two cells, both endpoints included.
///
/// Columns are the first (x) axis and rows the second. Consecutive cells are
/// 8-connected and the path has `max(|dcol|, |drow|) + 1` cells.
///
/// The accumulator's tie-break depends on direction, so the line is always
/// traced from the lexicographically smaller endpoint and reversed when
/// needed. `rasterize(b, a)` is therefore exactly `rasterize(a, b)` reversed.
///
/// Any pair of `i32` cells is accepted; the path holds one cell per step along
/// the longer axis, so callers bound coordinates to keep it small.
pub fn rasterize(from: GridPoint, to: GridPoint) -> GridPath {
    if to < from {
        let mut cells = trace(to, from);
        cells.reverse();
        return GridPath { cells };
    }
    GridPath {
        cells: trace(from, to),
    }
}

fn trace(from: GridPoint, to: GridPoint) -> Vec<GridPoint> {
    // i64 so that deltas and the doubled accumulator cannot overflow for any i32 cell
    let dx = (to.col as i64 - from.col as i64).abs();
    let dy = (to.row as i64 - from.row as i64).abs();
    let sx = if from.col < to.col { 1 } else { -1 };
    let sy = if from.row < to.row { 1 } else { -1 };
    let mut err = dx - dy;

    let mut cells = Vec::with_capacity(dx.max(dy) as usize + 1);
    let mut current = from;
    loop {
        cells.push(current);
        if current == to {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            current.col += sx;
        }
        if e2 < dx {
            err += dx;
            current.row += sy;
        }
    }
    cells
}

/// Rasterize each consecutive pair of waypoints into one path.
/// Shared joints appear once.
pub fn rasterize_polyline(waypoints: &[GridPoint]) -> DomainResult<GridPath> {
    if waypoints.len() < 2 {
        return Err(DomainError::InvalidArgument {
            reason: format!("A path needs at least two waypoints, got {}", waypoints.len()),
        });
    }

    let mut cells: Vec<GridPoint> = vec![waypoints[0]];
    for pair in waypoints.windows(2) {
        let segment = rasterize(pair[0], pair[1]);
        cells.extend(segment.cells.into_iter().skip(1));
    }
    Ok(GridPath { cells })
}
