//! Moore neighborhood enumeration clipped to grid bounds
//!
//! The grid is bounded: positions that fall off an edge are simply absent,
//! there is no wraparound.

use std::ops::Range;

/// Chebyshev radius of the Moore neighborhood
pub const MOORE_RADIUS: usize = 1;

/// Get row and column spans around a position, clamped to the grid
///
/// The spans include the center position itself.
pub fn region_spans(
    dimensions: (usize, usize),
    row: usize,
    col: usize,
    radius: usize,
) -> (Range<usize>, Range<usize>) {
    let row_start = row.saturating_sub(radius);
    let col_start = col.saturating_sub(radius);
    let row_end = row.saturating_add(radius + 1).min(dimensions.0);
    let col_end = col.saturating_add(radius + 1).min(dimensions.1);

    (row_start..row_end, col_start..col_end)
}

/// Iterate the in-bounds Moore neighbors of a position, excluding the position itself
///
/// Yields at most eight positions in row-major order.
pub fn moore_neighbors(
    dimensions: (usize, usize),
    row: usize,
    col: usize,
) -> impl Iterator<Item = (usize, usize)> {
    let (rows, cols) = region_spans(dimensions, row, col, MOORE_RADIUS);
    rows.flat_map(move |r| cols.clone().map(move |c| (r, c)))
        .filter(move |&position| position != (row, col))
}
