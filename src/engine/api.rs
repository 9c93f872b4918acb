//! Free-function interface over [`Grid`] for UI drivers
//!
//! Each function maps one-to-one onto a `Grid` method and takes the grid by
//! reference, returning a new value.

use crate::engine::grid::{Coordinate, Grid};
use crate::io::error::Result;

/// Create an all-dead grid
///
/// # Errors
///
/// Returns `InvalidDimension` if either dimension is not positive or too large
pub fn create_grid(rows: i32, cols: i32) -> Result<Grid> {
    Grid::new(rows, cols)
}

/// Flip one cell
///
/// # Errors
///
/// Returns `OutOfBounds` if the coordinate lies outside the grid
pub fn toggle_cell(grid: &Grid, row: i32, col: i32) -> Result<Grid> {
    grid.toggle(row, col)
}

/// Replace the grid contents with exactly the given live cells
///
/// Out-of-bounds coordinates are skipped.
pub fn set_cells<I>(grid: &Grid, coordinates: I) -> Grid
where
    I: IntoIterator<Item = Coordinate>,
{
    grid.set_alive(coordinates)
}

/// Advance one generation
pub fn step(grid: &Grid) -> Grid {
    grid.next_generation()
}

/// Count live Moore neighbors of a cell
///
/// # Errors
///
/// Returns `OutOfBounds` if the coordinate lies outside the grid
pub fn live_neighbor_count(grid: &Grid, row: i32, col: i32) -> Result<u8> {
    grid.count_live_neighbors(row, col)
}
