//! Fixed-size Life grid and the generation-advance algorithm
//!
//! A [`Grid`] never changes dimensions after construction. Every operation that
//! looks like a mutation returns a new grid and leaves the receiver untouched, so
//! a driver can install the result wholesale or drop it on error.

use std::fmt;

use ndarray::Array2;

use crate::engine::cell::Cell;
use crate::engine::neighborhood::moore_neighbors;
use crate::engine::rule::next_state;
use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{LifeError, Result, out_of_bounds};

/// Signed `(row, col)` coordinate as supplied by callers
pub type Coordinate = (i32, i32);

/// Rectangular matrix of cell states
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Create a grid with every cell dead
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if either dimension is not positive or exceeds
    /// `MAX_GRID_DIMENSION`
    pub fn new(rows: i32, cols: i32) -> Result<Self> {
        let shape = validate_dimensions(rows, cols)?;
        Ok(Self {
            cells: Array2::from_elem(shape, Cell::Dead),
        })
    }

    /// Create a grid whose live cells are exactly the in-bounds `coordinates`
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` under the same conditions as [`Grid::new`]
    pub fn with_live_cells<I>(rows: i32, cols: i32, coordinates: I) -> Result<Self>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        Ok(Self::new(rows, cols)?.set_alive(coordinates))
    }

    /// Get the number of rows in the grid
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Get the number of columns in the grid
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Grid dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Convert a signed coordinate to array indices if it lies inside the grid
    pub fn index_of(&self, row: i32, col: i32) -> Option<(usize, usize)> {
        let (rows, cols) = self.dimensions();
        let in_bounds = row >= 0 && col >= 0 && (row as usize) < rows && (col as usize) < cols;
        in_bounds.then_some((row as usize, col as usize))
    }

    /// State of the cell at a coordinate, `None` when out of bounds
    pub fn cell(&self, row: i32, col: i32) -> Option<Cell> {
        self.index_of(row, col)
            .and_then(|index| self.cells.get(index).copied())
    }

    /// Check whether the cell at a coordinate is alive (out of bounds reads as dead)
    pub fn is_alive(&self, row: i32, col: i32) -> bool {
        self.cell(row, col).is_some_and(Cell::is_alive)
    }

    /// Flip a single cell between alive and dead
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the coordinate lies outside the grid
    pub fn toggle(&self, row: i32, col: i32) -> Result<Self> {
        let index = self
            .index_of(row, col)
            .ok_or_else(|| out_of_bounds(row, col, self.dimensions()))?;

        let mut toggled = self.clone();
        if let Some(cell) = toggled.cells.get_mut(index) {
            *cell = cell.toggled();
        }
        Ok(toggled)
    }

    /// Build an all-dead grid of the same dimensions with the given cells alive
    ///
    /// Coordinates outside the grid are skipped. Duplicates have no extra effect.
    #[must_use]
    pub fn set_alive<I>(&self, coordinates: I) -> Self
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut cells = Array2::from_elem(self.dimensions(), Cell::Dead);
        let mut skipped = 0usize;

        for (row, col) in coordinates {
            let Some(cell) = self.index_of(row, col).and_then(|index| cells.get_mut(index)) else {
                skipped += 1;
                continue;
            };
            *cell = Cell::Alive;
        }

        if skipped > 0 {
            tracing::debug!(skipped, "ignored out-of-bounds coordinates");
        }

        Self { cells }
    }

    /// Count live cells among the eight Moore neighbors of a coordinate
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the coordinate lies outside the grid
    pub fn count_live_neighbors(&self, row: i32, col: i32) -> Result<u8> {
        let index = self
            .index_of(row, col)
            .ok_or_else(|| out_of_bounds(row, col, self.dimensions()))?;
        Ok(self.live_neighbors_at(index))
    }

    fn live_neighbors_at(&self, (row, col): (usize, usize)) -> u8 {
        moore_neighbors(self.dimensions(), row, col)
            .filter_map(|index| self.cells.get(index).copied())
            .map(Cell::weight)
            .sum()
    }

    /// Compute the next generation under Conway's rule
    ///
    /// Every cell of the result is derived from this grid only; the result is a
    /// freshly allocated matrix, never an in-place update.
    #[must_use]
    pub fn next_generation(&self) -> Self {
        let cells = Array2::from_shape_fn(self.dimensions(), |index| {
            let current = self.cells.get(index).copied().unwrap_or_default();
            next_state(current, self.live_neighbors_at(index))
        });
        Self { cells }
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Check whether every cell is dead
    pub fn is_extinct(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }

    /// Coordinates of all live cells in row-major order
    pub fn live_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| cell.is_alive())
            .map(|((row, col), _)| (row as i32, col as i32))
    }

    /// Read-only access to the underlying cell matrix
    pub const fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn validate_dimensions(rows: i32, cols: i32) -> Result<(usize, usize)> {
    if rows <= 0 || cols <= 0 {
        return Err(LifeError::InvalidDimension {
            rows,
            cols,
            reason: "rows and columns must be positive",
        });
    }
    if rows > MAX_GRID_DIMENSION || cols > MAX_GRID_DIMENSION {
        return Err(LifeError::InvalidDimension {
            rows,
            cols,
            reason: "dimension exceeds MAX_GRID_DIMENSION",
        });
    }
    Ok((rows as usize, cols as usize))
}
