//! Grid rasterisation and PNG export

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::engine::cell::Cell;
use crate::engine::grid::Grid;
use crate::io::configuration::{
    ALIVE_COLOR, DEAD_COLOR, DEFAULT_CELL_SIZE, GRID_LINE_COLOR, MAX_IMAGE_SIDE,
};
use crate::io::error::{LifeError, Result, invalid_parameter};

/// Appearance of a rendered grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    /// Side length of one cell in pixels, including its stroke
    pub cell_size: u32,
    /// Draw a one-pixel stroke around every cell
    pub grid_lines: bool,
    /// Fill color of live cells
    pub alive: [u8; 4],
    /// Fill color of dead cells
    pub dead: [u8; 4],
    /// Stroke color
    pub line: [u8; 4],
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            grid_lines: true,
            alive: ALIVE_COLOR,
            dead: DEAD_COLOR,
            line: GRID_LINE_COLOR,
        }
    }
}

impl RenderStyle {
    /// Check the style can produce an image
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `cell_size` is zero, or is one while grid
    /// lines are enabled (the stroke would cover every cell)
    pub fn validate(&self) -> Result<()> {
        if self.cell_size == 0 {
            return Err(invalid_parameter(
                "cell_size",
                &self.cell_size,
                &"must be at least 1",
            ));
        }
        if self.grid_lines && self.cell_size < 2 {
            return Err(invalid_parameter(
                "cell_size",
                &self.cell_size,
                &"must be at least 2 when grid lines are drawn",
            ));
        }
        Ok(())
    }

    /// Pixel dimensions (width, height) of a rendered grid
    ///
    /// `None` when a side does not fit in a `u32`.
    pub const fn image_dimensions(&self, rows: usize, cols: usize) -> Option<(u32, u32)> {
        let stroke = if self.grid_lines { 1 } else { 0 };
        match (
            side_length(cols, self.cell_size, stroke),
            side_length(rows, self.cell_size, stroke),
        ) {
            (Some(width), Some(height)) => Some((width, height)),
            _ => None,
        }
    }

    const fn fill(&self, cell: Cell) -> [u8; 4] {
        match cell {
            Cell::Alive => self.alive,
            Cell::Dead => self.dead,
        }
    }
}

const fn side_length(cells: usize, cell_size: u32, stroke: u32) -> Option<u32> {
    if cells > u32::MAX as usize {
        return None;
    }
    match (cells as u32).checked_mul(cell_size) {
        Some(pixels) => pixels.checked_add(stroke),
        None => None,
    }
}

/// Render a grid into an RGBA image
///
/// Each cell becomes a `cell_size` square; row 0 is the top edge.
///
/// # Errors
///
/// Returns `InvalidParameter` if the style is invalid or the image would be
/// wider or taller than `MAX_IMAGE_SIDE`
pub fn render_grid(grid: &Grid, style: &RenderStyle) -> Result<RgbaImage> {
    render_with(grid.dimensions(), style, |row, col| {
        grid.cells().get((row, col)).copied().unwrap_or_default()
    })
}

/// Render cells supplied by a lookup function into an RGBA image
///
/// # Errors
///
/// Returns `InvalidParameter` if the style is invalid or the image would be
/// wider or taller than `MAX_IMAGE_SIDE`
pub(crate) fn render_with<F>(
    (rows, cols): (usize, usize),
    style: &RenderStyle,
    cell_at: F,
) -> Result<RgbaImage>
where
    F: Fn(usize, usize) -> Cell,
{
    style.validate()?;

    let (width, height) = match style.image_dimensions(rows, cols) {
        Some((width, height)) if width <= MAX_IMAGE_SIDE && height <= MAX_IMAGE_SIDE => {
            (width, height)
        }
        _ => {
            return Err(invalid_parameter(
                "cell_size",
                &style.cell_size,
                &format!("a {rows}x{cols} grid would exceed {MAX_IMAGE_SIDE} pixels per side"),
            ));
        }
    };
    let size = style.cell_size;

    let img = RgbaImage::from_fn(width, height, |x, y| {
        let on_stroke = style.grid_lines && (x % size == 0 || y % size == 0);
        let row = (y / size) as usize;
        let col = (x / size) as usize;

        if on_stroke || row >= rows || col >= cols {
            Rgba(style.line)
        } else {
            Rgba(style.fill(cell_at(row, col)))
        }
    });

    Ok(img)
}

/// Export the grid as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The render style is invalid
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &Grid, style: &RenderStyle, output_path: &Path) -> Result<()> {
    let img = render_grid(grid, style)?;

    create_parent_dir(output_path)?;

    img.save(output_path)
        .map_err(|e| LifeError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    tracing::info!(path = %output_path.display(), "exported grid image");
    Ok(())
}

/// Create the parent directory of an output path if it is missing
///
/// # Errors
///
/// Returns `FileSystem` if the directory cannot be created
pub(crate) fn create_parent_dir(output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| LifeError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}
