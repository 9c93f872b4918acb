//! Frame capture and GIF generation for simulation runs

use std::path::Path;

use bitvec::vec::BitVec;
use image::{Delay, Frame};

use crate::engine::cell::Cell;
use crate::engine::grid::Grid;
use crate::io::configuration::{
    FINAL_FRAME_HOLD_FACTOR, MAX_FRAME_DELAY_MS, VIEWER_MIN_FRAME_DELAY_MS,
};
use crate::io::error::{LifeError, Result, invalid_parameter};
use crate::io::image::{RenderStyle, create_parent_dir, render_with};

/// Captures one packed snapshot per generation for later animation
///
/// Snapshots are stored row-major, one bit per cell, so long runs stay small
/// until they are rendered.
pub struct GenerationCapture {
    dimensions: Option<(usize, usize)>,
    snapshots: Vec<BitVec>,
}

impl Default for GenerationCapture {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationCapture {
    /// Create an empty capture
    pub const fn new() -> Self {
        Self {
            dimensions: None,
            snapshots: Vec::new(),
        }
    }

    /// Create an empty capture with room for `generations` snapshots
    pub fn with_capacity(generations: usize) -> Self {
        Self {
            dimensions: None,
            snapshots: Vec::with_capacity(generations),
        }
    }

    /// Record the current state of a grid
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the grid dimensions differ from the first
    /// recorded grid
    pub fn record(&mut self, grid: &Grid) -> Result<()> {
        let dimensions = grid.dimensions();
        match self.dimensions {
            Some(expected) if expected != dimensions => {
                return Err(invalid_parameter(
                    "grid",
                    &format!("{}x{}", dimensions.0, dimensions.1),
                    &format!("capture expects {}x{} grids", expected.0, expected.1),
                ));
            }
            Some(_) => {}
            None => self.dimensions = Some(dimensions),
        }

        let snapshot: BitVec = grid.cells().iter().map(|cell| cell.is_alive()).collect();
        self.snapshots.push(snapshot);
        Ok(())
    }

    /// Number of recorded snapshots
    pub fn frame_count(&self) -> usize {
        self.snapshots.len()
    }

    /// Live-cell count of every recorded snapshot, in order
    pub fn populations(&self) -> Vec<usize> {
        self.snapshots.iter().map(|bits| bits.count_ones()).collect()
    }

    /// Export the captured snapshots as an animated GIF
    ///
    /// Delays are clamped to `VIEWER_MIN_FRAME_DELAY_MS..=MAX_FRAME_DELAY_MS`.
    /// The last frame is held for `FINAL_FRAME_HOLD_FACTOR` delays, up to the
    /// same maximum.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No snapshots were captured
    /// - The render style is invalid
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(
        &self,
        output_path: &Path,
        style: &RenderStyle,
        frame_delay_ms: u32,
    ) -> Result<()> {
        let Some(dimensions) = self.dimensions else {
            return Err(invalid_parameter(
                "capture",
                &"empty",
                &"no generations captured for visualization",
            ));
        };

        let delay_ms = frame_delay_ms.clamp(VIEWER_MIN_FRAME_DELAY_MS, MAX_FRAME_DELAY_MS);
        let frames = self.generate_frames(dimensions, style, delay_ms)?;

        create_parent_dir(output_path)?;

        let file = std::fs::File::create(output_path).map_err(|e| LifeError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let export_error = |e| LifeError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        };
        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .set_repeat(image::codecs::gif::Repeat::Infinite)
            .map_err(export_error)?;
        encoder.encode_frames(frames).map_err(export_error)?;

        tracing::info!(
            path = %output_path.display(),
            frames = self.frame_count(),
            "exported generation animation"
        );
        Ok(())
    }

    fn generate_frames(
        &self,
        dimensions: (usize, usize),
        style: &RenderStyle,
        delay_ms: u32,
    ) -> Result<Vec<Frame>> {
        let cols = dimensions.1;
        let last = self.snapshots.len().saturating_sub(1);

        self.snapshots
            .iter()
            .enumerate()
            .map(|(index, bits)| {
                let img = render_with(dimensions, style, |row, col| {
                    Cell::from(bits.get(row * cols + col).is_some_and(|bit| *bit))
                })?;
                let hold = if index == last { FINAL_FRAME_HOLD_FACTOR } else { 1 };
                let frame_ms = delay_ms.saturating_mul(hold).min(MAX_FRAME_DELAY_MS);
                Ok(Frame::from_parts(
                    img,
                    0,
                    0,
                    Delay::from_numer_denom_ms(frame_ms, 1),
                ))
            })
            .collect()
    }
}
