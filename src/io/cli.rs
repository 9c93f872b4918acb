//! Command-line driver: seed a grid, run timed generations, export the result

use crate::engine::grid::Coordinate;
use crate::engine::patterns::{find_pattern, pattern_names, random_cells};
use crate::engine::simulation::Simulation;
use crate::io::configuration::{
    DEFAULT_CELL_SIZE, DEFAULT_COLS, DEFAULT_DENSITY, DEFAULT_GENERATIONS, DEFAULT_INTERVAL_MS,
    DEFAULT_OUTPUT, DEFAULT_ROWS, DEFAULT_SEED,
};
use crate::io::coordinates::{parse_coordinate_file, parse_coordinates};
use crate::io::error::{LifeError, Result, invalid_parameter};
use crate::io::image::{RenderStyle, export_grid_as_png};
use crate::io::progress::ProgressReporter;
use crate::io::visualization::GenerationCapture;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

// Upper bound on snapshot slots reserved up front for a GIF capture
const MAX_PREALLOCATED_FRAMES: u64 = 4096;

#[derive(Parser, Debug)]
#[command(name = "lifegrid")]
#[command(
    author,
    version,
    about = "Run Conway's Game of Life on a fixed-size grid"
)]
/// Command-line arguments for the simulation driver
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Number of grid rows
    #[arg(long, default_value_t = DEFAULT_ROWS, allow_negative_numbers = true)]
    pub rows: i32,

    /// Number of grid columns
    #[arg(long, default_value_t = DEFAULT_COLS, allow_negative_numbers = true)]
    pub cols: i32,

    /// Live cells as "row,col row,col ..."
    #[arg(short, long, value_name = "COORDS", allow_hyphen_values = true)]
    pub cells: Option<String>,

    /// File of live cells in the same format ('#' starts a comment)
    #[arg(short = 'f', long, value_name = "FILE")]
    pub cells_file: Option<PathBuf>,

    /// Named pattern placed at the centre of the grid
    #[arg(short, long, value_name = "NAME")]
    pub pattern: Option<String>,

    /// Add a random soup with the given live-cell density (bare flag uses the default)
    #[arg(short, long, value_name = "DENSITY", num_args = 0..=1)]
    pub random: Option<Option<f64>>,

    /// Random seed for reproducible soups
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of generations to run
    #[arg(short, long, default_value_t = DEFAULT_GENERATIONS)]
    pub generations: u64,

    /// Milliseconds between generation ticks (also the GIF frame delay)
    #[arg(short, long, default_value_t = DEFAULT_INTERVAL_MS)]
    pub interval_ms: u64,

    /// Sleep for the tick interval between generations
    #[arg(long)]
    pub realtime: bool,

    /// Stop as soon as a generation leaves the grid unchanged
    #[arg(long)]
    pub stop_when_stable: bool,

    /// Output PNG path for the final generation
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Also write every generation as an animated GIF
    #[arg(short, long, value_name = "GIF")]
    pub visualize: Option<PathBuf>,

    /// Side length of one cell in pixels
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Render cells without separating lines
    #[arg(long)]
    pub no_grid_lines: bool,

    /// Print the final generation as text to stdout
    #[arg(long)]
    pub print: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Density of the requested random soup, `DEFAULT_DENSITY` when given bare
    pub const fn random_density(&self) -> Option<f64> {
        match self.random {
            Some(Some(density)) => Some(density),
            Some(None) => Some(DEFAULT_DENSITY),
            None => None,
        }
    }

    /// Period between generation ticks
    pub const fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Outcome of a simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Generations advanced
    pub generations: u64,
    /// Live cells in the final generation
    pub population: usize,
    /// Whether the run ended early on an unchanged generation
    pub stable: bool,
}

/// Drives a [`Simulation`] according to CLI arguments
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Build a stopped simulation seeded from every requested source
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are invalid or a seed source fails
    pub fn build_simulation(&self) -> Result<Simulation> {
        let mut simulation = Simulation::new(self.cli.rows, self.cli.cols, self.cli.interval())?;
        let (rows, cols) = simulation.grid().dimensions();
        let coordinates = self.seed_coordinates(rows, cols)?;
        simulation.set_cells(coordinates);
        Ok(simulation)
    }

    /// Union of the live cells requested by `--cells`, `--cells-file`,
    /// `--pattern` and `--random`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Coordinate text or file is malformed or unreadable
    /// - The pattern name is unknown
    /// - The random density is outside [0, 1]
    pub fn seed_coordinates(&self, rows: usize, cols: usize) -> Result<Vec<Coordinate>> {
        let mut coordinates = Vec::new();

        if let Some(text) = &self.cli.cells {
            coordinates.extend(parse_coordinates(text)?);
        }

        if let Some(path) = &self.cli.cells_file {
            coordinates.extend(parse_coordinate_file(path)?);
        }

        if let Some(name) = &self.cli.pattern {
            let pattern = find_pattern(name).ok_or_else(|| {
                invalid_parameter(
                    "pattern",
                    name,
                    &format!("unknown pattern, expected one of {}", pattern_names().join(", ")),
                )
            })?;
            coordinates.extend(pattern.cells_centred(rows, cols));
        }

        if let Some(density) = self.cli.random_density() {
            coordinates.extend(random_cells(rows, cols, density, self.cli.seed)?);
        }

        Ok(coordinates)
    }

    /// Render style selected by the CLI arguments
    pub fn render_style(&self) -> RenderStyle {
        RenderStyle {
            cell_size: self.cli.cell_size,
            grid_lines: !self.cli.no_grid_lines,
            ..RenderStyle::default()
        }
    }

    /// Run the simulation loop without exporting anything
    ///
    /// The simulation is started, ticked until the generation target (or an
    /// unchanged generation with `--stop-when-stable`), then stopped.
    ///
    /// # Errors
    ///
    /// Returns an error if recording a generation into `capture` fails
    pub fn simulate(
        &self,
        simulation: &mut Simulation,
        mut capture: Option<&mut GenerationCapture>,
    ) -> Result<RunSummary> {
        let progress = if self.cli.should_show_progress() {
            ProgressReporter::new(self.cli.generations)
        } else {
            ProgressReporter::hidden()
        };

        if let Some(capture) = capture.as_deref_mut() {
            capture.record(simulation.grid())?;
        }

        simulation.start();
        tracing::info!(
            rows = simulation.grid().rows(),
            cols = simulation.grid().cols(),
            population = simulation.grid().population(),
            generations = self.cli.generations,
            "simulation started"
        );

        let mut stable = false;
        while simulation.generation() < self.cli.generations {
            let Some(changed) = simulation.tick() else {
                break;
            };

            if let Some(capture) = capture.as_deref_mut() {
                capture.record(simulation.grid())?;
            }
            progress.update(simulation.generation(), simulation.grid().population());

            if self.cli.stop_when_stable && !changed {
                stable = true;
                break;
            }
            if self.cli.realtime && simulation.generation() < self.cli.generations {
                std::thread::sleep(simulation.interval());
            }
        }

        simulation.stop();
        progress.finish();

        let summary = RunSummary {
            generations: simulation.generation(),
            population: simulation.grid().population(),
            stable,
        };
        tracing::info!(
            generations = summary.generations,
            population = summary.population,
            stable = summary.stable,
            "simulation stopped"
        );
        Ok(summary)
    }

    /// Seed, run and export according to the CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if seeding, simulation, export or printing fails
    pub fn run(&self) -> Result<RunSummary> {
        let style = self.render_style();
        style.validate()?;

        let mut simulation = self.build_simulation()?;

        let mut capture = self.cli.visualize.as_ref().map(|_| {
            let frames = self.cli.generations.saturating_add(1).min(MAX_PREALLOCATED_FRAMES);
            GenerationCapture::with_capacity(usize::try_from(frames).unwrap_or(0))
        });

        let summary = self.simulate(&mut simulation, capture.as_mut())?;

        export_grid_as_png(simulation.grid(), &style, &self.cli.output)?;

        if let (Some(path), Some(capture)) = (&self.cli.visualize, &capture) {
            let delay_ms = u32::try_from(self.cli.interval_ms).unwrap_or(u32::MAX);
            capture.export_gif(path, &style, delay_ms)?;
        }

        if self.cli.print {
            let mut stdout = std::io::stdout().lock();
            write!(stdout, "{}", simulation.grid()).map_err(|e| LifeError::FileSystem {
                path: PathBuf::from("<stdout>"),
                operation: "print grid",
                source: e,
            })?;
        }

        Ok(summary)
    }
}
