//! Driver-owned simulation state: current grid, run state and generation counter
//!
//! The periodic trigger itself lives outside this type. A driver calls
//! [`Simulation::tick`] once per timer period; ticks only advance the grid
//! while the simulation is running.

use std::fmt;
use std::time::Duration;

use crate::engine::grid::{Coordinate, Grid};
use crate::io::configuration::DEFAULT_INTERVAL_MS;
use crate::io::error::Result;

/// Whether periodic ticks advance the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    /// Ticks are ignored
    #[default]
    Stopped,
    /// Each tick advances one generation
    Running,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stopped => write!(f, "stopped"),
            Self::Running => write!(f, "running"),
        }
    }
}

/// Explicit state owned by a UI or CLI driver
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    state: RunState,
    generation: u64,
    interval: Duration,
}

impl Simulation {
    /// Create a stopped simulation over an empty grid
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if the grid dimensions are rejected
    pub fn new(rows: i32, cols: i32, interval: Duration) -> Result<Self> {
        Ok(Self {
            grid: Grid::new(rows, cols)?,
            state: RunState::Stopped,
            generation: 0,
            interval,
        })
    }

    /// Create a stopped simulation with the default tick interval
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if the grid dimensions are rejected
    pub fn with_default_interval(rows: i32, cols: i32) -> Result<Self> {
        Self::new(rows, cols, Duration::from_millis(DEFAULT_INTERVAL_MS))
    }

    /// Current grid
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current run state
    pub const fn state(&self) -> RunState {
        self.state
    }

    /// Check whether ticks currently advance the grid
    pub const fn is_running(&self) -> bool {
        matches!(self.state, RunState::Running)
    }

    /// Number of generations advanced since the grid was last seeded or cleared
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Period between ticks
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Transition to running; returns false if already running
    pub fn start(&mut self) -> bool {
        self.transition(RunState::Running)
    }

    /// Transition to stopped; returns false if already stopped
    pub fn stop(&mut self) -> bool {
        self.transition(RunState::Stopped)
    }

    fn transition(&mut self, target: RunState) -> bool {
        if self.state == target {
            return false;
        }
        tracing::debug!(from = %self.state, to = %target, generation = self.generation, "run state changed");
        self.state = target;
        true
    }

    /// Flip one cell of the current grid
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` and keeps the current grid if the coordinate lies
    /// outside it
    pub fn toggle(&mut self, row: i32, col: i32) -> Result<()> {
        self.grid = self.grid.toggle(row, col)?;
        Ok(())
    }

    /// Replace the grid with exactly the given live cells and restart counting
    pub fn set_cells<I>(&mut self, coordinates: I)
    where
        I: IntoIterator<Item = Coordinate>,
    {
        self.grid = self.grid.set_alive(coordinates);
        self.generation = 0;
        tracing::debug!(population = self.grid.population(), "grid seeded");
    }

    /// Discard the grid for an empty one of the same dimensions
    pub fn clear(&mut self) {
        self.set_cells(std::iter::empty());
    }

    /// Install the next generation regardless of run state
    ///
    /// Returns whether any cell changed.
    pub fn advance(&mut self) -> bool {
        let next = self.grid.next_generation();
        let changed = next != self.grid;
        self.grid = next;
        self.generation += 1;
        changed
    }

    /// Periodic trigger: advance if running
    ///
    /// Returns `None` when stopped, otherwise whether any cell changed.
    pub fn tick(&mut self) -> Option<bool> {
        self.is_running().then(|| self.advance())
    }
}
