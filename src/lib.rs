//! Fixed-size Conway's Game of Life engine with a rendering driver
//!
//! The engine holds a bounded grid of alive/dead cells and computes each new
//! generation from the previous one simultaneously. Drivers own a
//! [`Simulation`](engine::Simulation) and call into the grid through a small
//! set of pure operations.

#![forbid(unsafe_code)]

/// Grid state, transition rule, and simulation state
pub mod engine;
/// Input/output operations, rendering and error handling
pub mod io;

pub use engine::{Cell, Coordinate, Grid, RunState, Simulation};
pub use io::error::{LifeError, Result};
