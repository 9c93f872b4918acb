//! Simulation engine: grid state, neighborhood rule and generation advance
//!
//! This module contains:
//! - Cell states and the Conway transition rule
//! - The fixed-size grid and its Moore neighborhood
//! - The free-function interface used by drivers
//! - Driver-owned simulation state and seed patterns

/// Free-function interface over the grid
pub mod api;
/// Binary cell state
pub mod cell;
/// Fixed-size grid and generation advance
pub mod grid;
/// Moore neighborhood enumeration
pub mod neighborhood;
/// Named seed patterns and random soups
pub mod patterns;
/// Conway's transition rule
pub mod rule;
/// Run state, generation counter and periodic tick
pub mod simulation;

pub use cell::Cell;
pub use grid::{Coordinate, Grid};
pub use simulation::{RunState, Simulation};
