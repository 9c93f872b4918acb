/// Command-line argument parsing and run orchestration
pub mod cli;
/// Simulation constants and defaults
pub mod configuration;
/// Coordinate text parsing
pub mod coordinates;
/// Error types
pub mod error;
/// Grid rasterisation and PNG export
pub mod image;
/// Generation progress display
pub mod progress;
/// GIF capture of simulation runs
pub mod visualization;
