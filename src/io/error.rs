//! Error types for grid operations, coordinate parsing and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all grid and driver operations
#[derive(Debug)]
pub enum LifeError {
    /// Grid dimensions are non-positive or exceed the supported maximum
    InvalidDimension {
        /// Requested row count
        rows: i32,
        /// Requested column count
        cols: i32,
        /// Explanation of why the dimensions were rejected
        reason: &'static str,
    },

    /// Coordinate lies outside the grid on an operation that does not tolerate it
    OutOfBounds {
        /// Requested row
        row: i32,
        /// Requested column
        col: i32,
        /// Grid row count
        rows: usize,
        /// Grid column count
        cols: usize,
    },

    /// A token of coordinate text could not be read as `row,col`
    MalformedCoordinate {
        /// The offending token
        token: String,
        /// Description of what is wrong with it
        reason: String,
    },

    /// Runtime parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to encode or save a rendered image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for LifeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { rows, cols, reason } => {
                write!(f, "Invalid grid dimensions {rows}x{cols}: {reason}")
            }
            Self::OutOfBounds {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "Coordinate ({row}, {col}) is outside the {rows}x{cols} grid"
                )
            }
            Self::MalformedCoordinate { token, reason } => {
                write!(f, "Malformed coordinate '{token}': {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for LifeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for grid and driver results
pub type Result<T> = std::result::Result<T, LifeError>;

impl From<image::ImageError> for LifeError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for LifeError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> LifeError {
    LifeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an out-of-bounds error for a grid of the given dimensions
pub const fn out_of_bounds(row: i32, col: i32, dimensions: (usize, usize)) -> LifeError {
    LifeError::OutOfBounds {
        row,
        col,
        rows: dimensions.0,
        cols: dimensions.1,
    }
}
