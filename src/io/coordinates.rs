//! Parsing of `row,col row,col ...` coordinate text
//!
//! Range checking is left to the grid, which skips out-of-range cells. This
//! parser only rejects tokens that are not two comma-separated integers.

use std::path::Path;

use crate::engine::grid::Coordinate;
use crate::io::error::{LifeError, Result};

/// Marker that starts a comment in coordinate files
pub const COMMENT_MARKER: char = '#';

/// Parse whitespace-separated `row,col` tokens
///
/// Empty or whitespace-only input yields no coordinates.
///
/// # Errors
///
/// Returns `MalformedCoordinate` for the first token that does not consist of
/// exactly two comma-separated integers
pub fn parse_coordinates(text: &str) -> Result<Vec<Coordinate>> {
    text.split_whitespace().map(parse_token).collect()
}

/// Read and parse a coordinate file
///
/// Uses the same token format as [`parse_coordinates`]; everything after a `#`
/// on a line is ignored.
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read, or `MalformedCoordinate`
/// for an invalid token
pub fn parse_coordinate_file(path: &Path) -> Result<Vec<Coordinate>> {
    let content = std::fs::read_to_string(path).map_err(|e| LifeError::FileSystem {
        path: path.to_path_buf(),
        operation: "read coordinates",
        source: e,
    })?;

    let mut coordinates = Vec::new();
    for line in content.lines() {
        let data = line
            .split_once(COMMENT_MARKER)
            .map_or(line, |(before, _)| before);
        coordinates.extend(parse_coordinates(data)?);
    }
    Ok(coordinates)
}

fn parse_token(token: &str) -> Result<Coordinate> {
    let mut parts = token.split(',');
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(LifeError::MalformedCoordinate {
            token: token.to_string(),
            reason: "expected exactly two comma-separated values".to_string(),
        });
    };

    Ok((parse_component(token, row)?, parse_component(token, col)?))
}

fn parse_component(token: &str, component: &str) -> Result<i32> {
    component
        .parse::<i32>()
        .map_err(|e| LifeError::MalformedCoordinate {
            token: token.to_string(),
            reason: format!("'{component}' is not an integer ({e})"),
        })
}
