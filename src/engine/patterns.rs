//! Named seed patterns and reproducible random soups

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::engine::grid::Coordinate;
use crate::io::error::{Result, invalid_parameter};

/// A pattern given as live cells relative to its top-left anchor
#[derive(Debug, Clone, Copy)]
pub struct Pattern {
    /// Lookup name
    pub name: &'static str,
    /// Live cells relative to (0, 0)
    pub cells: &'static [Coordinate],
}

impl Pattern {
    /// Height and width of the pattern's bounding box
    pub fn extent(&self) -> (i32, i32) {
        self.cells
            .iter()
            .fold((0, 0), |(h, w), &(row, col)| (h.max(row + 1), w.max(col + 1)))
    }

    /// Live cells translated so the anchor sits at (row, col)
    pub fn cells_at(&self, row: i32, col: i32) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells.iter().map(move |&(r, c)| (r + row, c + col))
    }

    /// Live cells translated so the pattern is centred on a grid of the given size
    pub fn cells_centred(&self, rows: usize, cols: usize) -> impl Iterator<Item = Coordinate> + '_ {
        let (height, width) = self.extent();
        let row = (rows as i32 - height) / 2;
        let col = (cols as i32 - width) / 2;
        self.cells_at(row, col)
    }
}

/// Built-in pattern catalog
pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
];

/// Look up a catalog pattern by name, ignoring case
pub fn find_pattern(name: &str) -> Option<&'static Pattern> {
    PATTERNS
        .iter()
        .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
}

/// Names of all catalog patterns
pub fn pattern_names() -> Vec<&'static str> {
    PATTERNS.iter().map(|pattern| pattern.name).collect()
}

/// Random live cells covering roughly `density` of a `rows` x `cols` grid
///
/// The same seed always yields the same cells.
///
/// # Errors
///
/// Returns `InvalidParameter` if `density` is not within [0, 1]
pub fn random_cells(rows: usize, cols: usize, density: f64, seed: u64) -> Result<Vec<Coordinate>> {
    if !(0.0..=1.0).contains(&density) {
        return Err(invalid_parameter(
            "density",
            &density,
            &"must be between 0 and 1",
        ));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut cells = Vec::new();
    for row in 0..rows {
        for col in 0..cols {
            if rng.random_bool(density) {
                cells.push((row as i32, col as i32));
            }
        }
    }
    Ok(cells)
}
