//! Binary cell state

use std::fmt;

/// State of a single grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Empty position
    #[default]
    Dead,
    /// Occupied position
    Alive,
}

impl Cell {
    /// Check whether the cell is alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }

    /// The opposite state
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Alive => Self::Dead,
            Self::Dead => Self::Alive,
        }
    }

    /// Numeric weight used when summing neighborhoods (1 for alive, 0 for dead)
    pub const fn weight(self) -> u8 {
        match self {
            Self::Alive => 1,
            Self::Dead => 0,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Self::Alive } else { Self::Dead }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alive => write!(f, "#"),
            Self::Dead => write!(f, "."),
        }
    }
}
