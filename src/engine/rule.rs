//! Conway's transition rule (`B3/S23`)

use crate::engine::cell::Cell;

/// Live-neighbor count at which a dead cell is born
pub const BIRTH_COUNT: u8 = 3;

/// Next state of a cell given its current state and live-neighbor count
pub const fn next_state(current: Cell, live_neighbors: u8) -> Cell {
    match (current, live_neighbors) {
        (Cell::Alive, 2 | 3) | (Cell::Dead, BIRTH_COUNT) => Cell::Alive,
        _ => Cell::Dead,
    }
}
