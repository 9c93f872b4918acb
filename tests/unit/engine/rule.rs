//! Tests for the `B3/S23` transition rule

#[cfg(test)]
mod tests {
    use lifegrid::Cell;
    use lifegrid::engine::rule::{BIRTH_COUNT, next_state};

    // Tests live cells survive only with two or three neighbors
    // Verified by adding 4 to the survival counts
    #[test]
    fn test_survival_table() {
        for count in 0..=8u8 {
            let expected = if count == 2 || count == 3 {
                Cell::Alive
            } else {
                Cell::Dead
            };
            assert_eq!(
                next_state(Cell::Alive, count),
                expected,
                "alive cell with {count} neighbors"
            );
        }
    }

    // Tests dead cells are born only with exactly three neighbors
    // Verified by allowing birth on 2 neighbors
    #[test]
    fn test_birth_table() {
        for count in 0..=8u8 {
            let expected = if count == BIRTH_COUNT {
                Cell::Alive
            } else {
                Cell::Dead
            };
            assert_eq!(
                next_state(Cell::Dead, count),
                expected,
                "dead cell with {count} neighbors"
            );
        }
    }
}
