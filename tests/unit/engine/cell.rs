//! Tests for the binary cell state

#[cfg(test)]
mod tests {
    use lifegrid::Cell;

    // Tests toggling flips state and toggling twice restores it
    // Verified by returning self from toggled
    #[test]
    fn test_toggled_flips_state() {
        assert_eq!(Cell::Alive.toggled(), Cell::Dead);
        assert_eq!(Cell::Dead.toggled(), Cell::Alive);
        assert_eq!(Cell::Alive.toggled().toggled(), Cell::Alive);
    }

    // Tests default cell is dead
    // Verified by moving #[default] to Alive
    #[test]
    fn test_default_is_dead() {
        assert_eq!(Cell::default(), Cell::Dead);
        assert!(!Cell::default().is_alive());
    }

    // Tests neighborhood weights
    #[test]
    fn test_weight() {
        assert_eq!(Cell::Alive.weight(), 1);
        assert_eq!(Cell::Dead.weight(), 0);
    }

    // Tests conversion from bool and text rendering
    // Verified by swapping display characters
    #[test]
    fn test_from_bool_and_display() {
        assert_eq!(Cell::from(true), Cell::Alive);
        assert_eq!(Cell::from(false), Cell::Dead);
        assert_eq!(Cell::Alive.to_string(), "#");
        assert_eq!(Cell::Dead.to_string(), ".");
    }
}
