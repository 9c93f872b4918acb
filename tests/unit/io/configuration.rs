//! Tests for simulation defaults

#[cfg(test)]
mod tests {
    use lifegrid::io::configuration::{
        ALIVE_COLOR, DEAD_COLOR, DEFAULT_CELL_SIZE, DEFAULT_COLS, DEFAULT_DENSITY,
        DEFAULT_INTERVAL_MS, DEFAULT_ROWS, MAX_GRID_DIMENSION, VIEWER_MIN_FRAME_DELAY_MS,
    };

    // Tests the reference 30x30 grid is the default
    // Verified by changing constant values
    #[test]
    fn test_default_dimensions() {
        assert_eq!(DEFAULT_ROWS, 30);
        assert_eq!(DEFAULT_COLS, 30);
        assert!(DEFAULT_ROWS <= MAX_GRID_DIMENSION);
    }

    // Tests the reference 100 ms tick interval
    #[test]
    fn test_default_interval() {
        assert_eq!(DEFAULT_INTERVAL_MS, 100);
        assert!(DEFAULT_INTERVAL_MS >= u64::from(VIEWER_MIN_FRAME_DELAY_MS));
    }

    // Tests rendering defaults are usable
    #[test]
    fn test_rendering_defaults() {
        assert!(DEFAULT_CELL_SIZE >= 2);
        assert_ne!(ALIVE_COLOR, DEAD_COLOR);
        assert!((0.0..=1.0).contains(&DEFAULT_DENSITY));
    }
}
