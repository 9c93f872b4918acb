//! Tests for the free-function grid interface

#[cfg(test)]
mod tests {
    use lifegrid::engine::api::{create_grid, live_neighbor_count, set_cells, step, toggle_cell};
    use lifegrid::{LifeError, Result};

    // Tests create_grid validates dimensions
    #[test]
    fn test_create_grid() -> Result<()> {
        let grid = create_grid(30, 30)?;
        assert_eq!(grid.dimensions(), (30, 30));
        assert_eq!(grid.population(), 0);
        assert!(matches!(
            create_grid(0, 30),
            Err(LifeError::InvalidDimension { .. })
        ));
        Ok(())
    }

    // Tests toggle_cell returns a new grid and rejects invalid coordinates
    // Verified by mutating the input grid
    #[test]
    fn test_toggle_cell() -> Result<()> {
        let grid = create_grid(3, 3)?;
        let toggled = toggle_cell(&grid, 2, 2)?;
        assert!(toggled.is_alive(2, 2));
        assert!(!grid.is_alive(2, 2));
        assert!(toggle_cell(&grid, 3, 0).is_err());
        Ok(())
    }

    // Tests set_cells tolerates out-of-range coordinates
    #[test]
    fn test_set_cells() -> Result<()> {
        let grid = set_cells(&create_grid(4, 4)?, [(0, 0), (0, 0), (4, 4), (-2, 1)]);
        assert_eq!(grid.population(), 1);
        assert!(grid.is_alive(0, 0));
        Ok(())
    }

    // Tests step and live_neighbor_count agree with the blinker
    #[test]
    fn test_step_and_live_neighbor_count() -> Result<()> {
        let grid = set_cells(&create_grid(5, 5)?, [(1, 0), (1, 1), (1, 2)]);
        assert_eq!(live_neighbor_count(&grid, 0, 1)?, 3);
        assert_eq!(live_neighbor_count(&grid, 1, 1)?, 2);

        let next = step(&grid);
        assert!(next.is_alive(0, 1) && next.is_alive(1, 1) && next.is_alive(2, 1));
        assert_eq!(next.population(), 3);
        assert!(live_neighbor_count(&grid, -1, 0).is_err());
        Ok(())
    }
}
