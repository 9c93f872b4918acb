//! Tests for bounded Moore neighborhood enumeration

#[cfg(test)]
mod tests {
    use lifegrid::engine::neighborhood::{MOORE_RADIUS, moore_neighbors, region_spans};

    // Tests spans are clamped at the top-left corner
    // Verified by removing saturating_sub
    #[test]
    fn test_region_spans_clamped_at_origin() {
        let (rows, cols) = region_spans((5, 5), 0, 0, MOORE_RADIUS);
        assert_eq!(rows, 0..2);
        assert_eq!(cols, 0..2);
    }

    // Tests spans are clamped at the bottom-right corner
    // Verified by removing the min against dimensions
    #[test]
    fn test_region_spans_clamped_at_far_corner() {
        let (rows, cols) = region_spans((5, 7), 4, 6, MOORE_RADIUS);
        assert_eq!(rows, 3..5);
        assert_eq!(cols, 5..7);
    }

    // Tests interior spans cover the full 3x3 window
    #[test]
    fn test_region_spans_interior() {
        let (rows, cols) = region_spans((5, 5), 2, 2, MOORE_RADIUS);
        assert_eq!(rows, 1..4);
        assert_eq!(cols, 1..4);
    }

    // Tests neighbor counts at corner, edge and interior positions
    // Verified by adding wraparound indices
    #[test]
    fn test_moore_neighbor_counts_by_position() {
        assert_eq!(moore_neighbors((5, 5), 0, 0).count(), 3);
        assert_eq!(moore_neighbors((5, 5), 0, 2).count(), 5);
        assert_eq!(moore_neighbors((5, 5), 2, 2).count(), 8);
        assert_eq!(moore_neighbors((1, 1), 0, 0).count(), 0);
    }

    // Tests the center position is excluded and order is row-major
    // Verified by removing the center filter
    #[test]
    fn test_moore_neighbors_excludes_center() {
        let neighbors: Vec<_> = moore_neighbors((3, 3), 1, 1).collect();
        assert!(!neighbors.contains(&(1, 1)));
        assert_eq!(
            neighbors,
            vec![
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 0),
                (1, 2),
                (2, 0),
                (2, 1),
                (2, 2)
            ]
        );
    }
}
