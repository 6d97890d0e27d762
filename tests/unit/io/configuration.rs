//! Tests for configuration constants

#[cfg(test)]
mod tests {
    use polygrid::io::configuration::{
        BOUNDARY_COLOR, DEFAULT_BOUNDARY_EPSILON, DEFAULT_RESOLUTION, EXTERIOR_COLOR,
        INTERIOR_COLOR, MAX_GRID_DIMENSION, MIN_RESOLUTION, ORIENTATION_TOLERANCE,
        STAR_INNER_RADIUS_RATIO, UNDEFINED_COLOR,
    };

    // Tests that resolution defaults sit inside the accepted range
    #[test]
    fn test_resolution_bounds_are_consistent() {
        assert!(MIN_RESOLUTION >= 2);
        assert!((MIN_RESOLUTION..=MAX_GRID_DIMENSION).contains(&DEFAULT_RESOLUTION));
    }

    // Tests tolerance ordering
    #[test]
    fn test_tolerances_are_small_and_positive() {
        assert!(ORIENTATION_TOLERANCE > 0.0);
        assert!(DEFAULT_BOUNDARY_EPSILON > ORIENTATION_TOLERANCE);
        assert!(DEFAULT_BOUNDARY_EPSILON < 1e-3);
        assert!(STAR_INNER_RADIUS_RATIO > 0.0 && STAR_INNER_RADIUS_RATIO < 1.0);
    }

    // Tests that each tag gets a distinguishable color
    #[test]
    fn test_palette_is_distinct() {
        let palette = [BOUNDARY_COLOR, INTERIOR_COLOR, EXTERIOR_COLOR, UNDEFINED_COLOR];
        for (a, first) in palette.iter().enumerate() {
            for second in palette.iter().skip(a + 1) {
                assert_ne!(first, second);
            }
        }
    }
}
