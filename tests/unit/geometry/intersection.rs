//! Tests for segment orientation and self-intersection search

#[cfg(test)]
mod tests {
    use polygrid::Point;
    use polygrid::geometry::generate::random_star_polygon;
    use polygrid::geometry::intersection::{
        Orientation, edges_adjacent, edges_intersect, find_self_intersection,
        find_self_intersection_sweep, on_segment, orientation,
    };

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn bowtie() -> Vec<Point> {
        vec![p(0.0, 0.0), p(1.0, 1.0), p(1.0, 0.0), p(0.0, 1.0)]
    }

    fn square() -> Vec<Point> {
        vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)]
    }

    // Tests that tiny cross products fall inside the collinear tolerance
    // Verified by removing the tolerance band
    #[test]
    fn test_orientation_tolerance() {
        assert_eq!(
            orientation(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 1e-10)),
            Orientation::Collinear
        );
        assert_eq!(
            orientation(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 1e-3)),
            Orientation::CounterClockwise
        );
        assert_eq!(
            orientation(p(0.0, 0.0), p(1.0, 0.0), p(2.0, -1e-3)),
            Orientation::Clockwise
        );
    }

    // Tests on-segment requires both collinearity and extent
    // Verified by dropping the extent check
    #[test]
    fn test_on_segment() {
        assert!(on_segment(p(0.0, 0.0), p(0.5, 0.5), p(1.0, 1.0)));
        assert!(on_segment(p(0.0, 0.0), p(1.0, 1.0), p(1.0, 1.0)));
        assert!(!on_segment(p(0.0, 0.0), p(2.0, 2.0), p(1.0, 1.0)));
        assert!(!on_segment(p(0.0, 0.0), p(0.5, 0.6), p(1.0, 1.0)));
    }

    // Tests proper crossings, touches, collinear overlap and disjoint cases
    // Verified by returning false for the collinear special cases
    #[test]
    fn test_edges_intersect_cases() {
        // Proper crossing
        assert!(edges_intersect(
            p(0.0, 0.0),
            p(1.0, 1.0),
            p(0.0, 1.0),
            p(1.0, 0.0)
        ));
        // T junction: endpoint on the other segment
        assert!(edges_intersect(
            p(0.0, 0.0),
            p(2.0, 0.0),
            p(1.0, 0.0),
            p(1.0, 1.0)
        ));
        // Collinear overlap
        assert!(edges_intersect(
            p(0.0, 0.0),
            p(2.0, 0.0),
            p(1.0, 0.0),
            p(3.0, 0.0)
        ));
        // Collinear but disjoint
        assert!(!edges_intersect(
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(2.0, 0.0),
            p(3.0, 0.0)
        ));
        // Parallel
        assert!(!edges_intersect(
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(0.0, 1.0),
            p(1.0, 1.0)
        ));
    }

    // Tests cyclic adjacency including the closing edge
    // Verified by dropping the wrap-around case
    #[test]
    fn test_edges_adjacent_wraps() {
        assert!(edges_adjacent(0, 1, 4));
        assert!(edges_adjacent(3, 0, 4));
        assert!(edges_adjacent(0, 3, 4));
        assert!(!edges_adjacent(0, 2, 4));
        assert!(!edges_adjacent(1, 3, 4));
    }

    // Tests brute-force search on a bowtie and a square
    // Verified by testing adjacent edges as well
    #[test]
    fn test_find_self_intersection() {
        assert_eq!(find_self_intersection(&bowtie()), Some((0, 2)));
        assert_eq!(find_self_intersection(&square()), None);

        // Every edge pair of a triangle is adjacent, even a degenerate one
        let collinear = [p(1.0, 2.0), p(3.0, 4.0), p(5.0, 6.0)];
        assert_eq!(find_self_intersection(&collinear), None);
    }

    // Tests that the sweep agrees with the brute-force search
    // Verified by retaining only edges that end after the sweep position
    #[test]
    fn test_sweep_matches_brute_force() {
        assert_eq!(find_self_intersection_sweep(&bowtie()), Some((0, 2)));
        assert_eq!(find_self_intersection_sweep(&square()), None);

        let zigzag = [
            p(0.0, 0.0),
            p(4.0, 0.0),
            p(4.0, 4.0),
            p(2.0, -1.0),
            p(0.0, 4.0),
        ];
        assert!(find_self_intersection(&zigzag).is_some());
        assert!(find_self_intersection_sweep(&zigzag).is_some());

        for seed in 0..20 {
            let Ok(polygon) = random_star_polygon(24, 1.0, seed) else {
                unreachable!("Star polygons are always simple");
            };
            assert_eq!(find_self_intersection_sweep(polygon.vertices()), None);

            // Swapping two distant vertices tangles the outline
            let mut tangled = polygon.vertices().to_vec();
            tangled.swap(0, 12);
            assert_eq!(
                find_self_intersection(&tangled).is_some(),
                find_self_intersection_sweep(&tangled).is_some(),
                "Searches disagree for seed {seed}"
            );
        }
    }
}
