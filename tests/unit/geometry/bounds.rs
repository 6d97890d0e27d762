//! Tests for bounding box construction and queries

#[cfg(test)]
mod tests {
    use polygrid::geometry::BoundingBox;
    use polygrid::Point;

    // Tests that the box is tight around every point
    // Verified by skipping the first point when computing extrema
    #[test]
    fn test_bounding_box_from_points() {
        let points = [
            Point::new(3.0, -1.0),
            Point::new(-2.0, 4.0),
            Point::new(1.0, 1.0),
        ];

        let Some(bounds) = BoundingBox::from_points(&points) else {
            unreachable!("Non-empty slice should produce a box");
        };

        assert_eq!(bounds.min, Point::new(-2.0, -1.0));
        assert_eq!(bounds.max, Point::new(3.0, 4.0));
        assert!((bounds.width() - 5.0).abs() < 1e-12);
        assert!((bounds.height() - 5.0).abs() < 1e-12);
    }

    // Tests that an empty point set has no box
    #[test]
    fn test_bounding_box_empty() {
        assert!(BoundingBox::from_points(&[]).is_none());
    }

    // Tests inclusive containment on all four sides
    // Verified by making the max comparison strict
    #[test]
    fn test_bounding_box_contains_is_inclusive() {
        let bounds = BoundingBox {
            min: Point::new(0.0, 0.0),
            max: Point::new(1.0, 1.0),
        };

        assert!(bounds.contains(Point::new(0.0, 0.0)));
        assert!(bounds.contains(Point::new(1.0, 1.0)));
        assert!(bounds.contains(Point::new(0.5, 1.0)));
        assert!(!bounds.contains(Point::new(1.0 + 1e-9, 0.5)));
        assert!(!bounds.contains(Point::new(0.5, -1e-9)));
    }
}
