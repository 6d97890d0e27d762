//! Tests for point arithmetic, constants and conversions

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use polygrid::{GridError, Point};

    // Tests componentwise operators
    // Verified by swapping x and y in Add
    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, 4.0);

        assert_eq!(a + b, Point::new(4.0, 6.0));
        assert_eq!(b - a, Point::new(2.0, 2.0));
        assert_eq!(-a, Point::new(-1.0, -2.0));
        assert_eq!(a * 2.0, Point::new(2.0, 4.0));
        assert_eq!(b / 2.0, Point::new(1.5, 2.0));

        let mut c = a;
        c += b;
        assert_eq!(c, Point::new(4.0, 6.0));
        c -= a;
        assert_eq!(c, b);
    }

    // Tests the named direction constants
    // Verified by flipping the sign of DOWN
    #[test]
    fn test_direction_constants() {
        assert_eq!(Point::ZERO, Point::new(0.0, 0.0));
        assert_eq!(Point::LEFT, Point::new(-1.0, 0.0));
        assert_eq!(Point::RIGHT, Point::new(1.0, 0.0));
        assert_eq!(Point::UP, Point::new(0.0, 1.0));
        assert_eq!(Point::DOWN, Point::new(0.0, -1.0));
        assert_eq!(Point::LEFT + Point::RIGHT, Point::ZERO);
        assert_eq!(Point::default(), Point::ZERO);
        assert!(Point::zero().is_zero());
        assert!(!Point::UP.is_zero());
    }

    // Tests dot, cross and norm
    // Verified by returning the negated cross product
    #[test]
    fn test_vector_products() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, 4.0);

        assert!((a.dot(b) - 11.0).abs() < 1e-12);
        assert!((Point::RIGHT.cross(Point::UP) - 1.0).abs() < 1e-12);
        assert!((Point::UP.cross(Point::RIGHT) + 1.0).abs() < 1e-12);
        assert!((b.norm() - 5.0).abs() < 1e-12);
    }

    // Tests conversions from tuples, arrays and slices
    // Verified by accepting slices of any length
    #[test]
    fn test_point_conversions() {
        assert_eq!(Point::from((1.0, 1.0)), Point::new(1.0, 1.0));
        assert_eq!(Point::from([2.0, 3.0]), Point::new(2.0, 3.0));

        let coords = [1.0, 1.0];
        let from_slice = Point::try_from(&coords[..]);
        assert!(from_slice.is_ok_and(|p| p == Point::new(1.0, 1.0)));

        let too_short = [1.0];
        assert!(matches!(
            Point::try_from(&too_short[..]),
            Err(GridError::InvalidArgument { .. })
        ));

        let too_long = [1.0, 2.0, 3.0];
        assert!(Point::try_from(&too_long[..]).is_err());
    }

    // Tests axis access
    // Verified by mapping axis 1 to x
    #[test]
    fn test_axis_access() {
        let p = Point::new(5.0, -2.0);
        assert_eq!(p.get(0), Some(5.0));
        assert_eq!(p.get(1), Some(-2.0));
        assert_eq!(p.get(2), None);
    }

    // Tests the diagnostic text form
    // Verified by dropping the parentheses
    #[test]
    fn test_point_display() {
        assert_eq!(Point::new(1.0, 2.0).to_string(), "(1, 2)");
        assert_eq!(Point::new(0.5, -1.5).to_string(), "(0.5, -1.5)");
    }

    // Tests finiteness check
    // Verified by ignoring the y coordinate
    #[test]
    fn test_point_is_finite() {
        assert!(Point::new(1.0, 2.0).is_finite());
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f64::INFINITY).is_finite());
    }
}
