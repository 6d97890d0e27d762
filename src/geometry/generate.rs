//! Seeded generation of simple polygons for benchmarks and demos

use std::f64::consts::TAU;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::geometry::point::Point;
use crate::geometry::polygon::Polygon;
use crate::io::configuration::STAR_INNER_RADIUS_RATIO;
use crate::io::error::{Result, invalid_argument};

fn check_radius(radius: f64) -> Result<()> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(invalid_argument(
            "radius",
            &radius,
            &"must be positive and finite",
        ))
    }
}

/// Regular polygon with `vertex_count` vertices on a circle around `center`
///
/// The first vertex sits at angle zero and vertices run counter-clockwise.
///
/// # Errors
///
/// Returns an error if the radius is not positive or fewer than 3 vertices
/// are requested
pub fn regular_polygon(vertex_count: usize, radius: f64, center: Point) -> Result<Polygon> {
    check_radius(radius)?;

    let step = TAU / vertex_count.max(1) as f64;
    let vertices = (0..vertex_count)
        .map(|k| {
            let angle = step * k as f64;
            center + Point::new(angle.cos(), angle.sin()) * radius
        })
        .collect();

    Polygon::new(vertices)
}

/// Random star-shaped polygon around the origin
///
/// Angles are jittered inside their own sector of the circle, so they stay
/// strictly increasing and the polygon is always simple. Radii are drawn
/// between `STAR_INNER_RADIUS_RATIO * radius` and `radius`.
///
/// # Errors
///
/// Returns an error if the radius is not positive or fewer than 3 vertices
/// are requested
pub fn random_star_polygon(vertex_count: usize, radius: f64, seed: u64) -> Result<Polygon> {
    check_radius(radius)?;

    let mut rng = StdRng::seed_from_u64(seed);
    let step = TAU / vertex_count.max(1) as f64;

    let vertices = (0..vertex_count)
        .map(|k| {
            let jitter = rng.random_range(-0.4..0.4) * step;
            let angle = step.mul_add(k as f64, jitter);
            let r = radius * rng.random_range(STAR_INNER_RADIUS_RATIO..=1.0);
            Point::new(angle.cos(), angle.sin()) * r
        })
        .collect();

    Polygon::new(vertices)
}
