//! Validated simple polygon with containment and boundary queries

use std::fmt;

use crate::geometry::bounds::BoundingBox;
use crate::geometry::intersection::find_self_intersection;
use crate::geometry::point::Point;
use crate::io::configuration::ORIENTATION_TOLERANCE;
use crate::io::error::{Result, invalid_geometry};

/// Closed simple polygon
///
/// Vertices are stored in the order given; the closing edge runs from the
/// last vertex back to the first. The bounding box is computed once at
/// construction and never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
    bounds: BoundingBox,
}

impl Polygon {
    /// Build a polygon from an ordered vertex list
    ///
    /// # Errors
    ///
    /// Returns `InvalidGeometry` if:
    /// - Fewer than 3 vertices are supplied
    /// - A vertex has a NaN or infinite coordinate
    /// - Fewer than 3 vertices are distinct
    /// - Any two non-adjacent edges intersect
    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(invalid_geometry(&format!(
                "Polygon requires at least 3 vertices, got {}",
                vertices.len()
            )));
        }

        if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(invalid_geometry(&format!(
                "Vertex {index} has a non-finite coordinate"
            )));
        }

        let distinct = count_distinct(&vertices, 3);
        if distinct < 3 {
            return Err(invalid_geometry(&format!(
                "Polygon requires at least 3 distinct vertices, got {distinct}"
            )));
        }

        if let Some((i, j)) = find_self_intersection(&vertices) {
            return Err(invalid_geometry(&format!(
                "Self-intersection detected between edges {i} and {j}"
            )));
        }

        let bounds = BoundingBox::from_points(&vertices)
            .ok_or_else(|| invalid_geometry(&"Polygon has no vertices"))?;

        Ok(Self { vertices, bounds })
    }

    /// Ordered vertex list
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Number of vertices (equal to the number of edges)
    pub const fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Cached bounding box
    pub const fn bounding_box(&self) -> &BoundingBox {
        &self.bounds
    }

    /// Minimum x over all vertices
    pub const fn min_x(&self) -> f64 {
        self.bounds.min.x
    }

    /// Minimum y over all vertices
    pub const fn min_y(&self) -> f64 {
        self.bounds.min.y
    }

    /// Maximum x over all vertices
    pub const fn max_x(&self) -> f64 {
        self.bounds.max.x
    }

    /// Maximum y over all vertices
    pub const fn max_y(&self) -> f64 {
        self.bounds.max.y
    }

    /// Edges as `(start, end)` pairs, closing edge last
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.vertices
            .iter()
            .zip(self.vertices.iter().cycle().skip(1))
            .map(|(a, b)| (*a, *b))
    }

    /// Ray-casting containment test
    ///
    /// Counts crossings of a ray from `point` toward +x. Vertices exactly at
    /// `point.y` are handled by the half-open straddle test, so points on the
    /// boundary may land on either side; use [`Self::is_on_boundary`] when
    /// that matters.
    pub fn contains_point(&self, point: Point) -> bool {
        if !self.bounds.contains(point) {
            return false;
        }

        let mut inside = false;
        let mut previous = self.vertices.last().copied().unwrap_or(point);

        for &current in &self.vertices {
            if (current.y > point.y) != (previous.y > point.y) {
                let crossing_x = (previous.x - current.x) * (point.y - current.y)
                    / (previous.y - current.y)
                    + current.x;
                if point.x < crossing_x {
                    inside = !inside;
                }
            }
            previous = current;
        }

        inside
    }

    /// Whether `point` lies within `epsilon` of some edge
    ///
    /// Edges shorter than `epsilon` are skipped. A point counts only if its
    /// projection falls within the edge's length.
    pub fn is_on_boundary(&self, point: Point, epsilon: f64) -> bool {
        self.edges().any(|(start, end)| {
            let edge = end - start;
            let length = edge.norm();
            if length < epsilon {
                return false;
            }

            let direction = edge / length;
            let to_point = point - start;
            let projection = to_point.dot(direction);
            if projection < 0.0 || projection > length {
                return false;
            }

            to_point.cross(direction).abs() < epsilon
        })
    }
}

/// Number of distinct vertices, counting no further than `limit`
///
/// Vertices closer than `ORIENTATION_TOLERANCE` count as one.
fn count_distinct(vertices: &[Point], limit: usize) -> usize {
    let mut distinct: Vec<Point> = Vec::with_capacity(limit);
    for &vertex in vertices {
        if distinct.len() >= limit {
            break;
        }
        if distinct
            .iter()
            .all(|seen| (vertex - *seen).norm() > ORIENTATION_TOLERANCE)
        {
            distinct.push(vertex);
        }
    }
    distinct.len()
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.vertices.first() {
            Some(p) => write!(f, "First vertex: {p}"),
            None => write!(f, "Polygon has no vertices"),
        }
    }
}
