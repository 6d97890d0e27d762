//! Segment orientation and self-intersection search
//!
//! Orientation is decided from the sign of the cross product of three
//! consecutive points, with products within `ORIENTATION_TOLERANCE` of zero
//! treated as collinear. Two segments intersect when their endpoints straddle
//! each other, or when an endpoint is collinear with and inside the extent of
//! the other segment.

use std::cmp::Ordering;

use crate::geometry::point::Point;
use crate::io::configuration::ORIENTATION_TOLERANCE;

/// Turn direction of an ordered point triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// The three points lie on one line (within tolerance)
    Collinear,
    /// Right turn
    Clockwise,
    /// Left turn
    CounterClockwise,
}

/// Orientation of the triple `(p, q, r)`
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    let val = (q.y - p.y).mul_add(r.x - q.x, -((q.x - p.x) * (r.y - q.y)));
    if val > ORIENTATION_TOLERANCE {
        Orientation::Clockwise
    } else if val < -ORIENTATION_TOLERANCE {
        Orientation::CounterClockwise
    } else {
        Orientation::Collinear
    }
}

/// Whether `q` lies on segment `p`-`r`
///
/// `q` must sit inside the segment's bounding extent and be collinear with it.
pub fn on_segment(p: Point, q: Point, r: Point) -> bool {
    q.x <= p.x.max(r.x)
        && q.x >= p.x.min(r.x)
        && q.y <= p.y.max(r.y)
        && q.y >= p.y.min(r.y)
        && orientation(p, q, r) == Orientation::Collinear
}

/// Whether segments `a1`-`a2` and `b1`-`b2` share at least one point
pub fn edges_intersect(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
    let o1 = orientation(a1, a2, b1);
    let o2 = orientation(a1, a2, b2);
    let o3 = orientation(b1, b2, a1);
    let o4 = orientation(b1, b2, a2);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    // Collinear touching cases
    (o1 == Orientation::Collinear && on_segment(a1, b1, a2))
        || (o2 == Orientation::Collinear && on_segment(a1, b2, a2))
        || (o3 == Orientation::Collinear && on_segment(b1, a1, b2))
        || (o4 == Orientation::Collinear && on_segment(b1, a2, b2))
}

/// Whether edges `i` and `j` of an `n`-gon share an endpoint
pub const fn edges_adjacent(i: usize, j: usize, n: usize) -> bool {
    n == 0 || j == (i + 1) % n || i == (j + 1) % n || i == j
}

fn edge(vertices: &[Point], i: usize) -> Option<(Point, Point)> {
    let n = vertices.len();
    let start = vertices.get(i)?;
    let end = vertices.get((i + 1) % n)?;
    Some((*start, *end))
}

fn edge_pair_intersects(vertices: &[Point], i: usize, j: usize) -> bool {
    match (edge(vertices, i), edge(vertices, j)) {
        (Some((a1, a2)), Some((b1, b2))) => edges_intersect(a1, a2, b1, b2),
        _ => false,
    }
}

/// Find the first pair of intersecting non-adjacent edges
///
/// Edge `i` runs from `vertices[i]` to `vertices[(i + 1) % n]`. Every
/// non-adjacent pair is tested, so the cost is quadratic in the vertex
/// count. Returns the pair with `i < j`, smallest `i` first.
pub fn find_self_intersection(vertices: &[Point]) -> Option<(usize, usize)> {
    let n = vertices.len();

    for i in 0..n {
        for j in (i + 1)..n {
            if edges_adjacent(i, j, n) {
                continue;
            }
            if edge_pair_intersects(vertices, i, j) {
                return Some((i, j));
            }
        }
    }

    None
}

/// Sweep-line variant of [`find_self_intersection`]
///
/// Edges are visited in order of their minimum x coordinate while an active
/// list holds the edges whose x extent still reaches the sweep position. Only
/// edges with overlapping x extents are tested against each other, which
/// prunes most pairs for polygons that are not tall and thin. The reported
/// pair is ordered `i < j` but is not necessarily the first one found by the
/// brute-force search.
pub fn find_self_intersection_sweep(vertices: &[Point]) -> Option<(usize, usize)> {
    let n = vertices.len();

    let mut extents: Vec<(usize, f64, f64)> = (0..n)
        .filter_map(|i| edge(vertices, i).map(|(a, b)| (i, a.x.min(b.x), a.x.max(b.x))))
        .collect();
    extents.sort_by(|a, b| match a.1.total_cmp(&b.1) {
        Ordering::Equal => a.0.cmp(&b.0),
        other => other,
    });

    let mut active: Vec<(usize, f64)> = Vec::new();

    for &(index, min_x, max_x) in &extents {
        active.retain(|&(_, active_max_x)| active_max_x >= min_x);

        for &(other, _) in &active {
            if edges_adjacent(index, other, n) {
                continue;
            }
            if edge_pair_intersects(vertices, index, other) {
                return Some((index.min(other), index.max(other)));
            }
        }

        active.push((index, max_x));
    }

    None
}
