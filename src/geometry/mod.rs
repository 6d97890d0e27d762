//! Planar geometry primitives and polygon validation
//!
//! This module contains the geometric side of domain classification:
//! - Point values and bounding boxes
//! - Segment orientation and self-intersection search
//! - The validated `Polygon` type and its queries

/// Axis-aligned bounding boxes
pub mod bounds;
/// Seeded generation of simple test polygons
pub mod generate;
/// Segment orientation and self-intersection search
pub mod intersection;
/// Two-dimensional point value type
pub mod point;
/// Validated simple polygon
pub mod polygon;

pub use bounds::BoundingBox;
pub use point::Point;
pub use polygon::Polygon;
