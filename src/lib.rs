//! Classification of regular lattice nodes against a simple polygon
//!
//! A `Polygon` is validated once at construction (at least three vertices, no
//! crossing non-adjacent edges). An `FdmGrid` spans the polygon's bounding box
//! with a requested number of nodes per axis, rasterizes the polygon's edges
//! as boundary nodes and scan-fills every row to tag the remaining nodes as
//! interior or exterior, ready for finite-difference discretization.

#![forbid(unsafe_code)]

/// Post-fill diagnostics and classification summaries
pub mod analysis;
/// Points, bounding boxes, segment intersection and polygons
pub mod geometry;
/// Input/output operations and error handling
pub mod io;
/// Lattice rasterization and region fill
pub mod spatial;

pub use geometry::{Point, Polygon};
pub use io::error::{GridError, Result};
pub use spatial::{CellType, DomainDiscretization, FdmGrid};
