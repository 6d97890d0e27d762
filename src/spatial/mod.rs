//! Lattice construction and classification
//!
//! This module contains the grid side of domain classification:
//! - Bresenham rasterization of polygon edges
//! - Row scan fill of interior and exterior nodes
//! - The classified `FdmGrid` and its resolution descriptor

/// Resolution descriptor for a polygon domain
pub mod discretization;
/// Row scan fill with corner correction
pub mod fill;
/// Classified lattice over a polygon's bounding box
pub mod grid;
/// Bresenham stepping between lattice indices
pub mod raster;

pub use discretization::DomainDiscretization;
pub use grid::{CellType, FdmGrid};
