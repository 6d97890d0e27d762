//! Resolution descriptor for discretizing a polygon domain

use crate::geometry::Polygon;
use crate::io::error::Result;
use crate::spatial::grid::{FdmGrid, check_extent, check_resolution};

/// Requested node counts and the spacing they imply over a polygon domain
///
/// Lighter than a built grid: no cells are allocated until
/// [`DomainDiscretization::build_grid`] is called.
#[derive(Debug, Clone)]
pub struct DomainDiscretization {
    polygon: Polygon,
    num_x: usize,
    num_y: usize,
    dx: f64,
    dy: f64,
}

impl DomainDiscretization {
    /// Describe a `num_x` by `num_y` discretization of `polygon`
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` or `InvalidGeometry` under the same rules as
    /// [`FdmGrid::new`]
    pub fn new(polygon: &Polygon, num_x: usize, num_y: usize) -> Result<Self> {
        check_resolution("num_x", num_x)?;
        check_resolution("num_y", num_y)?;
        check_extent(polygon)?;

        let bounds = polygon.bounding_box();
        let dx = bounds.width() / (num_x - 1) as f64;
        let dy = bounds.height() / (num_y - 1) as f64;

        Ok(Self {
            polygon: polygon.clone(),
            num_x,
            num_y,
            dx,
            dy,
        })
    }

    /// The discretized polygon
    pub const fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Node count along x
    pub const fn num_x(&self) -> usize {
        self.num_x
    }

    /// Node count along y
    pub const fn num_y(&self) -> usize {
        self.num_y
    }

    /// Spacing along x
    pub const fn dx(&self) -> f64 {
        self.dx
    }

    /// Spacing along y
    pub const fn dy(&self) -> f64 {
        self.dy
    }

    /// Build the classified grid for this descriptor
    ///
    /// # Errors
    ///
    /// Propagates grid construction errors; the resolution was already
    /// validated, so none are expected.
    pub fn build_grid(&self) -> Result<FdmGrid> {
        FdmGrid::new(self.num_x, self.num_y, &self.polygon)
    }
}
