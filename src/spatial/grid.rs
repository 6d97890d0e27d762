//! Finite-difference lattice classified against a polygon domain
//!
//! The lattice spans the polygon's bounding box exactly: node `(0, 0)` sits on
//! the box minimum and node `(nx - 1, ny - 1)` on the box maximum. Construction
//! runs two passes over a dense `(nx, ny)` array of cell tags: boundary edges
//! are rasterized with Bresenham stepping, then each row is scan-filled to
//! separate interior from exterior nodes.

use std::fmt;

use ndarray::{Array2, ArrayView2};

use crate::geometry::{Point, Polygon};
use crate::io::configuration::{MAX_GRID_DIMENSION, MIN_RESOLUTION};
use crate::io::error::{Result, invalid_argument, invalid_geometry};
use crate::spatial::fill::fill_interior_exterior;
use crate::spatial::raster::LineWalk;

/// Classification tag of a lattice node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellType {
    /// Not yet classified; never present after construction
    #[default]
    Undefined,
    /// On or next to a polygon edge
    Boundary,
    /// Inside the polygon
    Interior,
    /// Outside the polygon
    Exterior,
}

impl CellType {
    /// Every tag a finished grid can contain
    pub const CLASSIFIED: [Self; 3] = [Self::Boundary, Self::Interior, Self::Exterior];

    /// Lowercase name of the tag
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Boundary => "boundary",
            Self::Interior => "interior",
            Self::Exterior => "exterior",
        }
    }

    /// Single character used by the text rendering
    pub const fn glyph(self) -> char {
        match self {
            Self::Undefined => 'U',
            Self::Boundary => 'B',
            Self::Interior => 'I',
            Self::Exterior => 'E',
        }
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Lattice over a polygon's bounding box with a tag per node
///
/// Holds its own copy of the polygon. Immutable once built.
#[derive(Debug, Clone)]
pub struct FdmGrid {
    origin: Point,
    dx: f64,
    dy: f64,
    nx: usize,
    ny: usize,
    cells: Array2<CellType>,
    polygon: Polygon,
}

/// Reject node counts outside `MIN_RESOLUTION..=MAX_GRID_DIMENSION`
pub(crate) fn check_resolution(parameter: &'static str, value: usize) -> Result<()> {
    if value < MIN_RESOLUTION {
        return Err(invalid_argument(
            parameter,
            &value,
            &format!("needs at least {MIN_RESOLUTION} nodes"),
        ));
    }
    if value > MAX_GRID_DIMENSION {
        return Err(invalid_argument(
            parameter,
            &value,
            &format!("exceeds maximum grid dimension {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}

/// Reject polygons whose bounding box is flat along either axis
///
/// A flat box would give zero node spacing on that axis.
pub(crate) fn check_extent(polygon: &Polygon) -> Result<()> {
    let bounds = polygon.bounding_box();
    if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
        return Err(invalid_geometry(&format!(
            "Polygon bounding box has zero extent ({} by {})",
            bounds.width(),
            bounds.height()
        )));
    }
    Ok(())
}

impl FdmGrid {
    /// Build and classify a grid with `nx` by `ny` nodes over `polygon`
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `nx` or `ny` is below 2 or above
    /// `MAX_GRID_DIMENSION`, and `InvalidGeometry` if the polygon's bounding
    /// box has zero width or height. Validation happens before any cell
    /// storage is allocated.
    pub fn new(nx: usize, ny: usize, polygon: &Polygon) -> Result<Self> {
        check_resolution("nx", nx)?;
        check_resolution("ny", ny)?;
        check_extent(polygon)?;

        let bounds = polygon.bounding_box();
        let origin = bounds.min;
        let dx = (bounds.max.x - origin.x) / (nx - 1) as f64;
        let dy = (bounds.max.y - origin.y) / (ny - 1) as f64;

        let mut grid = Self {
            origin,
            dx,
            dy,
            nx,
            ny,
            cells: Array2::from_elem((nx, ny), CellType::Undefined),
            polygon: polygon.clone(),
        };

        grid.mark_boundaries();
        fill_interior_exterior(&mut grid.cells);

        Ok(grid)
    }

    /// Rasterize every polygon edge onto the lattice as boundary cells
    fn mark_boundaries(&mut self) {
        let edges: Vec<([i64; 2], [i64; 2])> = self
            .polygon
            .edges()
            .map(|(start, end)| (self.point_to_index(start), self.point_to_index(end)))
            .collect();

        for (start, end) in edges {
            for [i, j] in LineWalk::new(start, end) {
                if let Some(cell) = self.cell_mut(i, j) {
                    *cell = CellType::Boundary;
                }
            }
        }
    }

    fn cell_mut(&mut self, i: i64, j: i64) -> Option<&mut CellType> {
        if self.is_valid_index(i, j) {
            self.cells.get_mut((i as usize, j as usize))
        } else {
            None
        }
    }

    /// Node count along x
    pub const fn nx(&self) -> usize {
        self.nx
    }

    /// Node count along y
    pub const fn ny(&self) -> usize {
        self.ny
    }

    /// Node spacing along x
    pub const fn dx(&self) -> f64 {
        self.dx
    }

    /// Node spacing along y
    pub const fn dy(&self) -> f64 {
        self.dy
    }

    /// World coordinates of node `(0, 0)`
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// The polygon this grid was built from
    pub const fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Read-only view of the tag array, indexed `[i, j]`
    pub fn cells(&self) -> ArrayView2<'_, CellType> {
        self.cells.view()
    }

    /// World coordinates of node `(i, j)`
    pub fn index_to_point(&self, i: i64, j: i64) -> Point {
        Point::new(
            (i as f64).mul_add(self.dx, self.origin.x),
            (j as f64).mul_add(self.dy, self.origin.y),
        )
    }

    /// Nearest node to a world point
    ///
    /// Rounds to the closest node rather than truncating, so polygon
    /// vertices snap to their nearest lattice node. The result may lie
    /// outside the lattice.
    pub fn point_to_index(&self, point: Point) -> [i64; 2] {
        [
            ((point.x - self.origin.x) / self.dx).round() as i64,
            ((point.y - self.origin.y) / self.dy).round() as i64,
        ]
    }

    /// Whether `(i, j)` addresses a node of this lattice
    pub const fn is_valid_index(&self, i: i64, j: i64) -> bool {
        i >= 0 && j >= 0 && (i as usize) < self.nx && (j as usize) < self.ny
    }

    /// Tag of node `(i, j)`
    ///
    /// Indices outside the lattice report `Exterior`: the lattice is treated
    /// as embedded in an unbounded exterior.
    pub fn cell_type(&self, i: i64, j: i64) -> CellType {
        usize::try_from(i)
            .ok()
            .zip(usize::try_from(j).ok())
            .and_then(|index| self.cells.get(index).copied())
            .unwrap_or(CellType::Exterior)
    }

    /// Lattice indices carrying `tag`, ordered by `i` then `j`
    pub fn indices_of_type(&self, tag: CellType) -> Vec<[usize; 2]> {
        self.cells
            .indexed_iter()
            .filter(|&(_, &cell)| cell == tag)
            .map(|((i, j), _)| [i, j])
            .collect()
    }

    /// World points of every node carrying `tag`, ordered by `i` then `j`
    pub fn points_of_type(&self, tag: CellType) -> Vec<Point> {
        self.indices_of_type(tag)
            .into_iter()
            .map(|[i, j]| self.index_to_point(i as i64, j as i64))
            .collect()
    }

    /// Number of nodes carrying `tag`
    pub fn count_of_type(&self, tag: CellType) -> usize {
        self.cells.iter().filter(|&&cell| cell == tag).count()
    }

    /// World points of boundary nodes
    pub fn boundary_points(&self) -> Vec<Point> {
        self.points_of_type(CellType::Boundary)
    }

    /// World points of interior nodes
    pub fn interior_points(&self) -> Vec<Point> {
        self.points_of_type(CellType::Interior)
    }

    /// World points of exterior nodes
    pub fn exterior_points(&self) -> Vec<Point> {
        self.points_of_type(CellType::Exterior)
    }
}

impl fmt::Display for FdmGrid {
    /// Renders one text line per lattice row, highest `j` first
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for j in (0..self.ny).rev() {
            for i in 0..self.nx {
                let cell = self
                    .cells
                    .get((i, j))
                    .copied()
                    .unwrap_or(CellType::Undefined);
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
