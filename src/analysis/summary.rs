//! Classification counts and area estimate for a built grid

use std::fmt;

use crate::spatial::grid::{CellType, FdmGrid};

/// Tag counts of a classified grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSummary {
    /// Lattice dimensions (nx, ny)
    pub dimensions: (usize, usize),
    /// Number of boundary nodes
    pub boundary: usize,
    /// Number of interior nodes
    pub interior: usize,
    /// Number of exterior nodes
    pub exterior: usize,
    /// Number of nodes left unclassified (zero for a finished grid)
    pub undefined: usize,
    /// Area represented by a single node (`dx * dy`)
    pub cell_area: f64,
}

impl GridSummary {
    /// Count every tag in one pass over the grid
    pub fn from_grid(grid: &FdmGrid) -> Self {
        let mut summary = Self {
            dimensions: (grid.nx(), grid.ny()),
            boundary: 0,
            interior: 0,
            exterior: 0,
            undefined: 0,
            cell_area: grid.dx() * grid.dy(),
        };

        for &cell in grid.cells() {
            match cell {
                CellType::Boundary => summary.boundary += 1,
                CellType::Interior => summary.interior += 1,
                CellType::Exterior => summary.exterior += 1,
                CellType::Undefined => summary.undefined += 1,
            }
        }

        summary
    }

    /// Total number of nodes
    pub const fn total(&self) -> usize {
        self.boundary + self.interior + self.exterior + self.undefined
    }

    /// Nodes a solver would assemble equations for (interior plus boundary)
    pub const fn domain_nodes(&self) -> usize {
        self.interior + self.boundary
    }

    /// Domain area estimated from the node counts
    pub fn estimated_area(&self) -> f64 {
        self.domain_nodes() as f64 * self.cell_area
    }
}

impl fmt::Display for GridSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} nodes: {} boundary, {} interior, {} exterior (area ~{:.4})",
            self.dimensions.0,
            self.dimensions.1,
            self.boundary,
            self.interior,
            self.exterior,
            self.estimated_area()
        )
    }
}
