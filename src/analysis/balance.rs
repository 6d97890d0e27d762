//! Post-fill row diagnostics
//!
//! After the scan fill, every interior node must sit behind an odd number of
//! boundary runs in its row, and no row may end on an interior node. Rows
//! breaking either rule point at a boundary raster that failed to close.

use crate::spatial::grid::{CellType, FdmGrid};

/// Run and tag counts for one lattice row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowBalance {
    /// Number of contiguous boundary runs
    pub boundary_runs: usize,
    /// Number of interior nodes
    pub interior_cells: usize,
    /// Number of exterior nodes
    pub exterior_cells: usize,
    /// Whether every interior node follows an odd number of boundary runs
    pub parity_consistent: bool,
    /// Whether the last node of the row is interior
    pub ends_interior: bool,
}

impl RowBalance {
    /// Whether the row satisfies the post-fill invariant
    pub const fn is_balanced(&self) -> bool {
        self.parity_consistent && !self.ends_interior
    }
}

/// Count runs and tags along row `j`
///
/// Returns `None` when `j` is outside the lattice.
pub fn row_balance(grid: &FdmGrid, j: usize) -> Option<RowBalance> {
    if j >= grid.ny() {
        return None;
    }

    let cells = grid.cells();
    let row = cells.column(j);
    let mut balance = RowBalance {
        parity_consistent: true,
        ..RowBalance::default()
    };
    let mut in_run = false;

    for &cell in row.iter() {
        match cell {
            CellType::Boundary => {
                if !in_run {
                    balance.boundary_runs += 1;
                }
                in_run = true;
                continue;
            }
            CellType::Interior => {
                balance.interior_cells += 1;
                if balance.boundary_runs % 2 == 0 {
                    balance.parity_consistent = false;
                }
            }
            CellType::Exterior => balance.exterior_cells += 1,
            CellType::Undefined => balance.parity_consistent = false,
        }
        in_run = false;
    }

    balance.ends_interior = row
        .len()
        .checked_sub(1)
        .and_then(|last| row.get(last))
        == Some(&CellType::Interior);
    Some(balance)
}

/// Indices of rows that break the post-fill invariant
pub fn unbalanced_rows(grid: &FdmGrid) -> Vec<usize> {
    (0..grid.ny())
        .filter(|&j| row_balance(grid, j).is_some_and(|balance| !balance.is_balanced()))
        .collect()
}
