//! Row scan fill that turns a boundary raster into a full classification
//!
//! Each lattice row (fixed `j`) is scanned from `i = 0` upward with an
//! `inside` flag that starts false. A contiguous run of boundary cells counts
//! as a single crossing, so thick or diagonal boundary segments flip the flag
//! once. Rows are independent of each other.

use ndarray::{Array2, ArrayViewMut1, Axis};

use crate::spatial::grid::CellType;

/// Classify every non-boundary cell of a `(nx, ny)` array
///
/// Rows are the lanes along axis 0, one per `j`.
pub fn fill_interior_exterior(cells: &mut Array2<CellType>) {
    for row in cells.axis_iter_mut(Axis(1)) {
        fill_row(row);
    }
}

/// Fill a single row, then apply the trailing corner correction
pub fn fill_row(mut row: ArrayViewMut1<'_, CellType>) {
    let len = row.len();
    let mut inside = false;
    let mut i = 0;

    while i < len {
        if row.get(i) == Some(&CellType::Boundary) {
            while row.get(i) == Some(&CellType::Boundary) {
                i += 1;
            }
            inside = !inside;
        } else {
            if let Some(cell) = row.get_mut(i) {
                *cell = if inside {
                    CellType::Interior
                } else {
                    CellType::Exterior
                };
            }
            i += 1;
        }
    }

    backfill_trailing_interior(&mut row);
}

/// Reset a trailing interior span to exterior
///
/// A polygon corner touching the last column can leave the scan flag set
/// after the final boundary run. When the last cell ended up interior, every
/// cell from the end back to the nearest boundary cell becomes exterior.
/// Returns the number of cells changed.
pub fn backfill_trailing_interior(row: &mut ArrayViewMut1<'_, CellType>) -> usize {
    let len = row.len();
    if len == 0 || row.get(len - 1) != Some(&CellType::Interior) {
        return 0;
    }

    let mut changed = 0;
    for i in (0..len).rev() {
        match row.get_mut(i) {
            Some(cell) if *cell != CellType::Boundary => {
                *cell = CellType::Exterior;
                changed += 1;
            }
            _ => break,
        }
    }

    changed
}
