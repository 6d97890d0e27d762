//! PNG export of classified grids

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::io::configuration::{BOUNDARY_COLOR, EXTERIOR_COLOR, INTERIOR_COLOR, UNDEFINED_COLOR};
use crate::io::error::{Result, WithPath};
use crate::spatial::grid::{CellType, FdmGrid};

/// Palette color of a cell tag
pub const fn cell_color(cell: CellType) -> [u8; 4] {
    match cell {
        CellType::Boundary => BOUNDARY_COLOR,
        CellType::Interior => INTERIOR_COLOR,
        CellType::Exterior => EXTERIOR_COLOR,
        CellType::Undefined => UNDEFINED_COLOR,
    }
}

/// Render one pixel per lattice node
///
/// Image rows run top to bottom while lattice rows run bottom to top, so
/// pixel row 0 shows lattice row `ny - 1`.
pub fn render_grid(grid: &FdmGrid) -> RgbaImage {
    let width = grid.nx() as u32;
    let height = grid.ny() as u32;

    ImageBuffer::from_fn(width, height, |x, y| {
        let j = i64::from(height - 1 - y);
        Rgba(cell_color(grid.cell_type(i64::from(x), j)))
    })
}

/// Export the grid classification as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &FdmGrid, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    render_grid(grid)
        .save(output_path)
        .with_path(output_path, "save image")
}
