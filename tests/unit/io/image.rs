//! Tests for grid rendering and PNG export

#[cfg(test)]
mod tests {
    use polygrid::io::configuration::{BOUNDARY_COLOR, EXTERIOR_COLOR, INTERIOR_COLOR};
    use polygrid::io::image::{cell_color, export_grid_as_png, render_grid};
    use polygrid::{CellType, FdmGrid, Point, Polygon};
    use tempfile::TempDir;

    fn triangle_grid() -> FdmGrid {
        let vertices = vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(1.0, 1.0),
        ];
        match Polygon::new(vertices).and_then(|triangle| FdmGrid::new(3, 3, &triangle)) {
            Ok(grid) => grid,
            Err(error) => unreachable!("Triangle grid should build: {error}"),
        }
    }

    // Tests that image rows are flipped relative to lattice rows
    // Verified by mapping pixel rows directly to lattice rows
    #[test]
    fn test_render_flips_rows() {
        let image = render_grid(&triangle_grid());

        assert_eq!(image.dimensions(), (3, 3));
        // Top pixel row shows the apex row "EBE"
        assert_eq!(image.get_pixel(0, 0).0, EXTERIOR_COLOR);
        assert_eq!(image.get_pixel(1, 0).0, BOUNDARY_COLOR);
        // Bottom pixel row shows the base row "BBB"
        assert_eq!(image.get_pixel(0, 2).0, BOUNDARY_COLOR);
        assert_eq!(image.get_pixel(2, 2).0, BOUNDARY_COLOR);
    }

    // Tests the palette lookup
    #[test]
    fn test_cell_color() {
        assert_eq!(cell_color(CellType::Interior), INTERIOR_COLOR);
        assert_eq!(cell_color(CellType::Undefined)[3], 0);
    }

    // Tests export into a directory that does not exist yet
    // Verified by skipping parent directory creation
    #[test]
    fn test_export_creates_parent() {
        let Ok(dir) = TempDir::new() else {
            unreachable!("Temporary directory should be available");
        };
        let path = dir.path().join("out").join("triangle_grid.png");

        assert!(export_grid_as_png(&triangle_grid(), &path).is_ok());
        let Ok(loaded) = image::open(&path) else {
            unreachable!("Exported image should load");
        };
        assert_eq!((loaded.width(), loaded.height()), (3, 3));
    }
}
