//! Tests for error formatting and path context

#[cfg(test)]
mod tests {
    use polygrid::GridError;
    use polygrid::io::error::{WithPath, invalid_argument, invalid_geometry};
    use std::error::Error;
    use std::path::{Path, PathBuf};

    // Tests message formatting of the non-file variants
    // Verified by swapping fields in the format strings
    #[test]
    fn test_display_messages() {
        assert_eq!(
            invalid_geometry(&"too few vertices").to_string(),
            "Invalid geometry: too few vertices"
        );
        assert_eq!(
            invalid_argument("nx", &1, &"needs at least 2 nodes").to_string(),
            "Invalid argument 'nx' = '1': needs at least 2 nodes"
        );

        let parse = GridError::Parse {
            path: PathBuf::from("a.poly"),
            line: 3,
            reason: "bad".to_string(),
        };
        assert_eq!(parse.to_string(), "Failed to parse 'a.poly' at line 3: bad");
    }

    // Tests that I/O errors keep their source and gain the path
    // Verified by dropping the source in the error chain
    #[test]
    fn test_io_error_with_path() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));

        let Err(error) = result.with_path(Path::new("out/grid.png"), "create directory") else {
            unreachable!("Error should pass through");
        };

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("create directory"));
        assert!(message.contains("out/grid.png"));
        assert!(message.contains("denied"));
    }

    // Tests that errors without a path are left untouched
    #[test]
    fn test_with_path_keeps_other_variants() {
        let result: polygrid::Result<()> = Err(invalid_geometry(&"crossing edges"));

        match result.with_path(Path::new("x.poly"), "read polygon") {
            Err(GridError::InvalidGeometry { reason }) => assert_eq!(reason, "crossing edges"),
            _ => unreachable!("Expected the geometry error unchanged"),
        }
        assert!(invalid_geometry(&"x").source().is_none());
    }
}
