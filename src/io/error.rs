//! Error types and path context for polygon and grid operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all polygon, grid and file operations
#[derive(Debug)]
pub enum GridError {
    /// Vertex sequence does not describe a simple polygon
    ///
    /// Raised when:
    /// - Fewer than 3 distinct vertices are supplied
    /// - Two non-adjacent edges intersect
    /// - The bounding box is too flat to span a lattice
    InvalidGeometry {
        /// Description of what's wrong with the geometry
        reason: String,
    },

    /// Parameter validation failed
    InvalidArgument {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Polygon description file could not be parsed
    Parse {
        /// Path to the file being parsed
        path: PathBuf,
        /// One-based line number of the offending line
        line: usize,
        /// Description of the parse failure
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to save a rendered grid to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGeometry { reason } => {
                write!(f, "Invalid geometry: {reason}")
            }
            Self::InvalidArgument {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid argument '{parameter}' = '{value}': {reason}")
            }
            Self::Parse { path, line, reason } => {
                write!(
                    f,
                    "Failed to parse '{}' at line {line}: {reason}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;

/// Attaches the path and operation to file-related errors
pub trait WithPath<T> {
    /// Record which path and operation produced the error
    ///
    /// Only `FileSystem` and `ImageExport` errors carry a path; other
    /// variants pass through untouched.
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path context applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<GridError>,
{
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|e| match e.into() {
            GridError::FileSystem { source, .. } => GridError::FileSystem {
                path: path.to_path_buf(),
                operation,
                source,
            },
            GridError::ImageExport { source, .. } => GridError::ImageExport {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }
}

impl From<image::ImageError> for GridError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for GridError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid argument error
pub fn invalid_argument(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GridError {
    GridError::InvalidArgument {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid geometry error
pub fn invalid_geometry(reason: &impl ToString) -> GridError {
    GridError::InvalidGeometry {
        reason: reason.to_string(),
    }
}
