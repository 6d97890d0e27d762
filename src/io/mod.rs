//! Input/output operations, configuration and error handling

/// Command-line interface and batch processing
pub mod cli;
/// Numeric tolerances and runtime defaults
pub mod configuration;
/// Error types and path context
pub mod error;
/// PNG export of classified grids
pub mod image;
/// Plain-text polygon description files
pub mod polygon_file;
/// Multi-file progress display
pub mod progress;
