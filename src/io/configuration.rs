//! Numeric tolerances and runtime configuration defaults

// Geometry tolerances
/// Cross products within this magnitude are treated as collinear
pub const ORIENTATION_TOLERANCE: f64 = 1e-9;
/// Default distance below which a point counts as lying on an edge
pub const DEFAULT_BOUNDARY_EPSILON: f64 = 1e-6;

// Lattice resolution
/// Smallest node count per axis that still spans the bounding box
pub const MIN_RESOLUTION: usize = 2;
/// Default node count per axis for the command-line tool
pub const DEFAULT_RESOLUTION: usize = 64;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed node count per axis
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Random polygon generation
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Smallest radius factor of a generated star polygon, relative to its outer radius
pub const STAR_INNER_RADIUS_RATIO: f64 = 0.35;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Input and output settings
/// File extension of polygon description files
pub const POLYGON_EXTENSION: &str = "poly";
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_grid";

// Rendering palette
/// Color of boundary nodes in exported images
pub const BOUNDARY_COLOR: [u8; 4] = [220, 50, 47, 255];
/// Color of interior nodes in exported images
pub const INTERIOR_COLOR: [u8; 4] = [38, 139, 210, 255];
/// Color of exterior nodes in exported images
pub const EXTERIOR_COLOR: [u8; 4] = [253, 246, 227, 255];
/// Color of unclassified nodes in exported images
pub const UNDEFINED_COLOR: [u8; 4] = [0, 0, 0, 0];
