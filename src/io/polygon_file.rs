//! Plain-text polygon description files
//!
//! One vertex per line, written as `x y` or `x, y`. Blank lines and lines
//! starting with `#` are ignored. Vertices are taken in file order and the
//! polygon closes itself from the last vertex back to the first.

use std::path::Path;

use crate::geometry::{Point, Polygon};
use crate::io::error::{GridError, Result, WithPath};

/// Parse vertex lines from polygon file text
///
/// `path` is only used to label parse errors.
///
/// # Errors
///
/// Returns a `Parse` error naming the first line that does not hold exactly
/// two finite numbers
pub fn parse_vertices(text: &str, path: &Path) -> Result<Vec<Point>> {
    let mut vertices = Vec::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parse_error = |reason: String| GridError::Parse {
            path: path.to_path_buf(),
            line: index + 1,
            reason,
        };

        let coords = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<f64>()
                    .map_err(|e| parse_error(format!("'{token}' is not a number: {e}")))
            })
            .collect::<Result<Vec<f64>>>()?;

        let point = match coords.as_slice() {
            [x, y] => Point::new(*x, *y),
            _ => {
                return Err(parse_error(format!(
                    "expected 2 coordinates, found {}",
                    coords.len()
                )));
            }
        };
        if !point.is_finite() {
            return Err(parse_error("coordinates must be finite".to_string()));
        }

        vertices.push(point);
    }

    Ok(vertices)
}

/// Load and validate a polygon from a description file
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - A line cannot be parsed
/// - The vertices do not form a simple polygon
pub fn read_polygon(path: &Path) -> Result<Polygon> {
    let text = std::fs::read_to_string(path).with_path(path, "read polygon")?;
    let vertices = parse_vertices(&text, path)?;
    Polygon::new(vertices)
}

/// Render a polygon in the description file format
pub fn format_polygon(polygon: &Polygon) -> String {
    polygon
        .vertices()
        .iter()
        .map(|vertex| format!("{} {}\n", vertex.x, vertex.y))
        .collect::<Vec<_>>()
        .concat()
}

/// Write a polygon description file, creating parent directories
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written
pub fn write_polygon(polygon: &Polygon, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }
    std::fs::write(path, format_polygon(polygon)).with_path(path, "write polygon")
}
