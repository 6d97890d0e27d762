//! Command-line interface for batch classification of polygon files

use crate::analysis::balance::unbalanced_rows;
use crate::analysis::summary::GridSummary;
use crate::geometry::generate::random_star_polygon;
use crate::io::configuration::{
    DEFAULT_RESOLUTION, DEFAULT_SEED, OUTPUT_SUFFIX, POLYGON_EXTENSION,
};
use crate::io::error::{Result, WithPath, invalid_argument};
use crate::io::image::export_grid_as_png;
use crate::io::polygon_file::{read_polygon, write_polygon};
use crate::io::progress::ProgressManager;
use crate::spatial::grid::FdmGrid;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "polygrid")]
#[command(
    author,
    version,
    about = "Classify lattice nodes as boundary, interior or exterior of a polygon"
)]
/// Command-line arguments for the grid classification tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Polygon file (.poly) or directory of polygon files
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Number of lattice nodes along x
    #[arg(short = 'x', long, default_value_t = DEFAULT_RESOLUTION)]
    pub nx: usize,

    /// Number of lattice nodes along y (defaults to the x count)
    #[arg(short = 'y', long)]
    pub ny: Option<usize>,

    /// Suppress progress and summary output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Also write a text rendering of each grid
    #[arg(short, long)]
    pub text: bool,

    /// Write a random star polygon with this many vertices to TARGET first
    #[arg(short, long, value_name = "VERTICES")]
    pub random: Option<usize>,

    /// Random seed for polygon generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Lattice resolution as (nx, ny)
    pub fn resolution(&self) -> (usize, usize) {
        (self.nx, self.ny.unwrap_or(self.nx))
    }
}

/// Orchestrates batch classification of polygon files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if polygon generation, target validation or file
    /// processing fails
    pub fn process(&mut self) -> Result<()> {
        if let Some(vertex_count) = self.cli.random {
            self.write_random_polygon(vertex_count)?;
        }

        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn write_random_polygon(&self, vertex_count: usize) -> Result<()> {
        if !Self::is_polygon_file(&self.cli.target) {
            return Err(invalid_argument(
                "target",
                &self.cli.target.display(),
                &format!("--random needs a .{POLYGON_EXTENSION} file target"),
            ));
        }

        let polygon = random_star_polygon(vertex_count, 1.0, self.cli.seed)?;
        write_polygon(&polygon, &self.cli.target)
    }

    fn is_polygon_file(path: &Path) -> bool {
        path.extension().and_then(|s| s.to_str()) == Some(POLYGON_EXTENSION)
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;

        if target.is_file() {
            if !Self::is_polygon_file(target) {
                return Err(invalid_argument(
                    "target",
                    &target.display(),
                    &format!("file must have the .{POLYGON_EXTENSION} extension"),
                ));
            }
            return Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                vec![]
            });
        }

        if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).with_path(target, "read directory")? {
                let path = entry.with_path(target, "read directory entry")?.path();
                if Self::is_polygon_file(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            return Ok(files);
        }

        Err(invalid_argument(
            "target",
            &target.display(),
            &"must be a polygon file or directory",
        ))
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    // Allow print for user feedback on per-file results
    #[allow(clippy::print_stderr)]
    fn process_file(&self, input_path: &Path, index: usize) -> Result<()> {
        let (nx, ny) = self.cli.resolution();

        if let Some(ref pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let polygon = read_polygon(input_path)?;
        self.stage_done(index, 0);

        let grid = FdmGrid::new(nx, ny, &polygon)?;
        self.stage_done(index, 1);

        export_grid_as_png(&grid, &Self::get_output_path(input_path))?;
        if self.cli.text {
            let text_path = Self::get_text_path(input_path);
            std::fs::write(&text_path, grid.to_string()).with_path(&text_path, "write text")?;
        }
        self.stage_done(index, 2);

        let summary = GridSummary::from_grid(&grid);
        let unbalanced = unbalanced_rows(&grid);

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file(index, &summary.to_string());
        }

        if !self.cli.quiet {
            eprintln!("{}: {summary}", input_path.display());
            if !unbalanced.is_empty() {
                eprintln!(
                    "{}: {} rows failed the fill parity check: {unbalanced:?}",
                    input_path.display(),
                    unbalanced.len()
                );
            }
        }

        Ok(())
    }

    fn stage_done(&self, index: usize, stage: usize) {
        if let Some(ref pm) = self.progress_manager {
            pm.complete_stage(index, stage);
        }
    }

    fn sibling_path(input_path: &Path, extension: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.{extension}", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }

    /// PNG output path for an input polygon file
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        Self::sibling_path(input_path, "png")
    }

    /// Text rendering path for an input polygon file
    pub fn get_text_path(input_path: &Path) -> PathBuf {
        Self::sibling_path(input_path, "txt")
    }
}
