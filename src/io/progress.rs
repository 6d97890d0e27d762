//! Multi-file progress tracking with automatic batching for large sets

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Processing stages reported for each polygon file
pub const STAGES: [&str; 3] = ["parse", "classify", "export"];

static FILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>24} [{bar:20.cyan/blue}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display for batch classification
///
/// Small batches get one bar per file; larger batches add a single batch bar
/// and reuse a fixed number of file bars for the most recent files.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
        }
    }

    /// Initialize progress bars based on file count
    pub fn initialize(&mut self, file_count: usize) {
        // Batch bar only above the per-file bar limit
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let pb = ProgressBar::new(STAGES.len() as u64);
            pb.set_style(FILE_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Number of per-file bars currently allocated
    pub fn file_bar_count(&self) -> usize {
        self.file_bars.len()
    }

    fn bar_for(&self, index: usize) -> Option<&ProgressBar> {
        let slots = self.file_bars.len();
        if slots == 0 {
            return None;
        }
        self.file_bars.get(index % slots)
    }

    /// Configure a bar for a new file
    pub fn start_file(&self, index: usize, path: &Path) {
        if let Some(bar) = self.bar_for(index) {
            let display_name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            bar.set_prefix(display_name);
            bar.set_position(0);
            bar.set_message(STAGES.first().copied().unwrap_or_default());
        }
    }

    /// Report that a file finished one of its stages
    pub fn complete_stage(&self, index: usize, stage: usize) {
        if let Some(bar) = self.bar_for(index) {
            bar.set_position((stage + 1) as u64);
            if let Some(next) = STAGES.get(stage + 1) {
                bar.set_message(*next);
            }
        }
    }

    /// Mark file as completed and update batch progress
    pub fn complete_file(&self, index: usize, summary: &str) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(bar) = self.bar_for(index) {
            bar.set_position(STAGES.len() as u64);
            bar.set_message(format!("✓ {summary}"));
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files processed");
        }
        let _ = self.multi_progress.clear();
    }
}
