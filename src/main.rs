//! CLI entry point for polygon lattice classification

use clap::Parser;
use polygrid::io::cli::{Cli, FileProcessor};

fn main() -> polygrid::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
