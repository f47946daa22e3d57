//! CLI entry point for the box-counting dimension estimator

use boxcount::io::cli::{Cli, FileProcessor};
use clap::Parser;

fn main() -> boxcount::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
