//! Command-line interface for batch dimension measurement of PNG files

use crate::analysis::estimator::{DimensionEstimator, EstimatorConfig};
use crate::io::configuration::{
    DEFAULT_CELL_SIZE, DEFAULT_SWEEP_START, DEFAULT_SWEEP_STEP, DEFAULT_SWEEP_STOP,
    OVERLAY_SUFFIX, PLOT_SUFFIX,
};
use crate::io::error::{AnalysisError, Result, invalid_target};
use crate::io::image::{export_png, load_rgba};
use crate::io::progress::ProgressManager;
use crate::io::visualization::visualize_occupancy;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "boxcount")]
#[command(
    author,
    version,
    about = "Estimate the fractal dimension of raster images by box counting"
)]
/// Command-line arguments for the dimension measurement tool
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// First scale factor (inclusive)
    #[arg(long, default_value_t = DEFAULT_SWEEP_START)]
    pub start: f64,

    /// End of the scale sweep (exclusive)
    #[arg(long, default_value_t = DEFAULT_SWEEP_STOP)]
    pub stop: f64,

    /// Increment between scale factors
    #[arg(long, default_value_t = DEFAULT_SWEEP_STEP)]
    pub step: f64,

    /// Edge length of a counting cell in pixels
    #[arg(short, long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: usize,

    /// Export an occupancy overlay PNG next to each input
    #[arg(short, long)]
    pub overlay: bool,

    /// Export a diagnostic plot PNG next to each input
    #[arg(short, long)]
    pub plot: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch measurement of PNG files with progress tracking
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
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some("png") {
                Ok(vec![self.cli.target.clone()])
            } else {
                Err(invalid_target(
                    &self.cli.target,
                    "target file must be a PNG image",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            let entries =
                std::fs::read_dir(&self.cli.target).map_err(|source| AnalysisError::FileSystem {
                    path: self.cli.target.clone(),
                    operation: "read directory",
                    source,
                })?;
            for entry in entries {
                let path = entry
                    .map_err(|source| AnalysisError::FileSystem {
                        path: self.cli.target.clone(),
                        operation: "read directory",
                        source,
                    })?
                    .path();
                if path.extension().and_then(|s| s.to_str()) == Some("png") {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_target(
                &self.cli.target,
                "target must be a PNG file or a directory of PNGs",
            ))
        }
    }

    // Allow print for the per-file measurement results
    #[allow(clippy::print_stdout)]
    fn process_file(&self, input_path: &Path) -> Result<()> {
        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let img = load_rgba(input_path)?;

        let config = EstimatorConfig {
            start: self.cli.start,
            stop: self.cli.stop,
            step: self.cli.step,
            cell_size: self.cli.cell_size,
        };

        let estimator = DimensionEstimator::new(config);
        let estimate = estimator.estimate_with_diagnostics(&img, self.cli.plot)?;

        println!("{}\t{:.3}", input_path.display(), estimate.dimension);

        if self.cli.overlay {
            let overlay = visualize_occupancy(&img, self.cli.cell_size)?;
            export_png(&overlay, &Self::artifact_path(input_path, OVERLAY_SUFFIX))?;
        }

        if let Some(ref plot) = estimate.plot {
            export_png(plot, &Self::artifact_path(input_path, PLOT_SUFFIX))?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file();
        }

        Ok(())
    }

    fn artifact_path(input_path: &Path, suffix: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let artifact_name = format!("{}{suffix}.png", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(artifact_name)
        } else {
            PathBuf::from(artifact_name)
        }
    }
}
