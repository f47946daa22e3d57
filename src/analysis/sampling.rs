//! Parallel multi-scale mass measurement
//!
//! Every scale factor gets its own worker thread; all workers are launched
//! before the first join and none of them communicate with each other. The
//! base image is shared immutably and each worker owns its resized copy,
//! so no locks are needed anywhere in the fan-out.

use crate::analysis::background::dominant_color;
use crate::analysis::counting::count_occupied;
use crate::io::error::{Result, sampling_error};
use crate::io::image::resize_by_factor;
use crate::spatial::CellGrid;
use image::RgbaImage;
use std::thread;

/// One measurement at one magnification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Scale factor applied to the base image
    pub factor: f64,
    /// Occupied-cell count of the scaled image
    pub mass: u64,
}

/// Measure the image's mass at every scale factor in parallel
///
/// Results are joined in launch order, so the returned samples follow the
/// input factor sequence regardless of which worker finishes first.
///
/// # Errors
///
/// Returns an error if `cell_size` is zero, or if any worker fails or
/// panics; the error names the scale factor the worker was measuring.
/// Sibling workers still run to completion.
pub fn collect_samples(base: &RgbaImage, factors: &[f64], cell_size: usize) -> Result<Vec<Sample>> {
    // Reject a degenerate cell size before any worker is spawned
    CellGrid::new(base.width() as usize, base.height() as usize, cell_size)?;

    thread::scope(|scope| {
        let workers: Vec<_> = factors
            .iter()
            .map(|&factor| scope.spawn(move || measure_at_factor(base, factor, cell_size)))
            .collect();

        factors
            .iter()
            .zip(workers)
            .map(|(&factor, worker)| match worker.join() {
                Ok(Ok(sample)) => Ok(sample),
                Ok(Err(error)) => Err(sampling_error(factor, &error)),
                Err(_) => Err(sampling_error(factor, &"worker thread panicked")),
            })
            .collect()
    })
}

/// Resize, detect the background, and count mass for a single factor
fn measure_at_factor(base: &RgbaImage, factor: f64, cell_size: usize) -> Result<Sample> {
    let scaled = resize_by_factor(base, factor)?;
    let background = dominant_color(&scaled)?;
    let grid = CellGrid::new(
        scaled.width() as usize,
        scaled.height() as usize,
        cell_size,
    )?;
    let mass = count_occupied(&scaled, background, &grid);

    Ok(Sample { factor, mass })
}
