//! Dimension estimation pipeline from sweep configuration to fitted slope

use crate::analysis::sampling::{Sample, collect_samples};
use crate::io::configuration::{
    DEFAULT_CELL_SIZE, DEFAULT_SWEEP_START, DEFAULT_SWEEP_STEP, DEFAULT_SWEEP_STOP,
};
use crate::io::error::{Result, computation_error};
use crate::io::visualization::render_diagnostics;
use crate::math::range::ScaleRange;
use crate::math::regression::{LeastSquares, LogPoint, SlopeFit};
use image::RgbaImage;

/// Sweep parameters controlling one dimension estimation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EstimatorConfig {
    /// First scale factor (inclusive)
    pub start: f64,
    /// End of the scale sweep (exclusive)
    pub stop: f64,
    /// Increment between scale factors
    pub step: f64,
    /// Edge length of a counting cell in pixels
    pub cell_size: usize,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            start: DEFAULT_SWEEP_START,
            stop: DEFAULT_SWEEP_STOP,
            step: DEFAULT_SWEEP_STEP,
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

/// Outcome of one dimension estimation
#[derive(Debug, Clone)]
pub struct DimensionEstimate {
    /// Fitted log-log slope, the box-counting dimension
    pub dimension: f64,
    /// Per-factor measurements the fit was made from
    pub samples: Vec<Sample>,
    /// Rendered diagnostic plot when one was requested
    pub plot: Option<RgbaImage>,
}

/// Estimates the box-counting dimension of images under a fixed sweep
///
/// The sweep configuration and line-fit strategy are set at construction
/// and read-only afterwards; nothing about an estimation is carried over
/// to the next call.
pub struct DimensionEstimator<F: SlopeFit = LeastSquares> {
    config: EstimatorConfig,
    fit: F,
}

impl DimensionEstimator<LeastSquares> {
    /// Create an estimator with the default least-squares fit
    pub const fn new(config: EstimatorConfig) -> Self {
        Self::with_fit(config, LeastSquares)
    }
}

impl<F: SlopeFit> DimensionEstimator<F> {
    /// Create an estimator with an explicit line-fit strategy
    pub const fn with_fit(config: EstimatorConfig, fit: F) -> Self {
        Self { config, fit }
    }

    /// Get the sweep configuration
    pub const fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Estimate the box-counting dimension of an image
    ///
    /// # Errors
    ///
    /// Returns an error if the sweep parameters are invalid or if any
    /// sampling worker fails.
    pub fn estimate(&self, img: &RgbaImage) -> Result<f64> {
        Ok(self.estimate_with_diagnostics(img, false)?.dimension)
    }

    /// Estimate the dimension, keeping the samples and an optional plot
    ///
    /// The diagnostic plot is only rendered for non-degenerate estimates;
    /// a sweep containing a zero-mass sample returns a dimension of
    /// exactly zero with no fitting and no plot.
    ///
    /// # Errors
    ///
    /// Returns an error if the sweep parameters are invalid or if any
    /// sampling worker fails.
    pub fn estimate_with_diagnostics(
        &self,
        img: &RgbaImage,
        render_plot: bool,
    ) -> Result<DimensionEstimate> {
        let factors =
            ScaleRange::new(self.config.start, self.config.stop, self.config.step)?.values();
        let samples = collect_samples(img, &factors, self.config.cell_size)?;

        // A zero mass at any scale means there is nothing to measure
        if samples.iter().any(|sample| sample.mass == 0) {
            return Ok(DimensionEstimate {
                dimension: 0.0,
                samples,
                plot: None,
            });
        }

        let points: Vec<LogPoint> = samples
            .iter()
            .map(|sample| LogPoint {
                x: sample.factor.ln(),
                y: (sample.mass as f64).ln(),
            })
            .collect();

        // Anchor the intercept at the unit-scale sample when the sweep has
        // one; otherwise the line is fitted through the origin
        let intercept = points
            .iter()
            .find(|point| point.x == 0.0)
            .map_or(0.0, |point| point.y);

        let dimension = self.fit.fit_slope(&points, intercept);
        if !dimension.is_finite() {
            return Err(computation_error(
                "slope fit",
                &"produced a non-finite dimension",
            ));
        }

        let plot =
            render_plot.then(|| render_diagnostics(&samples, &points, dimension, intercept));

        Ok(DimensionEstimate {
            dimension,
            samples,
            plot,
        })
    }
}

/// Estimate the box-counting dimension with the default least-squares fit
///
/// # Errors
///
/// Returns an error if the sweep parameters are invalid or if any
/// sampling worker fails.
pub fn estimate_dimension(img: &RgbaImage, config: EstimatorConfig) -> Result<f64> {
    DimensionEstimator::new(config).estimate(img)
}
