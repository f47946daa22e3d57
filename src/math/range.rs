//! Scale factor sequence generation with drift-free stepping
//!
//! Sequences are produced by repeated addition, rounding every new value
//! to the decimal precision of the step so accumulated floating-point
//! error cannot push late factors off the intended lattice.

use crate::io::configuration::MAX_SCALE_FACTORS;
use crate::io::error::{Result, invalid_parameter};

/// Half-open range of scale factors, start inclusive and stop exclusive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleRange {
    start: f64,
    stop: f64,
    step: f64,
}

impl ScaleRange {
    /// Create a validated scale range
    ///
    /// # Errors
    ///
    /// Returns an error if any bound is non-finite, if the step is not
    /// strictly positive, or if the range would generate more than
    /// [`MAX_SCALE_FACTORS`] values.
    pub fn new(start: f64, stop: f64, step: f64) -> Result<Self> {
        if !start.is_finite() {
            return Err(invalid_parameter("start", &start, &"must be finite"));
        }
        if !stop.is_finite() {
            return Err(invalid_parameter("stop", &stop, &"must be finite"));
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(invalid_parameter(
                "step",
                &step,
                &"must be a finite positive number",
            ));
        }

        let span = (stop - start).max(0.0);
        let count = (span / step).ceil() as usize + 1;
        if count > MAX_SCALE_FACTORS {
            return Err(invalid_parameter(
                "step",
                &step,
                &format!("would generate {count} factors (limit {MAX_SCALE_FACTORS})"),
            ));
        }

        Ok(Self { start, stop, step })
    }

    /// Get the inclusive lower bound
    pub const fn start(&self) -> f64 {
        self.start
    }

    /// Get the exclusive upper bound
    pub const fn stop(&self) -> f64 {
        self.stop
    }

    /// Get the increment between values
    pub const fn step(&self) -> f64 {
        self.step
    }

    /// Generate the strictly increasing factor sequence
    ///
    /// The start value is always emitted; generation stops before the
    /// first value that reaches or exceeds the stop bound.
    pub fn values(&self) -> Vec<f64> {
        let places = decimal_places(self.step);
        let mut out = Vec::new();
        let mut current = self.start;

        loop {
            out.push(current);
            let next = round_to_places(current + self.step, places);
            // A next value that fails to advance would loop forever
            if next >= self.stop || next <= current {
                return out;
            }
            current = next;
        }
    }
}

/// Count the decimal places in a number's shortest representation
fn decimal_places(x: f64) -> i32 {
    if x.fract() == 0.0 {
        return 0;
    }

    let rendered = format!("{x}");
    rendered
        .split('.')
        .nth(1)
        .map_or(0, |fraction| fraction.len() as i32)
}

fn round_to_places(x: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (x * scale).round() / scale
}
