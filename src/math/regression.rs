//! Fixed-intercept line fitting in log-log space
//!
//! The intercept of the fitted line is anchored upstream (at the
//! unit-scale sample when present), so every strategy here searches the
//! slope alone. The closed-form least-squares fit is the default; the
//! coordinate-descent variant reproduces the stepwise search used by
//! earlier measurement campaigns and is kept for parity testing.

/// A sample transformed into log-log space for linear fitting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogPoint {
    /// Natural log of the scale factor
    pub x: f64,
    /// Natural log of the mass
    pub y: f64,
}

/// Mean squared error of the line `y = slope * x + intercept`
///
/// An empty point set has zero error.
pub fn mean_squared_error(points: &[LogPoint], slope: f64, intercept: f64) -> f64 {
    if points.is_empty() {
        return 0.0;
    }

    let total: f64 = points
        .iter()
        .map(|point| {
            let predicted = slope.mul_add(point.x, intercept);
            let residual = point.y - predicted;
            residual * residual
        })
        .sum();

    total / points.len() as f64
}

/// Strategy for fitting a slope through points with a fixed intercept
pub trait SlopeFit {
    /// Fit the slope of `y = slope * x + intercept` to the points
    fn fit_slope(&self, points: &[LogPoint], intercept: f64) -> f64;
}

/// Closed-form least-squares slope with the intercept held fixed
///
/// Minimizes the squared residuals of `y = slope * x + intercept`
/// analytically. Degenerate inputs (no points, or every x zero) fit a
/// slope of zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeastSquares;

impl SlopeFit for LeastSquares {
    fn fit_slope(&self, points: &[LogPoint], intercept: f64) -> f64 {
        let mut numerator = 0.0;
        let mut denominator = 0.0;

        for point in points {
            numerator = point.x.mul_add(point.y - intercept, numerator);
            denominator = point.x.mul_add(point.x, denominator);
        }

        if denominator == 0.0 {
            return 0.0;
        }

        numerator / denominator
    }
}

/// Stepwise hill-climbing slope search
///
/// Starting from a slope of zero, steps by a fixed increment first upward
/// then downward, accepting each step that does not increase the mean
/// squared error and stopping a direction at the first increase. Finds a
/// 1-D local minimum, not a guaranteed global optimum.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateDescent {
    /// Slope increment per step
    pub step_size: f64,
    /// Cap on steps per direction, bounding the search on bad input
    pub max_steps: usize,
}

impl Default for CoordinateDescent {
    fn default() -> Self {
        Self {
            step_size: 0.001,
            max_steps: 100_000,
        }
    }
}

impl SlopeFit for CoordinateDescent {
    fn fit_slope(&self, points: &[LogPoint], intercept: f64) -> f64 {
        let mut slope = 0.0;
        let mut best_error = mean_squared_error(points, slope, intercept);

        if !best_error.is_finite() {
            return 0.0;
        }

        for direction in [self.step_size, -self.step_size] {
            for _ in 0..self.max_steps {
                let candidate = slope + direction;
                let error = mean_squared_error(points, candidate, intercept);

                if error > best_error {
                    break;
                }

                slope = candidate;
                best_error = error;
            }
        }

        slope
    }
}
