//! Error types for dimension measurement and its IO surface

use std::fmt;
use std::path::{Path, PathBuf};

/// Errors produced while measuring images or writing artifacts
///
/// Degenerate measurements are not errors: an image whose sampled mass is
/// zero at some scale yields a dimension of exactly zero instead of a
/// variant here.
#[derive(Debug)]
pub enum AnalysisError {
    /// The source image could not be read or decoded
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying decode error
        source: image::ImageError,
    },

    /// The decoded image cannot be measured
    InvalidSourceData {
        /// What makes the image unusable
        reason: String,
    },

    /// A sweep or grid parameter failed validation
    InvalidParameter {
        /// Name of the rejected parameter
        parameter: &'static str,
        /// Value the caller supplied
        value: String,
        /// Why the value was rejected
        reason: String,
    },

    /// The command-line target is not something the tool can process
    InvalidTarget {
        /// The rejected target path
        path: PathBuf,
        /// Why the target was rejected
        reason: &'static str,
    },

    /// A scale-sampling worker failed to produce a measurement
    ///
    /// One worker of the multi-scale fan-out errored or panicked. Its
    /// siblings run to completion, but the sweep as a whole reports the
    /// first failure instead of returning stale data.
    Sampling {
        /// Scale factor the failed worker was measuring
        factor: f64,
        /// What went wrong inside the worker
        reason: String,
    },

    /// A rendered artifact could not be encoded or saved
    ImageExport {
        /// Path where the artifact was being written
        path: PathBuf,
        /// Underlying encode error
        source: image::ImageError,
    },

    /// A directory could not be created or read
    FileSystem {
        /// Path the operation touched
        path: PathBuf,
        /// The operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A numeric stage produced an unusable result
    Computation {
        /// The stage that failed
        operation: &'static str,
        /// What it produced instead of a usable value
        reason: String,
    },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "cannot read image '{}': {source}", path.display())
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "image cannot be measured: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "parameter {parameter}={value} rejected: {reason}")
            }
            Self::InvalidTarget { path, reason } => {
                write!(f, "cannot process '{}': {reason}", path.display())
            }
            Self::Sampling { factor, reason } => {
                write!(f, "sampling at scale factor {factor} failed: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(f, "cannot write artifact '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(f, "{operation} failed for '{}': {source}", path.display())
            }
            Self::Computation { operation, reason } => {
                write!(f, "{operation} {reason}")
            }
        }
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::InvalidSourceData { .. }
            | Self::InvalidParameter { .. }
            | Self::InvalidTarget { .. }
            | Self::Sampling { .. }
            | Self::Computation { .. } => None,
        }
    }
}

/// Shorthand result for fallible measurement operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Reject a parameter value
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AnalysisError {
    AnalysisError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Reject a command-line target, keeping the offending path
pub fn invalid_target(path: &Path, reason: &'static str) -> AnalysisError {
    AnalysisError::InvalidTarget {
        path: path.to_path_buf(),
        reason,
    }
}

/// Report a failed sampling worker
pub fn sampling_error(factor: f64, reason: &impl ToString) -> AnalysisError {
    AnalysisError::Sampling {
        factor,
        reason: reason.to_string(),
    }
}

/// Report a numeric stage that produced an unusable result
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> AnalysisError {
    AnalysisError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
