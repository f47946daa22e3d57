//! Input/output operations and error handling
//!
//! This module contains the user-facing surface of the crate:
//! - Command-line parsing and batch processing
//! - Image loading, resizing, and export
//! - Overlay and diagnostic plot rendering
//! - Progress display and error types

/// Command-line interface and batch file processing
pub mod cli;
/// Analysis constants and runtime configuration defaults
pub mod configuration;
/// Error types for image analysis operations
pub mod error;
/// Image loading, antialiased resizing, and PNG export
pub mod image;
/// Batch progress display
pub mod progress;
/// Occupancy overlays and diagnostic plot rendering
pub mod visualization;
