//! Analysis constants and runtime configuration defaults

// Default magnification sweep when no bounds are given
/// Default first scale factor (inclusive)
pub const DEFAULT_SWEEP_START: f64 = 1.0;
/// Default end of the scale sweep (exclusive)
pub const DEFAULT_SWEEP_STOP: f64 = 5.0;
/// Default increment between scale factors
pub const DEFAULT_SWEEP_STEP: f64 = 0.2;

/// Default edge length of a counting cell in pixels
pub const DEFAULT_CELL_SIZE: usize = 2;

// Safety limit to prevent unbounded worker fan-out
/// Maximum number of scale factors in a single sweep
pub const MAX_SCALE_FACTORS: usize = 4096;

// Occupancy overlay appearance
/// Highlight color blended over occupied cells
pub const OVERLAY_COLOR: [u8; 3] = [255, 255, 0];
/// Highlight opacity out of 255
pub const OVERLAY_ALPHA: u8 = 100;

// Diagnostic plot geometry
/// Width of the diagnostic plot canvas in pixels
pub const PLOT_WIDTH: u32 = 440;
/// Height of one diagnostic plot panel in pixels
pub const PLOT_PANEL_HEIGHT: u32 = 140;
/// Inner margin around panel content in pixels
pub const PLOT_MARGIN: u32 = 16;

// Output settings
/// Suffix added to occupancy overlay filenames
pub const OVERLAY_SUFFIX: &str = "_overlay";
/// Suffix added to diagnostic plot filenames
pub const PLOT_SUFFIX: &str = "_plot";
