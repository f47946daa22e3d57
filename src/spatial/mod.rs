//! Spatial data structures for box counting
//!
//! This module contains spatial-related functionality including:
//! - Cell geometry over a pixel grid
//! - Per-cell occupancy state

/// Cell geometry and occupancy state management
pub mod grid;

pub use grid::{CellGrid, OccupancyGrid};
