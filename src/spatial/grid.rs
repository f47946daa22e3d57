//! Cell geometry and occupancy state for box counting
//!
//! A `CellGrid` tiles an image with fixed-size square cells anchored at the
//! top-left corner; boundary cells are clipped against the image bounds
//! rather than padded or wrapped. An `OccupancyGrid` records which cells
//! contain at least one non-background pixel at one resolution.

use crate::io::error::{Result, invalid_parameter};
use ndarray::Array2;

/// Regular grid of counting cells laid over an image
///
/// Cells are `cell_size` × `cell_size` pixels. The grid starts at (0, 0)
/// and the last row and column of cells may be smaller than `cell_size`
/// where the image dimensions are not an exact multiple of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellGrid {
    width: usize,
    height: usize,
    cell_size: usize,
}

impl CellGrid {
    /// Create a grid over an image of the given dimensions
    ///
    /// # Errors
    ///
    /// Returns an error if `cell_size` is zero, which would produce
    /// zero-area cells.
    pub fn new(width: usize, height: usize, cell_size: usize) -> Result<Self> {
        if cell_size == 0 {
            return Err(invalid_parameter(
                "cell_size",
                &cell_size,
                &"must be at least 1",
            ));
        }

        Ok(Self {
            width,
            height,
            cell_size,
        })
    }

    /// Get the image width in pixels
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Get the image height in pixels
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get the cell edge length in pixels
    pub const fn cell_size(&self) -> usize {
        self.cell_size
    }

    /// Number of cell columns, counting the clipped final column
    pub const fn cells_across(&self) -> usize {
        self.width.div_ceil(self.cell_size)
    }

    /// Number of cell rows, counting the clipped final row
    pub const fn cells_down(&self) -> usize {
        self.height.div_ceil(self.cell_size)
    }

    /// Pixel coordinates of the top-left corner of cell (`row`, `col`)
    pub const fn cell_origin(&self, row: usize, col: usize) -> (usize, usize) {
        (col * self.cell_size, row * self.cell_size)
    }

    /// Row-major linear pixel indices of the cell anchored at (`x`, `y`)
    ///
    /// Scans sub-rows before sub-columns and keeps only in-bounds pixels,
    /// so a boundary cell yields fewer than `cell_size`² indices.
    pub fn linear_indices(&self, x: usize, y: usize) -> Vec<usize> {
        let mut indices = Vec::with_capacity(self.cell_size * self.cell_size);

        for sub_y in 0..self.cell_size {
            for sub_x in 0..self.cell_size {
                if x + sub_x < self.width && y + sub_y < self.height {
                    indices.push(self.width * (y + sub_y) + (x + sub_x));
                }
            }
        }

        indices
    }
}

/// Per-cell occupancy computed against one background color
///
/// Rows and columns mirror the generating `CellGrid`; a `true` entry marks
/// a cell containing at least one pixel that differs from the background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    cells: Array2<bool>,
    geometry: CellGrid,
}

impl OccupancyGrid {
    /// Create an all-empty occupancy map for the given grid
    pub(crate) fn new(geometry: CellGrid) -> Self {
        let cells = Array2::from_elem((geometry.cells_down(), geometry.cells_across()), false);

        Self { cells, geometry }
    }

    /// Get the generating cell geometry
    pub const fn geometry(&self) -> &CellGrid {
        &self.geometry
    }

    /// Check whether cell (`row`, `col`) is occupied
    ///
    /// Out-of-bounds cells are reported as unoccupied.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.cells.get([row, col]).copied().unwrap_or(false)
    }

    /// Mark cell (`row`, `col`) as occupied
    pub(crate) fn set_occupied(&mut self, row: usize, col: usize) {
        if let Some(cell) = self.cells.get_mut([row, col]) {
            *cell = true;
        }
    }

    /// Count of occupied cells, the "mass" at this resolution
    pub fn mass(&self) -> u64 {
        self.cells.iter().filter(|&&occupied| occupied).count() as u64
    }

    /// Pixel origins of all occupied cells in row-major order
    pub fn occupied_origins(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .indexed_iter()
            .filter(|&(_, &occupied)| occupied)
            .map(|((row, col), _)| self.geometry.cell_origin(row, col))
    }
}
