//! Occupied-cell counting at a single resolution
//!
//! A cell is occupied when any pixel inside it differs from the background
//! color. Coarser and finer resolutions are produced upstream by resizing
//! the image, not by changing the comparison.

use crate::spatial::{CellGrid, OccupancyGrid};
use image::{Rgba, RgbaImage};

/// Compute the per-cell occupancy of an image against a background color
///
/// Walks every cell of the grid and tests its in-bounds pixels with exact
/// equality. Indices that fall outside the image are skipped, so a grid
/// built for a different image size under-reports rather than panicking.
pub fn occupancy(img: &RgbaImage, background: Rgba<u8>, grid: &CellGrid) -> OccupancyGrid {
    let width = grid.width();
    let mut map = OccupancyGrid::new(*grid);

    for row in 0..grid.cells_down() {
        for col in 0..grid.cells_across() {
            let (x, y) = grid.cell_origin(row, col);

            let occupied = grid.linear_indices(x, y).iter().any(|&index| {
                let px = (index % width) as u32;
                let py = (index / width) as u32;
                img.get_pixel_checked(px, py)
                    .is_some_and(|pixel| *pixel != background)
            });

            if occupied {
                map.set_occupied(row, col);
            }
        }
    }

    map
}

/// Count occupied cells, the image's "mass" at this resolution
pub fn count_occupied(img: &RgbaImage, background: Rgba<u8>, grid: &CellGrid) -> u64 {
    occupancy(img, background, grid).mass()
}
