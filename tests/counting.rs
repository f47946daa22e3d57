//! Validates occupancy counting against a fixed background color

use boxcount::analysis::counting::{count_occupied, occupancy};
use boxcount::spatial::CellGrid;
use image::{Rgba, RgbaImage};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

fn grid_for(img: &RgbaImage, cell_size: usize) -> CellGrid {
    let Ok(grid) = CellGrid::new(img.width() as usize, img.height() as usize, cell_size) else {
        unreachable!("Cell size is valid");
    };
    grid
}

#[test]
fn test_single_marked_pixel_occupies_one_cell() {
    let mut img = RgbaImage::from_pixel(4, 4, WHITE);
    img.put_pixel(2, 2, BLACK);

    let map = occupancy(&img, WHITE, &grid_for(&img, 2));

    assert_eq!(map.mass(), 1, "One marked pixel should occupy one cell");
    assert!(
        map.is_occupied(1, 1),
        "The cell containing the marked pixel should be occupied"
    );
    assert!(
        !map.is_occupied(0, 0),
        "Cells of pure background should stay unoccupied"
    );
}

#[test]
fn test_uniform_image_has_zero_mass() {
    let img = RgbaImage::from_pixel(8, 8, WHITE);

    assert_eq!(
        count_occupied(&img, WHITE, &grid_for(&img, 2)),
        0,
        "An image that is all background has no mass"
    );
}

// A pixel in the clipped bottom-right cell still counts
#[test]
fn test_boundary_pixels_are_counted() {
    let mut img = RgbaImage::from_pixel(5, 5, WHITE);
    img.put_pixel(4, 4, BLACK);

    let map = occupancy(&img, WHITE, &grid_for(&img, 2));

    assert_eq!(map.mass(), 1, "The clipped corner cell should be counted");
    assert!(
        map.is_occupied(2, 2),
        "The single-pixel corner cell should be occupied"
    );
}

// Finer grids cannot miss occupied regions a coarser grid found
#[test]
fn test_mass_never_decreases_at_finer_cell_sizes() {
    let mut img = RgbaImage::from_pixel(16, 16, WHITE);
    for (x, y) in [(0, 0), (3, 2), (7, 7), (8, 3), (13, 14), (15, 0)] {
        img.put_pixel(x, y, BLACK);
    }

    let masses: Vec<u64> = [8, 4, 2, 1]
        .iter()
        .map(|&cell_size| count_occupied(&img, WHITE, &grid_for(&img, cell_size)))
        .collect();

    assert!(
        masses
            .iter()
            .zip(masses.iter().skip(1))
            .all(|(coarse, fine)| coarse <= fine),
        "Mass should be monotonically non-decreasing as cells shrink, got {masses:?}"
    );
}

#[test]
fn test_every_cell_occupied_when_background_is_absent() {
    let img = RgbaImage::from_pixel(6, 6, BLACK);

    assert_eq!(
        count_occupied(&img, WHITE, &grid_for(&img, 2)),
        9,
        "All 9 cells differ from the background everywhere"
    );
}
