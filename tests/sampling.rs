//! Validates parallel sampling order and per-worker failure reporting

use boxcount::AnalysisError;
use boxcount::analysis::sampling::collect_samples;
use image::{Rgba, RgbaImage};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

// 8x8 white canvas with a 2x2 black block aligned to the cell grid
fn block_image() -> RgbaImage {
    let mut img = RgbaImage::from_pixel(8, 8, WHITE);
    for y in 2..4 {
        for x in 2..4 {
            img.put_pixel(x, y, BLACK);
        }
    }
    img
}

#[test]
fn test_samples_follow_launch_order() {
    let img = block_image();
    let factors = [0.5, 1.0, 1.5, 2.0];

    let Ok(samples) = collect_samples(&img, &factors, 2) else {
        unreachable!("Sampling should succeed for valid factors");
    };

    let sampled: Vec<f64> = samples.iter().map(|sample| sample.factor).collect();
    assert_eq!(
        sampled,
        factors.to_vec(),
        "Samples must follow the factor sequence, not completion order"
    );
}

// At unit scale no resampling happens, so the count is exact
#[test]
fn test_unit_factor_counts_the_block() {
    let img = block_image();

    let Ok(samples) = collect_samples(&img, &[1.0], 2) else {
        unreachable!("Sampling should succeed at unit scale");
    };

    let masses: Vec<u64> = samples.iter().map(|sample| sample.mass).collect();
    assert_eq!(
        masses,
        vec![1],
        "A cell-aligned 2x2 block should occupy exactly one cell"
    );
}

#[test]
fn test_scaling_up_does_not_lose_the_block() {
    let img = block_image();

    let Ok(samples) = collect_samples(&img, &[2.0, 3.0], 2) else {
        unreachable!("Sampling should succeed for valid factors");
    };

    assert!(
        samples.iter().all(|sample| sample.mass >= 1),
        "The block should stay visible at every magnification"
    );
}

// A factor that rounds the image away entirely fails with that factor named
#[test]
fn test_degenerate_resize_is_reported_per_factor() {
    let img = block_image();

    match collect_samples(&img, &[1.0, 0.001], 2) {
        Err(AnalysisError::Sampling { factor, .. }) => {
            assert!(
                (factor - 0.001).abs() < 1e-12,
                "The error should name the degenerate factor, got {factor}"
            );
        }
        _ => unreachable!("Expected a Sampling error for the degenerate factor"),
    }
}

#[test]
fn test_zero_cell_size_is_rejected_before_launch() {
    let img = block_image();

    assert!(
        matches!(
            collect_samples(&img, &[1.0], 0),
            Err(AnalysisError::InvalidParameter { .. })
        ),
        "A zero cell size should be rejected before any worker starts"
    );
}

#[test]
fn test_empty_factor_list_yields_no_samples() {
    let img = block_image();

    let Ok(samples) = collect_samples(&img, &[], 2) else {
        unreachable!("Sampling with no factors should trivially succeed");
    };
    assert!(samples.is_empty(), "No factors means no samples");
}
