//! Performance measurement for occupancy counting and dimension estimation

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use boxcount::analysis::background::dominant_color;
use boxcount::analysis::counting::count_occupied;
use boxcount::spatial::CellGrid;
use boxcount::{DimensionEstimator, EstimatorConfig};
use criterion::{Criterion, criterion_group, criterion_main};
use image::{Rgba, RgbaImage};
use std::hint::black_box;

fn checkerboard(size: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, Rgba([255, 255, 255, 255]));
    for y in 0..size {
        for x in 0..size {
            if (x / 4 + y / 4) % 2 == 0 {
                img.put_pixel(x, y, Rgba([0, 0, 0, 255]));
            }
        }
    }
    img
}

/// Measures single-resolution occupancy counting over a 256-pixel checkerboard
fn bench_count_occupied(c: &mut Criterion) {
    let img = checkerboard(256);
    let Ok(background) = dominant_color(&img) else {
        return;
    };
    let Ok(grid) = CellGrid::new(256, 256, 2) else {
        return;
    };

    c.bench_function("count_occupied_256", |b| {
        b.iter(|| black_box(count_occupied(&img, background, &grid)));
    });
}

/// Measures a short full estimate including the parallel scale sweep
fn bench_small_estimate(c: &mut Criterion) {
    let img = checkerboard(64);
    let config = EstimatorConfig {
        start: 1.0,
        stop: 2.0,
        step: 0.5,
        cell_size: 2,
    };

    c.bench_function("estimate_64", |b| {
        b.iter(|| {
            let estimator = DimensionEstimator::new(config);
            let Ok(dimension) = estimator.estimate(&img) else {
                return;
            };
            black_box(dimension);
        });
    });
}

criterion_group!(benches, bench_count_occupied, bench_small_estimate);
criterion_main!(benches);
