//! Background color detection for occupancy testing
//!
//! The background is assumed to be the most frequent pixel value in the
//! image. Ties are broken by first-appearance order so detection stays
//! deterministic regardless of hash iteration order.

use crate::io::error::{AnalysisError, Result};
use image::{Rgba, RgbaImage};
use std::cmp::Reverse;
use std::collections::HashMap;

struct PixelTally {
    count: usize,
    first_seen: usize,
}

/// Find the most frequent pixel value in an image
///
/// Pixels are compared by exact RGBA equality with no tolerance. When two
/// values reach the same count, the one that appeared first in row-major
/// scan order wins. The result is recomputed per call, never cached.
///
/// # Errors
///
/// Returns an error if the image contains no pixels.
pub fn dominant_color(img: &RgbaImage) -> Result<Rgba<u8>> {
    let mut frequencies: HashMap<[u8; 4], PixelTally> = HashMap::new();

    for (order, pixel) in img.pixels().enumerate() {
        frequencies
            .entry(pixel.0)
            .or_insert(PixelTally {
                count: 0,
                first_seen: order,
            })
            .count += 1;
    }

    frequencies
        .into_iter()
        .min_by_key(|(_, tally)| (Reverse(tally.count), tally.first_seen))
        .map(|(value, _)| Rgba(value))
        .ok_or_else(|| AnalysisError::InvalidSourceData {
            reason: "Image contains no pixels".to_string(),
        })
}
