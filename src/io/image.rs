//! Image loading, antialiased resizing, and PNG export

use crate::io::error::{AnalysisError, Result, invalid_parameter};
use image::RgbaImage;
use image::imageops::{self, FilterType};
use std::path::Path;

/// Load an image and convert it to RGBA8
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded, or if the
/// decoded image has zero width or height.
pub fn load_rgba<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|source| AnalysisError::ImageLoad {
        path: path_buf.clone(),
        source,
    })?;
    let rgba = img.to_rgba8();

    if rgba.width() == 0 || rgba.height() == 0 {
        return Err(AnalysisError::InvalidSourceData {
            reason: format!("Image '{}' has zero width or height", path_buf.display()),
        });
    }

    Ok(rgba)
}

/// Target dimensions after scaling by a factor, rounded to nearest
///
/// # Errors
///
/// Returns an error if the factor is not a finite positive number or if
/// either rounded dimension collapses to zero.
pub fn scaled_dimensions(width: u32, height: u32, factor: f64) -> Result<(u32, u32)> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(invalid_parameter(
            "factor",
            &factor,
            &"must be a finite positive number",
        ));
    }

    let scaled_width = (f64::from(width) * factor).round() as u32;
    let scaled_height = (f64::from(height) * factor).round() as u32;

    if scaled_width == 0 || scaled_height == 0 {
        return Err(invalid_parameter(
            "factor",
            &factor,
            &"scales the image to zero width or height",
        ));
    }

    Ok((scaled_width, scaled_height))
}

/// Scale an image by a factor with antialiased resampling
///
/// Uses a Lanczos window. The input image is never mutated.
///
/// # Errors
///
/// Returns an error if the factor is invalid for the image dimensions.
pub fn resize_by_factor(img: &RgbaImage, factor: f64) -> Result<RgbaImage> {
    let (width, height) = scaled_dimensions(img.width(), img.height(), factor)?;

    Ok(imageops::resize(img, width, height, FilterType::Lanczos3))
}

/// Save an image as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the
/// image cannot be written.
pub fn export_png(img: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| AnalysisError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source,
        })?;
    }

    img.save(path).map_err(|source| AnalysisError::ImageExport {
        path: path.to_path_buf(),
        source,
    })
}
