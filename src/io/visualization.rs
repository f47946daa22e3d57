//! Occupancy overlays and diagnostic plot rendering
//!
//! Both renderers are pure functions over their inputs: the same image,
//! grid, and fit always produce pixel-identical output. Rendering never
//! feeds back into the measurement pipeline.

use crate::analysis::background::dominant_color;
use crate::analysis::counting::occupancy;
use crate::analysis::sampling::Sample;
use crate::io::configuration::{
    OVERLAY_ALPHA, OVERLAY_COLOR, PLOT_MARGIN, PLOT_PANEL_HEIGHT, PLOT_WIDTH,
};
use crate::io::error::Result;
use crate::math::regression::LogPoint;
use crate::spatial::{CellGrid, OccupancyGrid};
use image::{Rgba, RgbaImage};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const FRAME_GRAY: Rgba<u8> = Rgba([176, 176, 176, 255]);

/// Highlight every pixel of every occupied cell
///
/// Returns a copy of the image where occupied cells are alpha-blended
/// with the fixed highlight color; unoccupied cells are left untouched.
/// The output alpha channel of blended pixels is forced to opaque.
pub fn render_occupancy_overlay(img: &RgbaImage, map: &OccupancyGrid) -> RgbaImage {
    let mut out = img.clone();
    let cell_size = map.geometry().cell_size();

    for (x, y) in map.occupied_origins() {
        for sub_y in 0..cell_size {
            for sub_x in 0..cell_size {
                let px = (x + sub_x) as u32;
                let py = (y + sub_y) as u32;
                if let Some(pixel) = out.get_pixel_mut_checked(px, py) {
                    *pixel = blend_overlay(*pixel);
                }
            }
        }
    }

    out
}

/// Detect the background, count occupancy, and render the overlay
///
/// # Errors
///
/// Returns an error if the image contains no pixels or `cell_size` is
/// zero.
pub fn visualize_occupancy(img: &RgbaImage, cell_size: usize) -> Result<RgbaImage> {
    let background = dominant_color(img)?;
    let grid = CellGrid::new(img.width() as usize, img.height() as usize, cell_size)?;
    let map = occupancy(img, background, &grid);

    Ok(render_occupancy_overlay(img, &map))
}

// Linear blend of one channel: out = (base*(255-alpha) + overlay*alpha) / 255
const fn blend_channel(base: u8, overlay: u8) -> u8 {
    let alpha = OVERLAY_ALPHA as u32;
    ((base as u32 * (255 - alpha) + overlay as u32 * alpha) / 255) as u8
}

const fn blend_overlay(base: Rgba<u8>) -> Rgba<u8> {
    Rgba([
        blend_channel(base.0[0], OVERLAY_COLOR[0]),
        blend_channel(base.0[1], OVERLAY_COLOR[1]),
        blend_channel(base.0[2], OVERLAY_COLOR[2]),
        255,
    ])
}

/// Render the two-panel diagnostic plot for a fitted sweep
///
/// The top panel scatters mass against scale factor; the bottom panel
/// scatters the log-log points together with the fitted line and titles
/// itself with the numeric slope. Rendering is infallible and read-only.
pub fn render_diagnostics(
    samples: &[Sample],
    points: &[LogPoint],
    slope: f64,
    intercept: f64,
) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(PLOT_WIDTH, PLOT_PANEL_HEIGHT * 2, WHITE);

    let raw_panel = Panel::for_index(0);
    let log_panel = Panel::for_index(1);

    raw_panel.draw_frame(&mut canvas);
    log_panel.draw_frame(&mut canvas);

    let raw_points: Vec<(f64, f64)> = samples
        .iter()
        .map(|sample| (sample.factor, sample.mass as f64))
        .collect();
    raw_panel.scatter(&mut canvas, &raw_points);

    let log_points: Vec<(f64, f64)> = points.iter().map(|point| (point.x, point.y)).collect();

    // The fitted line spans the data's x range; widen the panel's y range
    // so its endpoints always land inside the frame
    if let Some(bounds) = Bounds::of(&log_points) {
        let line_start = (bounds.min_x, slope.mul_add(bounds.min_x, intercept));
        let line_end = (bounds.max_x, slope.mul_add(bounds.max_x, intercept));

        let mut framed = log_points.clone();
        framed.push(line_start);
        framed.push(line_end);

        if let Some(framed_bounds) = Bounds::of(&framed) {
            draw_segment(
                &mut canvas,
                framed_bounds.project(line_start, &log_panel),
                framed_bounds.project(line_end, &log_panel),
            );
            for point in &log_points {
                draw_dot(&mut canvas, framed_bounds.project(*point, &log_panel));
            }
        }
    }

    draw_text(
        &mut canvas,
        PLOT_MARGIN,
        PLOT_PANEL_HEIGHT + 3,
        &format!("slope={slope:.3}"),
    );

    canvas
}

/// Content rectangle of one stacked plot panel
struct Panel {
    left: u32,
    top: u32,
    width: u32,
    height: u32,
}

impl Panel {
    const fn for_index(index: u32) -> Self {
        Self {
            left: PLOT_MARGIN,
            top: index * PLOT_PANEL_HEIGHT + PLOT_MARGIN,
            width: PLOT_WIDTH - 2 * PLOT_MARGIN,
            height: PLOT_PANEL_HEIGHT - 2 * PLOT_MARGIN,
        }
    }

    fn draw_frame(&self, canvas: &mut RgbaImage) {
        for dx in 0..self.width {
            put_pixel(canvas, self.left + dx, self.top, FRAME_GRAY);
            put_pixel(canvas, self.left + dx, self.top + self.height - 1, FRAME_GRAY);
        }
        for dy in 0..self.height {
            put_pixel(canvas, self.left, self.top + dy, FRAME_GRAY);
            put_pixel(canvas, self.left + self.width - 1, self.top + dy, FRAME_GRAY);
        }
    }

    fn scatter(&self, canvas: &mut RgbaImage, data: &[(f64, f64)]) {
        if let Some(bounds) = Bounds::of(data) {
            for point in data {
                draw_dot(canvas, bounds.project(*point, self));
            }
        }
    }
}

fn draw_segment(canvas: &mut RgbaImage, from: (u32, u32), to: (u32, u32)) {
    let steps = from.0.abs_diff(to.0).max(from.1.abs_diff(to.1)).max(1);

    for i in 0..=steps {
        let t = f64::from(i) / f64::from(steps);
        let x = t.mul_add(f64::from(to.0) - f64::from(from.0), f64::from(from.0));
        let y = t.mul_add(f64::from(to.1) - f64::from(from.1), f64::from(from.1));
        put_pixel(canvas, x.round() as u32, y.round() as u32, BLACK);
    }
}

/// Data extent of a panel's point set
struct Bounds {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl Bounds {
    fn of(data: &[(f64, f64)]) -> Option<Self> {
        let first = data.first()?;
        let mut bounds = Self {
            min_x: first.0,
            max_x: first.0,
            min_y: first.1,
            max_y: first.1,
        };

        for &(x, y) in data {
            bounds.min_x = bounds.min_x.min(x);
            bounds.max_x = bounds.max_x.max(x);
            bounds.min_y = bounds.min_y.min(y);
            bounds.max_y = bounds.max_y.max(y);
        }

        Some(bounds)
    }

    /// Map a data point into panel pixel coordinates, y axis pointing up
    fn project(&self, point: (f64, f64), panel: &Panel) -> (u32, u32) {
        let px = panel.left + project_axis(point.0, self.min_x, self.max_x, panel.width);
        let py = panel.top + panel.height
            - 1
            - project_axis(point.1, self.min_y, self.max_y, panel.height);

        (px, py)
    }
}

// A degenerate axis (all values equal) centers its points in the panel
fn project_axis(value: f64, min: f64, max: f64, span: u32) -> u32 {
    if max > min {
        (((value - min) / (max - min)) * f64::from(span.saturating_sub(1))).round() as u32
    } else {
        span / 2
    }
}

fn draw_dot(canvas: &mut RgbaImage, center: (u32, u32)) {
    for dy in 0..3u32 {
        for dx in 0..3u32 {
            let x = (center.0 + dx).saturating_sub(1);
            let y = (center.1 + dy).saturating_sub(1);
            put_pixel(canvas, x, y, BLACK);
        }
    }
}

fn put_pixel(canvas: &mut RgbaImage, x: u32, y: u32, color: Rgba<u8>) {
    if let Some(pixel) = canvas.get_pixel_mut_checked(x, y) {
        *pixel = color;
    }
}

/// Render a string with the built-in 3x5 glyph set
///
/// Characters without a glyph advance the cursor without drawing.
fn draw_text(canvas: &mut RgbaImage, origin_x: u32, origin_y: u32, text: &str) {
    const SCALE: u32 = 2;
    let mut cursor = origin_x;

    for character in text.chars() {
        if let Some(rows) = glyph_rows(character) {
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..3u32 {
                    if bits & (0b100 >> col) != 0 {
                        for dy in 0..SCALE {
                            for dx in 0..SCALE {
                                put_pixel(
                                    canvas,
                                    cursor + col * SCALE + dx,
                                    origin_y + row as u32 * SCALE + dy,
                                    BLACK,
                                );
                            }
                        }
                    }
                }
            }
        }
        cursor += 4 * SCALE;
    }
}

// 3x5 glyphs, one row per byte, most significant of the low three bits on
// the left. Covers the slope title: digits, sign, separator, and "slope="
const fn glyph_rows(character: char) -> Option<[u8; 5]> {
    let rows = match character {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b011, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b010, 0b010, 0b010],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '=' => [0b000, 0b111, 0b000, 0b111, 0b000],
        's' => [0b111, 0b100, 0b111, 0b001, 0b111],
        'l' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'o' => [0b000, 0b111, 0b101, 0b101, 0b111],
        'p' => [0b111, 0b101, 0b111, 0b100, 0b100],
        'e' => [0b111, 0b100, 0b110, 0b100, 0b111],
        _ => return None,
    };

    Some(rows)
}
