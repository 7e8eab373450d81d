//! Zoom stage: per-axis resampling re-fitted to the original extents.
//!
//! Resampling changes the raster's dimensions, so the result is normalized
//! back to the input's (rows, cols): a shrunken axis is centered on a
//! background-filled canvas, an enlarged axis is center-cropped. Both use
//! `floor(difference / 2)` as the leading offset, which keeps the image
//! center as close to the canvas center as integer arithmetic allows.
//!
//! The stage guarantees that its output has exactly the input's dimensions
//! regardless of the scale factors, so the later background trim cannot
//! confuse deliberate zoom padding with rotation/shear padding.

use crate::raster::{FilterType, Raster};
use crate::transform::TransformError;

/// Resample the raster by (scale_x, scale_y) and refit to its original
/// dimensions.
///
/// Scale factors below 1 shrink (zoom out, content centered in background
/// padding), factors above 1 enlarge (zoom in, margins cropped away).
///
/// # Errors
///
/// Returns [`TransformError::MalformedRaster`] if the pixel buffer does not
/// match the raster dimensions.
pub fn zoom(
    raster: &Raster,
    scale_x: f64,
    scale_y: f64,
    background: u8,
    filter: FilterType,
) -> Result<Raster, TransformError> {
    // Fast path: no scaling requested
    if raster.is_empty() || (scale_x == 1.0 && scale_y == 1.0) {
        return Ok(raster.clone());
    }

    let target_rows = ((raster.rows as f64 * scale_y).round() as u32).max(1);
    let target_cols = ((raster.cols as f64 * scale_x).round() as u32).max(1);

    let img = raster
        .to_gray_image()
        .ok_or(TransformError::MalformedRaster)?;
    let resized = image::imageops::resize(&img, target_cols, target_rows, filter.to_image_filter());
    let zoomed = Raster::from_gray_image(resized);

    Ok(refit(&zoomed, raster.rows, raster.cols, background))
}

/// Center the zoomed raster on (or crop it to) a rows x cols canvas.
fn refit(zoomed: &Raster, rows: u32, cols: u32, background: u8) -> Raster {
    if zoomed.rows == rows && zoomed.cols == cols {
        return zoomed.clone();
    }

    let (src_r0, dst_r0, copy_rows) = fit_axis(zoomed.rows, rows);
    let (src_c0, dst_c0, copy_cols) = fit_axis(zoomed.cols, cols);

    let mut out = Raster::filled(rows, cols, background);
    for r in 0..copy_rows {
        let src_start = ((src_r0 + r) * zoomed.cols + src_c0) as usize;
        let dst_start = ((dst_r0 + r) * cols + dst_c0) as usize;
        out.pixels[dst_start..dst_start + copy_cols as usize]
            .copy_from_slice(&zoomed.pixels[src_start..src_start + copy_cols as usize]);
    }
    out
}

/// Leading offsets for one axis: (source start, destination start, length).
fn fit_axis(zoomed_len: u32, orig_len: u32) -> (u32, u32, u32) {
    if zoomed_len >= orig_len {
        // Enlarged: crop the center, discarding floor(diff / 2) leading pixels.
        ((zoomed_len - orig_len) / 2, 0, orig_len)
    } else {
        // Shrunken: place centered with a floor(diff / 2) leading offset.
        (0, (orig_len - zoomed_len) / 2, zoomed_len)
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
