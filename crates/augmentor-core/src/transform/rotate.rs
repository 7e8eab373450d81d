//! Rotate stage: center-pivot rotation with an expanded canvas.
//!
//! The rotation uses inverse mapping: for each pixel in the output raster,
//! we calculate which source location lands on it and interpolate the
//! neighboring values. Pixels whose source falls outside the input are
//! filled with the background color.
//!
//! For rotation by angle θ, the inverse transform is:
//! ```text
//! src_x = (dst_x - cx) * cos(-θ) - (dst_y - cy) * sin(-θ) + src_cx
//! src_y = (dst_x - cx) * sin(-θ) + (dst_y - cy) * cos(-θ) + src_cy
//! ```

use crate::raster::Raster;
use crate::transform::sample_bilinear;

/// Compute the dimensions of the bounding box for a rotated raster.
///
/// When a raster is rotated, the corners extend beyond the original bounds.
/// This function calculates the minimum bounding box that contains the
/// entire rotated content.
///
/// # Arguments
///
/// * `rows` - Original raster height
/// * `cols` - Original raster width
/// * `angle_degrees` - Rotation angle in degrees (positive = counter-clockwise)
///
/// # Returns
///
/// Tuple of (new_rows, new_cols) for the rotated bounding box.
pub fn rotated_bounds(rows: u32, cols: u32, angle_degrees: f64) -> (u32, u32) {
    // Normalize angle to handle 360, 720, etc.
    let angle_normalized = angle_degrees % 360.0;

    // Fast path: no rotation needed (including near-zero and multiples of 360)
    if angle_normalized.abs() < 0.001 || (360.0 - angle_normalized.abs()).abs() < 0.001 {
        return (rows, cols);
    }

    // Fast path: exact 90/270 degree rotations (swap dimensions)
    let abs_angle = angle_normalized.abs();
    if (abs_angle - 90.0).abs() < 0.001 || (abs_angle - 270.0).abs() < 0.001 {
        return (cols, rows);
    }

    // Fast path: exact 180 degree rotation (same dimensions)
    if (abs_angle - 180.0).abs() < 0.001 {
        return (rows, cols);
    }

    let angle_rad = angle_degrees.to_radians();
    let cos = angle_rad.cos().abs();
    let sin = angle_rad.sin().abs();

    let w = cols as f64;
    let h = rows as f64;

    // The bounding box of a rotated rectangle is:
    // new_w = |w*cos| + |h*sin|
    // new_h = |w*sin| + |h*cos|
    let new_cols = (w * cos + h * sin).round() as u32;
    let new_rows = (w * sin + h * cos).round() as u32;

    (new_rows.max(1), new_cols.max(1))
}

/// Rotate a raster around its geometric center.
///
/// The output canvas is expanded to fit the entire rotated content (no
/// clipping); newly exposed pixels take the background color. Dimensions
/// generally grow unless the angle is a multiple of 90 degrees.
pub fn rotate(raster: &Raster, angle_degrees: f64, background: u8) -> Raster {
    // Fast path: no rotation needed
    if angle_degrees.abs() < 0.001 || raster.is_empty() {
        return raster.clone();
    }

    let (src_h, src_w) = (raster.rows as f64, raster.cols as f64);
    let (dst_rows, dst_cols) = rotated_bounds(raster.rows, raster.cols, angle_degrees);

    // Negate angle for correct visual rotation direction
    // (positive angle should rotate counter-clockwise visually)
    let angle_rad = -angle_degrees.to_radians();
    let cos = angle_rad.cos();
    let sin = angle_rad.sin();

    // Center of source and destination rasters
    let src_cx = src_w / 2.0;
    let src_cy = src_h / 2.0;
    let dst_cx = dst_cols as f64 / 2.0;
    let dst_cy = dst_rows as f64 / 2.0;

    let mut output = Vec::with_capacity((dst_rows * dst_cols) as usize);

    for dst_y in 0..dst_rows {
        for dst_x in 0..dst_cols {
            // Translate destination point to origin at center
            let dx = dst_x as f64 - dst_cx;
            let dy = dst_y as f64 - dst_cy;

            // Apply inverse rotation to find source coordinates
            let src_x = dx * cos - dy * sin + src_cx;
            let src_y = dx * sin + dy * cos + src_cy;

            output.push(sample_bilinear(raster, src_x, src_y, background));
        }
    }

    Raster::new(dst_rows, dst_cols, output)
}
