//! Shear stage with cross-mapped angle terms.
//!
//! The shear matrix over (row, col) coordinates is:
//! ```text
//! | 1          tan(x_angle) |
//! | tan(y_angle)         1  |
//! ```
//!
//! so the X-shear angle displaces rows as a function of column position and
//! the Y-shear angle displaces columns as a function of row position. The
//! angle-to-term cross-mapping is the established convention of this
//! pipeline and is kept as-is.
//!
//! Like rotation, the stage uses inverse mapping onto an expanded canvas
//! that covers the full sheared parallelogram, with background fill for
//! exposed pixels.

use crate::raster::Raster;
use crate::transform::{sample_bilinear, TransformError};

/// Shear a raster by the given per-axis angles in degrees.
///
/// Output dimensions grow to cover the sheared parallelogram unless both
/// angles are zero.
///
/// # Errors
///
/// Returns [`TransformError::SingularShear`] when
/// `tan(x_angle) * tan(y_angle)` is 1 and the transform has no inverse.
pub fn shear(
    raster: &Raster,
    x_angle_degrees: f64,
    y_angle_degrees: f64,
    background: u8,
) -> Result<Raster, TransformError> {
    let tx = x_angle_degrees.to_radians().tan();
    let ty = y_angle_degrees.to_radians().tan();

    // Fast path: no shear requested
    if (tx.abs() < 1e-9 && ty.abs() < 1e-9) || raster.is_empty() {
        return Ok(raster.clone());
    }

    let det = 1.0 - tx * ty;
    if det.abs() < 1e-9 {
        return Err(TransformError::SingularShear);
    }

    let rows = raster.rows as f64;
    let cols = raster.cols as f64;

    // Forward map of the four corners: r' = r + tx*c, c' = ty*r + c.
    let r_images = [0.0, tx * cols, rows, rows + tx * cols];
    let c_images = [0.0, ty * rows, cols, cols + ty * rows];
    let min_r = r_images.iter().fold(f64::INFINITY, |a, &b| a.min(b));
    let max_r = r_images.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    let min_c = c_images.iter().fold(f64::INFINITY, |a, &b| a.min(b));
    let max_c = c_images.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));

    let out_rows = ((max_r - min_r).ceil() as u32).max(1);
    let out_cols = ((max_c - min_c).ceil() as u32).max(1);

    let mut output = Vec::with_capacity((out_rows * out_cols) as usize);

    for out_r in 0..out_rows {
        for out_c in 0..out_cols {
            // Shift back into the forward map's image, then invert the matrix.
            let wr = out_r as f64 + min_r;
            let wc = out_c as f64 + min_c;
            let src_r = (wr - tx * wc) / det;
            let src_c = (wc - ty * wr) / det;

            output.push(sample_bilinear(raster, src_c, src_r, background));
        }
    }

    Ok(Raster::new(out_rows, out_cols, output))
}
