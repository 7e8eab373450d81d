//! Geometric transform pipeline.
//!
//! One augmentation call runs six stages in a fixed order:
//!
//! 1. Zoom (resample, then refit to the original extents)
//! 2. Rotate (center pivot, expanded canvas)
//! 3. Shear
//! 4. Background trim
//! 5. Flip
//! 6. Translate
//!
//! The order matters: rotation pivots on the geometric center, so it must
//! run before translation skews the content off-center, and the trim must
//! run before the flips so that mirroring acts on content rather than on
//! rotation/shear padding. The zoom stage re-fits its output to the input
//! extents, so the trim only ever removes rotation- and shear-induced
//! padding, never the zoom stage's deliberate padding.
//!
//! # Coordinate System
//!
//! - Rasters are indexed (row, col); the X axis runs along columns, Y along
//!   rows. Origin is the top-left corner.
//! - Angles are in degrees; positive rotation is counter-clockwise.

mod flip;
mod rotate;
mod shear;
mod translate;
mod trim;
mod zoom;

pub use flip::{flip_horizontal, flip_vertical};
pub use rotate::{rotate, rotated_bounds};
pub use shear::shear;
pub use translate::translate;
pub use trim::trim;
pub use zoom::zoom;

use thiserror::Error;

use crate::raster::{FilterType, Raster};
use crate::sample::TransformParams;

/// Error types for the transform pipeline.
#[derive(Debug, Error, PartialEq)]
pub enum TransformError {
    /// The raster's pixel buffer does not match its stated dimensions.
    #[error("raster buffer does not match its dimensions")]
    MalformedRaster,

    /// The sampled shear angles produce a singular transform
    /// (tan(x) * tan(y) == 1), which has no inverse mapping.
    #[error("shear angles produce a singular transform")]
    SingularShear,

    /// Trimming removed everything: the raster was entirely background.
    #[error("transformed raster is entirely background")]
    DegenerateResult,
}

/// Run the full six-stage pipeline with the given parameters.
///
/// Pure over its inputs: all randomness was consumed when `params` was
/// sampled. The output dimensions vary with the parameters by construction
/// (trimming shrinks, rotation and shear grow).
///
/// # Errors
///
/// [`TransformError::DegenerateResult`] if the raster contains nothing but
/// background after the geometric stages, [`TransformError::SingularShear`]
/// for a degenerate shear pair.
pub fn apply(
    raster: &Raster,
    params: &TransformParams,
    background: u8,
) -> Result<Raster, TransformError> {
    let zoomed = zoom(
        raster,
        params.scale_x,
        params.scale_y,
        background,
        FilterType::Bilinear,
    )?;
    let rotated = rotate(&zoomed, params.rotation, background);
    let sheared = shear(&rotated, params.shear_x, params.shear_y, background)?;
    let mut out = trim(&sheared, background)?;

    if params.invert_x {
        out = flip_horizontal(&out);
    }
    if params.invert_y {
        out = flip_vertical(&out);
    }

    Ok(translate(&out, params.translate_x, params.translate_y, background))
}

/// Sample a raster at fractional (col, row) coordinates using bilinear
/// interpolation, returning `background` outside the raster.
///
/// Shared by the rotate and shear stages, which both use inverse mapping:
/// for each output pixel they compute the source location that lands there
/// and interpolate the four neighbors.
pub(crate) fn sample_bilinear(raster: &Raster, x: f64, y: f64, background: u8) -> u8 {
    let (w, h) = (raster.cols as i64, raster.rows as i64);

    if x < 0.0 || x >= (w - 1) as f64 || y < 0.0 || y >= (h - 1) as f64 {
        return background;
    }

    let x0 = x.floor() as u32;
    let y0 = y.floor() as u32;
    let x1 = x0 + 1;
    let y1 = y0 + 1;

    // Fractional distances
    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let p00 = raster.get(y0, x0) as f64;
    let p10 = raster.get(y0, x1) as f64;
    let p01 = raster.get(y1, x0) as f64;
    let p11 = raster.get(y1, x1) as f64;

    let v = p00 * (1.0 - fx) * (1.0 - fy)
        + p10 * fx * (1.0 - fy)
        + p01 * (1.0 - fx) * fy
        + p11 * fx * fy;
    v.clamp(0.0, 255.0).round() as u8
}
