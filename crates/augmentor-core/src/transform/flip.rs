//! Flip stage: axis inversion of the trimmed raster.

use crate::raster::Raster;

/// Mirror the raster left-right (X-axis inversion).
pub fn flip_horizontal(raster: &Raster) -> Raster {
    let mut pixels = Vec::with_capacity(raster.pixels.len());
    for r in 0..raster.rows {
        pixels.extend(raster.row(r).iter().rev());
    }
    Raster::new(raster.rows, raster.cols, pixels)
}

/// Mirror the raster top-bottom (Y-axis inversion).
pub fn flip_vertical(raster: &Raster) -> Raster {
    let mut pixels = Vec::with_capacity(raster.pixels.len());
    for r in (0..raster.rows).rev() {
        pixels.extend_from_slice(raster.row(r));
    }
    Raster::new(raster.rows, raster.cols, pixels)
}
