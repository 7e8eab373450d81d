//! Translate stage: shift content, background-fill the vacated space.
//!
//! Translation is a shift, not a resize: output dimensions always equal the
//! input's, and content pushed past the bottom or right edge is discarded.

use crate::raster::Raster;

/// Shift the raster right by `dx` and down by `dy` pixels.
pub fn translate(raster: &Raster, dx: u32, dy: u32, background: u8) -> Raster {
    // Fast path: no shift requested
    if (dx == 0 && dy == 0) || raster.is_empty() {
        return raster.clone();
    }

    let mut out = Raster::filled(raster.rows, raster.cols, background);
    if dy >= raster.rows || dx >= raster.cols {
        return out;
    }

    for r in dy..raster.rows {
        let src_start = ((r - dy) * raster.cols) as usize;
        let dst_start = (r * raster.cols + dx) as usize;
        let len = (raster.cols - dx) as usize;
        out.pixels[dst_start..dst_start + len]
            .copy_from_slice(&raster.pixels[src_start..src_start + len]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_raster() -> Raster {
        Raster::new(3, 3, vec![1, 2, 3, 4, 5, 6, 7, 8, 9])
    }

    #[test]
    fn test_zero_shift_is_clone() {
        let raster = test_raster();
        assert_eq!(translate(&raster, 0, 0, 255), raster);
    }

    #[test]
    fn test_shift_right_and_down() {
        let result = translate(&test_raster(), 1, 1, 0);

        assert_eq!(result.pixels, vec![0, 0, 0, 0, 1, 2, 0, 4, 5]);
    }

    #[test]
    fn test_shift_fills_with_background() {
        let result = translate(&test_raster(), 2, 0, 255);

        assert_eq!(result.pixels, vec![255, 255, 1, 255, 255, 4, 255, 255, 7]);
    }

    #[test]
    fn test_dimensions_unchanged() {
        let raster = Raster::filled(5, 9, 1);
        let result = translate(&raster, 3, 2, 255);

        assert_eq!(result.rows, 5);
        assert_eq!(result.cols, 9);
    }

    #[test]
    fn test_shift_past_edge_is_all_background() {
        let result = translate(&test_raster(), 3, 0, 255);
        assert!(result.pixels.iter().all(|&p| p == 255));

        let result = translate(&test_raster(), 0, 7, 255);
        assert!(result.pixels.iter().all(|&p| p == 255));
    }
}
