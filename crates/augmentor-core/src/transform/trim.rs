//! Background trim stage.
//!
//! Rotation and shear pad the canvas with background-colored pixels; this
//! stage removes every row and every column that is uniformly the
//! background value, so the later flip and translate stages act on content
//! only. Remaining rows and columns keep their relative order.

use crate::raster::Raster;
use crate::transform::TransformError;

/// Remove every all-background row and column from the raster.
///
/// After a successful trim no row or column of the result is uniformly the
/// background value, which makes trimming idempotent.
///
/// # Errors
///
/// Returns [`TransformError::DegenerateResult`] when the raster is entirely
/// background and trimming would leave nothing; a silent zero-size raster
/// would only surface as a confusing failure further down the training
/// pipeline.
pub fn trim(raster: &Raster, background: u8) -> Result<Raster, TransformError> {
    let keep_rows: Vec<u32> = (0..raster.rows)
        .filter(|&r| raster.row(r).iter().any(|&p| p != background))
        .collect();
    let keep_cols: Vec<u32> = (0..raster.cols)
        .filter(|&c| (0..raster.rows).any(|r| raster.get(r, c) != background))
        .collect();

    if keep_rows.is_empty() || keep_cols.is_empty() {
        return Err(TransformError::DegenerateResult);
    }

    // Fast path: nothing to remove
    if keep_rows.len() == raster.rows as usize && keep_cols.len() == raster.cols as usize {
        return Ok(raster.clone());
    }

    let mut pixels = Vec::with_capacity(keep_rows.len() * keep_cols.len());
    for &r in &keep_rows {
        for &c in &keep_cols {
            pixels.push(raster.get(r, c));
        }
    }

    Ok(Raster::new(
        keep_rows.len() as u32,
        keep_cols.len() as u32,
        pixels,
    ))
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn raster_strategy() -> impl Strategy<Value = Raster> {
        (1u32..=24, 1u32..=24)
            .prop_flat_map(|(rows, cols)| {
                (
                    Just(rows),
                    Just(cols),
                    proptest::collection::vec(0u8..=3, (rows * cols) as usize),
                )
            })
            .prop_map(|(rows, cols, pixels)| Raster::new(rows, cols, pixels))
    }

    proptest! {
        /// Property: Trimming twice equals trimming once.
        #[test]
        fn prop_trim_idempotent(raster in raster_strategy()) {
            // Background 3 appears often with so few distinct values, which
            // exercises both removal and the degenerate case.
            if let Ok(once) = trim(&raster, 3) {
                let twice = trim(&once, 3).unwrap();
                prop_assert_eq!(once, twice);
            }
        }

        /// Property: No all-background row or column survives a trim.
        #[test]
        fn prop_no_background_lines_remain(raster in raster_strategy()) {
            if let Ok(trimmed) = trim(&raster, 3) {
                for r in 0..trimmed.rows {
                    prop_assert!(trimmed.row(r).iter().any(|&p| p != 3));
                }
                for c in 0..trimmed.cols {
                    prop_assert!((0..trimmed.rows).any(|r| trimmed.get(r, c) != 3));
                }
            }
        }

        /// Property: Trimming never enlarges the raster.
        #[test]
        fn prop_trim_never_grows(raster in raster_strategy()) {
            if let Ok(trimmed) = trim(&raster, 3) {
                prop_assert!(trimmed.rows <= raster.rows);
                prop_assert!(trimmed.cols <= raster.cols);
            }
        }
    }
}
