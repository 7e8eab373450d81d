//! Augmentor Core - stochastic geometric augmentation engine
//!
//! This crate produces randomized geometric variants of grayscale training
//! images for dataset augmentation: given a raster and a set of bounded
//! randomization ranges (rotation, shear, anisotropic scale, translation,
//! axis inversion), one call samples concrete transform parameters and runs
//! them through a fixed zoom -> rotate -> shear -> trim -> flip -> translate
//! pipeline.
//!
//! Decoding, encoding, and file traversal are the surrounding pipeline's
//! responsibility; this crate operates purely on in-memory rasters.
//!
//! # Reproducibility
//!
//! All randomness comes from the caller-owned generator passed to
//! [`augment`], so a seeded generator reproduces a variant exactly and
//! concurrent callers never contend over shared generator state.

pub mod config;
pub mod raster;
pub mod sample;
pub mod transform;

use rand::Rng;
use thiserror::Error;

pub use config::{AugmentRanges, AxisSpec, ConfigError};
pub use raster::{FilterType, Raster};
pub use sample::TransformParams;
pub use transform::{apply, trim, TransformError};

/// Background intensity used by the surrounding pipeline's histology scans
/// (white slide background).
pub const DEFAULT_BACKGROUND: u8 = 255;

/// Error types for a full augmentation call.
#[derive(Debug, Error, PartialEq)]
pub enum AugmentError {
    /// The supplied ranges violate the configuration contract.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A pipeline stage failed.
    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// Produce one stochastically transformed variant of a raster.
///
/// Validates the ranges, samples one set of transform parameters from the
/// caller-owned generator, and runs the transform pipeline. The output
/// dimensions vary with the sampled parameters by construction.
///
/// # Errors
///
/// [`AugmentError::Config`] if any bound or probability is outside its
/// domain (nothing is sampled in that case), [`AugmentError::Transform`]
/// if the transformed raster degenerates to pure background.
///
/// # Example
///
/// ```ignore
/// use augmentor_core::{augment, AugmentRanges, Raster, DEFAULT_BACKGROUND};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let raster = Raster::filled(100, 100, 0);
/// let ranges: AugmentRanges = serde_json::from_str(r#"{"MaxRotation": 45.0}"#)?;
/// let mut rng = StdRng::seed_from_u64(1);
/// let variant = augment(&raster, &ranges, DEFAULT_BACKGROUND, &mut rng)?;
/// ```
pub fn augment<R: Rng + ?Sized>(
    raster: &Raster,
    ranges: &AugmentRanges,
    background: u8,
    rng: &mut R,
) -> Result<Raster, AugmentError> {
    ranges.validate()?;
    let params = TransformParams::sample(ranges, rng);
    Ok(transform::apply(raster, &params, background)?)
}
