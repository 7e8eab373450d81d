//! Caller-supplied randomization ranges for one augmentation call.
//!
//! The ranges arrive as a JSON object with PascalCase keys (`MaxRotation`,
//! `MaxShear`, ...) produced by the surrounding pipeline's argument parsing.
//! Every per-axis field accepts either a single value, which applies to both
//! axes, or a two-value list setting X and Y independently.
//!
//! All bounds are symmetric: a `MaxRotation` of 45 permits rotations between
//! 45 degrees clockwise and 45 degrees counterclockwise.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for range validation.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// The rotation bound is negative.
    #[error("MaxRotation must be non-negative, got {0}")]
    NegativeRotation(f64),

    /// A shear bound is outside [0, 90) degrees.
    #[error("MaxShear must be in [0, 90) degrees, got {0}")]
    ShearOutOfRange(f64),

    /// A scale ceiling is zero or negative.
    #[error("MaxScale must be positive, got {0}")]
    NonPositiveScale(f64),

    /// A probability is outside [0, 1].
    #[error("{field} must be a probability in [0, 1], got {value}")]
    InvalidProbability { field: &'static str, value: f64 },

    /// A per-axis list has the wrong number of entries.
    #[error("{field} must hold one or two axis values, got {len}")]
    InvalidAxisCount { field: &'static str, len: usize },
}

/// A per-axis value that broadcasts a single entry to both axes.
///
/// Deserializes from either a bare value (`2.0`) or a list (`[2.0]` or
/// `[2.0, 3.0]`). A one-entry list behaves exactly like a bare value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisSpec<T> {
    /// One value applied to both axes.
    Uniform(T),
    /// Explicit per-axis values; a single entry broadcasts to both axes.
    PerAxis(Vec<T>),
}

impl<T: Copy + Default> AxisSpec<T> {
    /// The X-axis value.
    pub fn x(&self) -> T {
        match self {
            AxisSpec::Uniform(v) => *v,
            AxisSpec::PerAxis(v) => v.first().copied().unwrap_or_default(),
        }
    }

    /// The Y-axis value (falls back to the X value when broadcasting).
    pub fn y(&self) -> T {
        match self {
            AxisSpec::Uniform(v) => *v,
            AxisSpec::PerAxis(v) => v.last().copied().unwrap_or_default(),
        }
    }

    /// Number of explicit entries; used by validation.
    fn arity(&self) -> usize {
        match self {
            AxisSpec::Uniform(_) => 1,
            AxisSpec::PerAxis(v) => v.len(),
        }
    }
}

/// Bounded randomization ranges for one augmentation call.
///
/// Missing keys fall back to the no-op defaults, so a sparse configuration
/// object enables only the transforms it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AugmentRanges {
    /// Maximum rotation in degrees, applied symmetrically as +/- the bound.
    pub max_rotation: f64,
    /// Maximum shear per axis, in degrees, applied symmetrically.
    pub max_shear: AxisSpec<f64>,
    /// Maximum translation per axis, in pixels.
    pub max_translation: AxisSpec<u32>,
    /// Scale-factor ceiling per axis. Values <= 1 disable scaling for the axis.
    pub max_scale: AxisSpec<f64>,
    /// Probability that a sampled scale magnitude is applied as a shrink
    /// (the factor becomes 1/m rather than m).
    pub scale_up_prob: AxisSpec<f64>,
    /// Force the Y scale factor to equal the X scale factor.
    pub joint_scale: bool,
    /// Probability of mirroring each axis.
    pub inversion_prob: AxisSpec<f64>,
}

impl Default for AugmentRanges {
    fn default() -> Self {
        Self {
            max_rotation: 0.0,
            max_shear: AxisSpec::Uniform(0.0),
            max_translation: AxisSpec::Uniform(0),
            max_scale: AxisSpec::Uniform(1.0),
            scale_up_prob: AxisSpec::Uniform(0.5),
            joint_scale: false,
            inversion_prob: AxisSpec::Uniform(0.0),
        }
    }
}

impl AugmentRanges {
    /// Create ranges with the no-op defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check every bound and probability before any sampling happens.
    ///
    /// A failure here means the caller broke the configuration contract;
    /// nothing is sampled and no stage runs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_arity("MaxShear", self.max_shear.arity())?;
        check_arity("MaxTranslation", self.max_translation.arity())?;
        check_arity("MaxScale", self.max_scale.arity())?;
        check_arity("ScaleUpProb", self.scale_up_prob.arity())?;
        check_arity("InversionProb", self.inversion_prob.arity())?;

        if self.max_rotation < 0.0 {
            return Err(ConfigError::NegativeRotation(self.max_rotation));
        }
        for shear in [self.max_shear.x(), self.max_shear.y()] {
            if !(0.0..90.0).contains(&shear) {
                return Err(ConfigError::ShearOutOfRange(shear));
            }
        }
        for scale in [self.max_scale.x(), self.max_scale.y()] {
            if scale <= 0.0 {
                return Err(ConfigError::NonPositiveScale(scale));
            }
        }
        check_probability("ScaleUpProb", self.scale_up_prob.x())?;
        check_probability("ScaleUpProb", self.scale_up_prob.y())?;
        check_probability("InversionProb", self.inversion_prob.x())?;
        check_probability("InversionProb", self.inversion_prob.y())?;

        Ok(())
    }
}

fn check_arity(field: &'static str, len: usize) -> Result<(), ConfigError> {
    if len == 0 || len > 2 {
        return Err(ConfigError::InvalidAxisCount { field, len });
    }
    Ok(())
}

fn check_probability(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::InvalidProbability { field, value });
    }
    Ok(())
}
