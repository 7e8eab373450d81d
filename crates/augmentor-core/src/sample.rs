//! Sampling of concrete transform parameters from configured ranges.
//!
//! Every bound is symmetric, so draws come from `[-bound, +bound]`. A bound
//! of zero consumes no randomness and yields the neutral value, which keeps
//! the "disabled transform" guarantees independent of the generator state.
//!
//! # Scale sampling
//!
//! Scale factors are sampled with the magnitude decoupled from the
//! direction. Drawing a factor directly from `[1/max, max]` would favor
//! enlargement, because the enlarging half of that interval is numerically
//! wider than the shrinking half (and increasingly so as `max` grows).
//! Instead the magnitude `m` is drawn from `[1, max]` and a separate
//! Bernoulli draw decides whether the applied factor is `m` or `1/m`.

use rand::Rng;

use crate::config::AugmentRanges;

/// Concrete parameter values for one augmentation call.
///
/// Created fresh from [`AugmentRanges`] per call, consumed once by the
/// transform pipeline, then discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformParams {
    /// Rotation angle in degrees, signed.
    pub rotation: f64,
    /// X shear angle in degrees, signed. Displaces rows as a function of
    /// column position (see the shear stage for the matrix convention).
    pub shear_x: f64,
    /// Y shear angle in degrees, signed.
    pub shear_y: f64,
    /// Scale factor along the X axis (columns); <1 shrinks, >1 enlarges.
    pub scale_x: f64,
    /// Scale factor along the Y axis (rows).
    pub scale_y: f64,
    /// Translation along the X axis, in pixels (rightward).
    pub translate_x: u32,
    /// Translation along the Y axis, in pixels (downward).
    pub translate_y: u32,
    /// Mirror left-right.
    pub invert_x: bool,
    /// Mirror top-bottom.
    pub invert_y: bool,
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            rotation: 0.0,
            shear_x: 0.0,
            shear_y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            translate_x: 0,
            translate_y: 0,
            invert_x: false,
            invert_y: false,
        }
    }
}

impl TransformParams {
    /// Neutral parameters that leave a raster unchanged (up to trimming).
    pub fn identity() -> Self {
        Self::default()
    }

    /// Draw one set of parameters from the configured ranges.
    ///
    /// The ranges must have passed [`AugmentRanges::validate`] first; a
    /// probability outside `[0, 1]` panics inside the generator.
    ///
    /// Draws happen in a fixed order (scale X, scale Y, rotation, shear X,
    /// shear Y, translation X, translation Y, inversion X, inversion Y), so
    /// a seeded generator reproduces the same parameters exactly.
    pub fn sample<R: Rng + ?Sized>(ranges: &AugmentRanges, rng: &mut R) -> Self {
        let scale_x = sample_scale(ranges.max_scale.x(), ranges.scale_up_prob.x(), rng);
        let scale_y = if ranges.joint_scale {
            scale_x
        } else {
            sample_scale(ranges.max_scale.y(), ranges.scale_up_prob.y(), rng)
        };

        Self {
            rotation: sample_symmetric(ranges.max_rotation, rng),
            shear_x: sample_symmetric(ranges.max_shear.x(), rng),
            shear_y: sample_symmetric(ranges.max_shear.y(), rng),
            scale_x,
            scale_y,
            translate_x: sample_offset(ranges.max_translation.x(), rng),
            translate_y: sample_offset(ranges.max_translation.y(), rng),
            invert_x: rng.random_bool(ranges.inversion_prob.x()),
            invert_y: rng.random_bool(ranges.inversion_prob.y()),
        }
    }
}

/// Uniform draw from `[-bound, +bound]`; exactly 0 when the bound is 0.
fn sample_symmetric<R: Rng + ?Sized>(bound: f64, rng: &mut R) -> f64 {
    if bound > 0.0 {
        rng.random_range(-bound..=bound)
    } else {
        0.0
    }
}

/// Uniform integer draw from `[0, bound]`; exactly 0 when the bound is 0.
fn sample_offset<R: Rng + ?Sized>(bound: u32, rng: &mut R) -> u32 {
    if bound > 0 {
        rng.random_range(0..=bound)
    } else {
        0
    }
}

/// Magnitude/direction-decoupled scale draw.
///
/// `shrink_prob` is the configured `ScaleUpProb` value; as in the original
/// pipeline it is the probability that the factor shrinks (`1/m`).
fn sample_scale<R: Rng + ?Sized>(ceiling: f64, shrink_prob: f64, rng: &mut R) -> f64 {
    if ceiling <= 1.0 {
        return 1.0;
    }
    let magnitude = rng.random_range(1.0..=ceiling);
    if rng.random_bool(shrink_prob) {
        1.0 / magnitude
    } else {
        magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AxisSpec;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_no_op_ranges_yield_identity() {
        let ranges = AugmentRanges::default();
        let mut rng = StdRng::seed_from_u64(7);

        // Every bound is 0 (or 1 for scale), so no randomness is consumed
        // and the parameters are the exact neutral values.
        for _ in 0..10 {
            let params = TransformParams::sample(&ranges, &mut rng);
            assert_eq!(params, TransformParams::identity());
        }
    }

    #[test]
    fn test_same_seed_same_params() {
        let ranges = AugmentRanges {
            max_rotation: 30.0,
            max_shear: AxisSpec::PerAxis(vec![5.0, 10.0]),
            max_translation: AxisSpec::Uniform(20),
            max_scale: AxisSpec::Uniform(3.0),
            inversion_prob: AxisSpec::Uniform(0.5),
            ..Default::default()
        };

        let a = TransformParams::sample(&ranges, &mut StdRng::seed_from_u64(42));
        let b = TransformParams::sample(&ranges, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_draws_stay_within_bounds() {
        let ranges = AugmentRanges {
            max_rotation: 15.0,
            max_shear: AxisSpec::PerAxis(vec![4.0, 8.0]),
            max_translation: AxisSpec::PerAxis(vec![3, 9]),
            max_scale: AxisSpec::Uniform(2.0),
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..500 {
            let p = TransformParams::sample(&ranges, &mut rng);
            assert!(p.rotation.abs() <= 15.0);
            assert!(p.shear_x.abs() <= 4.0);
            assert!(p.shear_y.abs() <= 8.0);
            assert!(p.translate_x <= 3);
            assert!(p.translate_y <= 9);
            assert!(p.scale_x >= 0.5 && p.scale_x <= 2.0);
            assert!(!p.invert_x && !p.invert_y);
        }
    }

    #[test]
    fn test_scale_ceiling_at_or_below_one_disables_scaling() {
        let mut rng = StdRng::seed_from_u64(3);
        for ceiling in [0.25, 1.0] {
            let ranges = AugmentRanges {
                max_scale: AxisSpec::Uniform(ceiling),
                ..Default::default()
            };
            for _ in 0..50 {
                let p = TransformParams::sample(&ranges, &mut rng);
                assert_eq!(p.scale_x, 1.0);
                assert_eq!(p.scale_y, 1.0);
            }
        }
    }

    #[test]
    fn test_shrink_prob_one_always_shrinks() {
        let ranges = AugmentRanges {
            max_scale: AxisSpec::Uniform(3.0),
            scale_up_prob: AxisSpec::Uniform(1.0),
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..200 {
            let p = TransformParams::sample(&ranges, &mut rng);
            assert!(p.scale_x <= 1.0 && p.scale_x >= 1.0 / 3.0);
            assert!(p.scale_y <= 1.0);
        }
    }

    #[test]
    fn test_joint_scale_forces_equal_factors() {
        let ranges = AugmentRanges {
            max_scale: AxisSpec::PerAxis(vec![2.0, 4.0]),
            joint_scale: true,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..200 {
            let p = TransformParams::sample(&ranges, &mut rng);
            assert_eq!(p.scale_x, p.scale_y);
            // The Y ceiling is ignored under joint scaling.
            assert!(p.scale_y <= 2.0);
        }
    }

    #[test]
    fn test_scale_direction_symmetry() {
        // With a shrink probability of 0.5, enlargement and shrinking are
        // equiprobable regardless of the ceiling. Sampling the factor
        // uniformly from [1/max, max] instead would push this fraction
        // toward 1 as the ceiling grows.
        let ranges = AugmentRanges {
            max_scale: AxisSpec::Uniform(8.0),
            scale_up_prob: AxisSpec::Uniform(0.5),
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(99);

        let n = 4000;
        let enlarged = (0..n)
            .filter(|_| TransformParams::sample(&ranges, &mut rng).scale_x > 1.0)
            .count();
        let fraction = enlarged as f64 / n as f64;
        assert!(
            (fraction - 0.5).abs() < 0.03,
            "enlarge fraction was {fraction}"
        );
    }

    #[test]
    fn test_zero_translation_is_deterministic() {
        let ranges = AugmentRanges {
            max_translation: AxisSpec::Uniform(0),
            max_rotation: 10.0,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(2);

        for _ in 0..100 {
            let p = TransformParams::sample(&ranges, &mut rng);
            assert_eq!(p.translate_x, 0);
            assert_eq!(p.translate_y, 0);
        }
    }

    #[test]
    fn test_inversion_prob_extremes() {
        let mut rng = StdRng::seed_from_u64(4);

        let always = AugmentRanges {
            inversion_prob: AxisSpec::Uniform(1.0),
            ..Default::default()
        };
        let never = AugmentRanges {
            inversion_prob: AxisSpec::Uniform(0.0),
            ..Default::default()
        };

        for _ in 0..50 {
            let p = TransformParams::sample(&always, &mut rng);
            assert!(p.invert_x && p.invert_y);

            let p = TransformParams::sample(&never, &mut rng);
            assert!(!p.invert_x && !p.invert_y);
        }
    }
}
