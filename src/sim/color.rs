//! Ball colors and the random-walk color generator

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::COLOR_DRIFT;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from unbounded channel values, clamping each to [0, 255]
    pub fn clamped(r: i32, g: i32, b: i32) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }
}

#[inline]
fn clamp_channel(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

/// Pick the color for a new ball.
///
/// With `smooth` and a predecessor, each channel drifts by a random offset in
/// `[-COLOR_DRIFT, COLOR_DRIFT]` from the predecessor's. Otherwise every
/// channel is drawn uniformly from `[0, 255)`.
pub fn derive_color<R: Rng + ?Sized>(predecessor: Option<&Rgb>, smooth: bool, rng: &mut R) -> Rgb {
    match predecessor {
        Some(prev) if smooth => Rgb::clamped(
            prev.r as i32 + rng.random_range(-COLOR_DRIFT..=COLOR_DRIFT),
            prev.g as i32 + rng.random_range(-COLOR_DRIFT..=COLOR_DRIFT),
            prev.b as i32 + rng.random_range(-COLOR_DRIFT..=COLOR_DRIFT),
        ),
        _ => Rgb::clamped(
            rng.random_range(0..255),
            rng.random_range(0..255),
            rng.random_range(0..255),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_clamped_saturates() {
        assert_eq!(Rgb::clamped(-3, 128, 300), Rgb::new(0, 128, 255));
    }

    #[test]
    fn test_smooth_drift_is_small() {
        let mut rng = Pcg32::seed_from_u64(7);
        let base = Rgb::new(100, 150, 200);
        for _ in 0..500 {
            let c = derive_color(Some(&base), true, &mut rng);
            assert!((c.r as i32 - 100).abs() <= 3);
            assert!((c.g as i32 - 150).abs() <= 3);
            assert!((c.b as i32 - 200).abs() <= 3);
        }
    }

    #[test]
    fn test_random_branch_never_hits_255() {
        let mut rng = Pcg32::seed_from_u64(11);
        for _ in 0..2000 {
            let c = derive_color(None, true, &mut rng);
            assert!(c.r < 255 && c.g < 255 && c.b < 255);
        }
    }

    #[test]
    fn test_not_smooth_ignores_predecessor() {
        let mut a = Pcg32::seed_from_u64(3);
        let mut b = Pcg32::seed_from_u64(3);
        let from_pred = derive_color(Some(&Rgb::WHITE), false, &mut a);
        let fresh = derive_color(None, false, &mut b);
        assert_eq!(from_pred, fresh);
    }

    proptest! {
        #[test]
        fn prop_channels_clamped_at_edges(
            r in prop::sample::select(vec![0u8, 1, 2, 3, 252, 253, 254, 255]),
            g in any::<u8>(),
            b in any::<u8>(),
            seed in any::<u64>(),
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let prev = Rgb::new(r, g, b);
            let c = derive_color(Some(&prev), true, &mut rng);
            prop_assert!((c.r as i32 - r as i32).abs() <= COLOR_DRIFT);
            prop_assert!((c.g as i32 - g as i32).abs() <= COLOR_DRIFT);
            prop_assert!((c.b as i32 - b as i32).abs() <= COLOR_DRIFT);
        }

        #[test]
        fn prop_clamped_matches_saturating_offsets(v in any::<u8>(), offset in -3i32..=3) {
            let c = Rgb::clamped(v as i32 + offset, 0, 0);
            prop_assert_eq!(c.r as i32, (v as i32 + offset).clamp(0, 255));
        }
    }
}
