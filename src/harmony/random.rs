use log::debug;
use rand::Rng;

use crate::color::{Color, Hsl};
use crate::easing::Easing;

/// Lightness at or above which a swatch reads as near-white.
pub const NEAR_WHITE: f64 = 90.0;
/// Lightness that surplus near-white swatches are lowered to.
const NEAR_WHITE_FLOOR: f64 = 85.0;
const LIGHTNESS_MAX: f64 = 90.0;

const HUE_EASING: Easing = Easing::Linear;
const SATURATION_EASING: Easing = Easing::CubicInOut;
const LIGHTNESS_EASING: Easing = Easing::SineInOut;

/// Vivid colors swept across a random slice of the hue wheel.
///
/// The start hue and span ignore the locked colors; `locked` is only
/// consulted to keep at most one near-white swatch across the palette.
pub fn generate<R: Rng + ?Sized>(locked: &[Hsl], needed: usize, rng: &mut R) -> Vec<Hsl> {
    if needed == 0 {
        return Vec::new();
    }

    let h_start = rng.random_range(0.0..360.0);
    let hue_span = 360.0 * rng.random::<f64>();
    let s_min = rng.random_range(90.0..95.0_f64).clamp(0.0, 100.0);
    let s_max = rng.random_range(95.0..=100.0_f64).clamp(0.0, 100.0);
    let l_min = rng.random_range(20.0..30.0);
    let l_max = LIGHTNESS_MAX;
    debug!(
        "random: start {h_start:.1}°, span {hue_span:.1}°, s {s_min:.1}..{s_max:.1}, l {l_min:.1}..{l_max:.1}"
    );

    let mut colors: Vec<Hsl> = (0..needed)
        .map(|i| {
            let t = if needed > 1 {
                i as f64 / (needed - 1) as f64
            } else {
                0.5
            };
            let h = (h_start + hue_span * (HUE_EASING.apply(t) - 0.5) + 360.0).rem_euclid(360.0);
            let s = lerp(s_min, s_max, SATURATION_EASING.apply(t));
            let l = lerp(l_min, l_max, LIGHTNESS_EASING.apply(t)).clamp(l_min, l_max);
            Hsl::new(h, s, l)
        })
        .collect();

    limit_near_white(locked, &mut colors);
    colors
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Lightness as it reads back after 8-bit encoding.
fn encoded_lightness(hsl: Hsl) -> f64 {
    Color::from_hsl(hsl).to_hsl().l
}

/// Keep at most one near-white swatch. Locked colors are never touched: if
/// one of them is already near-white, every generated near-white is lowered;
/// otherwise the lightest generated one survives.
fn limit_near_white(locked: &[Hsl], generated: &mut [Hsl]) {
    let lightness: Vec<f64> = generated.iter().map(|c| encoded_lightness(*c)).collect();
    let keep = if locked.iter().any(|c| c.l >= NEAR_WHITE) {
        None
    } else {
        lightness
            .iter()
            .enumerate()
            .filter(|(_, l)| **l >= NEAR_WHITE)
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
    };

    for (i, color) in generated.iter_mut().enumerate() {
        if lightness[i] >= NEAR_WHITE && Some(i) != keep {
            debug!("random: lowering near-white {color:?} to L={NEAR_WHITE_FLOOR}");
            color.l = NEAR_WHITE_FLOOR;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn near_white_count(colors: &[Hsl]) -> usize {
        colors.iter().filter(|c| encoded_lightness(**c) >= NEAR_WHITE).count()
    }

    #[test]
    fn produces_exactly_needed() {
        let mut rng = StdRng::seed_from_u64(20);
        for needed in [0, 1, 2, 5, 17] {
            assert_eq!(generate(&[], needed, &mut rng).len(), needed);
        }
    }

    #[test]
    fn colors_are_vivid_and_in_range() {
        let mut rng = StdRng::seed_from_u64(21);
        for color in generate(&[], 12, &mut rng) {
            assert!((0.0..360.0).contains(&color.h), "h = {}", color.h);
            assert!((90.0..=100.0).contains(&color.s), "s = {}", color.s);
            assert!((20.0..=90.0).contains(&color.l), "l = {}", color.l);
        }
    }

    #[test]
    fn lightness_sweeps_from_dark_to_light() {
        let mut rng = StdRng::seed_from_u64(22);
        let colors = generate(&[], 6, &mut rng);
        assert!(colors[0].l < 30.0);
        assert!((colors[5].l - LIGHTNESS_MAX).abs() < 1e-9, "l = {}", colors[5].l);
    }

    #[test]
    fn at_most_one_near_white_across_seeds() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let colors = generate(&[], 24, &mut rng);
            assert!(near_white_count(&colors) <= 1, "seed {seed}: {colors:?}");
        }
    }

    #[test]
    fn locked_near_white_claims_the_only_slot() {
        let locked = [Hsl::new(0.0, 0.0, 100.0)];
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let colors = generate(&locked, 8, &mut rng);
            assert_eq!(near_white_count(&colors), 0, "seed {seed}");
        }
    }

    #[test]
    fn limit_keeps_the_lightest() {
        let mut colors = [
            Hsl::new(0.0, 50.0, 92.0),
            Hsl::new(120.0, 50.0, 97.0),
            Hsl::new(240.0, 50.0, 40.0),
        ];
        limit_near_white(&[], &mut colors);
        assert_eq!(colors[0].l, NEAR_WHITE_FLOOR);
        assert_eq!(colors[1].l, 97.0);
        assert_eq!(colors[2].l, 40.0);
    }

    #[test]
    fn same_seed_same_colors() {
        let a = generate(&[], 7, &mut StdRng::seed_from_u64(99));
        let b = generate(&[], 7, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
