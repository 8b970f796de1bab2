use std::f64::consts::PI;

use rand::Rng;

/// Named interpolation curves over `t` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    /// Half-cosine ease, used for lightness in random-harmony palettes.
    SineInOut,
}

impl Easing {
    /// Curves offered to the monochromatic and analogous generators.
    pub const QUADRATIC: [Easing; 4] = [
        Easing::Linear,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
    ];

    pub fn apply(self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
            Easing::QuadIn => t * t,
            Easing::QuadOut => t * (2.0 - t),
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::CubicIn => t.powi(3),
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t.powi(3)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
        }
    }

    /// Pick one curve uniformly from `choices`.
    ///
    /// Falls back to [`Easing::Linear`] when `choices` is empty.
    pub fn choose<R: Rng + ?Sized>(choices: &[Easing], rng: &mut R) -> Easing {
        if choices.is_empty() {
            return Easing::Linear;
        }
        choices[rng.random_range(0..choices.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const ALL: [Easing; 8] = [
        Easing::Linear,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::SineInOut,
    ];

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn every_curve_maps_endpoints_to_endpoints() {
        for easing in ALL {
            assert!(approx_eq(easing.apply(0.0), 0.0), "{easing:?} at 0");
            assert!(approx_eq(easing.apply(1.0), 1.0), "{easing:?} at 1");
        }
    }

    #[test]
    fn every_curve_is_monotonic_and_bounded() {
        for easing in ALL {
            let mut prev = easing.apply(0.0);
            for step in 1..=100 {
                let value = easing.apply(step as f64 / 100.0);
                assert!(value + 1e-12 >= prev, "{easing:?} decreased at step {step}");
                assert!((0.0..=1.0 + 1e-12).contains(&value), "{easing:?} left [0, 1]");
                prev = value;
            }
        }
    }

    #[test]
    fn in_out_curves_pass_through_midpoint() {
        for easing in [Easing::QuadInOut, Easing::CubicInOut, Easing::SineInOut] {
            assert!(approx_eq(easing.apply(0.5), 0.5), "{easing:?}");
        }
    }

    #[test]
    fn reference_values() {
        assert!(approx_eq(Easing::QuadIn.apply(0.5), 0.25));
        assert!(approx_eq(Easing::QuadOut.apply(0.5), 0.75));
        assert!(approx_eq(Easing::QuadInOut.apply(0.25), 0.125));
        assert!(approx_eq(Easing::CubicIn.apply(0.5), 0.125));
        assert!(approx_eq(Easing::CubicOut.apply(0.5), 0.875));
        assert!(approx_eq(Easing::CubicInOut.apply(0.25), 0.0625));
        assert!(approx_eq(Easing::SineInOut.apply(0.25), (1.0 - (PI / 4.0).cos()) / 2.0));
    }

    #[test]
    fn choose_stays_within_choices() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let picked = Easing::choose(&Easing::QUADRATIC, &mut rng);
            assert!(Easing::QUADRATIC.contains(&picked));
        }
    }

    #[test]
    fn choose_from_empty_is_linear() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(Easing::choose(&[], &mut rng), Easing::Linear);
    }
}
