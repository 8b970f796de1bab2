use log::debug;
use rand::Rng;

use crate::color::Hsl;
use crate::easing::Easing;

/// Widest hue offset either side of the base, in degrees.
const SPREAD: f64 = 30.0;
const SATURATION_VARIATION: f64 = 0.20;
const LIGHTNESS_VARIATION: f64 = 0.20;
/// Absolute jitter, in percent, for colors placed past the symmetric steps.
const JITTER: f64 = 20.0;

/// Neighbouring hues placed symmetrically around the base, alternating
/// `+offset` and `-offset`, with eased saturation and lightness.
///
/// `ceil(needed / 2)` steps of `SPREAD / steps` degrees are taken on each
/// side. Anything still missing after the symmetric steps is filled with
/// random hues inside the spread and jittered saturation/lightness.
pub fn generate<R: Rng + ?Sized>(base: Hsl, needed: usize, rng: &mut R) -> Vec<Hsl> {
    if needed == 0 {
        return Vec::new();
    }
    let s_easing = Easing::choose(&Easing::QUADRATIC, rng);
    let l_easing = Easing::choose(&Easing::QUADRATIC, rng);
    generate_with(base, needed, s_easing, l_easing, rng)
}

fn generate_with<R: Rng + ?Sized>(
    base: Hsl,
    needed: usize,
    s_easing: Easing,
    l_easing: Easing,
    rng: &mut R,
) -> Vec<Hsl> {
    let mut colors = Vec::with_capacity(needed);
    let half_steps = needed.max(2).div_ceil(2);
    debug!("analogous: base {base:?}, {half_steps} half steps, easings s={s_easing:?} l={l_easing:?}");

    for i in 1..=half_steps {
        let t = if half_steps > 1 {
            i as f64 / (half_steps + 1) as f64
        } else {
            0.5
        };
        let offset = SPREAD / half_steps as f64 * i as f64;
        let s = base.s * (1.0 - SATURATION_VARIATION * (1.0 - s_easing.apply(t)));
        let l = base.l * (1.0 + LIGHTNESS_VARIATION * (2.0 * l_easing.apply(t) - 1.0));

        for h in [base.h + offset, base.h - offset] {
            if colors.len() < needed {
                colors.push(Hsl::new(h, s, l).normalized());
            }
        }
    }

    while colors.len() < needed {
        let h = base.h + rng.random_range(-SPREAD..SPREAD);
        let s = base.s + rng.random_range(-JITTER..JITTER);
        let l = base.l + rng.random_range(-JITTER..JITTER);
        colors.push(Hsl::new(h, s, l).normalized());
    }

    colors
}
