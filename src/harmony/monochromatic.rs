use log::debug;
use rand::Rng;

use crate::color::Hsl;
use crate::easing::Easing;

const SATURATION_VARIATION: f64 = 0.30;
const LIGHTNESS_VARIATION: f64 = 0.30;
/// Degrees of hue jitter either side of the base.
const HUE_VARIATION: f64 = 10.0;

/// Shades of the base hue with eased saturation and lightness.
pub fn generate<R: Rng + ?Sized>(base: Hsl, needed: usize, rng: &mut R) -> Vec<Hsl> {
    let s_easing = Easing::choose(&Easing::QUADRATIC, rng);
    let l_easing = Easing::choose(&Easing::QUADRATIC, rng);
    let h_easing = Easing::choose(&Easing::QUADRATIC, rng);
    shades(base, needed, [s_easing, l_easing, h_easing])
}

/// `easings` applies to saturation, lightness and hue, in that order.
fn shades(base: Hsl, needed: usize, easings: [Easing; 3]) -> Vec<Hsl> {
    let [s_easing, l_easing, h_easing] = easings;
    debug!("monochromatic: base {base:?}, easings s={s_easing:?} l={l_easing:?} h={h_easing:?}");

    (1..=needed)
        .map(|i| {
            let t = if needed > 1 {
                i as f64 / (needed + 1) as f64
            } else {
                0.5
            };
            let s = base.s * (1.0 - SATURATION_VARIATION * (1.0 - s_easing.apply(t)));
            let l = base.l * (1.0 + LIGHTNESS_VARIATION * (2.0 * l_easing.apply(t) - 1.0));
            let h = base.h + HUE_VARIATION * (2.0 * h_easing.apply(t) - 1.0);
            Hsl::new(h, s, l).normalized()
        })
        .collect()
}
