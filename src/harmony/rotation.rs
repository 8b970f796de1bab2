use log::debug;

use crate::color::Hsl;

/// Order in which hue offsets and variation steps are walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// Every variation of the first hue, then every variation of the next.
    HueMajor,
    /// One variation of each hue in turn.
    Interleaved,
}

/// A harmony rule expressed as fixed hue offsets from the base color.
///
/// Each generated color sits at `base.h + offset` and is shaded by a linear
/// factor `i / (variations + 1)`: saturation drops by `factor * saturation_drop`
/// and lightness rises by `factor * lightness_lift`, both relative to the base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueRotation {
    pub offsets: &'static [f64],
    pub saturation_drop: f64,
    pub lightness_lift: f64,
    pub traversal: Traversal,
}

pub const COMPLEMENTARY: HueRotation = HueRotation {
    offsets: &[0.0, 180.0],
    saturation_drop: 0.5,
    lightness_lift: 0.5,
    traversal: Traversal::Interleaved,
};

pub const SPLIT_COMPLEMENTARY: HueRotation = HueRotation {
    offsets: &[150.0, 210.0],
    saturation_drop: 0.3,
    lightness_lift: 0.3,
    traversal: Traversal::HueMajor,
};

pub const TRIADIC: HueRotation = HueRotation {
    offsets: &[120.0, 240.0],
    saturation_drop: 0.3,
    lightness_lift: 0.3,
    traversal: Traversal::HueMajor,
};

pub const SQUARE: HueRotation = HueRotation {
    offsets: &[0.0, 90.0, 180.0, 270.0],
    saturation_drop: 0.2,
    lightness_lift: 0.2,
    traversal: Traversal::HueMajor,
};

pub const TETRADIC: HueRotation = HueRotation {
    offsets: &[60.0, 180.0, 240.0],
    saturation_drop: 0.2,
    lightness_lift: 0.2,
    traversal: Traversal::HueMajor,
};

impl HueRotation {
    /// Generate `needed` colors around `base`.
    pub fn generate(&self, base: Hsl, needed: usize) -> Vec<Hsl> {
        if needed == 0 || self.offsets.is_empty() {
            return Vec::new();
        }
        let variations = needed.div_ceil(self.offsets.len());
        debug!(
            "rotation: base {base:?}, offsets {:?}, {variations} variations per hue",
            self.offsets
        );

        let steps: Vec<(f64, usize)> = match self.traversal {
            Traversal::HueMajor => self
                .offsets
                .iter()
                .flat_map(|&offset| (1..=variations).map(move |i| (offset, i)))
                .collect(),
            Traversal::Interleaved => (1..=variations)
                .flat_map(|i| self.offsets.iter().map(move |&offset| (offset, i)))
                .collect(),
        };

        steps
            .into_iter()
            .take(needed)
            .map(|(offset, i)| {
                let factor = i as f64 / (variations + 1) as f64;
                Hsl::new(
                    base.h + offset,
                    base.s * (1.0 - factor * self.saturation_drop),
                    base.l * (1.0 + factor * self.lightness_lift),
                )
                .normalized()
            })
            .collect()
    }
}
