pub mod aggregate;
pub mod analogous;
pub mod monochromatic;
pub mod random;
pub mod rotation;

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use rand::Rng;
use thiserror::Error;

use crate::color::{Color, ColorError, Hsl};

/// Color-theory rule that places hues relative to the base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Harmony {
    Monochromatic,
    Analogous,
    Complementary,
    SplitComplementary,
    Triadic,
    Square,
    Tetradic,
    Random,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown harmony rule {0:?}")]
pub struct UnknownHarmony(pub String);

impl Harmony {
    pub const ALL: [Harmony; 8] = [
        Harmony::Monochromatic,
        Harmony::Analogous,
        Harmony::Complementary,
        Harmony::SplitComplementary,
        Harmony::Triadic,
        Harmony::Square,
        Harmony::Tetradic,
        Harmony::Random,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Harmony::Monochromatic => "monochromatic",
            Harmony::Analogous => "analogous",
            Harmony::Complementary => "complementary",
            Harmony::SplitComplementary => "splitComplementary",
            Harmony::Triadic => "triadic",
            Harmony::Square => "square",
            Harmony::Tetradic => "tetradic",
            Harmony::Random => "random",
        }
    }

    /// The rule after this one in [`Harmony::ALL`], wrapping around.
    pub fn next(self) -> Harmony {
        let i = Self::ALL.iter().position(|h| *h == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// The rule before this one in [`Harmony::ALL`], wrapping around.
    pub fn previous(self) -> Harmony {
        let i = Self::ALL.iter().position(|h| *h == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Harmony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Harmony {
    type Err = UnknownHarmony;

    /// Only the exact camelCase names are recognized.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|h| h.name() == s)
            .ok_or_else(|| UnknownHarmony(s.to_string()))
    }
}

/// Split a comma-separated list of locked colors, trimming whitespace and
/// skipping empty entries.
pub fn parse_locked_colors(input: &str) -> Result<Vec<Color>, ColorError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(Color::from_hex)
        .collect()
}

/// Build a palette of exactly `total` colors: the locked colors first, in
/// order and unchanged, then the generated ones.
///
/// When `total` does not exceed the locked count the locked colors are
/// returned, truncated to `total`. With nothing locked, every rule falls
/// back to the random harmony.
pub fn generate<R: Rng + ?Sized>(
    locked: &[Color],
    total: usize,
    harmony: Harmony,
    rng: &mut R,
) -> Vec<Color> {
    if total <= locked.len() {
        if total < locked.len() {
            warn!(
                "{} locked colors but only {total} requested, truncating",
                locked.len()
            );
        }
        return locked[..total].to_vec();
    }

    let needed = total - locked.len();
    let locked_hsl: Vec<Hsl> = locked.iter().map(|c| c.to_hsl()).collect();

    let generated = match aggregate::base_color(&locked_hsl) {
        None => {
            debug!("no locked colors, using random harmony for {harmony}");
            random::generate(&locked_hsl, needed, rng)
        }
        Some(base) => match harmony {
            Harmony::Monochromatic => monochromatic::generate(base, needed, rng),
            Harmony::Analogous => analogous::generate(base, needed, rng),
            Harmony::Complementary => rotation::COMPLEMENTARY.generate(base, needed),
            Harmony::SplitComplementary => rotation::SPLIT_COMPLEMENTARY.generate(base, needed),
            Harmony::Triadic => rotation::TRIADIC.generate(base, needed),
            Harmony::Square => rotation::SQUARE.generate(base, needed),
            Harmony::Tetradic => rotation::TETRADIC.generate(base, needed),
            Harmony::Random => random::generate(&locked_hsl, needed, rng),
        },
    };

    locked
        .iter()
        .copied()
        .chain(generated.into_iter().map(Color::from_hsl))
        .take(total)
        .collect()
}

/// Like [`generate`], but with the rule given by name. An unrecognized
/// name yields an empty palette rather than an error.
pub fn generate_named<R: Rng + ?Sized>(
    locked: &[Color],
    total: usize,
    harmony: &str,
    rng: &mut R,
) -> Vec<Color> {
    match harmony.parse::<Harmony>() {
        Ok(harmony) => generate(locked, total, harmony, rng),
        Err(err) => {
            warn!("{err}, returning an empty palette");
            Vec::new()
        }
    }
}

/// Hex-in, hex-out palette generation. Every locked color is validated
/// before the rule is looked up.
pub fn generate_palette<S, R>(
    locked: &[S],
    total: usize,
    harmony: &str,
    rng: &mut R,
) -> Result<Vec<String>, ColorError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let locked = locked
        .iter()
        .map(|hex| Color::from_hex(hex.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(generate_named(&locked, total, harmony, rng)
        .into_iter()
        .map(Color::to_hex)
        .collect())
}
