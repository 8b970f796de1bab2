use std::str::FromStr;

use palette::{LinSrgb, Srgb};
use thiserror::Error;

/// Errors raised while reading user-supplied colors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid color format {input:?}: expected #rrggbb")]
    InvalidFormat { input: String },
}

/// A hue/saturation/lightness triple.
///
/// `h` is in degrees, `s` and `l` are percentages. Values stay fractional
/// while a palette is being generated and are only rounded when encoded
/// into a [`Color`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Wrap the hue into `[0, 360)` and clamp saturation and lightness into `[0, 100]`.
    pub fn normalized(self) -> Self {
        Self {
            h: self.h.rem_euclid(360.0),
            s: self.s.clamp(0.0, 100.0),
            l: self.l.clamp(0.0, 100.0),
        }
    }
}

/// An 8-bit sRGB color, the unit every palette entry is emitted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string like `#ff8800` or `#FF8800`.
    ///
    /// The leading `#` is required and exactly six hex digits must follow.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidFormat {
            input: hex.to_string(),
        };
        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Serialize to lowercase hex `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to `palette::Srgb<u8>`.
    pub fn to_srgb_u8(self) -> Srgb<u8> {
        Srgb::new(self.r, self.g, self.b)
    }

    /// Derive HSL with hue rounded to whole degrees and saturation/lightness
    /// rounded to whole percent.
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        // Achromatic
        if max == min {
            return Hsl::new(0.0, 0.0, (l * 100.0).round());
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let sector = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl::new(
            (sector * 60.0).round().rem_euclid(360.0),
            (s * 100.0).round(),
            (l * 100.0).round(),
        )
    }

    /// Encode an HSL triple. The hue is wrapped and saturation/lightness are
    /// clamped before conversion; each channel is clamped to `[0, 255]`.
    pub fn from_hsl(hsl: Hsl) -> Self {
        let Hsl { h, s, l } = hsl.normalized();
        let s = s / 100.0;
        let l = l / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match (h / 60.0) as u8 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Self {
            r: to_channel(r + m),
            g: to_channel(g + m),
            b: to_channel(b + m),
        }
    }

    /// WCAG 2.0 relative luminance, weighted over the linearized channels.
    pub fn relative_luminance(self) -> f32 {
        let srgb: Srgb<f32> = self.to_srgb_u8().into_format();
        let linear: LinSrgb<f32> = srgb.into_linear();
        0.2126 * linear.red + 0.7152 * linear.green + 0.0722 * linear.blue
    }
}

fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parse `#rrggbb` and derive its rounded HSL triple.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ColorError> {
    Color::from_hex(hex).map(Color::to_hsl)
}

/// Encode an HSL triple as lowercase `#rrggbb`.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    Color::from_hsl(Hsl::new(h, s, l)).to_hex()
}
