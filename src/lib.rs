//! Harmonious color palettes built around locked colors using HSL color theory.

pub mod cli;
pub mod color;
pub mod easing;
pub mod harmony;
pub mod preview;
pub mod tui;

pub use color::{hex_to_hsl, hsl_to_hex, Color, ColorError, Hsl};
pub use harmony::{generate, generate_named, generate_palette, parse_locked_colors, Harmony};
