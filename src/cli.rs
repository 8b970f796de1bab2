use std::path::PathBuf;

use clap::Parser;

use crate::color::Color;

/// Generate harmonious color palettes around locked colors.
#[derive(Parser, Debug)]
#[command(name = "harmonist", version, about)]
pub struct Args {
    /// Comma-separated locked colors, e.g. "#e63946, #457b9d"
    pub colors: Option<String>,

    /// Total number of colors in the palette, locked colors included
    #[arg(short = 'n', long, default_value_t = 5)]
    pub count: usize,

    /// Harmony rule: monochromatic, analogous, complementary,
    /// splitComplementary, triadic, square, tetradic or random
    #[arg(short = 'H', long, default_value = "random")]
    pub harmony: String,

    /// Seed the generator for a reproducible palette
    #[arg(long)]
    pub seed: Option<u64>,

    /// How the palette is written
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Lines)]
    pub format: OutputFormat,

    /// Write the palette to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print a colored terminal preview of the palette
    #[arg(long)]
    pub preview: bool,

    /// Launch interactive TUI mode
    #[arg(long, conflicts_with_all = ["output", "preview"])]
    pub tui: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One hex color per line
    Lines,
    /// A single comma-separated line
    Csv,
}

impl OutputFormat {
    pub fn render(self, palette: &[Color]) -> String {
        if palette.is_empty() {
            return String::new();
        }
        let hexes: Vec<String> = palette.iter().map(|c| c.to_hex()).collect();
        match self {
            OutputFormat::Lines => hexes.iter().map(|hex| format!("{hex}\n")).collect(),
            OutputFormat::Csv => format!("{}\n", hexes.join(", ")),
        }
    }
}
