use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color as TermColor, PrintStyledContent, Stylize};

use crate::color::Color;

/// Whether black text reads better than white on `color`.
pub fn prefers_dark_text(color: Color) -> bool {
    color.relative_luminance() > 0.4
}

/// Print one swatch per palette entry, in order, each labelled with its hex.
pub fn render_swatches<W: Write>(out: &mut W, palette: &[Color]) -> io::Result<()> {
    for &color in palette {
        let fg = if prefers_dark_text(color) {
            TermColor::Black
        } else {
            TermColor::White
        };
        let srgb = color.to_srgb_u8();
        let swatch = format!("  {}  ", color.to_hex())
            .on(TermColor::Rgb {
                r: srgb.red,
                g: srgb.green,
                b: srgb.blue,
            })
            .with(fg);
        queue!(out, PrintStyledContent(swatch))?;
        write!(out, " ")?;
    }
    writeln!(out)?;
    out.flush()
}
