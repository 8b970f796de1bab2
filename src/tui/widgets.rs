use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::color::Color as AppColor;
use crate::harmony::Harmony;
use crate::preview::prefers_dark_text;

/// Width of one swatch, without the gap that follows it.
const SWATCH_WIDTH: usize = 9;

/// A widget that renders the palette as rows of colored swatches labelled
/// with their hex value. Locked colors are marked under their swatch.
pub struct PaletteWidget<'a> {
    palette: &'a [AppColor],
    harmony: Harmony,
    locked: usize,
}

impl<'a> PaletteWidget<'a> {
    pub fn new(palette: &'a [AppColor], harmony: Harmony, locked: usize) -> Self {
        Self {
            palette,
            harmony,
            locked,
        }
    }
}

fn to_color(c: &AppColor) -> Color {
    let srgb = c.to_srgb_u8();
    Color::Rgb(srgb.red, srgb.green, srgb.blue)
}

/// Choose black or white foreground for readable text on the given background.
fn contrast_fg(c: &AppColor) -> Color {
    if prefers_dark_text(*c) {
        Color::Black
    } else {
        Color::White
    }
}

/// One text row across a run of swatches. With `labelled`, each swatch shows
/// its hex centered on the colored background.
fn build_swatch_row(colors: &[AppColor], labelled: bool) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for c in colors {
        let text = if labelled {
            format!("{:^width$}", c.to_hex(), width = SWATCH_WIDTH)
        } else {
            " ".repeat(SWATCH_WIDTH)
        };
        spans.push(Span::styled(
            text,
            Style::default().bg(to_color(c)).fg(contrast_fg(c)),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// Position labels under the swatches; locked entries read "locked".
fn build_marker_row(start: usize, len: usize, locked: usize) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for i in start..start + len {
        let (label, style) = if i < locked {
            (
                "locked".to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ((i + 1).to_string(), Style::default().fg(Color::DarkGray))
        };
        spans.push(Span::styled(format!("{label:^width$}", width = SWATCH_WIDTH), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

impl Widget for PaletteWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(
            "Palette · {} · {} colors",
            self.harmony,
            self.palette.len()
        );
        let block = Block::bordered().title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.palette.is_empty() {
            Paragraph::new("  no colors").render(inner, buf);
            return;
        }

        let per_row = (usize::from(inner.width).saturating_sub(2) / (SWATCH_WIDTH + 1)).max(1);
        let mut lines = Vec::new();
        for (row, chunk) in self.palette.chunks(per_row).enumerate() {
            if row > 0 {
                lines.push(Line::from(""));
            }
            lines.push(build_swatch_row(chunk, false));
            lines.push(build_swatch_row(chunk, true));
            lines.push(build_swatch_row(chunk, false));
            lines.push(build_marker_row(row * per_row, chunk.len(), self.locked));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered_text(widget: PaletteWidget<'_>, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        buf.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn labels_every_swatch() {
        let palette = [AppColor::new(255, 0, 0), AppColor::new(0, 255, 0), AppColor::new(0, 0, 255)];
        let text = rendered_text(PaletteWidget::new(&palette, Harmony::Triadic, 1), 60, 8);
        for hex in ["#ff0000", "#00ff00", "#0000ff"] {
            assert!(text.contains(hex), "{hex} missing");
        }
        assert!(text.contains("locked"));
        assert!(text.contains("triadic"));
    }

    #[test]
    fn swatch_background_is_the_palette_color() {
        let palette = [AppColor::new(230, 57, 70), AppColor::new(69, 123, 157)];
        let area = Rect::new(0, 0, 40, 6);
        let mut buf = Buffer::empty(area);
        PaletteWidget::new(&palette, Harmony::Analogous, 0).render(area, &mut buf);
        // Inside the border, after the two-column indent.
        assert_eq!(buf[(3, 1)].bg, Color::Rgb(230, 57, 70));
        assert_eq!(buf[(3 + SWATCH_WIDTH as u16 + 1, 1)].bg, Color::Rgb(69, 123, 157));
        assert_eq!(buf[(3, 2)].fg, Color::White);
    }

    #[test]
    fn wraps_into_rows_on_narrow_areas() {
        let palette = [AppColor::new(10, 10, 10); 4];
        // Room for two swatches per row: 2 rows of 4 lines plus a spacer.
        let text = rendered_text(PaletteWidget::new(&palette, Harmony::Square, 0), 26, 12);
        assert_eq!(text.matches("#0a0a0a").count(), 4);
    }

    #[test]
    fn empty_palette_says_so() {
        let text = rendered_text(PaletteWidget::new(&[], Harmony::Random, 0), 40, 4);
        assert!(text.contains("no colors"));
    }
}
