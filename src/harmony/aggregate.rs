use crate::color::Hsl;

/// Arithmetic mean of hue, saturation and lightness.
///
/// Hue is averaged linearly, not as an angle, so colors straddling 0°
/// average toward 180° (350° and 10° give 180°).
pub fn average_hsl(colors: &[Hsl]) -> Option<Hsl> {
    if colors.is_empty() {
        return None;
    }
    let n = colors.len() as f64;
    let (h, s, l) = colors
        .iter()
        .fold((0.0, 0.0, 0.0), |(h, s, l), c| (h + c.h, s + c.s, l + c.l));
    Some(Hsl::new(h / n, s / n, l / n))
}

/// The pivot color for a locked set: the color itself when only one is
/// locked, otherwise the average. `None` when nothing is locked.
pub fn base_color(locked: &[Hsl]) -> Option<Hsl> {
    match locked {
        [] => None,
        [only] => Some(*only),
        many => average_hsl(many),
    }
}
