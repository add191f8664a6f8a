use ratatui::style::Color;

use crate::models::{Palette, Theme};

/// Palette for a theme class name. Unknown names get the default theme's palette.
pub(crate) fn resolve(theme_id: &str) -> &'static Palette {
    Theme::parse(theme_id).unwrap_or_default().palette()
}

/// One color per entry, cycling through the palette.
pub(crate) fn assign_colors(count: usize, palette: &[Color]) -> Vec<Color> {
    if palette.is_empty() {
        return Vec::new();
    }
    (0..count).map(|i| palette[i % palette.len()]).collect()
}

#[cfg(test)]
mod tests;
