mod entry;
mod theme;

pub use entry::Entry;
pub use theme::{Palette, Theme, ThemeStyle};
#[cfg(test)]
pub use theme::PALETTE_LEN;

#[cfg(test)]
mod tests;
