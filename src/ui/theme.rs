use ratatui::style::{Modifier, Style};

use crate::models::ThemeStyle;

pub(crate) fn header_style(s: &ThemeStyle) -> Style {
    Style::default()
        .fg(s.text)
        .bg(s.surface)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn title_style(s: &ThemeStyle) -> Style {
    Style::default().fg(s.accent).add_modifier(Modifier::BOLD)
}

pub(crate) fn selected_style(s: &ThemeStyle) -> Style {
    Style::default().fg(s.background).bg(s.accent)
}

pub(crate) fn normal_style(s: &ThemeStyle) -> Style {
    Style::default().fg(s.text)
}

pub(crate) fn dim_style(s: &ThemeStyle) -> Style {
    Style::default().fg(s.subtext)
}

pub(crate) fn error_style(s: &ThemeStyle) -> Style {
    Style::default().fg(s.error).add_modifier(Modifier::BOLD)
}

pub(crate) fn alt_row_style(s: &ThemeStyle) -> Style {
    Style::default().fg(s.text).bg(s.surface)
}

pub(crate) fn border_style(s: &ThemeStyle, focused: bool) -> Style {
    if focused {
        Style::default().fg(s.accent)
    } else {
        Style::default().fg(s.overlay)
    }
}

pub(crate) fn command_bar_style(s: &ThemeStyle) -> Style {
    Style::default().fg(s.text).bg(s.background)
}

pub(crate) fn status_bar_style(s: &ThemeStyle) -> Style {
    Style::default().fg(s.subtext).bg(s.surface)
}

pub(crate) fn mode_style(s: &ThemeStyle) -> Style {
    Style::default()
        .fg(s.background)
        .bg(s.accent)
        .add_modifier(Modifier::BOLD)
}
