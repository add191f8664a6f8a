#![allow(clippy::unwrap_used)]

use ratatui::style::Color;

use super::*;
use crate::models::PALETTE_LEN;

#[test]
fn test_resolve_known_theme() {
    assert_eq!(resolve("theme-valentine"), Theme::Valentine.palette());
    assert_eq!(resolve("theme-brasil"), Theme::Brasil.palette());
}

#[test]
fn test_resolve_unknown_falls_back_to_default() {
    assert_eq!(resolve("theme-christmas"), Theme::Halloween.palette());
    assert_eq!(resolve(""), Theme::default().palette());
}

#[test]
fn test_assign_zero_is_empty() {
    assert!(assign_colors(0, Theme::Brasil.palette()).is_empty());
}

#[test]
fn test_assign_within_palette() {
    let palette = Theme::Valentine.palette();
    let colors = assign_colors(3, palette);
    assert_eq!(colors, palette[..3].to_vec());
}

#[test]
fn test_assign_cycles() {
    let palette = Theme::Halloween.palette();
    let colors = assign_colors(PALETTE_LEN * 2 + 3, palette);
    assert_eq!(colors.len(), PALETTE_LEN * 2 + 3);
    for (i, c) in colors.iter().enumerate() {
        assert_eq!(*c, palette[i % PALETTE_LEN]);
    }
    assert_eq!(colors[PALETTE_LEN], palette[0]);
}

#[test]
fn test_assign_is_deterministic() {
    for theme in Theme::all() {
        let a = assign_colors(11, resolve(theme.class_name()));
        let b = assign_colors(11, resolve(theme.class_name()));
        assert_eq!(a, b);
    }
}

#[test]
fn test_assign_empty_palette() {
    assert!(assign_colors(5, &[]).is_empty());
}

#[test]
fn test_assign_single_color_palette() {
    let colors = assign_colors(4, &[Color::Red]);
    assert_eq!(colors, vec![Color::Red; 4]);
}
