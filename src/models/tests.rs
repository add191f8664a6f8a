#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

// ── Entry ─────────────────────────────────────────────────────

#[test]
fn test_entry_new() {
    let entry = Entry::new("Food", dec!(12.50));
    assert_eq!(entry.category, "Food");
    assert_eq!(entry.amount, dec!(12.50));
}

#[test]
fn test_entry_display() {
    assert_eq!(format!("{}", Entry::new("Rent", dec!(900))), "Rent: 900");
}

// ── Theme ─────────────────────────────────────────────────────

#[test]
fn test_theme_default_is_halloween() {
    assert_eq!(Theme::default(), Theme::Halloween);
}

#[test]
fn test_theme_parse_class_name() {
    assert_eq!(Theme::parse("theme-valentine"), Some(Theme::Valentine));
    assert_eq!(Theme::parse("theme-halloween"), Some(Theme::Halloween));
    assert_eq!(Theme::parse("theme-brasil"), Some(Theme::Brasil));
}

#[test]
fn test_theme_parse_bare_name_any_case() {
    assert_eq!(Theme::parse("BRASIL"), Some(Theme::Brasil));
    assert_eq!(Theme::parse("  valentine "), Some(Theme::Valentine));
    assert_eq!(Theme::parse("brazil"), Some(Theme::Brasil));
}

#[test]
fn test_theme_parse_unknown() {
    assert_eq!(Theme::parse("theme-christmas"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn test_theme_class_name_roundtrip() {
    for t in Theme::all() {
        assert_eq!(Theme::parse(t.class_name()), Some(*t), "{t}");
    }
}

#[test]
fn test_theme_cycle() {
    assert_eq!(Theme::Valentine.next(), Theme::Halloween);
    assert_eq!(Theme::Brasil.next(), Theme::Valentine);
    assert_eq!(Theme::Valentine.prev(), Theme::Brasil);
    for t in Theme::all() {
        assert_eq!(t.next().prev(), *t);
    }
}

#[test]
fn test_palettes_are_distinct() {
    assert_ne!(Theme::Valentine.palette(), Theme::Halloween.palette());
    assert_ne!(Theme::Halloween.palette(), Theme::Brasil.palette());
}

#[test]
fn test_palette_first_colors() {
    use ratatui::style::Color;
    assert_eq!(Theme::Valentine.palette()[0], Color::Rgb(0xff, 0x2e, 0x63));
    assert_eq!(Theme::Halloween.palette()[0], Color::Rgb(0xff, 0x7a, 0x00));
    assert_eq!(Theme::Brasil.palette()[7], Color::Rgb(0x00, 0x33, 0x66));
}
