#![allow(clippy::unwrap_used)]

use chrono::Local;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use std::path::PathBuf;

use super::*;
use crate::db::Database;
use crate::models::Theme;
use crate::money::MoneyFormat;
use crate::tracker::Tracker;

fn test_app() -> App {
    let tracker = Tracker::open(
        Database::open_in_memory().unwrap(),
        MoneyFormat::default(),
        Theme::default(),
    );
    App::new(tracker, PathBuf::from("."), 100)
}

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buffer.cell((x, y)).unwrap().symbol());
        }
        text.push('\n');
    }
    text
}

fn draw(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| render(f, f.area(), app)).unwrap();
    buffer_text(terminal.backend().buffer())
}

// ── pie_points ────────────────────────────────────────────────

#[test]
fn test_pie_points_single_slice_fills_disc() {
    let slices = pie_points(&[1.0]);
    assert_eq!(slices.len(), 1);
    assert!(!slices[0].is_empty());
    assert!(slices[0].iter().all(|(x, y)| x * x + y * y <= 1.0));
}

#[test]
fn test_pie_points_halves_split_left_right() {
    let slices = pie_points(&[0.5, 0.5]);
    // clockwise from 12 o'clock: first half is the right side
    assert!(slices[0].iter().all(|(x, _)| *x >= 0.0));
    assert!(slices[1].iter().all(|(x, _)| *x <= 0.0));
    assert!(slices[0].contains(&(1.0, 0.0)));
    assert!(slices[1].contains(&(-1.0, 0.0)));
}

#[test]
fn test_pie_points_skip_empty_shares() {
    let slices = pie_points(&[0.0, 1.0]);
    assert!(slices[0].is_empty());
    assert!(!slices[1].is_empty());
}

#[test]
fn test_pie_points_no_area() {
    let slices = pie_points(&[0.0, 0.0]);
    assert!(slices.iter().all(Vec::is_empty));
}

#[test]
fn test_entries_height() {
    assert_eq!(entries_height(0), 4);
    assert_eq!(entries_height(5), 8);
}

// ── render ────────────────────────────────────────────────────

#[test]
fn test_render_empty_dashboard() {
    let app = test_app();
    let text = draw(&app, 100, 30);
    assert!(text.contains("Category"));
    assert!(text.contains("No entries yet"));
    assert!(text.contains("Distribuição de Gastos"));
    assert!(text.contains("Nothing to chart yet"));
}

#[test]
fn test_render_entries_and_legend() {
    let mut app = test_app();
    let now = Local::now();
    for (c, a) in [("Food", "12.50"), ("Rent", "900")] {
        app.category_input = c.into();
        app.amount_input = a.into();
        app.submit_entry(now);
    }
    let text = draw(&app, 120, 30);
    assert!(text.contains("Entries (2)"));
    assert!(text.contains("Total: R$ 912,50"));
    assert!(text.contains("Food: R$ 12,50 (1.4%)"));
    assert!(text.contains("Rent: R$ 900,00 (98.6%)"));
}

// ── long input ────────────────────────────────────────────────

#[test]
fn test_cursor_column_clamps_inside_field() {
    let rect = Rect::new(2, 0, 20, 3);
    assert_eq!(cursor_column(rect, "abc"), 6);
    assert_eq!(cursor_column(rect, &"x".repeat(70_000)), 20);
}

#[test]
fn test_render_with_very_long_paste() {
    let mut app = test_app();
    app.category_input = "x".repeat(70_000);
    app.amount_input = "9".repeat(70_000);
    let text = draw(&app, 80, 24);
    assert!(text.contains("Category"));

    app.input_mode = InputMode::Command;
    app.command_input = "a".repeat(70_000);
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|f| crate::ui::render::render(f, &app)).unwrap();
}
