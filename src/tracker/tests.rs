#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;
use crate::db::{MemoryStore, Persistence, LEDGER_KEY, THEME_KEY};

fn fresh() -> Tracker<MemoryStore> {
    Tracker::open(MemoryStore::default(), MoneyFormat::default(), Theme::default())
}

fn reopen(tracker: Tracker<MemoryStore>) -> Tracker<MemoryStore> {
    let store = MemoryStore {
        values: tracker.store().values.clone(),
    };
    Tracker::open(store, MoneyFormat::default(), Theme::Valentine)
}

#[test]
fn test_open_empty_uses_default_theme() {
    let t = Tracker::open(MemoryStore::default(), MoneyFormat::default(), Theme::Brasil);
    assert!(t.ledger().is_empty());
    assert_eq!(t.theme(), Theme::Brasil);
    assert!(t.colors().is_empty());
}

#[test]
fn test_scenario_food_and_rent() {
    let mut t = fresh();
    t.add("Food", "12.50").unwrap();
    t.add("Rent", "900").unwrap();
    assert_eq!(t.ledger().total(), dec!(912.50));
    assert_eq!(t.chart().tooltip(1).unwrap(), "Rent: R$ 900,00 (98.6%)");
}

#[test]
fn test_add_persists_immediately() {
    let mut t = fresh();
    t.add("Food", "12.50").unwrap();
    let raw = t.store().values.get(LEDGER_KEY).unwrap();
    assert!(raw.contains("Food"));
    assert_eq!(
        t.store().values.get(THEME_KEY).map(String::as_str),
        Some("theme-halloween")
    );
}

#[test]
fn test_rejected_add_changes_nothing() {
    let mut t = fresh();
    t.add("Food", "10").unwrap();
    let saved = t.store().values.clone();
    assert_eq!(t.add("", "5"), Err(ValidationError::EmptyCategory));
    assert_eq!(t.ledger().len(), 1);
    assert_eq!(t.colors().len(), 1);
    assert_eq!(t.store().values, saved);
}

#[test]
fn test_colors_follow_entries() {
    let mut t = fresh();
    for i in 0..10 {
        t.add(&format!("c{i}"), "1").unwrap();
    }
    let palette = Theme::Halloween.palette();
    assert_eq!(t.colors().len(), 10);
    assert_eq!(t.colors()[8], palette[0]);
    t.remove(0).unwrap();
    assert_eq!(t.colors().len(), 9);
    assert_eq!(t.colors()[0], palette[0]);
}

#[test]
fn test_theme_change_recolors_and_persists() {
    let mut t = fresh();
    t.add("Food", "1").unwrap();
    t.add("Rent", "2").unwrap();
    t.set_theme(Theme::Brasil);
    assert_eq!(t.colors(), &Theme::Brasil.palette()[..2]);
    assert_eq!(t.chart().title_color, Theme::Brasil.style().accent);
    assert_eq!(
        t.store().values.get(THEME_KEY).map(String::as_str),
        Some("theme-brasil")
    );
}

#[test]
fn test_remove_out_of_bounds_leaves_state() {
    let mut t = fresh();
    t.add("Food", "1").unwrap();
    assert_eq!(t.remove(5), Err(IndexError { index: 5, len: 1 }));
    assert_eq!(t.ledger().len(), 1);
}

#[test]
fn test_reset_declined_keeps_state() {
    let mut t = fresh();
    t.add("Food", "12.50").unwrap();
    t.add("Rent", "900").unwrap();
    let before = t.ledger().clone();
    let saved = t.store().values.clone();
    assert!(!t.reset(&mut false));
    assert_eq!(t.ledger(), &before);
    assert_eq!(t.store().values, saved);
}

#[test]
fn test_reset_confirmed_clears_and_persists() {
    let mut t = fresh();
    t.add("Food", "12.50").unwrap();
    assert!(t.reset(&mut true));
    assert!(t.ledger().is_empty());
    assert!(t.colors().is_empty());
    let t = reopen(t);
    assert!(t.ledger().is_empty());
}

#[test]
fn test_state_survives_reopen() {
    let mut t = fresh();
    t.add("Food", "12.50").unwrap();
    t.add("Rent", "900").unwrap();
    t.set_theme(Theme::Brasil);
    let t = reopen(t);
    assert_eq!(t.ledger().categories(), ["Food", "Rent"]);
    assert_eq!(t.ledger().total(), dec!(912.50));
    // saved theme wins over the default passed to open
    assert_eq!(t.theme(), Theme::Brasil);
    assert_eq!(t.colors(), &Theme::Brasil.palette()[..2]);
}

#[test]
fn test_open_with_malformed_store() {
    let mut store = MemoryStore::default();
    store.set(LEDGER_KEY, "][").unwrap();
    store.set(THEME_KEY, "theme-unknown").unwrap();
    let t = Tracker::open(store, MoneyFormat::default(), Theme::Valentine);
    assert!(t.ledger().is_empty());
    assert_eq!(t.theme(), Theme::Valentine);
}

#[test]
fn test_persisted_state_matches_ledger() {
    let mut t = fresh();
    t.add("a", "1").unwrap();
    t.add("b", "2").unwrap();
    t.remove(0).unwrap();
    let store = MemoryStore {
        values: t.store().values.clone(),
    };
    let state = Persistence::new(store).load();
    assert_eq!(state.entries, vec![Entry::new("b", dec!(2))]);
    assert_eq!(state.theme, Some(Theme::Halloween));
}

#[test]
fn test_add_at_top_of_range_keeps_chart_usable() {
    let mut t = fresh();
    t.add("A", "79228162514264337593543950335").unwrap();
    assert!(matches!(
        t.add("B", "1"),
        Err(ValidationError::AmountOutOfRange(_))
    ));
    assert_eq!(t.ledger().len(), 1);
    assert!(t.chart().tooltip(0).unwrap().ends_with("(100.0%)"));

    t.add("B", "-999999999999999999999999999.9").unwrap();
    let chart = t.chart();
    assert!(chart.tooltip(0).is_some());
    assert!(chart.tooltip(1).is_some());
    assert_eq!(chart.slices().len(), 2);
}

#[test]
fn test_reopen_keeps_amounts_exact() {
    let mut t = fresh();
    t.add("A", "0.1").unwrap();
    t.add("B", "12345678901234567.89").unwrap();
    let t = reopen(t);
    assert_eq!(
        t.ledger().amounts(),
        [dec!(0.1), dec!(12345678901234567.89)]
    );
    let raw = t.store().values.get(LEDGER_KEY).unwrap();
    assert!(raw.contains("12345678901234567.89"), "{raw}");
}
