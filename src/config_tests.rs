#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

fn write_config(body: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE);
    std::fs::write(&path, body).unwrap();
    (dir, path)
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load(&dir.path().join(CONFIG_FILE));
    assert_eq!(config, Config::default());
    assert_eq!(config.default_theme(), Theme::Halloween);
    assert_eq!(config.money_format().format(dec!(1234.5)), "R$ 1.234,50");
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = write_config(r#"{"currency": "USD", "locale": "en-US"}"#);
    let config = Config::load(&path);
    assert_eq!(config.money_format().format(dec!(1234.5)), "$1,234.50");
    assert_eq!(config.export_width, 100);
    assert_eq!(config.default_theme, "theme-halloween");
}

#[test]
fn test_malformed_file_gives_defaults() {
    let (_dir, path) = write_config("locale = pt-BR");
    assert_eq!(Config::load(&path), Config::default());
}

#[test]
fn test_default_theme_accepts_bare_name() {
    let (_dir, path) = write_config(r#"{"default_theme": "Brasil"}"#);
    assert_eq!(Config::load(&path).default_theme(), Theme::Brasil);
}

#[test]
fn test_unknown_default_theme_falls_back() {
    let config = Config {
        default_theme: "theme-christmas".into(),
        ..Config::default()
    };
    assert_eq!(config.default_theme(), Theme::Halloween);
}

#[test]
fn test_export_dir_from_config() {
    let (_dir, path) = write_config(r#"{"export_dir": "/tmp/reports"}"#);
    assert_eq!(Config::load(&path).export_dir(), PathBuf::from("/tmp/reports"));
}

#[test]
fn test_export_width_has_floor() {
    let config = Config {
        export_width: 10,
        ..Config::default()
    };
    assert_eq!(config.export_width(), 40);
    assert_eq!(Config::default().export_width(), 100);
}
