use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::models::Theme;
use crate::money::MoneyFormat;

pub(crate) const CONFIG_FILE: &str = "config.json";

/// Narrower than this and the dashboard no longer fits.
const MIN_EXPORT_WIDTH: u16 = 40;

/// User settings read from `config.json`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Config {
    pub(crate) locale: String,
    pub(crate) currency: String,
    /// Theme class name used until the user picks one.
    pub(crate) default_theme: String,
    pub(crate) export_dir: Option<PathBuf>,
    /// Columns of the captured view.
    pub(crate) export_width: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "pt-BR".into(),
            currency: "BRL".into(),
            default_theme: Theme::default().class_name().into(),
            export_dir: None,
            export_width: 100,
        }
    }
}

impl Config {
    /// A missing file gives the defaults. So does a malformed one, with a warning.
    pub(crate) fn load(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                tracing::warn!(error = %e, path = %path.display(), "failed to read config");
                return Self::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "config loaded");
                config
            }
            Err(e) => {
                tracing::warn!(error = %e, path = %path.display(), "malformed config, using defaults");
                Self::default()
            }
        }
    }

    pub(crate) fn money_format(&self) -> MoneyFormat {
        MoneyFormat::for_locale(&self.locale, &self.currency)
    }

    pub(crate) fn default_theme(&self) -> Theme {
        Theme::parse(&self.default_theme).unwrap_or_else(|| {
            tracing::warn!(theme = %self.default_theme, "unknown default theme");
            Theme::default()
        })
    }

    /// Configured directory, else the user's documents, else home, else `.`.
    pub(crate) fn export_dir(&self) -> PathBuf {
        if let Some(dir) = &self.export_dir {
            return dir.clone();
        }
        directories::UserDirs::new()
            .map(|dirs| {
                dirs.document_dir()
                    .unwrap_or_else(|| dirs.home_dir())
                    .to_path_buf()
            })
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub(crate) fn export_width(&self) -> u16 {
        self.export_width.max(MIN_EXPORT_WIDTH)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
