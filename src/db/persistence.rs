use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::KeyValueStore;
use crate::models::{Entry, Theme};

/// Key holding `{"categorias": [...], "valores": [...]}`.
pub(crate) const LEDGER_KEY: &str = "dadosFinanceiros";
/// Key holding the raw theme class name.
pub(crate) const THEME_KEY: &str = "temaMoneyControl";

/// Missing or `null` lists read as empty.
#[derive(Debug, Default, Serialize, Deserialize)]
struct LedgerRecord {
    #[serde(default)]
    categorias: Option<Vec<String>>,
    #[serde(default)]
    valores: Option<Vec<Decimal>>,
}

/// The durable snapshot: written after every mutation, read once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct PersistedState {
    pub(crate) entries: Vec<Entry>,
    /// `None` means no override; the caller applies its default.
    pub(crate) theme: Option<Theme>,
}

/// Saves and loads [`PersistedState`] through a [`KeyValueStore`].
///
/// Neither direction surfaces errors: failed writes are logged and dropped,
/// failed or malformed reads behave as if nothing was stored.
pub(crate) struct Persistence<S> {
    store: S,
}

impl<S: KeyValueStore> Persistence<S> {
    pub(crate) fn new(store: S) -> Self {
        Self { store }
    }

    pub(crate) fn save(&mut self, state: &PersistedState) {
        let (categorias, valores) = state
            .entries
            .iter()
            .map(|e| (e.category.clone(), e.amount))
            .unzip();
        let record = LedgerRecord {
            categorias: Some(categorias),
            valores: Some(valores),
        };

        match serde_json::to_string(&record) {
            Ok(json) => {
                if let Err(e) = self.store.set(LEDGER_KEY, &json) {
                    tracing::warn!(error = %e, "failed to save ledger");
                }
            }
            Err(e) => tracing::warn!(error = %e, "failed to encode ledger"),
        }

        let class_name = state.theme.unwrap_or_default().class_name();
        if let Err(e) = self.store.set(THEME_KEY, class_name) {
            tracing::warn!(error = %e, "failed to save theme");
        }

        tracing::debug!(entries = state.entries.len(), theme = class_name, "state saved");
    }

    pub(crate) fn load(&self) -> PersistedState {
        PersistedState {
            entries: self.load_entries(),
            theme: self.load_theme(),
        }
    }

    fn load_entries(&self) -> Vec<Entry> {
        let raw = match self.store.get(LEDGER_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read ledger, starting empty");
                return Vec::new();
            }
        };

        let record = match serde_json::from_str::<Option<LedgerRecord>>(&raw) {
            Ok(record) => record.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "stored ledger is malformed, starting empty");
                return Vec::new();
            }
        };
        let categorias = record.categorias.unwrap_or_default();
        let valores = record.valores.unwrap_or_default();

        if categorias.len() != valores.len() {
            tracing::warn!(
                categories = categorias.len(),
                amounts = valores.len(),
                "stored ledger lists differ in length, truncating"
            );
        }

        categorias
            .into_iter()
            .zip(valores)
            .map(|(category, amount)| Entry { category, amount })
            .collect()
    }

    fn load_theme(&self) -> Option<Theme> {
        match self.store.get(THEME_KEY) {
            Ok(Some(raw)) => {
                let theme = Theme::parse(&raw);
                if theme.is_none() {
                    tracing::warn!(stored = %raw, "unknown stored theme, using default");
                }
                theme
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read theme");
                None
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    #[cfg(test)]
    pub(crate) fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}
