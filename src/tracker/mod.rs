use ratatui::style::Color;

use crate::chart::{self, ChartData};
use crate::db::{Database, KeyValueStore, PersistedState, Persistence};
use crate::ledger::{Confirm, IndexError, LedgerStore, ValidationError};
use crate::models::{Entry, Theme};
use crate::money::MoneyFormat;
use crate::palette;

/// The running session: the ledger, the active theme, and the colors derived
/// from both. Every mutation is persisted before it returns.
pub(crate) struct Tracker<S = Database> {
    ledger: LedgerStore,
    theme: Theme,
    colors: Vec<Color>,
    money: MoneyFormat,
    persistence: Persistence<S>,
}

impl<S: KeyValueStore> Tracker<S> {
    /// Restore the last saved state from `store`, using `default_theme` when
    /// none was saved.
    pub(crate) fn open(store: S, money: MoneyFormat, default_theme: Theme) -> Self {
        let persistence = Persistence::new(store);
        let state = persistence.load();
        let theme = state.theme.unwrap_or(default_theme);
        tracing::info!(entries = state.entries.len(), %theme, "session restored");

        let mut tracker = Self {
            ledger: LedgerStore::from_entries(state.entries),
            theme,
            colors: Vec::new(),
            money,
            persistence,
        };
        tracker.recolor();
        tracker
    }

    pub(crate) fn add(&mut self, category: &str, amount_text: &str) -> Result<(), ValidationError> {
        if let Err(e) = self.ledger.add(category, amount_text) {
            tracing::info!(error = %e, "entry rejected");
            return Err(e);
        }
        if let Some(entry) = self.ledger.get(self.ledger.len() - 1) {
            tracing::info!(%entry, "entry added");
        }
        self.sync();
        Ok(())
    }

    pub(crate) fn remove(&mut self, index: usize) -> Result<Entry, IndexError> {
        let entry = self.ledger.remove(index)?;
        tracing::info!(index, %entry, "entry removed");
        self.sync();
        Ok(entry)
    }

    pub(crate) fn reset(&mut self, gate: &mut impl Confirm) -> bool {
        if !self.ledger.reset(gate) {
            tracing::debug!("reset declined");
            return false;
        }
        tracing::info!("ledger reset");
        self.sync();
        true
    }

    pub(crate) fn set_theme(&mut self, theme: Theme) {
        tracing::info!(from = %self.theme, to = %theme, "theme changed");
        self.theme = theme;
        self.sync();
    }

    pub(crate) fn chart(&self) -> ChartData {
        chart::project(&self.ledger, &self.colors, self.theme, &self.money)
    }

    pub(crate) fn ledger(&self) -> &LedgerStore {
        &self.ledger
    }

    pub(crate) fn theme(&self) -> Theme {
        self.theme
    }

    pub(crate) fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub(crate) fn money(&self) -> &MoneyFormat {
        &self.money
    }

    fn recolor(&mut self) {
        let palette = palette::resolve(self.theme.class_name());
        self.colors = palette::assign_colors(self.ledger.len(), palette);
    }

    fn sync(&mut self) {
        self.recolor();
        self.persistence.save(&PersistedState {
            entries: self.ledger.entries().collect(),
            theme: Some(self.theme),
        });
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        self.persistence.store()
    }
}

#[cfg(test)]
mod tests;
