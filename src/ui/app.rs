use anyhow::Result;
use chrono::{DateTime, Duration, Local};
use std::path::PathBuf;

use crate::db::Database;
use crate::ledger::{LedgerError, RESET_PROMPT};
use crate::models::Theme;
use crate::tracker::Tracker;
use crate::ui::snapshot;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

/// How long a flash message stays on the command bar.
pub(crate) const FLASH_SECONDS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Insert,
    Command,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Insert => write!(f, "INSERT"),
            Self::Command => write!(f, "COMMAND"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Entry form field with keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Category,
    Amount,
}

impl Field {
    pub(crate) fn toggle(self) -> Self {
        match self {
            Self::Category => Self::Amount,
            Self::Amount => Self::Category,
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PendingAction {
    Reset,
}

/// Transient command bar message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Flash {
    pub(crate) message: String,
    pub(crate) is_error: bool,
    pub(crate) expires_at: DateTime<Local>,
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) tracker: Tracker<Database>,
    pub(crate) input_mode: InputMode,
    pub(crate) show_help: bool,

    // Entry form
    pub(crate) focus: Field,
    pub(crate) category_input: String,
    pub(crate) amount_input: String,

    pub(crate) command_input: String,
    pub(crate) flash: Option<Flash>,

    // Entry list
    pub(crate) selected: usize,
    pub(crate) scroll: usize,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    pub(crate) export_dir: PathBuf,
    pub(crate) export_width: u16,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(tracker: Tracker<Database>, export_dir: PathBuf, export_width: u16) -> Self {
        Self {
            running: true,
            tracker,
            input_mode: InputMode::Insert,
            show_help: false,

            focus: Field::Category,
            category_input: String::new(),
            amount_input: String::new(),

            command_input: String::new(),
            flash: None,

            selected: 0,
            scroll: 0,

            pending_action: None,
            confirm_message: String::new(),

            export_dir,
            export_width,

            visible_rows: 10,
        }
    }

    pub(crate) fn focused_input(&mut self) -> &mut String {
        match self.focus {
            Field::Category => &mut self.category_input,
            Field::Amount => &mut self.amount_input,
        }
    }

    /// Add the form contents as a new entry. On success the form is cleared
    /// and the new entry selected; on failure the form is kept and the error
    /// flashed.
    pub(crate) fn submit_entry(&mut self, now: DateTime<Local>) {
        match self.tracker.add(&self.category_input, &self.amount_input) {
            Ok(()) => {
                self.category_input.clear();
                self.amount_input.clear();
                self.focus = Field::Category;
                self.select_last();
                self.flash = None;
            }
            Err(e) => self.report(&e.into(), now),
        }
    }

    pub(crate) fn remove_selected(&mut self, now: DateTime<Local>) {
        self.remove_at(self.selected, now);
    }

    pub(crate) fn remove_at(&mut self, index: usize, now: DateTime<Local>) {
        match self.tracker.remove(index) {
            Ok(entry) => {
                self.clamp_selection();
                self.set_status(format!("Removed {entry}"), now);
            }
            Err(e) => self.report(&e.into(), now),
        }
    }

    pub(crate) fn request_reset(&mut self) {
        self.confirm_message = RESET_PROMPT.into();
        self.pending_action = Some(PendingAction::Reset);
        self.input_mode = InputMode::Confirm;
    }

    /// Answer the pending confirmation and drop back to normal mode.
    pub(crate) fn resolve_confirm(&mut self, mut answer: bool, now: DateTime<Local>) {
        self.input_mode = InputMode::Normal;
        self.confirm_message.clear();
        if let Some(PendingAction::Reset) = self.pending_action.take() {
            if self.tracker.reset(&mut answer) {
                self.clamp_selection();
                self.set_status("All data cleared", now);
            } else {
                self.set_status("Reset cancelled", now);
            }
        }
    }

    pub(crate) fn set_theme(&mut self, theme: Theme, now: DateTime<Local>) {
        self.tracker.set_theme(theme);
        self.set_status(format!("Theme: {theme}"), now);
    }

    pub(crate) fn cycle_theme(&mut self, forward: bool, now: DateTime<Local>) {
        let current = self.tracker.theme();
        let theme = if forward { current.next() } else { current.prev() };
        self.set_theme(theme, now);
    }

    /// Write the dashboard snapshot document and report where it went.
    pub(crate) fn export(&mut self, now: DateTime<Local>) -> Result<()> {
        let (path, pages) = snapshot::export_document(self)?;
        self.set_status(format!("Exported {pages} page(s) to {}", path.display()), now);
        Ok(())
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>, now: DateTime<Local>) {
        self.flash = Some(Flash {
            message: msg.into(),
            is_error: false,
            expires_at: now + Duration::seconds(FLASH_SECONDS),
        });
    }

    pub(crate) fn set_error(&mut self, msg: impl Into<String>, now: DateTime<Local>) {
        self.flash = Some(Flash {
            message: msg.into(),
            is_error: true,
            expires_at: now + Duration::seconds(FLASH_SECONDS),
        });
    }

    fn report(&mut self, err: &LedgerError, now: DateTime<Local>) {
        self.set_error(err.to_string(), now);
    }

    /// Drop the flash once its time is up.
    pub(crate) fn expire_flash(&mut self, now: DateTime<Local>) {
        if self.flash.as_ref().is_some_and(|f| now >= f.expires_at) {
            self.flash = None;
        }
    }

    // ── Selection ────────────────────────────────────────────

    pub(crate) fn move_down(&mut self) {
        let len = self.tracker.ledger().len();
        scroll_down(&mut self.selected, &mut self.scroll, len, self.visible_rows.max(1));
    }

    pub(crate) fn move_up(&mut self) {
        scroll_up(&mut self.selected, &mut self.scroll);
    }

    pub(crate) fn select_first(&mut self) {
        scroll_to_top(&mut self.selected, &mut self.scroll);
    }

    pub(crate) fn select_last(&mut self) {
        let len = self.tracker.ledger().len();
        scroll_to_bottom(&mut self.selected, &mut self.scroll, len, self.visible_rows.max(1));
    }

    fn clamp_selection(&mut self) {
        let len = self.tracker.ledger().len();
        if len == 0 {
            self.select_first();
        } else if self.selected >= len {
            self.select_last();
        }
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
