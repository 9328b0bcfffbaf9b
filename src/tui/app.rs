//! Application state for the TUI
//!
//! The App struct holds everything needed for rendering: the rows currently
//! shown, the displayed total, the form and the live alert. The `render_*`,
//! `show_alert` and `clear_form` methods are the only way that view state
//! changes; drawing itself happens in `views`.

use std::time::Instant;

use crate::config::settings::Settings;
use crate::models::{format_total, BudgetEntry};
use crate::storage::Storage;

use super::form::EntryFormState;
use super::widgets::alert::{Alert, AlertKind, AlertSlot};

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Form,
    List,
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a Storage,

    /// Application settings
    pub settings: &'a Settings,

    pub should_quit: bool,

    pub focused_panel: FocusedPanel,

    pub form: EntryFormState,

    /// Rows in display order; each row is keyed by its description
    pub rows: Vec<BudgetEntry>,

    /// Selected row index in the table
    pub selected_row: usize,

    /// Formatted running total (e.g. "$8.50")
    pub total: String,

    pub alert: AlertSlot,
}

impl<'a> App<'a> {
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self {
            storage,
            settings,
            should_quit: false,
            focused_panel: FocusedPanel::default(),
            form: EntryFormState::new(),
            rows: Vec::new(),
            selected_row: 0,
            total: format_total(std::iter::empty::<&crate::models::Cost>(), &settings.currency_symbol),
            alert: AlertSlot::new(),
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Form => FocusedPanel::List,
            FocusedPanel::List => FocusedPanel::Form,
        };
    }

    /// Replace every row with `entries`, in their stored order
    pub fn render_all(&mut self, entries: &[BudgetEntry]) {
        self.rows = entries.to_vec();
        self.clamp_selection();
    }

    /// Append one row at the bottom of the table
    pub fn render_entry(&mut self, entry: BudgetEntry) {
        self.rows.push(entry);
    }

    /// Remove every row keyed by `description` from the view only
    ///
    /// Returns how many rows were dropped.
    pub fn remove_row(&mut self, description: &str) -> usize {
        let before = self.rows.len();
        self.rows.retain(|e| !e.matches(description));
        self.clamp_selection();
        before - self.rows.len()
    }

    /// Recompute the displayed total from `entries`
    pub fn render_sum(&mut self, entries: &[BudgetEntry]) {
        self.total = format_total(entries.iter().map(|e| &e.cost), &self.settings.currency_symbol);
    }

    /// Show a transient alert, replacing any alert still on screen
    pub fn show_alert(&mut self, message: impl Into<String>, kind: AlertKind) {
        let duration = self.settings.alert_duration();
        self.alert.show(Alert::new(message, kind, duration));
    }

    pub fn clear_form(&mut self) {
        self.form.clear();
    }

    /// Advance time-based state; called on every tick
    pub fn tick(&mut self, now: Instant) {
        self.alert.expire(now);
    }

    /// Description of the selected row, which identifies it for deletion
    pub fn selected_description(&self) -> Option<&str> {
        self.rows
            .get(self.selected_row)
            .map(|e| e.description.as_str())
    }

    pub fn select_next(&mut self) {
        if self.selected_row + 1 < self.rows.len() {
            self.selected_row += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    /// Move the selected row one place up; order is not persisted
    pub fn move_row_up(&mut self) {
        if self.selected_row > 0 && self.selected_row < self.rows.len() {
            self.rows.swap(self.selected_row, self.selected_row - 1);
            self.selected_row -= 1;
        }
    }

    /// Move the selected row one place down; order is not persisted
    pub fn move_row_down(&mut self) {
        if self.selected_row + 1 < self.rows.len() {
            self.rows.swap(self.selected_row, self.selected_row + 1);
            self.selected_row += 1;
        }
    }

    fn clamp_selection(&mut self) {
        self.selected_row = self.selected_row.min(self.rows.len().saturating_sub(1));
    }
}
