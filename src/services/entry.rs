//! Budget line service
//!
//! Validation and persistence for adding and removing lines. Both the TUI
//! form and the CLI go through here, so the rules are applied the same way
//! whichever surface the input came from.

use crate::error::{BudgetError, BudgetResult};
use crate::models::{format_total, BudgetEntry, EntryForm};
use crate::storage::Storage;

/// Service for budget line management
pub struct EntryService<'a> {
    storage: &'a Storage,
}

impl<'a> EntryService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// All stored lines in insertion order
    pub fn list(&self) -> BudgetResult<Vec<BudgetEntry>> {
        self.storage.entries.load()
    }

    /// Validate a submitted form against the stored lines and persist it
    ///
    /// The audit record is written after the save, so an audit error means
    /// the line is already stored.
    pub fn submit(&self, form: &EntryForm) -> BudgetResult<BudgetEntry> {
        let existing = self.storage.entries.load()?;
        let entry = form.validate(&existing)?;

        self.storage.entries.save(entry.clone())?;
        self.storage.log_create(&entry)?;

        Ok(entry)
    }

    /// Remove every line with this description
    ///
    /// Returns the removed lines, or `NotFound` when nothing matched. The
    /// stored list is untouched in the latter case.
    pub fn remove(&self, description: &str) -> BudgetResult<Vec<BudgetEntry>> {
        let removed = self.storage.entries.remove(description)?;
        if removed.is_empty() {
            return Err(BudgetError::entry_not_found(description));
        }

        self.storage.log_delete(description, &removed)?;
        Ok(removed)
    }

    /// Running total of all stored lines, e.g. `$8.50`
    pub fn total(&self, currency_symbol: &str) -> BudgetResult<String> {
        let entries = self.storage.entries.load()?;
        Ok(format_total(entries.iter().map(|e| &e.cost), currency_symbol))
    }
}
