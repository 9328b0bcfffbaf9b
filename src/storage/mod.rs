//! Storage layer for budget-lines
//!
//! A small key-value store: each key maps to one JSON file in the data
//! directory, written atomically. Writes are recorded in the audit log.

pub mod entries;
pub mod file_io;

pub use entries::{EntryRepository, BUDGETS_KEY};
pub use file_io::{read_json, write_json_atomic};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::BudgetPaths;
use crate::error::BudgetError;
use crate::models::BudgetEntry;

/// Main storage coordinator
pub struct Storage {
    paths: BudgetPaths,
    pub entries: EntryRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: BudgetPaths) -> Result<Self, BudgetError> {
        paths.ensure_directories()?;

        Ok(Self {
            entries: EntryRepository::new(BUDGETS_KEY, paths.storage_file(BUDGETS_KEY)),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &BudgetPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Record a newly saved line
    pub fn log_create(&self, entry: &BudgetEntry) -> Result<(), BudgetError> {
        self.audit.log(&AuditEntry::create(
            self.entries.key(),
            &entry.description,
            entry,
        ))
    }

    /// Record lines removed for `description`
    pub fn log_delete(&self, description: &str, removed: &[BudgetEntry]) -> Result<(), BudgetError> {
        self.audit
            .log(&AuditEntry::delete(self.entries.key(), description, removed))
    }
}
