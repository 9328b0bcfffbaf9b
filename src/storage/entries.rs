//! Budget line repository
//!
//! The whole list lives under one storage key and is rewritten on every
//! change: each call is a full read-modify-write with no caching, so the
//! file is always the source of truth.

use std::path::PathBuf;

use crate::error::BudgetResult;
use crate::models::BudgetEntry;

use super::file_io::{read_json, write_json_atomic};

/// Storage key holding the budget lines
pub const BUDGETS_KEY: &str = "budgets";

/// Repository for budget line persistence
pub struct EntryRepository {
    key: String,
    path: PathBuf,
}

impl EntryRepository {
    /// Create a repository for `key` backed by the file at `path`
    pub fn new(key: impl Into<String>, path: PathBuf) -> Self {
        Self {
            key: key.into(),
            path,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// All stored lines in insertion order; empty when nothing is stored yet
    pub fn load(&self) -> BudgetResult<Vec<BudgetEntry>> {
        read_json(&self.path)
    }

    /// Append a line and persist the whole list
    pub fn save(&self, entry: BudgetEntry) -> BudgetResult<()> {
        let mut entries = self.load()?;
        entries.push(entry);
        write_json_atomic(&self.path, &entries)
    }

    /// Drop every line with this description and persist the rest
    ///
    /// Returns the removed lines. Nothing is written when nothing matched.
    pub fn remove(&self, description: &str) -> BudgetResult<Vec<BudgetEntry>> {
        let (removed, kept): (Vec<_>, Vec<_>) = self
            .load()?
            .into_iter()
            .partition(|e| e.matches(description));

        if !removed.is_empty() {
            write_json_atomic(&self.path, &kept)?;
        }
        Ok(removed)
    }
}
