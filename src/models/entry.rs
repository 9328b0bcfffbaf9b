//! Budget line model
//!
//! A budget line is one row of the tracker: what was spent, how much, under
//! which category and on which day. The description doubles as the key used
//! for duplicate detection and deletion.

use serde::{Deserialize, Serialize};

use super::cost::Cost;
use super::date::EntryDate;
use crate::error::BudgetError;

/// A single budget line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetEntry {
    /// Unique, non-empty description
    pub description: String,

    /// Cost as entered (e.g. "12.50")
    pub cost: Cost,

    /// Free-form category label
    pub category: String,

    /// Date as entered (MM/DD/YYYY)
    pub date: EntryDate,
}

impl BudgetEntry {
    /// Create a budget line from already validated parts
    pub fn new(
        description: impl Into<String>,
        cost: Cost,
        category: impl Into<String>,
        date: EntryDate,
    ) -> Self {
        Self {
            description: description.into(),
            cost,
            category: category.into(),
            date,
        }
    }

    /// Whether this line is keyed by `description` (exact, case-sensitive)
    pub fn matches(&self, description: &str) -> bool {
        self.description == description
    }
}

/// Raw text of the four form fields
///
/// Values are kept verbatim; only the empty string counts as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryForm {
    pub description: String,
    pub cost: String,
    pub category: String,
    pub date: String,
}

impl EntryForm {
    pub fn new(
        description: impl Into<String>,
        cost: impl Into<String>,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            cost: cost.into(),
            category: category.into(),
            date: date.into(),
        }
    }

    pub fn has_empty_field(&self) -> bool {
        self.description.is_empty()
            || self.cost.is_empty()
            || self.category.is_empty()
            || self.date.is_empty()
    }

    /// Validate against the current lines and build a new entry
    ///
    /// Checks run in order and the first failure wins: duplicate
    /// description, empty field, cost format, date format.
    pub fn validate(&self, existing: &[BudgetEntry]) -> Result<BudgetEntry, BudgetError> {
        if existing.iter().any(|e| e.matches(&self.description)) {
            return Err(BudgetError::DuplicateDescription(self.description.clone()));
        }

        if self.has_empty_field() {
            return Err(BudgetError::MissingFields);
        }

        let cost = Cost::parse(&self.cost)?;
        let date = EntryDate::parse(&self.date)?;

        Ok(BudgetEntry::new(
            self.description.clone(),
            cost,
            self.category.clone(),
            date,
        ))
    }
}
