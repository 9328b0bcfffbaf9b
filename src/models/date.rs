//! Entry date type
//!
//! Dates are stored as the `MM/DD/YYYY` text the user typed, after checking
//! that the text has exactly that shape and names a real calendar day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::BudgetError;

/// chrono format matching `MM/DD/YYYY`
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// A validated `MM/DD/YYYY` date string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryDate(String);

impl EntryDate {
    /// Parse and validate a date string
    ///
    /// Two-digit month, two-digit day, four-digit year, slash separated.
    /// `1/13/2020` and `02/30/2024` are both rejected.
    pub fn parse(s: &str) -> Result<Self, BudgetError> {
        if has_strict_shape(s) && NaiveDate::parse_from_str(s, DATE_FORMAT).is_ok() {
            Ok(Self(s.to_string()))
        } else {
            Err(BudgetError::InvalidDate(s.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `DD/DD/DDDD` with ASCII digits only
fn has_strict_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'/',
            _ => b.is_ascii_digit(),
        })
}
