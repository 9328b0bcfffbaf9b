//! Custom error types for budget-lines
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. The validation variants render as the
//! exact alert text shown to the user.

use thiserror::Error;

/// The main error type for budget-lines operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Description already present among stored entries
    #[error("Description already used - please use a different description")]
    DuplicateDescription(String),

    /// At least one form field was left empty
    #[error("Please fill in all fields")]
    MissingFields,

    /// Cost text does not match the accepted decimal pattern
    #[error("Error - please make sure the cost is formatted with 2 decimal points (i.e., 5.00 rather than 5)")]
    InvalidCost(String),

    /// Date text is not a real MM/DD/YYYY calendar date
    #[error("Error - please make sure the date is formatted as MM/DD/YYYY")]
    InvalidDate(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl BudgetError {
    /// Create a "not found" error for budget lines
    pub fn entry_not_found(description: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Budget line",
            identifier: description.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error came from validating user input
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::DuplicateDescription(_)
                | Self::MissingFields
                | Self::InvalidCost(_)
                | Self::InvalidDate(_)
        )
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for budget-lines operations
pub type BudgetResult<T> = Result<T, BudgetError>;
