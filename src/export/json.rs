//! JSON export of the budget lines
//!
//! Wraps the stored list with schema and provenance metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::BudgetEntry;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Export document shared by the JSON and YAML writers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub entry_count: usize,

    /// Lines in stored order
    pub entries: Vec<BudgetEntry>,
}

impl EntryExport {
    pub fn new(entries: &[BudgetEntry]) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            entry_count: entries.len(),
            entries: entries.to_vec(),
        }
    }
}

/// Export the lines as a JSON document
pub fn export_json<W: Write>(entries: &[BudgetEntry], writer: &mut W, pretty: bool) -> BudgetResult<()> {
    let export = EntryExport::new(entries);

    let written = if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    };
    written.map_err(|e| BudgetError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| BudgetError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryForm;

    #[test]
    fn test_export_json() {
        let entries = vec![EntryForm::new("Rent", "1200.00", "Housing", "01/01/2024")
            .validate(&[])
            .unwrap()];

        let mut output = Vec::new();
        export_json(&entries, &mut output, true).unwrap();

        let parsed: EntryExport = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.entry_count, 1);
        assert_eq!(parsed.entries, entries);
    }
}
