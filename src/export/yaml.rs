//! YAML export of the budget lines

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::export::json::EntryExport;
use crate::models::BudgetEntry;

/// Export the lines as a human-readable YAML document
pub fn export_yaml<W: Write>(entries: &[BudgetEntry], writer: &mut W) -> BudgetResult<()> {
    let export = EntryExport::new(entries);

    writeln!(writer, "# budget-lines export")
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| BudgetError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}
