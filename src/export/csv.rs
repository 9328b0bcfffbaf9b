//! CSV export of the budget lines
//!
//! One row per line with a header matching the stored field names.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::BudgetEntry;

/// Export the lines to CSV
pub fn export_csv<W: Write>(entries: &[BudgetEntry], writer: &mut W) -> BudgetResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    // Written explicitly so an empty list still gets a header row
    csv_writer
        .write_record(["description", "cost", "category", "date"])
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    for entry in entries {
        csv_writer
            .write_record([
                entry.description.as_str(),
                entry.cost.as_str(),
                entry.category.as_str(),
                entry.date.as_str(),
            ])
            .map_err(|e| BudgetError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}
