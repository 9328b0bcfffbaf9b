//! Budget line display formatting
//!
//! Formats the stored lines as a table for the CLI, mirroring the columns of
//! the TUI table.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{format_total, BudgetEntry};

/// One table row as printed by `budget list`
#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Cost")]
    cost: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Date")]
    date: String,
}

/// Format the lines as a table followed by the running total
pub fn format_entry_table(entries: &[BudgetEntry], currency_symbol: &str) -> String {
    if entries.is_empty() {
        return "No budget lines yet.\n\nRun 'budget add' or 'budget tui' to create one.\n"
            .to_string();
    }

    let rows = entries.iter().map(|e| EntryRow {
        description: e.description.clone(),
        cost: format_cost(e, currency_symbol),
        category: e.category.clone(),
        date: e.date.to_string(),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());

    format!(
        "{}\n\nTotal: {}\n",
        table,
        format_total(entries.iter().map(|e| &e.cost), currency_symbol)
    )
}

/// Cost cell text (`$12.50`)
pub fn format_cost(entry: &BudgetEntry, currency_symbol: &str) -> String {
    format!("{}{}", currency_symbol, entry.cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryForm;

    #[test]
    fn test_empty_table() {
        let output = format_entry_table(&[], "$");
        assert!(output.starts_with("No budget lines yet."));
    }

    #[test]
    fn test_table_has_rows_and_total() {
        let entries = vec![
            EntryForm::new("Lunch", "5.00", "Food", "01/13/2020")
                .validate(&[])
                .unwrap(),
            EntryForm::new("Coffee", "3.5", "Food", "01/14/2020")
                .validate(&[])
                .unwrap(),
        ];

        let output = format_entry_table(&entries, "$");
        assert!(output.contains("Description"));
        assert!(output.contains("Lunch"));
        assert!(output.contains("$3.5"));
        assert!(output.contains("Total: $8.50"));
    }
}
