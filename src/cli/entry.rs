//! Budget line CLI commands
//!
//! The same add/remove/total operations as the TUI, for scripting.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_entry_table;
use crate::error::BudgetResult;
use crate::models::EntryForm;
use crate::services::EntryService;
use crate::storage::Storage;

/// Budget line subcommands
#[derive(Subcommand)]
pub enum EntryCommands {
    /// Add a budget line
    Add {
        /// Unique description
        #[arg(allow_hyphen_values = true)]
        description: String,
        /// Cost with a decimal point, e.g. 5.00
        #[arg(allow_hyphen_values = true)]
        cost: String,
        /// Category
        #[arg(allow_hyphen_values = true)]
        category: String,
        /// Date as MM/DD/YYYY
        #[arg(allow_hyphen_values = true)]
        date: String,
    },
    /// List all budget lines with the running total
    List,
    /// Remove every budget line with this description
    #[command(alias = "rm")]
    Remove {
        /// Description of the line to remove
        #[arg(allow_hyphen_values = true)]
        description: String,
    },
    /// Print the running total
    Total,
}

/// Handle a budget line command
pub fn handle_entry_command(
    storage: &Storage,
    settings: &Settings,
    cmd: EntryCommands,
) -> BudgetResult<()> {
    let service = EntryService::new(storage);

    match cmd {
        EntryCommands::Add {
            description,
            cost,
            category,
            date,
        } => {
            let form = EntryForm::new(description, cost, category, date);
            service.submit(&form)?;
            println!("Budget Line Added");
            println!("Total: {}", service.total(&settings.currency_symbol)?);
        }

        EntryCommands::List => {
            let entries = service.list()?;
            print!(
                "{}",
                format_entry_table(&entries, &settings.currency_symbol)
            );
        }

        EntryCommands::Remove { description } => {
            let removed = service.remove(&description)?;
            println!("Budget Line Removed");
            if removed.len() > 1 {
                println!("({} lines shared this description)", removed.len());
            }
            println!("Total: {}", service.total(&settings.currency_symbol)?);
        }

        EntryCommands::Total => {
            println!("{}", service.total(&settings.currency_symbol)?);
        }
    }

    Ok(())
}
