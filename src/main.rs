use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_lines::cli::{
    handle_entry_command, handle_export_command, handle_log_command, EntryCommands, ExportFormat,
};
use budget_lines::config::{paths::BudgetPaths, settings::Settings};
use budget_lines::storage::Storage;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Track budget lines and their running total",
    long_about = "Add budget lines (description, cost, category, date), see them in a \
                  table with a running total, and delete them. Run without a \
                  subcommand to open the interactive interface."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    #[command(flatten)]
    Entry(EntryCommands),

    /// Export all budget lines
    Export {
        /// Export format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show recent changes from the audit log
    Log {
        /// Number of records to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let storage = Storage::new(paths)?;

    match cli.command {
        None | Some(Commands::Tui) => {
            budget_lines::tui::run_tui(&storage, &settings)?;
        }
        Some(Commands::Entry(cmd)) => {
            handle_entry_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Export {
            format,
            output,
            pretty,
        }) => {
            handle_export_command(&storage, format, output, pretty)?;
        }
        Some(Commands::Log { count }) => {
            handle_log_command(&storage, count)?;
        }
        Some(Commands::Config) => {
            let paths = storage.paths();
            if !paths.settings_file().exists() {
                settings.save(paths)?;
            }
            println!("budget-lines Configuration");
            println!("==========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Budget lines:     {}", storage.entries.path().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Alert duration:  {}s", settings.alert_duration_secs);
            println!("  Tick rate:       {}ms", settings.tick_rate_ms);
        }
    }

    Ok(())
}
