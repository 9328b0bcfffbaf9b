//! CLI commands for data export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::{BudgetError, BudgetResult};
use crate::export::{export_csv, export_json, export_yaml};
use crate::services::EntryService;
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format
    Csv,
    /// JSON format with export metadata
    Json,
    /// YAML format with export metadata
    Yaml,
}

/// Write every budget line to `output`, or stdout when no file is given
pub fn handle_export_command(
    storage: &Storage,
    format: ExportFormat,
    output: Option<PathBuf>,
    pretty: bool,
) -> BudgetResult<()> {
    let entries = EntryService::new(storage).list()?;

    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                BudgetError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_entries(&entries, format, &mut writer, pretty)?;
            writer.flush()?;
            eprintln!("Exported {} budget lines to: {}", entries.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_entries(&entries, format, &mut writer, pretty)?;
            writer.flush()?;
        }
    }

    Ok(())
}

fn write_entries<W: Write>(
    entries: &[crate::models::BudgetEntry],
    format: ExportFormat,
    writer: &mut W,
    pretty: bool,
) -> BudgetResult<()> {
    match format {
        ExportFormat::Csv => export_csv(entries, writer),
        ExportFormat::Json => export_json(entries, writer, pretty),
        ExportFormat::Yaml => export_yaml(entries, writer),
    }
}
