//! Export module for budget-lines
//!
//! - CSV: spreadsheet-compatible rows
//! - JSON: machine-readable document with metadata
//! - YAML: human-readable document with metadata

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_csv;
pub use json::{export_json, EntryExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;
