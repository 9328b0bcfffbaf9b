//! budget-lines - a terminal budget-line tracker
//!
//! Budget lines (description, cost, category, date) are added through a
//! form, listed in a table with a running total, and deleted by row. The
//! list is persisted as JSON so it survives restarts.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management and user settings
//! - `error`: Custom error types
//! - `models`: Budget line, validated cost and date
//! - `storage`: JSON key-value storage layer
//! - `services`: Validation and orchestration
//! - `audit`: Audit logging system
//! - `display`: Table formatting for the CLI
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_lines::config::{paths::BudgetPaths, settings::Settings};
//! use budget_lines::models::EntryForm;
//! use budget_lines::services::EntryService;
//! use budget_lines::storage::Storage;
//!
//! let paths = BudgetPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths)?;
//!
//! let service = EntryService::new(&storage);
//! service.submit(&EntryForm::new("Rent", "1200.00", "Housing", "01/01/2024"))?;
//! println!("{}", service.total(&settings.currency_symbol)?);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::BudgetError;
