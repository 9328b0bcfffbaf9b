//! Audit logging for budget-lines
//!
//! Every write to the entry store is recorded in an append-only JSONL file
//! next to the settings. This is the application's operation log; the TUI
//! owns the terminal so nothing is printed while it runs.
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_lines::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create("budgets", &entry.description, &entry))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
