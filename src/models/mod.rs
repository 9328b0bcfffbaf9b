//! Core data models for budget-lines
//!
//! A budget line plus the two validated string types it carries, and the
//! raw form input that produces it.

pub mod cost;
pub mod date;
pub mod entry;

pub use cost::{format_total, Cost};
pub use date::EntryDate;
pub use entry::{BudgetEntry, EntryForm};
