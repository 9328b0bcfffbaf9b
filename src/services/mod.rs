//! Service layer for budget-lines
//!
//! Business rules on top of the storage layer.

pub mod entry;

pub use entry::EntryService;
