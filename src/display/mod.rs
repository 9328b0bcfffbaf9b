//! Display formatting for terminal output

pub mod entry;

pub use entry::{format_cost, format_entry_table};
