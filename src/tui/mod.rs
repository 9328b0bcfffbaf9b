//! Terminal User Interface module
//!
//! A single-screen TUI built on ratatui: a form to add budget lines above a
//! table of the stored lines and their running total.

pub mod app;
pub mod controller;
pub mod event;
pub mod form;
pub mod handler;
pub mod layout;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
