//! Layout definitions for the TUI
//!
//! Top to bottom: alert banner, entry form, entry table, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Title, or the live alert when there is one
    pub header: Rect,
    pub form: Rect,
    pub entries: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header / alert
                Constraint::Length(6), // Four inputs plus borders
                Constraint::Min(4),    // Entries
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            form: chunks[1],
            entries: chunks[2],
            status_bar: chunks[3],
        }
    }
}
