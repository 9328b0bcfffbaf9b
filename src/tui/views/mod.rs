//! TUI Views module
//!
//! The single screen: header or alert, entry form, entry table, status bar.

pub mod entries;
pub mod form;
pub mod status_bar;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::App;
use super::layout::AppLayout;
use super::widgets::alert::AlertWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, app, layout.header);
    form::render(frame, app, layout.form);
    entries::render(frame, app, layout.entries);
    status_bar::render(frame, app, layout.status_bar);
}

/// The live alert takes the header's place while it is shown
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(alert) = app.alert.current() {
        frame.render_widget(AlertWidget::new(alert), area);
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let title = Paragraph::new("Budget Tracker")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(block);

    frame.render_widget(title, area);
}
