//! Entry form view

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::{App, FocusedPanel};
use crate::tui::form::FormField;

const LABEL_WIDTH: usize = 11;

/// Render the four input fields
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Form;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" Add Budget Line ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let lines: Vec<Line> = FormField::ALL
        .iter()
        .map(|&field| {
            let focused = is_focused && app.form.focused_field == field;
            app.form.input(field).to_line(focused, LABEL_WIDTH)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
