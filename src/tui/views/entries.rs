//! Entry table view
//!
//! One row per budget line in view order, with the running total as the
//! table footer.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::display::format_cost;
use crate::tui::app::{App, FocusedPanel};

/// Render the entry table
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::List;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" Budget Lines ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let widths = [
        Constraint::Min(20),    // Description
        Constraint::Length(12), // Cost
        Constraint::Length(16), // Category
        Constraint::Length(12), // Date
        Constraint::Length(3),  // Delete
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Description").style(bold),
        Cell::from("Cost").style(bold),
        Cell::from("Category").style(bold),
        Cell::from("Date").style(bold),
        Cell::from(""),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let symbol = &app.settings.currency_symbol;
    let rows: Vec<Row> = app
        .rows
        .iter()
        .map(|entry| {
            Row::new(vec![
                Cell::from(entry.description.clone()),
                Cell::from(format_cost(entry, symbol)),
                Cell::from(entry.category.clone()),
                Cell::from(entry.date.to_string()),
                Cell::from("[X]").style(Style::default().fg(Color::Red)),
            ])
        })
        .collect();

    let footer = Row::new(vec![
        Cell::from("Total").style(bold),
        Cell::from(app.total.clone()).style(bold.fg(Color::Green)),
    ]);

    let table = Table::new(rows, widths)
        .header(header)
        .footer(footer)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = TableState::default();
    if is_focused && !app.rows.is_empty() {
        state.select(Some(app.selected_row));
    }

    frame.render_stateful_widget(table, area, &mut state);
}
