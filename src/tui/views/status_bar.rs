//! Status bar view
//!
//! Line count and key hints for the focused panel

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, FocusedPanel};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let count = format!(" {} line(s) ", app.rows.len());

    let hints = match app.focused_panel {
        FocusedPanel::Form => " Tab:Next field  Enter:Add  Esc:List  Ctrl+C:Quit ",
        FocusedPanel::List => " j/k:Select  J/K:Move  d:Delete  a:Add  q:Quit ",
    };

    let left_len = count.chars().count();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());

    let line = Line::from(vec![
        Span::styled(count, Style::default().fg(Color::Cyan)),
        Span::raw(" ".repeat(padding_len.max(1))),
        Span::styled(hints, Style::default().fg(Color::White)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
