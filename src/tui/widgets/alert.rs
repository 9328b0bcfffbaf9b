//! Transient alert banner
//!
//! At most one alert is live. Showing a new alert replaces the pending one,
//! which also cancels its scheduled removal.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Styling of an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Danger,
}

impl AlertKind {
    pub fn color(&self) -> Color {
        match self {
            Self::Success => Color::LightBlue,
            Self::Danger => Color::Red,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Danger => "Error",
        }
    }
}

/// Used when the configured duration does not fit in an `Instant`
pub const DEFAULT_ALERT_DURATION: Duration = Duration::from_secs(3);

/// A message with a removal deadline
#[derive(Debug, Clone)]
pub struct Alert {
    pub message: String,
    pub kind: AlertKind,
    /// When the alert is due to disappear
    pub expires_at: Instant,
}

impl Alert {
    pub fn new(message: impl Into<String>, kind: AlertKind, duration: Duration) -> Self {
        let now = Instant::now();
        let expires_at = now
            .checked_add(duration)
            .unwrap_or(now + DEFAULT_ALERT_DURATION);

        Self {
            message: message.into(),
            kind,
            expires_at,
        }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Holder for the single live alert
#[derive(Debug, Default)]
pub struct AlertSlot {
    current: Option<Alert>,
}

impl AlertSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `alert`, discarding any pending one together with its deadline
    pub fn show(&mut self, alert: Alert) {
        self.current = Some(alert);
    }

    /// Remove the alert if its deadline has passed; returns whether it did
    pub fn expire(&mut self, now: Instant) -> bool {
        if self.current.as_ref().is_some_and(|a| a.is_expired_at(now)) {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Alert> {
        self.current.as_ref()
    }
}

/// Widget for rendering an alert
pub struct AlertWidget<'a> {
    alert: &'a Alert,
}

impl<'a> AlertWidget<'a> {
    pub fn new(alert: &'a Alert) -> Self {
        Self { alert }
    }
}

impl<'a> Widget for AlertWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.alert.kind.color();

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} ", self.alert.kind.title()))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        Paragraph::new(self.alert.message.as_str())
            .style(Style::default().fg(Color::White).bg(color))
            .block(block)
            .render(area, buf);
    }
}
