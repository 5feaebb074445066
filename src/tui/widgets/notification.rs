//! Toast notifications
//!
//! Short-lived messages shown in the corner after a tutorial ends or a
//! dashboard action is taken. Expiry is checked against a caller-supplied
//! clock so the queue can be driven from the tick loop and from tests.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

const DEFAULT_LIFETIME: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
}

impl NotificationKind {
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Self::Info => " i Info ",
            Self::Success => " + Done ",
            Self::Warning => " ! Heads up ",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    expires_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind, now: Instant) -> Self {
        Self {
            message: message.into(),
            kind,
            expires_at: now + DEFAULT_LIFETIME,
        }
    }

    pub fn info(message: impl Into<String>, now: Instant) -> Self {
        Self::new(message, NotificationKind::Info, now)
    }

    pub fn success(message: impl Into<String>, now: Instant) -> Self {
        Self::new(message, NotificationKind::Success, now)
    }

    pub fn warning(message: impl Into<String>, now: Instant) -> Self {
        Self::new(message, NotificationKind::Warning, now)
    }

    /// Keep the toast up for `lifetime` from `now` instead of the default
    pub fn lasting(mut self, lifetime: Duration, now: Instant) -> Self {
        self.expires_at = now + lifetime;
        self
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

pub struct NotificationWidget<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationWidget<'a> {
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }
}

impl Widget for NotificationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.notification.kind.color();
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(self.notification.kind.title())
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        Paragraph::new(self.notification.message.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

/// Toasts are shown one at a time, oldest first
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Drop expired toasts. Returns whether anything was removed.
    pub fn prune(&mut self, now: Instant) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| !n.is_expired(now));
        self.notifications.len() != before
    }

    pub fn current(&self) -> Option<&Notification> {
        self.notifications.first()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }
}

/// Top-right corner of `area`, sized for a short message
pub fn notification_area(area: Rect) -> Rect {
    let width = 40.min(area.width);
    let height = 4.min(area.height);
    Rect::new(area.right().saturating_sub(width), area.y, width, height)
}
