//! Transient notification toasts
//!
//! Notifications are short-lived messages stacked in the top-right corner of
//! the screen. Each one goes through a two-stage lifecycle computed from its
//! creation instant: fully visible, then a brief fade-out (rendered dim and
//! shifted up one row), then removed. The render loop drives the lifecycle
//! by calling [`NotificationStack::tick`] every pass, so removal is
//! guaranteed once a notification has been shown.

use std::time::{Duration, Instant};

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::constants::{NOTIFICATION_DISPLAY_MS, NOTIFICATION_FADE_MS, NOTIFICATION_FADE_RISE};

use super::super::layout::LayoutManager;

/// Category of a notification, selecting its visual style
///
/// Callers pass free-form tags; unknown tags are carried through in
/// [`NotificationKind::Other`] rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
    Other(String),
}

impl NotificationKind {
    /// Map a caller-supplied tag to a kind
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "info" => Self::Info,
            "success" => Self::Success,
            "warning" => Self::Warning,
            "error" => Self::Error,
            other => Self::Other(other.to_string()),
        }
    }

    /// The tag naming this kind's presentation style
    pub fn tag(&self) -> &str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Other(tag) => tag,
        }
    }

    /// Border and text style for this kind
    pub fn style(&self) -> Style {
        let color = match self {
            Self::Info => Color::Cyan,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
            Self::Other(_) => Color::Gray,
        };
        Style::default().fg(color)
    }
}

/// Lifecycle stage of a notification at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    /// Fully visible
    Visible,
    /// Fade-out stage: rendered dim and shifted up
    Fading,
    /// Past both stages, due for removal
    Expired,
}

/// A single transient message owned by the stack for its lifetime
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    created_at: Instant,
}

impl Notification {
    /// Compute the lifecycle stage at `now` given the stack's stage durations
    fn phase_at(&self, now: Instant, display: Duration, fade: Duration) -> NotificationPhase {
        let age = now.saturating_duration_since(self.created_at);
        if age < display {
            NotificationPhase::Visible
        } else if age < display + fade {
            NotificationPhase::Fading
        } else {
            NotificationPhase::Expired
        }
    }
}

/// Owner of all live notifications and their stage durations
pub struct NotificationStack {
    items: Vec<Notification>,
    display: Duration,
    fade: Duration,
}

impl NotificationStack {
    pub fn new() -> Self {
        Self::with_timing(
            Duration::from_millis(NOTIFICATION_DISPLAY_MS),
            Duration::from_millis(NOTIFICATION_FADE_MS),
        )
    }

    /// Create a stack with custom stage durations (from configuration)
    pub fn with_timing(display: Duration, fade: Duration) -> Self {
        Self {
            items: Vec::new(),
            display,
            fade,
        }
    }

    /// Show a notification; it is live immediately
    ///
    /// Concurrent notifications are independent entries and never interact.
    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.items.push(Notification {
            message: message.into(),
            kind,
            created_at: Instant::now(),
        });
    }

    /// Show an informational notification
    pub fn info(&mut self, message: impl Into<String>) {
        self.push(message, NotificationKind::Info);
    }

    /// Show a success notification
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(message, NotificationKind::Success);
    }

    /// Show an error notification
    pub fn error(&mut self, message: impl Into<String>) {
        self.push(message, NotificationKind::Error);
    }

    /// Drop every notification past its fade-out stage
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Drop expired notifications as of `now` (injectable for tests)
    pub fn tick_at(&mut self, now: Instant) {
        let (display, fade) = (self.display, self.fade);
        self.items
            .retain(|n| n.phase_at(now, display, fade) != NotificationPhase::Expired);
    }

    /// Lifecycle stage of the notification at `index` as of `now`
    pub fn phase_at(&self, index: usize, now: Instant) -> Option<NotificationPhase> {
        self.items.get(index).map(|n| n.phase_at(now, self.display, self.fade))
    }

    /// Number of live notifications
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Live notifications, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    /// Render the toast column in the top-right corner
    pub fn render(&self, f: &mut Frame) {
        let now = Instant::now();

        for (index, notification) in self.items.iter().enumerate() {
            let phase = notification.phase_at(now, self.display, self.fade);
            if phase == NotificationPhase::Expired {
                continue;
            }

            let mut area = LayoutManager::notification_rect(f.area(), index);
            if area.height == 0 {
                continue;
            }

            let mut style = notification.kind.style();
            if phase == NotificationPhase::Fading {
                // TUI analog of the fade-out: dim and rise one row
                style = style.add_modifier(Modifier::DIM);
                area.y = area.y.saturating_sub(NOTIFICATION_FADE_RISE);
            }

            f.render_widget(Clear, area);
            let toast = Paragraph::new(notification.message.as_str())
                .block(Block::default().borders(Borders::ALL).style(style))
                .alignment(Alignment::Left)
                .style(style);
            f.render_widget(toast, area);
        }
    }
}

impl Default for NotificationStack {
    fn default() -> Self {
        Self::new()
    }
}
