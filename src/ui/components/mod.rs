//! Reusable UI components

pub mod dialogs;
pub mod journal_panel;
pub mod notification;
pub mod status_bar;
pub mod story_view;

// Component exports
pub use journal_panel::JournalPanel;
pub use notification::{Notification, NotificationKind, NotificationPhase, NotificationStack};
pub use status_bar::StatusBar;
pub use story_view::StoryView;
