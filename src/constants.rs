//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Diagnostic Messages
/// Logged once when the screen finishes initializing
pub const SCREEN_READY: &str = "📖 Story screen ready";

// Date Formatting
/// Marker returned for input that cannot be parsed into a valid date
pub const INVALID_DATE: &str = "Invalid Date";

// Notification Timing
/// How long a notification stays fully visible, in milliseconds
pub const NOTIFICATION_DISPLAY_MS: u64 = 3000;
/// How long the fade-out stage lasts before removal, in milliseconds
pub const NOTIFICATION_FADE_MS: u64 = 300;
/// Rows a fading notification is shifted upwards
pub const NOTIFICATION_FADE_RISE: u16 = 1;

// Notification Layout
/// Maximum toast width in columns
pub const NOTIFICATION_MAX_WIDTH: u16 = 40;
/// Height of a single toast including its border
pub const NOTIFICATION_HEIGHT: u16 = 3;

// UI Messages
pub const SUCCESS_JOURNAL_SAVED: &str = "✅ Journal entry saved";
pub const INFO_NO_NEW_CHAPTERS: &str = "📖 No new chapters available";
pub const DIALOG_TITLE_LEAVE: &str = "⚠️  Unsaved Changes";
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

// Form Identifiers
/// Id of the journal form watched by the exit guard on the demo screen
pub const JOURNAL_FORM_ID: &str = "journal";
