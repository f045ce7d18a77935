//! Application state for the story screen

use crate::config::Config;
use crate::constants::{JOURNAL_FORM_ID, SUCCESS_JOURNAL_SAVED};
use crate::ui::components::notification::NotificationStack;
use crate::ui::forms::{FormExitGuard, FormRegistry};

use std::time::Duration;

/// Main application state
pub struct App {
    /// Forms registered on this screen
    pub forms: FormRegistry,
    /// Guard watching the journal form for unsaved input
    pub exit_guard: FormExitGuard,
    /// Live notification toasts
    pub notifications: NotificationStack,
    /// Title of the current story scene
    pub scene_title: String,
    /// Text of the current story scene
    pub scene_text: String,
    /// Timestamp of the last journal save, stored ISO-style
    pub last_saved_at: Option<String>,
    /// Whether keystrokes currently go to the journal form
    pub editing: bool,
    /// Whether the leave confirmation dialog is showing
    pub confirming_exit: bool,
    /// Whether the application should exit
    pub should_quit: bool,
}

impl App {
    /// Create the application state for a fresh screen
    pub fn new(config: &Config) -> Self {
        let mut forms = FormRegistry::new();
        forms.register(JOURNAL_FORM_ID);
        let exit_guard = FormExitGuard::install(&mut forms, JOURNAL_FORM_ID);

        let notifications = NotificationStack::with_timing(
            Duration::from_millis(config.notifications.display_ms),
            Duration::from_millis(config.notifications.fade_ms),
        );

        Self {
            forms,
            exit_guard,
            notifications,
            scene_title: "Chapter One".to_string(),
            scene_text: "The corridor splits in two. A faint light flickers somewhere \
                         to the left; to the right, only the sound of dripping water.\n\n\
                         Write down what you decide before you move on."
                .to_string(),
            last_saved_at: None,
            editing: false,
            confirming_exit: false,
            should_quit: false,
        }
    }

    /// Handle a quit attempt, intercepting it when the journal is dirty
    pub fn request_quit(&mut self) {
        if self.exit_guard.should_block_exit() {
            self.confirming_exit = true;
        } else {
            self.should_quit = true;
        }
    }

    /// Save the journal entry and notify the user
    ///
    /// Saving does not reset the guard flag; once the form has been edited
    /// the flag stays set for the screen's lifetime.
    pub fn save_journal(&mut self) {
        self.last_saved_at = Some(chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string());
        self.notifications.success(SUCCESS_JOURNAL_SAVED);
        log::info!("journal entry saved");
    }
}
