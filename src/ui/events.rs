//! Event handling and key bindings

use super::app::App;
use crate::constants::{INFO_NO_NEW_CHAPTERS, JOURNAL_FORM_ID};
use crossterm::event::{Event, KeyCode, KeyEventKind};

/// Handle all user input events
pub fn handle_events(event: Event, app: &mut App) -> Result<bool, anyhow::Error> {
    if let Event::Key(key) = event {
        if key.kind == KeyEventKind::Press {
            // Handle leave confirmation dialog
            if app.confirming_exit {
                return handle_leave_confirmation(key, app);
            }

            // Handle journal editing mode
            if app.editing {
                return handle_editing_mode(key, app);
            }

            // Handle normal navigation and actions
            return handle_normal_mode(key, app);
        }
    }
    Ok(false)
}

/// Handle events when the leave confirmation dialog is open
fn handle_leave_confirmation(key: crossterm::event::KeyEvent, app: &mut App) -> Result<bool, anyhow::Error> {
    match key.code {
        KeyCode::Char('y' | 'Y') => {
            // Confirm leaving despite unsaved changes
            app.confirming_exit = false;
            app.should_quit = true;
            Ok(true)
        }
        KeyCode::Char('n' | 'N') | KeyCode::Esc => {
            // Stay on the screen
            app.confirming_exit = false;
            Ok(true)
        }
        _ => Ok(false), // Ignore other keys during confirmation
    }
}

/// Handle events while keystrokes go to the journal form
fn handle_editing_mode(key: crossterm::event::KeyEvent, app: &mut App) -> Result<bool, anyhow::Error> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            app.editing = false;
            Ok(true)
        }
        KeyCode::Backspace => {
            if let Some(form) = app.forms.form_mut(JOURNAL_FORM_ID) {
                form.backspace();
            }
            Ok(true)
        }
        KeyCode::Char(c) => {
            if let Some(form) = app.forms.form_mut(JOURNAL_FORM_ID) {
                form.insert_char(c);
            }
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// Handle normal mode key bindings
fn handle_normal_mode(key: crossterm::event::KeyEvent, app: &mut App) -> Result<bool, anyhow::Error> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.request_quit();
            Ok(true)
        }
        KeyCode::Char('e') => {
            app.editing = true;
            Ok(true)
        }
        KeyCode::Char('s') => {
            app.save_journal();
            Ok(true)
        }
        KeyCode::Char('n') => {
            app.notifications.info(INFO_NO_NEW_CHAPTERS);
            Ok(true)
        }
        _ => Ok(false),
    }
}
