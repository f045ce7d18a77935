//! Form state tracking and the unsaved-changes exit guard
//!
//! Screens register their editable forms in a [`FormRegistry`]. A
//! [`FormExitGuard`] installed on a form id owns a private dirty flag that is
//! set by the first input event on that form and never resets for the life of
//! the guard. The quit path asks the guard before letting the user leave.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A named editable form with a single text value
pub struct Form {
    pub id: String,
    pub value: String,
    watchers: Vec<Arc<AtomicBool>>,
}

impl Form {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            value: String::new(),
            watchers: Vec::new(),
        }
    }

    /// Append a character to the form value
    pub fn insert_char(&mut self, c: char) {
        self.value.push(c);
        self.notify_input();
    }

    /// Remove the last character from the form value
    pub fn backspace(&mut self) {
        self.value.pop();
        self.notify_input();
    }

    /// Replace the whole form value
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.notify_input();
    }

    /// Signal an input event to every watcher attached to this form
    fn notify_input(&self) {
        for watcher in &self.watchers {
            watcher.store(true, Ordering::Relaxed);
        }
    }

    fn watch(&mut self, flag: Arc<AtomicBool>) {
        self.watchers.push(flag);
    }
}

/// Registry of the forms present on the current screen
#[derive(Default)]
pub struct FormRegistry {
    forms: HashMap<String, Form>,
}

impl FormRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a form under the given id, returning a handle to it
    ///
    /// Registering an id twice keeps the existing form and its watchers.
    pub fn register(&mut self, id: &str) -> &mut Form {
        self.forms.entry(id.to_string()).or_insert_with(|| Form::new(id))
    }

    /// Get a mutable handle to a registered form
    pub fn form_mut(&mut self, id: &str) -> Option<&mut Form> {
        self.forms.get_mut(id)
    }

    /// Get a shared handle to a registered form
    pub fn form(&self, id: &str) -> Option<&Form> {
        self.forms.get(id)
    }
}

/// Guard that blocks leaving the screen while a watched form has unsaved input
///
/// Each install owns an isolated flag; installing several guards on the same
/// form id attaches redundant watchers, each with its own independent flag.
pub struct FormExitGuard {
    changed: Arc<AtomicBool>,
}

impl FormExitGuard {
    /// Install a guard watching the form with the given id
    ///
    /// If no form with that id is registered, nothing is attached and the
    /// guard stays clean forever. The caller is not notified; leaving the
    /// screen simply remains unblocked.
    pub fn install(registry: &mut FormRegistry, form_id: &str) -> Self {
        let changed = Arc::new(AtomicBool::new(false));

        if let Some(form) = registry.form_mut(form_id) {
            form.watch(Arc::clone(&changed));
        }

        Self { changed }
    }

    /// Whether the watched form has received any input since install
    ///
    /// Sticky: once set it stays set for the life of the guard.
    pub fn is_dirty(&self) -> bool {
        self.changed.load(Ordering::Relaxed)
    }

    /// Whether a quit attempt should be intercepted with a confirmation
    pub fn should_block_exit(&self) -> bool {
        self.is_dirty()
    }
}
