//! Application state machine.
//!
//! This module defines the [`App`] state machine, which manages the interactive
//! state of the key list completely decoupled from terminal and file I/O.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] instructions for the runtime to execute.
//!
//! # Responsibilities
//!
//! - Owns the [`SelectionStore`] loaded at startup.
//! - Tracks the cursor, help visibility and terminal dimensions.
//! - Turns a quit request into the regenerated file contents.

use sshtoggle_core::{SelectionStore, serialize};
use tracing::debug;

use crate::{AppAction, AppEvent, Intent, keymap};

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable without a terminal.
#[derive(Debug, Clone)]
pub struct App {
    /// Records and their selection.
    store: SelectionStore,
    /// Position of the highlighted entry. Always 0 for an empty list.
    cursor: usize,
    /// Whether the configuration was read successfully.
    loaded: bool,
    /// Full help instead of the short form.
    show_help: bool,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
    /// Transient status message. `None` if no message.
    status_message: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            store: SelectionStore::default(),
            cursor: 0,
            loaded: false,
            show_help: false,
            terminal_size: (80, 24),
            status_message: None,
        }
    }
}

impl App {
    /// Create an empty App awaiting the load result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Key(key) => match keymap::intent_for(key) {
                Some(intent) => self.apply(intent),
                None => vec![],
            },
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![AppAction::Render]
            },
            AppEvent::Loaded { scan } => {
                self.store = scan.store;
                self.cursor = 0;
                self.loaded = true;
                self.status_message = match scan.malformed.len() {
                    0 => None,
                    1 => Some("Dropped 1 malformed block".to_owned()),
                    n => Some(format!("Dropped {n} malformed blocks")),
                };
                vec![AppAction::Render]
            },
            AppEvent::LoadFailed { message } => {
                self.loaded = false;
                self.status_message = Some(format!("Error: {message}"));
                vec![AppAction::Render]
            },
        }
    }

    /// Carry out a user intent.
    pub fn apply(&mut self, intent: Intent) -> Vec<AppAction> {
        match intent {
            Intent::MoveUp => self.move_up(),
            Intent::MoveDown => self.move_down(),
            Intent::MoveFirst => self.move_to(0),
            Intent::MoveLast => self.move_to(self.store.len().saturating_sub(1)),
            Intent::Toggle => self.toggle(),
            Intent::ToggleHelp => {
                self.show_help = !self.show_help;
                vec![AppAction::Render]
            },
            Intent::Quit => self.quit(),
        }
    }

    /// Move the cursor up, wrapping from the first entry to the last.
    pub fn move_up(&mut self) -> Vec<AppAction> {
        let last = self.store.len().saturating_sub(1);
        self.cursor = if self.cursor == 0 { last } else { self.cursor - 1 };
        vec![AppAction::Render]
    }

    /// Move the cursor down, wrapping from the last entry to the first.
    pub fn move_down(&mut self) -> Vec<AppAction> {
        let next = self.cursor + 1;
        self.cursor = if next >= self.store.len() { 0 } else { next };
        vec![AppAction::Render]
    }

    /// Place the cursor on `position`, clamped to the list.
    pub fn move_to(&mut self, position: usize) -> Vec<AppAction> {
        self.cursor = position.min(self.store.len().saturating_sub(1));
        vec![AppAction::Render]
    }

    /// Flip the entry under the cursor.
    pub fn toggle(&mut self) -> Vec<AppAction> {
        match self.store.toggle(self.cursor) {
            Ok(_) => vec![AppAction::Render],
            Err(err) => {
                debug!(%err, "ignoring toggle");
                vec![]
            },
        }
    }

    /// Quit the application.
    ///
    /// Saves first if the configuration was loaded. A failed load never
    /// writes, so an unreadable file is left untouched.
    pub fn quit(&self) -> Vec<AppAction> {
        if self.loaded {
            vec![AppAction::Save { contents: serialize(&self.store) }, AppAction::Quit]
        } else {
            vec![AppAction::Quit]
        }
    }

    /// Records and their selection.
    pub fn store(&self) -> &SelectionStore {
        &self.store
    }

    /// Position of the highlighted entry.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the configuration was read successfully.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Whether the full help is shown.
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// Transient status message. `None` if no message.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }
}
