//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents; the App applies them.

use crate::picker::Command;

/// Actions that can be dispatched from event handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // === Application ===
    /// Quit the application
    Quit,

    // === Picker ===
    /// Show the picker if hidden, hide it if visible
    TogglePicker,
    /// Hide the picker if visible
    HidePicker,
    /// Switch the picker to a category
    PickCategory(String),
    /// Insert an item and close the picker
    PickItem(String),
    /// Hover text for the status bar
    Hover(Option<String>),

    // === Editor ===
    /// Add character at the cursor
    InputChar(char),
    /// Insert a line break
    InputNewline,
    /// Insert pasted text
    Paste(String),
    /// Delete character before cursor
    InputBackspace,
    /// Delete character at cursor
    InputDelete,
    /// Move cursor left
    InputLeft,
    /// Move cursor right
    InputRight,
    /// Move cursor to start of line
    InputHome,
    /// Move cursor to end of line
    InputEnd,

    /// No action
    None,
}

impl Action {
    /// The widget command this action maps to, if any.
    pub fn as_command(&self) -> Option<Command> {
        match self {
            Action::TogglePicker => Some(Command::Toggle),
            Action::PickCategory(id) => Some(Command::PickCategory(id.clone())),
            Action::PickItem(value) => Some(Command::PickItem(value.clone())),
            _ => None,
        }
    }
}
