//! Central event handler that coordinates keyboard, mouse, and paste events.

use crossterm::event::{Event, KeyEventKind};

use crate::app::App;
use crate::clipboard::normalize_paste;

use super::Action;
use super::keyboard::handle_key_event;
use super::mouse::handle_mouse_event;

/// Central event handler for the application.
pub struct EventHandler;

impl EventHandler {
    /// Handle a crossterm event (keyboard, mouse, paste) and return an action.
    pub fn handle_event(app: &App, event: &Event) -> Action {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, *key),
            Event::Mouse(mouse) => handle_mouse_event(app, *mouse),
            Event::Paste(text) => Action::Paste(normalize_paste(text)),
            _ => Action::None,
        }
    }
}
