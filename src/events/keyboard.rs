//! Keyboard event handling.
//!
//! The picker itself has no keyboard navigation; keys edit the buffer, and a
//! few chords drive the picker and the app.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('e') => Action::TogglePicker,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Esc if app.picker.is_visible() => Action::HidePicker,
        KeyCode::Esc => Action::None,
        KeyCode::Enter => Action::InputNewline,
        KeyCode::Backspace => Action::InputBackspace,
        KeyCode::Delete => Action::InputDelete,
        KeyCode::Left => Action::InputLeft,
        KeyCode::Right => Action::InputRight,
        KeyCode::Home => Action::InputHome,
        KeyCode::End => Action::InputEnd,
        KeyCode::Char(c) => Action::InputChar(c),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_control_chords() {
        let app = test_app();
        assert_eq!(handle_key_event(&app, ctrl('e')), Action::TogglePicker);
        assert_eq!(handle_key_event(&app, ctrl('c')), Action::Quit);
        assert_eq!(handle_key_event(&app, ctrl('q')), Action::Quit);
        assert_eq!(handle_key_event(&app, ctrl('x')), Action::None);
    }

    #[test]
    fn test_escape_only_hides_visible_picker() {
        let mut app = test_app();
        assert_eq!(handle_key_event(&app, key(KeyCode::Esc)), Action::None);

        app.picker.show();
        assert_eq!(handle_key_event(&app, key(KeyCode::Esc)), Action::HidePicker);
    }

    #[test]
    fn test_editing_keys() {
        let app = test_app();
        assert_eq!(handle_key_event(&app, key(KeyCode::Char('x'))), Action::InputChar('x'));
        assert_eq!(
            handle_key_event(&app, KeyEvent::new(KeyCode::Char('X'), KeyModifiers::SHIFT)),
            Action::InputChar('X')
        );
        assert_eq!(handle_key_event(&app, key(KeyCode::Enter)), Action::InputNewline);
        assert_eq!(handle_key_event(&app, key(KeyCode::Backspace)), Action::InputBackspace);
        assert_eq!(handle_key_event(&app, key(KeyCode::Home)), Action::InputHome);
    }
}
