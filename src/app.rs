//! Application state for the terminal host.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::editor::EditorBuffer;
use crate::events::Action;
use crate::log;
use crate::picker::EmojiPicker;
use crate::surface::TerminalSurface;
use crate::tui::interaction::InteractionRegistry;

pub struct App {
    pub picker: EmojiPicker<TerminalSurface>,
    /// Click targets registered by the last render
    pub interactions: InteractionRegistry,
    /// Tooltip of the region under the mouse
    pub hover: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(catalog: Arc<Catalog>, config: &Config) -> Self {
        let surface = TerminalSurface::new(config);
        Self {
            picker: EmojiPicker::new(catalog, surface).with_policy(config.invocation_policy()),
            interactions: InteractionRegistry::new(),
            hover: None,
            should_quit: false,
        }
    }

    pub fn editor(&self) -> &EditorBuffer {
        &self.picker.host().editor
    }

    fn editor_mut(&mut self) -> &mut EditorBuffer {
        &mut self.picker.host_mut().editor
    }

    /// Apply an action to the app state.
    pub fn apply(&mut self, action: Action) {
        if let Some(command) = action.as_command() {
            self.picker.dispatch(command);
            self.hover = None;
            return;
        }

        match action {
            Action::Quit => {
                log::log_event("quit");
                self.should_quit = true;
            }
            Action::HidePicker => self.picker.hide(),
            Action::Hover(tooltip) => self.hover = tooltip,
            Action::InputChar(c) => self.editor_mut().insert_char(c),
            Action::InputNewline => self.editor_mut().insert_char('\n'),
            Action::Paste(text) => self.editor_mut().insert_str(&text),
            Action::InputBackspace => self.editor_mut().backspace(),
            Action::InputDelete => self.editor_mut().delete(),
            Action::InputLeft => self.editor_mut().move_left(),
            Action::InputRight => self.editor_mut().move_right(),
            Action::InputHome => self.editor_mut().move_home(),
            Action::InputEnd => self.editor_mut().move_end(),
            Action::TogglePicker
            | Action::PickCategory(_)
            | Action::PickItem(_)
            | Action::None => {}
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::catalog::{Category, Item};
    use crate::picker::InvocationPolicy;

    pub(crate) fn test_app() -> App {
        let catalog = Catalog::new(vec![
            Category::new("people", "People", vec![Item::new("😀", "grin")]),
            Category::new("nature", "Nature", vec![Item::new("🐶", "dog")]),
        ])
        .unwrap();
        App::new(Arc::new(catalog), &Config::default())
    }

    #[test]
    fn test_pick_item_inserts_at_cursor() {
        let mut app = test_app();
        for c in "ab".chars() {
            app.apply(Action::InputChar(c));
        }
        app.apply(Action::InputLeft);

        app.apply(Action::TogglePicker);
        app.apply(Action::PickCategory("nature".to_string()));
        app.apply(Action::PickItem("🐶".to_string()));

        assert_eq!(app.editor().text(), "a🐶b");
        assert!(!app.picker.is_visible());
        assert!(app.picker.host().presented().is_none());
    }

    #[test]
    fn test_hide_keeps_category() {
        let mut app = test_app();
        app.apply(Action::TogglePicker);
        app.apply(Action::PickCategory("nature".to_string()));
        app.apply(Action::HidePicker);

        assert!(!app.picker.is_visible());
        assert_eq!(app.picker.active_category_id(), "nature");

        app.apply(Action::TogglePicker);
        let tree = app.picker.host().mounted().unwrap();
        assert_eq!(tree.active_tab().unwrap().id, "nature");
    }

    #[test]
    fn test_unknown_category_is_ignored() {
        let mut app = test_app();
        app.apply(Action::TogglePicker);
        app.apply(Action::PickCategory("unknown".to_string()));

        assert!(app.picker.is_visible());
        assert_eq!(app.picker.active_category_id(), "people");
    }

    #[test]
    fn test_policy_from_config() {
        let config = Config { strict_invocations: Some(false), ..Default::default() };
        let catalog = Arc::new(Catalog::builtin().unwrap());
        let mut app = App::new(catalog, &config);
        assert_eq!(app.picker.policy(), InvocationPolicy::Lenient);

        // hidden picker: ignored, nothing inserted
        app.apply(Action::PickItem("😀".to_string()));
        assert_eq!(app.editor().text(), "");
    }

    #[test]
    fn test_quit_and_paste() {
        let mut app = test_app();
        app.apply(Action::Paste("one\ntwo".to_string()));
        assert_eq!(app.editor().text(), "one\ntwo");

        app.apply(Action::Quit);
        assert!(app.should_quit);
    }
}
