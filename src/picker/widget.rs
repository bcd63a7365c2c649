//! The picker widget and its typed command surface.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::error::{PickerError, PickerResult};
use crate::log;

use super::host::Host;
use super::render::{render, PresentationTree};
use super::state::PickerState;

/// What to do when the host breaks the calling contract
/// (e.g. picking an item from a hidden widget).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationPolicy {
    /// Panic, so the bug shows up during development
    Strict,
    /// Log and ignore
    Lenient,
}

impl Default for InvocationPolicy {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            InvocationPolicy::Strict
        } else {
            InvocationPolicy::Lenient
        }
    }
}

/// Commands a host can send to the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Toggle,
    PickCategory(String),
    PickItem(String),
}

/// Whether the host currently holds a tree matching the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Surface {
    Unbuilt,
    Current,
    Stale,
}

/// A category picker bound to one host surface.
pub struct EmojiPicker<H: Host> {
    catalog: Arc<Catalog>,
    state: PickerState,
    host: H,
    policy: InvocationPolicy,
    surface: Surface,
}

impl<H: Host> EmojiPicker<H> {
    pub fn new(catalog: Arc<Catalog>, host: H) -> Self {
        let state = PickerState::new(&catalog);
        Self {
            catalog,
            state,
            host,
            policy: InvocationPolicy::default(),
            surface: Surface::Unbuilt,
        }
    }

    /// Override the contract-violation policy (builder pattern)
    pub fn with_policy(mut self, policy: InvocationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &PickerState {
        &self.state
    }

    pub fn policy(&self) -> InvocationPolicy {
        self.policy
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    pub fn active_category_id(&self) -> &str {
        self.state.active_category_id()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Project the current state without touching the host.
    pub fn render(&self) -> PresentationTree {
        render(&self.catalog, &self.state)
    }

    // === State transitions ===

    /// Hidden -> Visible. Renders only if the host has no current tree.
    pub fn show(&mut self) {
        if !self.state.show() {
            return;
        }
        if self.surface != Surface::Current {
            self.refresh();
        }
        let anchor = self.host.request_anchor();
        self.host.present(anchor);
    }

    /// Visible -> Hidden; no-op when already hidden.
    pub fn hide(&mut self) {
        if self.state.hide() {
            self.host.dismiss();
        }
    }

    /// Switch category, re-rendering if visible.
    ///
    /// Re-selecting the active category while visible re-renders as well.
    pub fn select_category(&mut self, id: &str) -> PickerResult<()> {
        self.state.select_category(&self.catalog, id)?;
        if self.state.is_visible() {
            self.refresh();
        } else if self.surface == Surface::Current {
            self.surface = Surface::Stale;
        }
        Ok(())
    }

    /// Hand `value` to the host and hide. Only valid while visible.
    pub fn select_item(&mut self, value: &str) -> PickerResult<()> {
        if !self.state.is_visible() {
            return Err(PickerError::InvalidHostInvocation("item selected while hidden"));
        }
        self.host.notify_item_chosen(value);
        self.hide();
        Ok(())
    }

    // === Host commands ===

    pub fn toggle(&mut self) {
        log::log_command("toggle");
        if self.state.is_visible() {
            self.hide();
        } else {
            self.show();
        }
    }

    /// Unknown categories are logged and otherwise ignored.
    pub fn pick_category(&mut self, id: &str) {
        log::log_command(&format!("pick_category {}", id));
        if let Err(e) = self.select_category(id) {
            log::log(&format!("Ignored: {}", e));
        }
    }

    /// The widget is hidden when this returns.
    pub fn pick_item(&mut self, value: &str) {
        log::log_command(&format!("pick_item {}", value));
        if let Err(e) = self.select_item(value) {
            match self.policy {
                InvocationPolicy::Strict => panic!("{}", e),
                InvocationPolicy::Lenient => log::log(&format!("Ignored: {}", e)),
            }
        }
    }

    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::Toggle => self.toggle(),
            Command::PickCategory(id) => self.pick_category(&id),
            Command::PickItem(value) => self.pick_item(&value),
        }
    }

    fn refresh(&mut self) {
        let tree = self.render();
        self.host.request_render(tree);
        self.surface = Surface::Current;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Item};
    use crate::picker::testing::RecordingHost;
    use crate::picker::Anchor;

    fn catalog() -> Arc<Catalog> {
        Arc::new(
            Catalog::new(vec![
                Category::new("people", "People", vec![Item::new("😀", "grin")]),
                Category::new("nature", "Nature", vec![Item::new("🐶", "dog")]),
            ])
            .unwrap(),
        )
    }

    fn picker() -> EmojiPicker<RecordingHost> {
        EmojiPicker::new(catalog(), RecordingHost::default())
    }

    #[test]
    fn test_show_renders_first_category() {
        let mut picker = picker();
        picker.host_mut().anchor = Anchor { x: 10, y: 2, reference_height: 1 };

        picker.show();

        assert!(picker.is_visible());
        assert_eq!(picker.host().renders.len(), 1);
        assert_eq!(picker.host().last_grid_values(), vec!["😀"]);
        assert_eq!(picker.host().presented, vec![Anchor { x: 10, y: 2, reference_height: 1 }]);
    }

    #[test]
    fn test_redundant_show_is_noop() {
        let mut picker = picker();
        picker.show();
        picker.show();

        assert!(picker.is_visible());
        assert_eq!(picker.host().renders.len(), 1);
        assert_eq!(picker.host().presented.len(), 1);
    }

    #[test]
    fn test_reshow_reuses_current_surface() {
        let mut picker = picker();
        picker.show();
        picker.hide();
        picker.show();

        assert_eq!(picker.host().renders.len(), 1);
        assert_eq!(picker.host().presented.len(), 2);
        assert_eq!(picker.host().dismissed, 1);
    }

    #[test]
    fn test_category_switch_while_hidden_rerenders_on_show() {
        let mut picker = picker();
        picker.show();
        picker.hide();

        picker.select_category("nature").unwrap();
        assert_eq!(picker.host().renders.len(), 1);

        picker.show();
        assert_eq!(picker.host().renders.len(), 2);
        assert_eq!(picker.host().last_grid_values(), vec!["🐶"]);
    }

    #[test]
    fn test_category_switch_before_first_show() {
        let mut picker = picker();
        picker.select_category("nature").unwrap();
        assert!(picker.host().renders.is_empty());

        picker.show();
        assert_eq!(picker.host().renders.len(), 1);
        assert_eq!(picker.host().last_grid_values(), vec!["🐶"]);
    }

    #[test]
    fn test_reselecting_active_category_rerenders() {
        let mut picker = picker();
        picker.show();
        picker.select_category("people").unwrap();

        assert_eq!(picker.host().renders.len(), 2);
        assert_eq!(picker.host().renders[0], picker.host().renders[1]);
    }

    #[test]
    fn test_invalid_category_changes_nothing() {
        let mut picker = picker();
        picker.show();

        let result = picker.select_category("unknown");

        assert_eq!(result, Err(PickerError::InvalidCategory("unknown".to_string())));
        assert_eq!(picker.active_category_id(), "people");
        assert!(picker.is_visible());
        assert_eq!(picker.host().renders.len(), 1);
    }

    #[test]
    fn test_toggle_is_involutive() {
        let mut picker = picker();
        picker.toggle();
        picker.toggle();
        assert!(!picker.is_visible());

        picker.show();
        picker.toggle();
        picker.toggle();
        assert!(picker.is_visible());
    }

    #[test]
    fn test_pick_item_notifies_once_and_hides() {
        let mut picker = picker();
        picker.show();

        picker.pick_item("🐶");

        assert!(!picker.is_visible());
        assert_eq!(picker.host().chosen, vec!["🐶".to_string()]);
        assert_eq!(picker.host().dismissed, 1);
    }

    #[test]
    fn test_pick_item_while_hidden_lenient() {
        let mut picker = picker().with_policy(InvocationPolicy::Lenient);

        picker.pick_item("😀");

        assert!(!picker.is_visible());
        assert!(picker.host().chosen.is_empty());
        assert_eq!(picker.host().dismissed, 0);
    }

    #[test]
    #[should_panic(expected = "item selected while hidden")]
    fn test_pick_item_while_hidden_strict() {
        let mut picker = picker().with_policy(InvocationPolicy::Strict);
        picker.pick_item("😀");
    }

    #[test]
    fn test_select_item_while_hidden_errors() {
        let mut picker = picker();
        assert_eq!(
            picker.select_item("😀"),
            Err(PickerError::InvalidHostInvocation("item selected while hidden"))
        );
    }

    #[test]
    fn test_people_nature_scenario() {
        let mut picker = picker();

        picker.dispatch(Command::Toggle);
        assert_eq!(picker.host().last_grid_values(), vec!["😀"]);

        picker.dispatch(Command::PickCategory("nature".to_string()));
        assert_eq!(picker.host().last_grid_values(), vec!["🐶"]);
        let active = picker.host().last_render().active_tab().unwrap();
        assert_eq!(active.id, "nature");

        picker.dispatch(Command::PickItem("🐶".to_string()));
        assert_eq!(picker.host().chosen, vec!["🐶".to_string()]);
        assert!(!picker.is_visible());
    }

    #[test]
    fn test_unknown_category_scenario() {
        let mut picker = picker();
        picker.show();

        picker.pick_category("unknown");
        assert_eq!(picker.active_category_id(), "people");
        assert_eq!(picker.host().renders.len(), 1);

        picker.pick_category("nature");
        picker.pick_category("unknown");
        assert_eq!(picker.active_category_id(), "nature");
        assert_eq!(picker.host().renders.len(), 2);
        assert!(picker.host().chosen.is_empty());
    }

    #[test]
    fn test_instances_share_catalog() {
        let catalog = catalog();
        let mut a = EmojiPicker::new(Arc::clone(&catalog), RecordingHost::default());
        let b = EmojiPicker::new(Arc::clone(&catalog), RecordingHost::default());

        a.select_category("nature").unwrap();

        assert_eq!(a.active_category_id(), "nature");
        assert_eq!(b.active_category_id(), "people");
        assert_eq!(Arc::strong_count(&catalog), 3);
    }
}
