//! Picker state machine: active category plus visibility.

use crate::catalog::{Catalog, Category};
use crate::error::{PickerError, PickerResult};

/// Whether the widget is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

/// Mutable runtime state owned by one widget instance.
///
/// The active id is only ever set to an id taken from the catalog, so it
/// always resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerState {
    active_category_id: String,
    visibility: Visibility,
}

impl PickerState {
    /// Hidden, with the first category active.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            active_category_id: catalog.first().id.clone(),
            visibility: Visibility::Hidden,
        }
    }

    pub fn active_category_id(&self) -> &str {
        &self.active_category_id
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    /// Resolve the active category in `catalog`.
    ///
    /// Falls back to the first category if handed a catalog this state was not
    /// built from.
    pub fn active_category<'a>(&self, catalog: &'a Catalog) -> &'a Category {
        catalog
            .get(&self.active_category_id)
            .unwrap_or_else(|| catalog.first())
    }

    /// Returns true if the state changed.
    pub(crate) fn show(&mut self) -> bool {
        let changed = self.visibility == Visibility::Hidden;
        self.visibility = Visibility::Visible;
        changed
    }

    /// Returns true if the state changed.
    pub(crate) fn hide(&mut self) -> bool {
        let changed = self.visibility == Visibility::Visible;
        self.visibility = Visibility::Hidden;
        changed
    }

    /// Switch the active category. Unknown ids leave the state untouched.
    pub(crate) fn select_category(&mut self, catalog: &Catalog, id: &str) -> PickerResult<()> {
        let category = catalog
            .get(id)
            .ok_or_else(|| PickerError::InvalidCategory(id.to_string()))?;
        self.active_category_id = category.id.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Item};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Category::new("people", "People", vec![Item::new("😀", "grin")]),
            Category::new("nature", "Nature", vec![Item::new("🐶", "dog")]),
        ])
        .unwrap()
    }

    #[test]
    fn test_initial_state() {
        let catalog = catalog();
        let state = PickerState::new(&catalog);
        assert_eq!(state.active_category_id(), "people");
        assert_eq!(state.visibility(), Visibility::Hidden);
        assert_eq!(state.active_category(&catalog).id, "people");
    }

    #[test]
    fn test_show_hide_report_changes() {
        let catalog = catalog();
        let mut state = PickerState::new(&catalog);

        assert!(!state.hide());
        assert!(state.show());
        assert!(!state.show());
        assert!(state.is_visible());
        assert!(state.hide());
        assert!(!state.is_visible());
    }

    #[test]
    fn test_select_unknown_category_is_atomic() {
        let catalog = catalog();
        let mut state = PickerState::new(&catalog);
        state.show();
        let before = state.clone();

        let result = state.select_category(&catalog, "unknown");

        assert_eq!(result, Err(PickerError::InvalidCategory("unknown".to_string())));
        assert_eq!(state, before);
    }

    #[test]
    fn test_select_category_keeps_visibility() {
        let catalog = catalog();
        let mut state = PickerState::new(&catalog);

        state.select_category(&catalog, "nature").unwrap();
        assert_eq!(state.active_category_id(), "nature");
        assert_eq!(state.visibility(), Visibility::Hidden);
    }
}
