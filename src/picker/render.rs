//! Pure projection of catalog + state into a render-ready tree.

use serde::Serialize;

use crate::catalog::Catalog;

use super::state::PickerState;

/// One entry of the category strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTab {
    pub id: String,
    /// Tooltip
    pub name: String,
    pub icon: String,
    pub active: bool,
}

/// One entry of the item grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridCell {
    /// Opaque payload reported back when the cell is clicked
    pub value: String,
    /// Tooltip
    pub name: String,
}

/// Everything a host needs to draw the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresentationTree {
    pub categories: Vec<CategoryTab>,
    pub grid: Vec<GridCell>,
}

impl PresentationTree {
    /// The tab marked active, if any.
    pub fn active_tab(&self) -> Option<&CategoryTab> {
        self.categories.iter().find(|tab| tab.active)
    }

    /// The grid split into rows of at most `columns` cells.
    pub fn rows(&self, columns: usize) -> std::slice::Chunks<'_, GridCell> {
        self.grid.chunks(columns.max(1))
    }

    /// Number of grid rows at the given width.
    pub fn row_count(&self, columns: usize) -> usize {
        self.grid.len().div_ceil(columns.max(1))
    }
}

/// Project `(catalog, state)` into a fresh tree. No side effects.
pub fn render(catalog: &Catalog, state: &PickerState) -> PresentationTree {
    let active = state.active_category(catalog);

    let categories = catalog
        .categories()
        .iter()
        .map(|category| CategoryTab {
            id: category.id.clone(),
            name: category.name.clone(),
            icon: category.display_icon(),
            active: category.id == active.id,
        })
        .collect();

    let grid = active
        .items
        .iter()
        .map(|item| GridCell {
            value: item.value.clone(),
            name: item.name.clone(),
        })
        .collect();

    PresentationTree { categories, grid }
}
