//! Catalog of selectable items grouped into categories.
//!
//! A catalog is loaded once and never mutated. Widgets share it through an
//! `Arc<Catalog>`.
//!
//! # Wire format
//!
//! ```json
//! { "categories": [
//!     { "id": "people", "name": "Smileys & People",
//!       "emojis": [ { "value": "😀", "name": "grinning face" } ] }
//! ] }
//! ```
//!
//! `items` is accepted in place of `emojis`, and a category may carry an
//! optional `icon` glyph for its tab.

mod builtin;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// A single selectable entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Item {
    /// Payload handed to the host when the item is chosen
    pub value: String,
    /// Display label, shown as a tooltip
    pub name: String,
}

impl Item {
    pub fn new(value: impl Into<String>, name: impl Into<String>) -> Self {
        Self { value: value.into(), name: name.into() }
    }
}

/// A named group of items with a stable identifier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(rename = "emojis", alias = "items", default)]
    pub items: Vec<Item>,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>, items: Vec<Item>) -> Self {
        Self { id: id.into(), name: name.into(), icon: None, items }
    }

    /// Set an explicit tab icon (builder pattern)
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Glyph shown on the category tab.
    ///
    /// Falls back to the built-in glyph for well-known ids, then to the first
    /// item, then to the first character of the name.
    pub fn display_icon(&self) -> String {
        if let Some(icon) = &self.icon {
            return icon.clone();
        }
        if let Some(icon) = builtin::icon_for(&self.id) {
            return icon.to_string();
        }
        if let Some(item) = self.items.first() {
            return item.value.clone();
        }
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    categories: Vec<Category>,
}

/// Immutable, non-empty sequence of categories with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog, rejecting empty catalogs and empty or duplicate ids.
    pub fn new(categories: Vec<Category>) -> CatalogResult<Self> {
        if categories.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for (i, category) in categories.iter().enumerate() {
            if category.id.is_empty() {
                return Err(CatalogError::EmptyCategoryId(i));
            }
            if !seen.insert(category.id.as_str()) {
                return Err(CatalogError::DuplicateCategory(category.id.clone()));
            }
        }

        Ok(Self { categories })
    }

    /// Parse a catalog from its JSON form.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.categories)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The emoji catalog bundled with the binary.
    pub fn builtin() -> CatalogResult<Self> {
        Self::from_json(builtin::EMOJI_DATA)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The first category; the default selection of every new widget.
    pub fn first(&self) -> &Category {
        &self.categories[0]
    }

    pub fn get(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Always false; kept for parity with `len`.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
