//! UI components for the TUI.
//!
//! # Component Organization
//!
//! - `toolbar` - Title and the button that toggles the picker
//! - `editor_view` - Text buffer chosen items are inserted into
//! - `picker_popup` - Category strip and item grid of the mounted tree
//! - `status_bar` - Hover tooltips, notices, and key hints

mod editor_view;
mod picker_popup;
mod status_bar;
mod toolbar;

// Re-export all render functions for use in ui.rs
pub use editor_view::render_editor;
pub use picker_popup::{popup_size, render_picker_popup, CELL_WIDTH};
pub use status_bar::render_status_bar;
pub use toolbar::{render_toolbar, BUTTON_LABEL};
