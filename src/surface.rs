//! Terminal implementation of the picker [`Host`].
//!
//! Holds the mounted tree, where it is presented, and the editor buffer that
//! chosen items are inserted into.

use ratatui::layout::Rect;

use crate::clipboard;
use crate::config::Config;
use crate::editor::EditorBuffer;
use crate::log;
use crate::picker::{Anchor, Host, PresentationTree};
use crate::tui::interaction::ClickRegion;

pub struct TerminalSurface {
    pub editor: EditorBuffer,
    /// Where the toolbar button was drawn last frame
    pub toolbar_button: ClickRegion,
    pub toolbar_bottom: bool,
    pub columns: usize,
    pub copy_to_clipboard: bool,
    /// Message for the status bar
    pub notice: Option<String>,
    mounted: Option<PresentationTree>,
    presented_at: Option<Anchor>,
}

impl TerminalSurface {
    pub fn new(config: &Config) -> Self {
        Self {
            editor: EditorBuffer::new(),
            toolbar_button: ClickRegion::default(),
            toolbar_bottom: config.toolbar_bottom,
            columns: config.columns(),
            copy_to_clipboard: config.copy_to_clipboard,
            notice: None,
            mounted: None,
            presented_at: None,
        }
    }

    /// The tree to draw and its anchor, while the popup is presented.
    pub fn presented(&self) -> Option<(&PresentationTree, Anchor)> {
        Some((self.mounted.as_ref()?, self.presented_at?))
    }

    pub fn mounted(&self) -> Option<&PresentationTree> {
        self.mounted.as_ref()
    }
}

impl Host for TerminalSurface {
    fn request_render(&mut self, tree: PresentationTree) {
        log::log_event(&format!(
            "render: {} categories, {} items",
            tree.categories.len(),
            tree.grid.len()
        ));
        self.mounted = Some(tree);
    }

    fn notify_item_chosen(&mut self, value: &str) {
        self.editor.insert_str(value);
        self.notice = None;

        if self.copy_to_clipboard {
            match clipboard::copy_text(value) {
                Ok(()) => self.notice = Some(format!("Copied {} to clipboard", value)),
                Err(e) => {
                    log::log(&format!("Clipboard copy failed: {}", e));
                    self.notice = Some("Clipboard unavailable".to_string());
                }
            }
        }
    }

    fn request_anchor(&mut self) -> Anchor {
        anchor_for(self.toolbar_button)
    }

    fn present(&mut self, anchor: Anchor) {
        self.presented_at = Some(anchor);
    }

    fn dismiss(&mut self) {
        self.presented_at = None;
    }
}

/// Anchor just below the centre of the button. A popup that does not fit
/// below flips above the button using its height.
pub fn anchor_for(button: ClickRegion) -> Anchor {
    Anchor {
        x: button.x.saturating_add(button.width / 2),
        y: button.y.saturating_add(button.height),
        reference_height: button.height,
    }
}

/// Place a `width` x `height` popup centred on the anchor, below it when it
/// fits and above the triggering control otherwise, clamped to `area`.
pub fn place_popup(area: Rect, anchor: Anchor, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let max_x = area.x + area.width - width;
    let x = anchor.x.saturating_sub(width / 2).clamp(area.x, max_x);

    let bottom = area.y + area.height;
    let above = anchor
        .y
        .saturating_sub(anchor.reference_height)
        .checked_sub(height)
        .filter(|&y| y >= area.y);
    let y = if anchor.y.saturating_add(height) <= bottom {
        anchor.y.max(area.y)
    } else if let Some(y) = above {
        y
    } else {
        bottom - height
    };

    Rect::new(x, y, width, height)
}
