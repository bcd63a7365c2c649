//! Component-level mouse interactivity system.
//!
//! Components register their interactive regions during render, and mouse
//! events are routed to the matching region.
//!
//! # Example
//!
//! ```ignore
//! registry.register(
//!     InteractiveRegion::clickable("grid_cell", bounds, Action::PickItem(value))
//!         .with_tooltip("grinning face")
//!         .with_priority(POPUP_PRIORITY),
//! );
//! ```

use ratatui::layout::Rect;

use crate::events::Action;

/// Priority of regions inside the picker popup, which covers the editor.
pub const POPUP_PRIORITY: i32 = 10;

/// A rectangular hit area in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && u32::from(x) < u32::from(self.x) + u32::from(self.width)
            && u32::from(y) < u32::from(self.y) + u32::from(self.height)
    }
}

impl From<Rect> for ClickRegion {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }
}

/// An interactive region that can respond to mouse events.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    /// Identifier for debugging/logging
    pub id: &'static str,

    pub bounds: ClickRegion,

    /// Action to dispatch on left click (None = not clickable)
    pub on_click: Option<Action>,

    /// Text shown in the status bar while hovering
    pub tooltip: Option<String>,

    /// Priority for overlapping regions (higher = checked first)
    pub priority: i32,
}

impl InteractiveRegion {
    /// Create a new clickable region
    pub fn clickable(id: &'static str, bounds: ClickRegion, action: Action) -> Self {
        Self {
            id,
            bounds,
            on_click: Some(action),
            tooltip: None,
            priority: 0,
        }
    }

    /// Create a region that only blocks clicks to what lies beneath it
    pub fn backdrop(id: &'static str, bounds: ClickRegion) -> Self {
        Self {
            id,
            bounds,
            on_click: Some(Action::None),
            tooltip: None,
            priority: 0,
        }
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Set the priority (for builder pattern)
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(x, y)
    }
}

/// Registry of interactive regions, rebuilt each frame during render.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl InteractionRegistry {
    pub fn new() -> Self {
        Self { regions: Vec::new() }
    }

    /// Clear all registered regions (call at start of each render)
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Highest-priority region under (x, y); later registrations win ties.
    fn top_region_at(&self, x: u16, y: u16) -> Option<&InteractiveRegion> {
        self.regions
            .iter()
            .filter(|r| r.contains(x, y))
            .max_by_key(|r| r.priority)
    }

    /// Find the action to dispatch for a click at (x, y)
    pub fn handle_click(&self, x: u16, y: u16) -> Action {
        self.top_region_at(x, y)
            .and_then(|r| r.on_click.clone())
            .unwrap_or(Action::None)
    }

    /// Tooltip of the region under (x, y)
    pub fn tooltip_at(&self, x: u16, y: u16) -> Option<&str> {
        self.top_region_at(x, y).and_then(|r| r.tooltip.as_deref())
    }
}
