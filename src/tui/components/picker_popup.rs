//! Picker popup component.
//!
//! Draws a mounted [`PresentationTree`]: the category strip on the first row,
//! then the item grid. Every tab and cell registers a click region.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::events::Action;
use crate::picker::{Anchor, PresentationTree};
use crate::surface::place_popup;
use crate::tui::interaction::{ClickRegion, InteractionRegistry, InteractiveRegion, POPUP_PRIORITY};
use crate::tui::theme::*;

/// Terminal cells per tab or grid cell (two for the glyph, one gap).
pub const CELL_WIDTH: u16 = 3;

/// Outer size of the popup for a tree laid out in `columns` columns.
pub fn popup_size(tree: &PresentationTree, columns: usize) -> (u16, u16) {
    let columns = columns.max(1) as u16;
    let strip = tree.categories.len() as u16 * CELL_WIDTH;
    let grid = columns * CELL_WIDTH;
    let width = strip.max(grid) + 2 + 1;

    // strip + separator + rows, inside the border
    let rows = tree.row_count(columns as usize).max(1) as u16;
    let height = 2 + rows + 2;

    (width, height)
}

/// Render the picker popup at its anchor and register its click targets.
pub fn render_picker_popup(
    frame: &mut Frame,
    area: Rect,
    tree: &PresentationTree,
    anchor: Anchor,
    columns: usize,
    registry: &mut InteractionRegistry,
) {
    let (width, height) = popup_size(tree, columns);
    let popup_area = place_popup(area, anchor, width, height);

    frame.render_widget(Clear, popup_area);

    let title = tree
        .active_tab()
        .map(|tab| format!(" {} ", tab.name))
        .unwrap_or_default();
    let block = Block::default()
        .title(title)
        .title_style(Style::new().fg(ACCENT_MINT).bold())
        .borders(Borders::ALL)
        .border_style(Style::new().fg(ACCENT_MINT))
        .style(Style::new().bg(POPUP_BG));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    // Clicks that miss every target must not reach the editor underneath
    registry.register(
        InteractiveRegion::backdrop("picker_popup", popup_area.into()).with_priority(POPUP_PRIORITY),
    );

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    // Category strip
    for (i, tab) in tree.categories.iter().enumerate() {
        let Some(cell) = cell_rect(inner, i as u16, 0) else { break };
        let style = if tab.active {
            Style::new().fg(TEXT_WHITE).bg(ACCENT_BLUE).bold()
        } else {
            Style::new().fg(TEXT_DIM)
        };
        frame.render_widget(Paragraph::new(Span::styled(tab.icon.as_str(), style)), cell);
        registry.register(
            InteractiveRegion::clickable("category_tab", cell.into(), Action::PickCategory(tab.id.clone()))
                .with_tooltip(tab.name.as_str())
                .with_priority(POPUP_PRIORITY),
        );
    }

    if inner.height < 2 {
        return;
    }
    let separator = Rect::new(inner.x, inner.y + 1, inner.width, 1);
    frame.render_widget(
        Paragraph::new(Line::styled("─".repeat(inner.width as usize), Style::new().fg(TEXT_DIM))),
        separator,
    );

    // Item grid
    let grid_area = Rect::new(inner.x, inner.y + 2, inner.width, inner.height.saturating_sub(2));
    if tree.grid.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::styled(" (empty)", Style::new().fg(TEXT_DIM).italic())),
            grid_area,
        );
        return;
    }

    for (row, cells) in tree.rows(columns).enumerate() {
        if row as u16 >= grid_area.height {
            break;
        }
        for (col, item) in cells.iter().enumerate() {
            let Some(cell) = cell_rect(grid_area, col as u16, row as u16) else { break };
            frame.render_widget(Paragraph::new(item.value.as_str()), cell);
            registry.register(
                InteractiveRegion::clickable("grid_cell", cell.into(), Action::PickItem(item.value.clone()))
                    .with_tooltip(item.name.as_str())
                    .with_priority(POPUP_PRIORITY),
            );
        }
    }
}

/// Two-cell glyph slot at (col, row) inside `area`, offset by one for padding.
fn cell_rect(area: Rect, col: u16, row: u16) -> Option<Rect> {
    let x = area.x + 1 + col * CELL_WIDTH;
    let region = ClickRegion::new(area.x, area.y, area.width, area.height);
    if row >= area.height || !region.contains(x + 1, area.y + row) {
        return None;
    }
    Some(Rect::new(x, area.y + row, 2, 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Category, Item};
    use crate::picker::{render, PickerState};

    fn tree() -> PresentationTree {
        let catalog = Catalog::new(vec![
            Category::new(
                "people",
                "People",
                (0..10).map(|i| Item::new(format!("{}", i), format!("item {}", i))).collect(),
            ),
            Category::new("nature", "Nature", vec![]),
        ])
        .unwrap();
        render(&catalog, &PickerState::new(&catalog))
    }

    #[test]
    fn test_popup_size() {
        let tree = tree();
        // 4 columns: 12 cells wide grid, 3 rows
        assert_eq!(popup_size(&tree, 4), (15, 7));
        // strip wider than grid
        assert_eq!(popup_size(&tree, 1), (9, 14));
    }

    #[test]
    fn test_cell_rect() {
        let area = Rect::new(10, 5, 9, 3);
        assert_eq!(cell_rect(area, 0, 0), Some(Rect::new(11, 5, 2, 1)));
        assert_eq!(cell_rect(area, 2, 2), Some(Rect::new(17, 7, 2, 1)));
        assert_eq!(cell_rect(area, 3, 0), None);
        assert_eq!(cell_rect(area, 0, 3), None);
    }
}
