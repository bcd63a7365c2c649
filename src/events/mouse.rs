//! Mouse event handling.
//!
//! Mouse events are dispatched through the interaction registry, which is
//! populated by UI components during each render.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;

use super::Action;

/// Handle mouse events and return the appropriate action.
pub fn handle_mouse_event(app: &App, mouse: MouseEvent) -> Action {
    let x = mouse.column;
    let y = mouse.row;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.interactions.handle_click(x, y),
        MouseEventKind::Moved => {
            Action::Hover(app.interactions.tooltip_at(x, y).map(str::to_string))
        }
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    use crate::app::tests::test_app;
    use crate::tui::interaction::{ClickRegion, InteractiveRegion};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent { kind, column, row, modifiers: KeyModifiers::NONE }
    }

    #[test]
    fn test_click_and_hover_use_registry() {
        let mut app = test_app();
        app.interactions.register(
            InteractiveRegion::clickable(
                "grid_cell",
                ClickRegion::new(4, 4, 2, 1),
                Action::PickItem("🐶".to_string()),
            )
            .with_tooltip("dog"),
        );

        assert_eq!(
            handle_mouse_event(&app, mouse(MouseEventKind::Down(MouseButton::Left), 5, 4)),
            Action::PickItem("🐶".to_string())
        );
        assert_eq!(
            handle_mouse_event(&app, mouse(MouseEventKind::Moved, 4, 4)),
            Action::Hover(Some("dog".to_string()))
        );
        assert_eq!(
            handle_mouse_event(&app, mouse(MouseEventKind::Moved, 0, 0)),
            Action::Hover(None)
        );
        assert_eq!(
            handle_mouse_event(&app, mouse(MouseEventKind::Down(MouseButton::Right), 5, 4)),
            Action::None
        );
    }
}
