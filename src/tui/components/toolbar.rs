//! Toolbar with the button that toggles the picker.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::events::Action;
use crate::tui::interaction::{ClickRegion, InteractionRegistry, InteractiveRegion};
use crate::tui::theme::*;

pub const BUTTON_LABEL: &str = "[ ☺ Emoji ]";

/// Render the toolbar and return where the button was drawn.
pub fn render_toolbar(
    frame: &mut Frame,
    area: Rect,
    picker_visible: bool,
    registry: &mut InteractionRegistry,
) -> ClickRegion {
    let button_style = if picker_visible {
        Style::new().fg(TEXT_WHITE).bg(ACCENT_BLUE).bold()
    } else {
        Style::new().fg(ACCENT_GOLD).bold()
    };

    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(BUTTON_LABEL, button_style),
        Span::raw("  "),
        Span::styled("emoji", Style::new().fg(ACCENT_CORAL).bold()),
        Span::styled("pick", Style::new().fg(ACCENT_MINT).bold()),
    ]);
    frame.render_widget(Paragraph::new(line), area);

    let width = (Line::raw(BUTTON_LABEL).width() as u16).min(area.width.saturating_sub(1));
    let button = ClickRegion::new(area.x + 1, area.y, width, area.height.min(1));
    registry.register(
        InteractiveRegion::clickable("toolbar_button", button, Action::TogglePicker)
            .with_tooltip("Emojis"),
    );
    button
}
