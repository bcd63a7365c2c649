use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};

use crate::app::App;
use super::components::{render_editor, render_picker_popup, render_status_bar, render_toolbar};

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.interactions.clear();

    let toolbar_bottom = app.picker.host().toolbar_bottom;

    // toolbar, editor, status line; toolbar moves below the editor on request
    let layout = if toolbar_bottom {
        Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area)
    } else {
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area)
    };
    let (toolbar_area, editor_area) = if toolbar_bottom {
        (layout[1], layout[0])
    } else {
        (layout[0], layout[1])
    };
    let status_area = layout[2];

    let visible = app.picker.is_visible();
    let button = render_toolbar(frame, toolbar_area, visible, &mut app.interactions);
    app.picker.host_mut().toolbar_button = button;

    let surface = app.picker.host();
    render_editor(frame, editor_area, &surface.editor, !visible);
    render_status_bar(frame, status_area, app.hover.as_deref(), surface.notice.as_deref());

    if let Some((tree, anchor)) = surface.presented() {
        render_picker_popup(frame, area, tree, anchor, surface.columns, &mut app.interactions);
    }
}
