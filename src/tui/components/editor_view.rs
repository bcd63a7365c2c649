//! Editor pane showing the text buffer.

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::editor::EditorBuffer;
use crate::tui::theme::*;

/// Render the buffer; places the terminal cursor when `show_cursor` is set.
pub fn render_editor(frame: &mut Frame, area: Rect, editor: &EditorBuffer, show_cursor: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(TEXT_DIM))
        .title(" Editor ")
        .title_style(Style::new().fg(TEXT_WHITE));
    let inner = block.inner(area);

    let (cursor_line, before_cursor) = editor.cursor_line();
    let scroll = (cursor_line as u16 + 1).saturating_sub(inner.height);

    let lines: Vec<Line> = editor.lines().map(Line::raw).collect();
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::new().fg(TEXT_WHITE))
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);

    if show_cursor && inner.width > 0 && inner.height > 0 {
        let col = Line::raw(before_cursor).width() as u16;
        let x = (inner.x + col).min(inner.right().saturating_sub(1));
        let y = inner.y + cursor_line as u16 - scroll;
        frame.set_cursor_position(Position::new(x, y));
    }
}
