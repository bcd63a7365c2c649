//! Bottom status line: hover tooltip, notices, or key hints.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::theme::*;

pub fn render_status_bar(frame: &mut Frame, area: Rect, hover: Option<&str>, notice: Option<&str>) {
    let line = if let Some(tooltip) = hover {
        Line::from(Span::styled(format!(" {}", tooltip), Style::new().fg(TEXT_WHITE)))
    } else if let Some(notice) = notice {
        Line::from(Span::styled(format!(" {}", notice), Style::new().fg(ACCENT_MINT)))
    } else {
        Line::from(vec![
            Span::styled(" [Ctrl+E]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" emoji · ", Style::new().fg(TEXT_DIM)),
            Span::styled("[Esc]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" close · ", Style::new().fg(TEXT_DIM)),
            Span::styled("[Ctrl+Q]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" quit", Style::new().fg(TEXT_DIM)),
        ])
    };

    frame.render_widget(Paragraph::new(line), area);
}
