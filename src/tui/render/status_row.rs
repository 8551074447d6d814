use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let width = area.width as usize;

    let line = if let Some(ref message) = app.status_message {
        let color = if app.status_is_error {
            app.theme.error
        } else {
            app.theme.dim
        };
        Line::from(Span::styled(message.clone(), Style::default().fg(color)))
    } else if app.mode == Mode::Input {
        // Right-aligned hint while the input line is open
        let hint = "Enter save  Esc cancel";
        let hint_width = hint.chars().count();
        let mut spans = Vec::new();
        if hint_width < width {
            spans.push(Span::raw(" ".repeat(width - hint_width)));
        }
        spans.push(Span::styled(hint, Style::default().fg(app.theme.dim)));
        Line::from(spans)
    } else {
        Line::from("")
    };

    frame.render_widget(Paragraph::new(line), area);
}
