use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, InputTarget};
use crate::util::unicode::next_grapheme_boundary;

/// Render the two-line input area: a context label above the text line.
pub fn render_input_row(frame: &mut Frame, app: &App, area: Rect) {
    let label = match app.input_target {
        Some(InputTarget::Edit(_)) => "Edit Task:",
        _ => "New Task:",
    };
    let label_line = Line::from(Span::styled(
        label,
        Style::default()
            .fg(app.theme.accent)
            .add_modifier(Modifier::BOLD),
    ));

    let buf = &app.input_buffer;
    let cursor = app.input_cursor.min(buf.len());
    let mut spans = vec![Span::styled(
        "\u{27A4} ",
        Style::default().fg(app.theme.accent),
    )];
    spans.push(Span::raw(buf[..cursor].to_string()));
    match next_grapheme_boundary(buf, cursor) {
        // Mid-buffer: show the cursor as a reversed cell over the next grapheme
        Some(next) => {
            spans.push(Span::styled(
                buf[cursor..next].to_string(),
                Style::default().add_modifier(Modifier::REVERSED),
            ));
            spans.push(Span::raw(buf[next..].to_string()));
        }
        None => spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.accent),
        )),
    }

    frame.render_widget(Paragraph::new(vec![label_line, Line::from(spans)]), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::{TERM_W, app_from_board, render_to_string};

    use crate::model::Board;
    use crate::tui::command::Command;

    #[test]
    fn test_create_and_edit_labels_differ() {
        let mut app = app_from_board(Board::default());
        app.apply(Command::BeginCreate);
        app.input_buffer = "draft".to_string();
        app.input_cursor = app.input_buffer.len();

        let text = render_to_string(TERM_W, 2, |frame, area| render_input_row(frame, &app, area));
        assert!(text.contains("New Task:"));
        assert!(text.contains("\u{27A4} draft\u{258C}"));

        app.input_target = Some(InputTarget::Edit(uuid::Uuid::new_v4()));
        let text = render_to_string(TERM_W, 2, |frame, area| render_input_row(frame, &app, area));
        assert!(text.contains("Edit Task:"));
    }

    #[test]
    fn test_mid_buffer_cursor_keeps_the_full_text() {
        let mut app = app_from_board(Board::default());
        app.apply(Command::BeginCreate);
        app.input_buffer = "abc".to_string();
        app.input_cursor = 1;

        let text = render_to_string(TERM_W, 2, |frame, area| render_input_row(frame, &app, area));

        // No block glyph inserted mid-string; the text stays intact.
        assert!(text.contains("\u{27A4} abc"));
        assert!(!text.contains('\u{258C}'));
    }
}
