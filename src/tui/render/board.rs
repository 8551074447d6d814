use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::model::{STATUS_ORDER, Status};
use crate::order::canonical_order;
use crate::tui::app::App;
use crate::util::unicode::{display_width, truncate_to_width};

/// Render the three status columns, side by side or stacked.
pub fn render_board(frame: &mut Frame, app: &App, area: Rect) {
    let direction = if app.vertical {
        Direction::Vertical
    } else {
        Direction::Horizontal
    };
    let chunks = Layout::default()
        .direction(direction)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .spacing(if app.vertical { 0 } else { 1 })
        .split(area);

    for (i, &status) in STATUS_ORDER.iter().enumerate() {
        render_column(frame, app, chunks[i], status);
    }
}

fn render_column(frame: &mut Frame, app: &App, area: Rect, status: Status) {
    let theme = &app.theme;
    let tasks = app.store.board().tasks(status);
    let focused = app.selection.focused == status;

    let border_color = if focused { theme.accent } else { theme.border };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            format!(" {} ({}) ", status.title(), tasks.len()),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width < 5 || inner.height == 0 {
        return;
    }

    let width = inner.width as usize;
    // The cursor row is only highlighted in the focused column.
    let selected_id = if focused {
        app.selection.pick(status)
    } else {
        None
    };

    let mut lines: Vec<Line> = Vec::new();
    for idx in canonical_order(tasks) {
        let task = &tasks[idx];
        let is_selected = selected_id == Some(task.id);
        let is_done = task.status == Status::Done;

        let bullet = if is_selected { "\u{2022} " } else { "  " };
        let star = if task.starred { "\u{2605} " } else { "  " };
        let content = truncate_to_width(&task.content, width.saturating_sub(4));

        if is_selected {
            let mut row_style = Style::default()
                .fg(theme.selection_fg)
                .bg(theme.selection_bg)
                .add_modifier(Modifier::BOLD);
            if is_done {
                row_style = row_style.add_modifier(Modifier::CROSSED_OUT);
            }
            let mut text = format!("{}{}{}", bullet, star, content);
            let pad = width.saturating_sub(display_width(&text));
            text.push_str(&" ".repeat(pad));
            lines.push(Line::from(Span::styled(text, row_style)));
        } else {
            let content_style = if is_done {
                Style::default()
                    .fg(theme.dim)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(theme.text)
            };
            lines.push(Line::from(vec![
                Span::raw(bullet),
                Span::styled(star, Style::default().fg(theme.star)),
                Span::styled(content, content_style),
            ]));
        }
    }
    frame.render_widget(Paragraph::new(lines), inner);
}
