use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode::display_width;

const HELP_ITEMS: [&str; 12] = [
    "h/l: focus column",
    "j/k: move",
    "g/G: top/bottom",
    "[ \\ / ]: move task",
    "space/x: toggle done",
    "s: star",
    "n: new",
    "e: edit",
    "d/backspace/del: delete",
    "v: toggle layout",
    "q: quit",
    "esc: cancel",
];

const MIN_COL_WIDTH: usize = 22;
const COL_GAP: usize = 2;

fn columns_for(width: u16, vertical: bool) -> usize {
    let max_cols = if vertical { 2 } else { 3 };
    (width as usize / (MIN_COL_WIDTH + COL_GAP)).clamp(1, max_cols)
}

/// Rows the help footer needs at the given terminal width.
pub fn help_height(width: u16, vertical: bool) -> u16 {
    HELP_ITEMS.len().div_ceil(columns_for(width, vertical)) as u16
}

/// Render the key hints, filled column by column.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let cols = columns_for(area.width, app.vertical);
    let rows = HELP_ITEMS.len().div_ceil(cols);
    let col_width = HELP_ITEMS
        .iter()
        .map(|item| display_width(item))
        .max()
        .unwrap_or(0)
        .max(MIN_COL_WIDTH);

    let style = Style::default().fg(app.theme.dim);
    let mut lines: Vec<Line> = Vec::new();
    for row in 0..rows {
        let mut text = String::new();
        for col in 0..cols {
            let Some(item) = HELP_ITEMS.get(col * rows + row) else {
                break;
            };
            if col > 0 {
                text.push_str(&" ".repeat(COL_GAP));
            }
            text.push_str(item);
            text.push_str(&" ".repeat(col_width - display_width(item)));
        }
        lines.push(Line::from(Span::styled(text, style)));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::{TERM_W, app_from_board, render_to_string};

    use crate::model::Board;

    #[test]
    fn test_every_hint_is_listed() {
        let app = app_from_board(Board::default());
        let h = help_height(TERM_W, false);
        let text = render_to_string(TERM_W, h, |frame, area| render_help(frame, &app, area));

        for item in HELP_ITEMS {
            assert!(text.contains(item), "missing hint: {}", item);
        }
    }

    #[test]
    fn test_hints_flow_down_the_first_column_first() {
        let app = app_from_board(Board::default());
        let text = render_to_string(TERM_W, 4, |frame, area| render_help(frame, &app, area));

        // 80 cells fit three columns of four rows.
        let first_row = text.lines().next().unwrap();
        assert!(first_row.contains("h/l: focus column"));
        assert!(first_row.contains("space/x: toggle done"));
        assert!(first_row.contains("d/backspace/del: delete"));
    }

    #[test]
    fn test_narrow_terminal_gets_a_single_column() {
        assert_eq!(help_height(20, false), 12);
        assert_eq!(help_height(TERM_W, false), 4);
    }

    #[test]
    fn test_vertical_layout_caps_at_two_columns() {
        assert_eq!(help_height(TERM_W, true), 6);
        assert_eq!(help_height(200, true), 6);
    }
}
