pub mod board;
pub mod help;
pub mod input_row;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use super::app::{App, Mode};

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Layout: board | input line (only while typing) | help footer | status row
    let help_rows = help::help_height(area.width, app.vertical);
    let mut constraints = vec![Constraint::Min(1)];
    if app.mode == Mode::Input {
        constraints.push(Constraint::Length(2));
    }
    constraints.push(Constraint::Length(help_rows));
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    board::render_board(frame, app, chunks[0]);
    let mut next = 1;
    if app.mode == Mode::Input {
        input_row::render_input_row(frame, app, chunks[next]);
        next += 1;
    }
    help::render_help(frame, app, chunks[next]);
    status_row::render_status_row(frame, app, chunks[next + 1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_helpers::{TERM_H, TERM_W, app_from_board, render_to_string, task_at};

    use crate::model::Board;
    use crate::tui::command::Command;

    #[test]
    fn test_full_frame_has_board_and_help() {
        let mut board = Board::default();
        board.todo.push(task_at("wash the car", 100));
        let app = app_from_board(board);

        let text = render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &app));

        assert!(text.contains("Todo (1)"));
        assert!(text.contains("wash the car"));
        assert!(text.contains("q: quit"));
    }

    #[test]
    fn test_input_line_appears_only_while_typing() {
        let mut app = app_from_board(Board::default());

        let text = render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &app));
        assert!(!text.contains("New Task:"));

        app.apply(Command::BeginCreate);
        let text = render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &app));
        assert!(text.contains("New Task:"));
        assert!(text.contains('\u{27A4}'));
    }
}
