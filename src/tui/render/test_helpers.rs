use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use tempfile::TempDir;

use crate::io::save_tasks;
use crate::model::{Board, Task};
use crate::store::TaskStore;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    let mut lines: Vec<String> = buffer
        .content()
        .chunks(width)
        .map(|row| {
            let text: String = row.iter().map(|cell| cell.symbol()).collect();
            text.trim_end().to_string()
        })
        .collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

/// A task with a fixed creation time, for deterministic ordering.
pub fn task_at(content: &str, created_at: i64) -> Task {
    let mut task = Task::new(content.to_string());
    task.created_at = created_at;
    task.updated_at = created_at;
    task
}

/// Build an App over a throwaway data dir seeded with `board`.
///
/// The temp dir is gone by the time this returns, so tests using it must
/// stick to commands that never touch disk.
pub fn app_from_board(board: Board) -> App {
    let tmp = TempDir::new().unwrap();
    save_tasks(tmp.path(), &board).unwrap();
    let store = TaskStore::load(tmp.path().to_path_buf()).unwrap();
    App::new(store, false)
}
