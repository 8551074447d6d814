use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;
use crate::tui::command::Command;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Clear any transient status message on keypress
    app.status_message = None;
    app.status_is_error = false;

    let cmd = match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Up | KeyCode::Char('k')) => Command::SelectUp,
        (KeyModifiers::NONE, KeyCode::Down | KeyCode::Char('j')) => Command::SelectDown,
        (KeyModifiers::NONE, KeyCode::Left | KeyCode::Char('h')) => Command::FocusPrev,
        (KeyModifiers::NONE, KeyCode::Right | KeyCode::Char('l')) => Command::FocusNext,

        (KeyModifiers::NONE, KeyCode::Char('g')) => Command::SelectFirst,
        (KeyModifiers::SHIFT, KeyCode::Char('G')) => Command::SelectLast,

        (KeyModifiers::NONE, KeyCode::Char('[' | '\\')) => Command::MoveToPrevStatus,
        (KeyModifiers::NONE, KeyCode::Char(']' | '/')) => Command::MoveToNextStatus,
        (KeyModifiers::NONE, KeyCode::Char(' ' | 'x')) => Command::ToggleDone,

        (KeyModifiers::NONE, KeyCode::Char('s')) => Command::ToggleStar,
        (KeyModifiers::NONE, KeyCode::Char('n')) => Command::BeginCreate,
        (KeyModifiers::NONE, KeyCode::Char('e')) => Command::BeginEdit,
        (KeyModifiers::NONE, KeyCode::Char('d') | KeyCode::Backspace | KeyCode::Delete) => {
            Command::DeleteSelected
        }

        (KeyModifiers::NONE, KeyCode::Char('v')) => Command::ToggleLayout,
        (KeyModifiers::NONE, KeyCode::Char('q')) => Command::Quit,
        _ => return,
    };
    app.apply(cmd);
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventKind;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;
    use crate::model::Status;
    use crate::store::TaskStore;
    use crate::tui::app::Mode;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        let mut key = KeyEvent::new(code, modifiers);
        key.kind = KeyEventKind::Press;
        key
    }

    fn plain(c: char) -> KeyEvent {
        press(KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn seeded(tmp: &TempDir, contents: &[&str]) -> App {
        let mut store = TaskStore::empty(tmp.path().to_path_buf());
        for content in contents {
            store.add(content).unwrap();
        }
        App::new(store, false)
    }

    #[test]
    fn test_vim_keys_mirror_the_arrows() {
        let tmp = TempDir::new().unwrap();
        let mut app = seeded(&tmp, &["a", "b", "c"]);

        handle_navigate(&mut app, press(KeyCode::Down, KeyModifiers::NONE));
        let via_arrow = app.selection.selected();
        handle_navigate(&mut app, press(KeyCode::Up, KeyModifiers::NONE));
        handle_navigate(&mut app, plain('j'));
        assert_eq!(app.selection.selected(), via_arrow);

        handle_navigate(&mut app, plain('l'));
        assert_eq!(app.selection.focused, Status::InProgress);
        handle_navigate(&mut app, plain('h'));
        assert_eq!(app.selection.focused, Status::Todo);
    }

    #[test]
    fn test_bracket_keys_move_the_task() {
        let tmp = TempDir::new().unwrap();
        let mut app = seeded(&tmp, &["a"]);

        handle_navigate(&mut app, plain(']'));
        assert_eq!(app.selection.focused, Status::InProgress);
        assert_eq!(app.store.board().in_progress.len(), 1);

        handle_navigate(&mut app, plain('['));
        assert_eq!(app.selection.focused, Status::Todo);
        assert_eq!(app.store.board().todo.len(), 1);
    }

    #[test]
    fn test_slash_and_backslash_are_aliases() {
        let tmp = TempDir::new().unwrap();
        let mut app = seeded(&tmp, &["a"]);

        handle_navigate(&mut app, plain('/'));
        assert_eq!(app.selection.focused, Status::InProgress);

        handle_navigate(&mut app, plain('\\'));
        assert_eq!(app.selection.focused, Status::Todo);
    }

    #[test]
    fn test_space_and_x_toggle_done() {
        let tmp = TempDir::new().unwrap();
        let mut app = seeded(&tmp, &["a"]);

        handle_navigate(&mut app, plain(' '));
        assert_eq!(app.selection.focused, Status::Done);

        handle_navigate(&mut app, plain('x'));
        assert_eq!(app.selection.focused, Status::Todo);
    }

    #[test]
    fn test_delete_aliases() {
        let tmp = TempDir::new().unwrap();
        let mut app = seeded(&tmp, &["a", "b", "c"]);

        handle_navigate(&mut app, plain('d'));
        handle_navigate(&mut app, press(KeyCode::Backspace, KeyModifiers::NONE));
        handle_navigate(&mut app, press(KeyCode::Delete, KeyModifiers::NONE));

        assert!(app.store.board().is_empty());
    }

    #[test]
    fn test_n_opens_the_input_line() {
        let tmp = TempDir::new().unwrap();
        let mut app = seeded(&tmp, &[]);

        handle_navigate(&mut app, plain('n'));

        assert_eq!(app.mode, Mode::Input);
    }

    #[test]
    fn test_shift_g_jumps_to_bottom() {
        let tmp = TempDir::new().unwrap();
        let mut app = seeded(&tmp, &["first", "second", "third"]);

        handle_navigate(&mut app, press(KeyCode::Char('G'), KeyModifiers::SHIFT));
        assert_eq!(
            app.selected_task().map(|t| t.content.as_str()),
            Some("first")
        );

        handle_navigate(&mut app, plain('g'));
        assert_eq!(
            app.selected_task().map(|t| t.content.as_str()),
            Some("third")
        );
    }

    #[test]
    fn test_q_quits_from_navigate() {
        let tmp = TempDir::new().unwrap();
        let mut app = seeded(&tmp, &[]);

        handle_navigate(&mut app, plain('q'));

        assert!(app.should_quit);
    }

    #[test]
    fn test_unmapped_key_clears_the_status_message() {
        let tmp = TempDir::new().unwrap();
        let mut app = seeded(&tmp, &[]);
        app.status_message = Some("stale".to_string());
        app.status_is_error = true;

        handle_navigate(&mut app, plain('z'));

        assert_eq!(app.status_message, None);
        assert!(!app.status_is_error);
    }
}
