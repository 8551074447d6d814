use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;
use crate::tui::command::Command;
use crate::util::unicode::{
    next_grapheme_boundary, prev_grapheme_boundary, word_boundary_left, word_boundary_right,
};

/// Longest task content accepted by the input line, in characters.
const INPUT_CHAR_LIMIT: usize = 256;

pub(super) fn handle_input(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Confirm
        (_, KeyCode::Enter) => app.apply(Command::CommitInput),
        // Discard
        (_, KeyCode::Esc) => app.apply(Command::CancelInput),

        // Jump to start / end of line (macOS Cmd+arrows arrive as ^A / ^E)
        (_, KeyCode::Home) => app.input_cursor = 0,
        (_, KeyCode::End) => app.input_cursor = app.input_buffer.len(),
        (m, KeyCode::Char('a')) if m.contains(KeyModifiers::CONTROL) => app.input_cursor = 0,
        (m, KeyCode::Char('e')) if m.contains(KeyModifiers::CONTROL) => {
            app.input_cursor = app.input_buffer.len();
        }
        (m, KeyCode::Left) if m.contains(KeyModifiers::CONTROL) => app.input_cursor = 0,
        (m, KeyCode::Right) if m.contains(KeyModifiers::CONTROL) => {
            app.input_cursor = app.input_buffer.len();
        }

        // Word-wise movement: Alt+arrows, Alt+B/F
        (m, KeyCode::Left) if m.contains(KeyModifiers::ALT) => {
            app.input_cursor = word_boundary_left(&app.input_buffer, app.input_cursor);
        }
        (m, KeyCode::Right) if m.contains(KeyModifiers::ALT) => {
            app.input_cursor = word_boundary_right(&app.input_buffer, app.input_cursor);
        }
        (m, KeyCode::Char('b')) if m.contains(KeyModifiers::ALT) => {
            app.input_cursor = word_boundary_left(&app.input_buffer, app.input_cursor);
        }
        (m, KeyCode::Char('f')) if m.contains(KeyModifiers::ALT) => {
            app.input_cursor = word_boundary_right(&app.input_buffer, app.input_cursor);
        }

        // Grapheme-wise movement
        (KeyModifiers::NONE, KeyCode::Left) => {
            if let Some(prev) = prev_grapheme_boundary(&app.input_buffer, app.input_cursor) {
                app.input_cursor = prev;
            }
        }
        (KeyModifiers::NONE, KeyCode::Right) => {
            if let Some(next) = next_grapheme_boundary(&app.input_buffer, app.input_cursor) {
                app.input_cursor = next;
            }
        }

        // Delete word left: Alt+Backspace, Ctrl+Backspace, Ctrl+W
        (m, KeyCode::Backspace)
            if m.contains(KeyModifiers::ALT) || m.contains(KeyModifiers::CONTROL) =>
        {
            let boundary = word_boundary_left(&app.input_buffer, app.input_cursor);
            app.input_buffer.drain(boundary..app.input_cursor);
            app.input_cursor = boundary;
        }
        (m, KeyCode::Char('w')) if m.contains(KeyModifiers::CONTROL) => {
            let boundary = word_boundary_left(&app.input_buffer, app.input_cursor);
            app.input_buffer.drain(boundary..app.input_cursor);
            app.input_cursor = boundary;
        }
        // Kill to start of line: Ctrl+U
        (m, KeyCode::Char('u')) if m.contains(KeyModifiers::CONTROL) => {
            app.input_buffer.drain(..app.input_cursor);
            app.input_cursor = 0;
        }
        (_, KeyCode::Backspace) => {
            if let Some(prev) = prev_grapheme_boundary(&app.input_buffer, app.input_cursor) {
                app.input_buffer.drain(prev..app.input_cursor);
                app.input_cursor = prev;
            }
        }
        (_, KeyCode::Delete) => {
            if let Some(next) = next_grapheme_boundary(&app.input_buffer, app.input_cursor) {
                app.input_buffer.drain(app.input_cursor..next);
            }
        }

        // Insert character at cursor
        (m, KeyCode::Char(c)) if m == KeyModifiers::NONE || m == KeyModifiers::SHIFT => {
            if app.input_buffer.chars().count() < INPUT_CHAR_LIMIT {
                app.input_buffer.insert(app.input_cursor, c);
                app.input_cursor += c.len_utf8();
            }
        }
        _ => {}
    }
}
