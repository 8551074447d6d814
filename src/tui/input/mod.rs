mod edit;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};
use super::command::Command;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Ctrl+C quits from any mode, even while the input line is open.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.apply(Command::Quit);
        return;
    }

    let key = normalize_key(key);
    match app.mode {
        Mode::Navigate => navigate::handle_navigate(app, key),
        Mode::Input => edit::handle_input(app, key),
    }
}

/// Normalize key events across terminals. Some terminals report Shift+g as
/// Char('g') + SHIFT, others as Char('G'); fold both into Char('G').
fn normalize_key(mut key: KeyEvent) -> KeyEvent {
    if let KeyCode::Char(c) = key.code
        && key.modifiers.contains(KeyModifiers::SHIFT)
        && c.is_ascii_lowercase()
    {
        key.code = KeyCode::Char(c.to_ascii_uppercase());
    }
    key
}
