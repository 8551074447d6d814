use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use uuid::Uuid;

use crate::io::{default_data_dir, load_layout, save_layout};
use crate::model::{Status, Task};
use crate::order::Selection;
use crate::store::{StoreError, TaskStore};
use crate::tui::command::Command;
use crate::tui::theme::Theme;
use crate::tui::{input, render};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which input handler is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Input,
}

/// What the input line will do on commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputTarget {
    Create,
    Edit(Uuid),
}

/// Main application state
pub struct App {
    pub store: TaskStore,
    pub selection: Selection,
    pub mode: Mode,
    pub input_buffer: String,
    /// Byte offset into input_buffer
    pub input_cursor: usize,
    pub input_target: Option<InputTarget>,
    /// Stacked columns instead of side by side
    pub vertical: bool,
    pub should_quit: bool,
    pub status_message: Option<String>,
    pub status_is_error: bool,
    pub theme: Theme,
}

impl App {
    pub fn new(store: TaskStore, vertical: bool) -> Self {
        let mut selection = Selection::new();
        selection.sync(store.board());
        App {
            store,
            selection,
            mode: Mode::Navigate,
            input_buffer: String::new(),
            input_cursor: 0,
            input_target: None,
            vertical,
            should_quit: false,
            status_message: None,
            status_is_error: false,
            theme: Theme::default(),
        }
    }

    /// The task the cursor is on, if any
    pub fn selected_task(&self) -> Option<&Task> {
        self.store.board().get(self.selection.selected()?)
    }

    fn report_error(&mut self, err: impl std::fmt::Display) {
        self.status_message = Some(err.to_string());
        self.status_is_error = true;
    }
}

// ---------------------------------------------------------------------------
// Command application
// ---------------------------------------------------------------------------

impl App {
    /// Apply a single command to the board and selection.
    ///
    /// Mutations go through the store (memory first, then disk). A failed
    /// save leaves the in-memory change in place and surfaces the error in
    /// the status row.
    pub fn apply(&mut self, cmd: Command) {
        self.status_message = None;
        self.status_is_error = false;

        let focused = self.selection.focused;
        match cmd {
            Command::Quit => self.should_quit = true,

            Command::FocusPrev => self.selection.focus(focused.prev()),
            Command::FocusNext => self.selection.focus(focused.next()),

            Command::SelectUp => {
                self.selection.select_up(self.store.board().tasks(focused));
            }
            Command::SelectDown => {
                self.selection.select_down(self.store.board().tasks(focused));
            }
            Command::SelectFirst => {
                self.selection.select_first(self.store.board().tasks(focused));
            }
            Command::SelectLast => {
                self.selection.select_last(self.store.board().tasks(focused));
            }

            Command::MoveToPrevStatus => self.move_selected(focused.prev()),
            Command::MoveToNextStatus => self.move_selected(focused.next()),
            Command::ToggleDone => {
                let to = if focused == Status::Done {
                    Status::Todo
                } else {
                    Status::Done
                };
                self.move_selected(to);
            }

            Command::ToggleStar => {
                let Some(id) = self.selection.selected() else {
                    return;
                };
                match self.store.toggle_star(id) {
                    Ok(()) => {}
                    Err(StoreError::NotFound(_)) => self.selection.sync(self.store.board()),
                    Err(e) => self.report_error(e),
                }
            }

            Command::BeginCreate => {
                self.mode = Mode::Input;
                self.input_target = Some(InputTarget::Create);
                self.input_buffer.clear();
                self.input_cursor = 0;
            }
            Command::BeginEdit => {
                let (id, content) = match self.selected_task() {
                    Some(task) => (task.id, task.content.clone()),
                    None => return,
                };
                self.input_buffer = content;
                self.input_cursor = self.input_buffer.len();
                self.input_target = Some(InputTarget::Edit(id));
                self.mode = Mode::Input;
            }
            Command::CommitInput => self.commit_input(),
            Command::CancelInput => self.close_input(),

            Command::DeleteSelected => self.delete_selected(),

            Command::ToggleLayout => {
                self.vertical = !self.vertical;
                if let Err(e) = save_layout(self.store.data_dir(), self.vertical) {
                    self.report_error(e);
                }
            }
        }
    }

    /// Move the selected task to `to`, keep the cursor on it in its new
    /// column, and re-point the old column at the row that filled the gap.
    fn move_selected(&mut self, to: Status) {
        let from = self.selection.focused;
        if from == to {
            return;
        }
        let Some(id) = self.selection.selected() else {
            return;
        };
        let Some((_, storage_idx)) = self.store.board().find(id) else {
            self.selection.sync(self.store.board());
            return;
        };

        let result = self.store.move_task(id, to);
        if matches!(result, Err(StoreError::NotFound(_))) {
            self.selection.sync(self.store.board());
            return;
        }
        self.selection
            .recover(from, self.store.board().tasks(from), storage_idx);
        self.selection.focus(to);
        self.selection.set(to, Some(id));
        self.selection.sync(self.store.board());
        if let Err(e) = result {
            self.report_error(e);
        }
    }

    fn delete_selected(&mut self) {
        let status = self.selection.focused;
        let Some(id) = self.selection.selected() else {
            return;
        };
        let Some((_, storage_idx)) = self.store.board().find(id) else {
            self.selection.sync(self.store.board());
            return;
        };

        let result = self.store.delete(id);
        if matches!(result, Err(StoreError::NotFound(_))) {
            self.selection.sync(self.store.board());
            return;
        }
        self.selection
            .recover(status, self.store.board().tasks(status), storage_idx);
        self.selection.sync(self.store.board());
        if let Err(e) = result {
            self.report_error(e);
        }
    }

    fn commit_input(&mut self) {
        let target = self.input_target;
        let text = std::mem::take(&mut self.input_buffer);
        self.close_input();

        match target {
            Some(InputTarget::Create) => match self.store.add(&text) {
                Ok(task) => {
                    self.selection.focus(Status::Todo);
                    self.selection.set(Status::Todo, Some(task.id));
                }
                Err(StoreError::Persistence(e)) => {
                    // The task was still created in memory; keep the cursor on it.
                    let head = self.store.board().todo.first().map(|t| t.id);
                    self.selection.focus(Status::Todo);
                    self.selection.set(Status::Todo, head);
                    self.report_error(e);
                }
                // Blank input: treated the same as cancelling.
                Err(_) => {}
            },
            Some(InputTarget::Edit(id)) => match self.store.update_content(id, &text) {
                Ok(()) => {}
                Err(StoreError::NotFound(_)) => self.selection.sync(self.store.board()),
                Err(StoreError::Persistence(e)) => self.report_error(e),
                Err(_) => {}
            },
            None => {}
        }
        self.selection.sync(self.store.board());
    }

    fn close_input(&mut self) {
        self.mode = Mode::Navigate;
        self.input_target = None;
        self.input_buffer.clear();
        self.input_cursor = 0;
    }
}

// ---------------------------------------------------------------------------
// Terminal lifecycle
// ---------------------------------------------------------------------------

/// Run the TUI application
pub fn run(data_dir: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = match data_dir {
        Some(dir) => dir,
        None => default_data_dir()?,
    };

    // A board that fails to load still opens, empty, with the error shown.
    let (store, load_error) = match TaskStore::load(data_dir.clone()) {
        Ok(store) => (store, None),
        Err(e) => (TaskStore::empty(data_dir.clone()), Some(e)),
    };
    let vertical = load_layout(&data_dir);

    let mut app = App::new(store, vertical);
    if let Some(e) = load_error {
        app.report_error(format!("could not load tasks: {}", e));
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Run event loop
    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
