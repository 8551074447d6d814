use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::io::{self, PersistError};
use crate::model::{Board, Status, Task};

/// Error type for board mutations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("task content is empty")]
    EmptyContent,
    #[error("task not found: {0}")]
    NotFound(Uuid),
    #[error(transparent)]
    Persistence(#[from] PersistError),
}

/// Owns the board and applies every mutation as one apply-then-persist step.
///
/// Each mutating method commits to the in-memory board first and then writes
/// the whole board to disk. A failed write comes back as
/// [`StoreError::Persistence`] with the in-memory change already applied, so
/// memory and disk can diverge until the next successful save; callers decide
/// how loudly to surface that.
#[derive(Debug)]
pub struct TaskStore {
    data_dir: PathBuf,
    board: Board,
}

impl TaskStore {
    /// Load the board from `data_dir`. A missing file starts an empty board;
    /// unreadable or corrupt data is propagated rather than discarded.
    pub fn load(data_dir: PathBuf) -> Result<Self, PersistError> {
        let board = io::load_tasks(&data_dir)?;
        Ok(TaskStore { data_dir, board })
    }

    /// A store with an empty board, nothing read from disk.
    pub fn empty(data_dir: PathBuf) -> Self {
        TaskStore {
            data_dir,
            board: Board::default(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Read-only view of the live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// A deep, independent copy of the board. Later mutations of the store
    /// are never visible through it.
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    /// Create a task from trimmed `content` at the head of Todo.
    /// Returns the created task; rejects blank content before mutating.
    pub fn add(&mut self, content: &str) -> Result<Task, StoreError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(StoreError::EmptyContent);
        }

        let task = Task::new(content.to_string());
        self.board.todo.insert(0, task.clone());
        self.persist()?;
        Ok(task)
    }

    /// Replace a task's content with trimmed `content` and bump `updated_at`.
    pub fn update_content(&mut self, id: Uuid, content: &str) -> Result<(), StoreError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(StoreError::EmptyContent);
        }

        let (status, idx) = self.board.find(id).ok_or(StoreError::NotFound(id))?;
        let task = &mut self.board.tasks_mut(status)[idx];
        task.content = content.to_string();
        task.touch();
        self.persist()?;
        Ok(())
    }

    /// Flip a task's star. Starring is metadata, not a content change, so
    /// `updated_at` stays put and toggling only regroups the display order.
    pub fn toggle_star(&mut self, id: Uuid) -> Result<(), StoreError> {
        let (status, idx) = self.board.find(id).ok_or(StoreError::NotFound(id))?;
        let task = &mut self.board.tasks_mut(status)[idx];
        task.starred = !task.starred;
        self.persist()?;
        Ok(())
    }

    /// Move a task to another column: remove from its current list, set the
    /// new status, bump `updated_at`, insert at the head of the target list.
    /// Moving a task to the column it is already in succeeds without
    /// touching the board or the file.
    pub fn move_task(&mut self, id: Uuid, to: Status) -> Result<(), StoreError> {
        let (from, idx) = self.board.find(id).ok_or(StoreError::NotFound(id))?;
        if from == to {
            return Ok(());
        }

        let mut task = self.board.tasks_mut(from).remove(idx);
        task.status = to;
        task.touch();
        self.board.tasks_mut(to).insert(0, task);
        self.persist()?;
        Ok(())
    }

    /// Remove a task from the board.
    pub fn delete(&mut self, id: Uuid) -> Result<(), StoreError> {
        let (status, idx) = self.board.find(id).ok_or(StoreError::NotFound(id))?;
        self.board.tasks_mut(status).remove(idx);
        self.persist()?;
        Ok(())
    }

    fn persist(&self) -> Result<(), PersistError> {
        io::save_tasks(&self.data_dir, &self.board)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
