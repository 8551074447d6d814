use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{STATUS_ORDER, Status, Task};

/// The whole board: one task list per status column.
///
/// Each list holds tasks whose `status` field matches the list it sits in;
/// storage order is insertion order (newest at the head), with display
/// order derived separately.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    #[serde(default)]
    pub todo: Vec<Task>,
    #[serde(default)]
    pub in_progress: Vec<Task>,
    #[serde(default)]
    pub done: Vec<Task>,
}

impl Board {
    /// The task list for one status column.
    pub fn tasks(&self, status: Status) -> &Vec<Task> {
        match status {
            Status::Todo => &self.todo,
            Status::InProgress => &self.in_progress,
            Status::Done => &self.done,
        }
    }

    /// Mutable access to one status column's list.
    pub fn tasks_mut(&mut self, status: Status) -> &mut Vec<Task> {
        match status {
            Status::Todo => &mut self.todo,
            Status::InProgress => &mut self.in_progress,
            Status::Done => &mut self.done,
        }
    }

    /// Locate a task by id, returning its column and storage position.
    pub fn find(&self, id: Uuid) -> Option<(Status, usize)> {
        for status in STATUS_ORDER {
            if let Some(idx) = self.tasks(status).iter().position(|t| t.id == id) {
                return Some((status, idx));
            }
        }
        None
    }

    /// Borrow a task by id.
    pub fn get(&self, id: Uuid) -> Option<&Task> {
        let (status, idx) = self.find(id)?;
        Some(&self.tasks(status)[idx])
    }

    /// Whether any column holds a task with this id.
    pub fn contains(&self, id: Uuid) -> bool {
        self.find(id).is_some()
    }

    /// Total number of tasks across all columns.
    pub fn len(&self) -> usize {
        STATUS_ORDER.iter().map(|&s| self.tasks(s).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over every task on the board, column by column.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        STATUS_ORDER.into_iter().flat_map(|s| self.tasks(s).iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task_in(status: Status, content: &str) -> Task {
        let mut t = Task::new(content.into());
        t.status = status;
        t
    }

    #[test]
    fn find_reports_column_and_position() {
        let mut board = Board::default();
        board.todo.push(task_in(Status::Todo, "a"));
        board.done.push(task_in(Status::Done, "b"));
        board.done.push(task_in(Status::Done, "c"));

        let c_id = board.done[1].id;
        assert_eq!(board.find(c_id), Some((Status::Done, 1)));
        assert!(board.contains(c_id));
        assert_eq!(board.get(c_id).map(|t| t.content.as_str()), Some("c"));
    }

    #[test]
    fn find_misses_unknown_id() {
        let mut board = Board::default();
        board.todo.push(task_in(Status::Todo, "only one"));
        assert_eq!(board.find(Uuid::new_v4()), None);
    }

    #[test]
    fn len_spans_all_columns() {
        let mut board = Board::default();
        assert!(board.is_empty());
        board.todo.push(task_in(Status::Todo, "a"));
        board.in_progress.push(task_in(Status::InProgress, "b"));
        board.done.push(task_in(Status::Done, "c"));
        assert_eq!(board.len(), 3);
        assert_eq!(board.iter().count(), 3);
    }

    #[test]
    fn empty_board_serializes_with_all_columns() {
        let json = serde_json::to_string(&Board::default()).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn deserializes_with_missing_columns() {
        // A file containing only one column still loads; the rest default.
        let board: Board = serde_json::from_str(r#"{"todo":[]}"#).unwrap();
        assert!(board.is_empty());
    }
}
