use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Column a task lives in. The three statuses form an ordered lifecycle:
/// Todo → In Progress → Done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Todo,
    InProgress,
    Done,
}

/// Column display order, left to right (or top to bottom in vertical layout).
pub const STATUS_ORDER: [Status; 3] = [Status::Todo, Status::InProgress, Status::Done];

impl Status {
    /// Column header text.
    pub fn title(self) -> &'static str {
        match self {
            Status::Todo => "Todo",
            Status::InProgress => "In Progress",
            Status::Done => "Done",
        }
    }

    /// The status one column to the left; clamped at Todo (no wraparound).
    pub fn prev(self) -> Status {
        match self {
            Status::Todo => Status::Todo,
            Status::InProgress => Status::Todo,
            Status::Done => Status::InProgress,
        }
    }

    /// The status one column to the right; clamped at Done (no wraparound).
    pub fn next(self) -> Status {
        match self {
            Status::Todo => Status::InProgress,
            Status::InProgress => Status::Done,
            Status::Done => Status::Done,
        }
    }
}

/// One unit of work on the board.
///
/// `id` is assigned at creation and never changes. `created_at` and
/// `updated_at` are epoch seconds; `updated_at` is bumped on every
/// mutation except starring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub content: String,
    pub status: Status,
    #[serde(default)]
    pub starred: bool,
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

impl Task {
    /// Create a new Todo task with a fresh identifier and current timestamps.
    /// Content is stored as given; callers validate first.
    pub fn new(content: String) -> Self {
        let now = Utc::now().timestamp();
        Task {
            id: Uuid::new_v4(),
            content,
            status: Status::Todo,
            starred: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record a mutation by bumping `updated_at`.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now().timestamp();
    }
}
