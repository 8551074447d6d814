use uuid::Uuid;

use crate::model::{Board, STATUS_ORDER, Status, Task};

// ---------------------------------------------------------------------------
// Canonical display order
// ---------------------------------------------------------------------------

/// Compute the display order for one column as indices into its storage list.
///
/// Sort key: starred before unstarred, then newest `created_at` first.
/// The sort is stable, so tasks with equal keys keep their storage order.
/// Starring does not bump `updated_at`, so toggling a star only regroups
/// tasks without disturbing relative recency.
pub fn canonical_order(tasks: &[Task]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..tasks.len()).collect();
    order.sort_by(|&a, &b| {
        let (ta, tb) = (&tasks[a], &tasks[b]);
        tb.starred
            .cmp(&ta.starred)
            .then(tb.created_at.cmp(&ta.created_at))
    });
    order
}

/// Position of `id` within the canonical order of `tasks`, if present.
pub fn position_of(tasks: &[Task], id: Uuid) -> Option<usize> {
    canonical_order(tasks)
        .iter()
        .position(|&i| tasks[i].id == id)
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// Which task is highlighted in each column, plus the focused column.
///
/// Picks are task identities, never positions: inserting at the head of a
/// storage list or re-sorting for display cannot silently move the
/// highlight to a different task. Positions are computed transiently from
/// [`canonical_order`] during navigation. Session state only, not persisted.
#[derive(Debug, Clone)]
pub struct Selection {
    pub focused: Status,
    picks: [Option<Uuid>; 3],
}

fn slot(status: Status) -> usize {
    match status {
        Status::Todo => 0,
        Status::InProgress => 1,
        Status::Done => 2,
    }
}

impl Default for Selection {
    fn default() -> Self {
        Selection::new()
    }
}

impl Selection {
    pub fn new() -> Self {
        Selection {
            focused: Status::Todo,
            picks: [None; 3],
        }
    }

    /// The highlighted task in `status`, if any.
    pub fn pick(&self, status: Status) -> Option<Uuid> {
        self.picks[slot(status)]
    }

    /// The highlighted task in the focused column.
    pub fn selected(&self) -> Option<Uuid> {
        self.pick(self.focused)
    }

    pub fn set(&mut self, status: Status, pick: Option<Uuid>) {
        self.picks[slot(status)] = pick;
    }

    pub fn focus(&mut self, status: Status) {
        self.focused = status;
    }

    /// Move the highlight one step up in the focused column's display order.
    /// Clamped at the top; selects the top task when nothing is highlighted.
    pub fn select_up(&mut self, tasks: &[Task]) {
        self.step(tasks, -1);
    }

    /// Move the highlight one step down; clamped at the bottom.
    pub fn select_down(&mut self, tasks: &[Task]) {
        self.step(tasks, 1);
    }

    /// Jump to the first task in display order.
    pub fn select_first(&mut self, tasks: &[Task]) {
        let order = canonical_order(tasks);
        self.picks[slot(self.focused)] = order.first().map(|&i| tasks[i].id);
    }

    /// Jump to the last task in display order.
    pub fn select_last(&mut self, tasks: &[Task]) {
        let order = canonical_order(tasks);
        self.picks[slot(self.focused)] = order.last().map(|&i| tasks[i].id);
    }

    fn step(&mut self, tasks: &[Task], delta: isize) {
        let order = canonical_order(tasks);
        if order.is_empty() {
            self.picks[slot(self.focused)] = None;
            return;
        }
        let current = self.selected().and_then(|id| {
            order.iter().position(|&i| tasks[i].id == id)
        });
        let pos = match current {
            Some(p) => (p as isize + delta).clamp(0, order.len() as isize - 1) as usize,
            None => 0,
        };
        self.picks[slot(self.focused)] = Some(tasks[order[pos]].id);
    }

    /// Re-highlight after the highlighted task left `status`.
    ///
    /// `tasks` is the column's storage list after removal and `removed_idx`
    /// the storage index the departed task occupied. Falls back to the task
    /// now at that index, else the last remaining task, else nothing.
    pub fn recover(&mut self, status: Status, tasks: &[Task], removed_idx: usize) {
        let pick = tasks
            .get(removed_idx)
            .or_else(|| tasks.last())
            .map(|t| t.id);
        self.picks[slot(status)] = pick;
    }

    /// Re-validate every pick against the board.
    ///
    /// Clears picks whose task is no longer in that column and highlights
    /// the display head of any non-empty column left without one. After
    /// this, a pick is unset only for an empty column.
    pub fn sync(&mut self, board: &Board) {
        for status in STATUS_ORDER {
            let tasks = board.tasks(status);
            let s = slot(status);
            if let Some(id) = self.picks[s]
                && !tasks.iter().any(|t| t.id == id)
            {
                self.picks[s] = None;
            }
            if self.picks[s].is_none() {
                self.picks[s] = canonical_order(tasks).first().map(|&i| tasks[i].id);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
