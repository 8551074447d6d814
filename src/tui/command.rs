/// A discrete board operation, decoupled from the keys that trigger it.
///
/// Key handlers translate raw terminal events into commands; `App::apply`
/// is the single place board state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Focus the column to the left (clamped at Todo).
    FocusPrev,
    /// Focus the column to the right (clamped at Done).
    FocusNext,
    /// Select the previous task in the focused column's display order.
    SelectUp,
    /// Select the next task in the focused column's display order.
    SelectDown,
    /// Jump to the top of the focused column.
    SelectFirst,
    /// Jump to the bottom of the focused column.
    SelectLast,
    /// Move the selected task one status to the left.
    MoveToPrevStatus,
    /// Move the selected task one status to the right.
    MoveToNextStatus,
    /// Move the selected task to Done, or back to Todo if already Done.
    ToggleDone,
    /// Flip the star on the selected task.
    ToggleStar,
    /// Open the input line to create a new task.
    BeginCreate,
    /// Open the input line pre-filled with the selected task's content.
    BeginEdit,
    /// Accept the input line (create or rename, depending on target).
    CommitInput,
    /// Discard the input line and return to navigation.
    CancelInput,
    /// Delete the selected task.
    DeleteSelected,
    /// Switch between side-by-side and stacked column layouts.
    ToggleLayout,
    Quit,
}
