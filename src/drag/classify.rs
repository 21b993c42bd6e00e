//! Classification of a committed drop into a concrete move.

use super::DragId;
use crate::board::domain::{ColumnId, TaskId};
use crate::ordering::BoardState;

/// Why a drop resolved to no move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoOpReason {
    /// The drop happened over no target.
    NoTarget,
    /// The target identifier carries no known kind prefix.
    UnrecognisedTarget,
    /// The dragged element is not on the board.
    UnknownActive,
    /// The target is not on the board.
    UnknownTarget,
    /// Source and destination positions are the same.
    SamePosition,
}

/// Concrete effect of a drop on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovePlan {
    /// Move a column from one display index to another.
    ReorderColumns {
        /// Current index of the dragged column.
        from: usize,
        /// Index of the column dropped onto.
        to: usize,
    },
    /// Move a task within its own column.
    ReorderTasks {
        /// Column containing the task.
        column_id: ColumnId,
        /// Current index of the dragged task.
        from: usize,
        /// Index the task ends up at.
        to: usize,
    },
    /// Move a task into another column.
    MoveTask {
        /// Dragged task.
        task_id: TaskId,
        /// Column the task currently lives in.
        from_column: ColumnId,
        /// Column receiving the task.
        to_column: ColumnId,
        /// Insertion index in the receiving column.
        dest_index: usize,
    },
    /// Nothing to do.
    NoOp(NoOpReason),
}

impl MovePlan {
    /// Returns `true` when the plan changes nothing.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        matches!(self, Self::NoOp(_))
    }
}

/// Resolves a drop of `active` over `over` against the current board.
///
/// | active | over | plan |
/// |---|---|---|
/// | column | column | reorder columns |
/// | column | task | reorder columns, using the task's column |
/// | task | task in same column | reorder tasks |
/// | task | task in other column | move task to the over task's index |
/// | task | other column | move task to the end of that column |
/// | task | own column | reorder task to the end of its column |
///
/// The result depends only on the arguments.
#[must_use]
pub fn classify(active: &DragId, over: Option<&DragId>, state: &BoardState) -> MovePlan {
    let Some(over) = over else {
        return MovePlan::NoOp(NoOpReason::NoTarget);
    };
    match active {
        DragId::Column(column_id) => classify_column(column_id, over, state),
        DragId::Task(task_id) => classify_task(task_id, over, state),
    }
}

/// Resolves a drop given the raw element identifiers.
///
/// An unparseable `over` is treated as an unrecognised target; an
/// unparseable `active` as an unknown dragged element.
#[must_use]
pub fn classify_raw(active: &str, over: Option<&str>, state: &BoardState) -> MovePlan {
    let Ok(active) = active.parse::<DragId>() else {
        return MovePlan::NoOp(NoOpReason::UnknownActive);
    };
    match over.map(str::parse::<DragId>) {
        None => MovePlan::NoOp(NoOpReason::NoTarget),
        Some(Err(_)) => MovePlan::NoOp(NoOpReason::UnrecognisedTarget),
        Some(Ok(over)) => classify(&active, Some(&over), state),
    }
}

fn classify_column(column_id: &ColumnId, over: &DragId, state: &BoardState) -> MovePlan {
    let Some(from) = state.column_index(column_id) else {
        return MovePlan::NoOp(NoOpReason::UnknownActive);
    };
    let target_column = match over {
        DragId::Column(target) => Some(target),
        DragId::Task(task_id) => state.locate_task(task_id).map(|(column, _)| column),
    };
    let Some(to) = target_column.and_then(|target| state.column_index(target)) else {
        return MovePlan::NoOp(NoOpReason::UnknownTarget);
    };
    if from == to {
        return MovePlan::NoOp(NoOpReason::SamePosition);
    }
    MovePlan::ReorderColumns { from, to }
}

fn classify_task(task_id: &TaskId, over: &DragId, state: &BoardState) -> MovePlan {
    let Some((source_column, from)) = state.locate_task(task_id) else {
        return MovePlan::NoOp(NoOpReason::UnknownActive);
    };
    let (dest_column, dest_index) = match over {
        DragId::Task(over_task) => match state.locate_task(over_task) {
            Some((column, index)) => (column, index),
            None => return MovePlan::NoOp(NoOpReason::UnknownTarget),
        },
        DragId::Column(column) if state.has_column(column) => {
            if column == source_column {
                let last = state.task_count(column).saturating_sub(1);
                (column, last)
            } else {
                (column, state.task_count(column))
            }
        }
        DragId::Column(_) => return MovePlan::NoOp(NoOpReason::UnknownTarget),
    };

    if dest_column == source_column {
        if from == dest_index {
            return MovePlan::NoOp(NoOpReason::SamePosition);
        }
        return MovePlan::ReorderTasks {
            column_id: source_column.clone(),
            from,
            to: dest_index,
        };
    }

    MovePlan::MoveTask {
        task_id: task_id.clone(),
        from_column: source_column.clone(),
        to_column: dest_column.clone(),
        dest_index,
    }
}
