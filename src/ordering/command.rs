//! Commands accepted by the board state reducer.

use crate::board::domain::{Column, ColumnId, ColumnUpdate, Task, TaskId, TaskUpdate};

/// A single state transition of [`BoardState`](super::BoardState).
///
/// Every mutation of the in-memory board goes through one of these so the
/// transitions stay pure and testable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardCommand {
    /// A column fetch has been issued.
    ColumnsFetchStarted,
    /// Columns arrived from the store; replaces the list.
    ColumnsLoaded(Vec<Column>),
    /// The column fetch failed.
    ColumnsFetchFailed(String),
    /// A column was created remotely; appends it.
    ColumnCreated(Column),
    /// A column was updated remotely.
    ColumnUpdated {
        /// Updated column.
        column_id: ColumnId,
        /// Fields that changed.
        update: ColumnUpdate,
    },
    /// A column was deleted remotely; drops it and its task list.
    ColumnDeleted(ColumnId),
    /// Local column reorder by array position.
    ReorderColumns {
        /// Current index of the moved column.
        from: usize,
        /// Index the column ends up at.
        to: usize,
    },
    /// Tasks of one column arrived from the store; overwrites that key only.
    TasksLoaded {
        /// Column the tasks belong to.
        column_id: ColumnId,
        /// Tasks in storage order.
        tasks: Vec<Task>,
    },
    /// The task fetch for one column failed.
    TasksFetchFailed {
        /// Column whose fetch failed.
        column_id: ColumnId,
        /// Failure description.
        reason: String,
    },
    /// A task was created remotely; appends it.
    TaskCreated {
        /// Owning column.
        column_id: ColumnId,
        /// The stored task.
        task: Task,
    },
    /// A task was updated remotely.
    TaskUpdated {
        /// Owning column.
        column_id: ColumnId,
        /// Updated task.
        task_id: TaskId,
        /// Fields that changed.
        update: TaskUpdate,
    },
    /// A task was deleted remotely.
    TaskDeleted {
        /// Owning column.
        column_id: ColumnId,
        /// Deleted task.
        task_id: TaskId,
    },
    /// Local task reorder within one column.
    ReorderTasks {
        /// Column being reordered.
        column_id: ColumnId,
        /// Current index of the moved task.
        from: usize,
        /// Index the task ends up at.
        to: usize,
    },
    /// A task left one column and entered another.
    ///
    /// Removal from the source and insertion into the destination happen in
    /// the same transition.
    TaskMoved {
        /// Column the task leaves.
        from_column: ColumnId,
        /// Column the task enters.
        to_column: ColumnId,
        /// Identifier of the task in the source column.
        task_id: TaskId,
        /// Task record to insert into the destination.
        task: Task,
        /// Insertion index, clamped to the destination length.
        dest_index: usize,
    },
    /// A task's record was replaced in place, keeping its position.
    TaskReplaced {
        /// Owning column.
        column_id: ColumnId,
        /// Identifier being replaced.
        old_id: TaskId,
        /// Replacement record.
        task: Task,
    },
}

impl BoardCommand {
    /// Short label used in log records.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ColumnsFetchStarted => "columns_fetch_started",
            Self::ColumnsLoaded(_) => "columns_loaded",
            Self::ColumnsFetchFailed(_) => "columns_fetch_failed",
            Self::ColumnCreated(_) => "column_created",
            Self::ColumnUpdated { .. } => "column_updated",
            Self::ColumnDeleted(_) => "column_deleted",
            Self::ReorderColumns { .. } => "reorder_columns",
            Self::TasksLoaded { .. } => "tasks_loaded",
            Self::TasksFetchFailed { .. } => "tasks_fetch_failed",
            Self::TaskCreated { .. } => "task_created",
            Self::TaskUpdated { .. } => "task_updated",
            Self::TaskDeleted { .. } => "task_deleted",
            Self::ReorderTasks { .. } => "reorder_tasks",
            Self::TaskMoved { .. } => "task_moved",
            Self::TaskReplaced { .. } => "task_replaced",
        }
    }
}
