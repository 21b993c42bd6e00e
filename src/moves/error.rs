//! Errors raised while reconciling a move with the entity store.

use crate::board::domain::{ColumnId, TaskId};
use crate::board::ports::EntityStoreError;
use thiserror::Error;

/// Failure of a cross-column task move.
#[derive(Debug, Clone, Error)]
pub enum MoveError {
    /// The dragged task is no longer in its source column.
    #[error("task {task_id} not found in column {column_id}")]
    SourceTaskMissing {
        /// Column searched.
        column_id: ColumnId,
        /// Task looked up.
        task_id: TaskId,
    },

    /// The copy could not be created in the destination column.
    #[error("failed to create a copy of task {task_id} in column {column_id}: {source}")]
    CreateFailed {
        /// Destination column.
        column_id: ColumnId,
        /// Task being moved.
        task_id: TaskId,
        /// Store failure.
        source: EntityStoreError,
    },

    /// The copy exists but the original could not be deleted, so the task
    /// is stored twice.
    #[error(
        "task {task_id} duplicated: copy {copy_id} created in column {to_column} \
         but delete from column {from_column} failed: {source}"
    )]
    SourceDeleteFailed {
        /// Original task.
        task_id: TaskId,
        /// Identifier of the copy in the destination.
        copy_id: TaskId,
        /// Source column.
        from_column: ColumnId,
        /// Destination column.
        to_column: ColumnId,
        /// Whether the copy was deleted again to undo the duplication.
        compensated: bool,
        /// Store failure.
        source: EntityStoreError,
    },
}
