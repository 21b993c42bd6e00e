//! Errors returned by board services.

use crate::board::domain::{BoardDomainError, BoardId, ColumnId, TaskId};
use crate::board::ports::EntityStoreError;
use thiserror::Error;

/// Errors returned by board service operations.
#[derive(Debug, Clone, Error)]
pub enum BoardServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),

    /// Entity store operation failed.
    #[error(transparent)]
    Store(#[from] EntityStoreError),

    /// The board is not in the loaded list.
    #[error("board {0} is not loaded")]
    UnknownBoard(BoardId),

    /// The column is not on the loaded board.
    #[error("column {0} is not on the board")]
    UnknownColumn(ColumnId),

    /// The task is not in the given column.
    #[error("task {task_id} is not in column {column_id}")]
    UnknownTask {
        /// Column searched.
        column_id: ColumnId,
        /// Task looked up.
        task_id: TaskId,
    },
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;
