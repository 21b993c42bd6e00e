//! Entity store port: CRUD over boards, columns and tasks.
//!
//! The store is a remote document database addressed by
//! `boards/{board}/columns/{column}/tasks/{task}` paths. Implementations
//! assign identifiers and creation timestamps.

use crate::board::domain::{
    Board, BoardId, BoardUpdate, Column, ColumnId, ColumnUpdate, OwnerId, Task, TaskId, TaskUpdate,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for entity store operations.
pub type EntityStoreResult<T> = Result<T, EntityStoreError>;

/// Document store contract consumed by the board engine.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Lists the boards owned by `owner`.
    async fn list_boards(&self, owner: &OwnerId) -> EntityStoreResult<Vec<Board>>;

    /// Creates a board and returns the stored record.
    async fn create_board(&self, owner: &OwnerId, title: &str) -> EntityStoreResult<Board>;

    /// Merges `update` into an existing board.
    ///
    /// # Errors
    ///
    /// Returns [`EntityStoreError::NotFound`] when the board does not exist.
    async fn update_board(&self, board: &BoardId, update: &BoardUpdate) -> EntityStoreResult<()>;

    /// Deletes a board.
    async fn delete_board(&self, board: &BoardId) -> EntityStoreResult<()>;

    /// Lists a board's columns sorted by ascending `order`.
    async fn list_columns(&self, board: &BoardId) -> EntityStoreResult<Vec<Column>>;

    /// Creates a column with the given order key.
    async fn create_column(
        &self,
        board: &BoardId,
        title: &str,
        order: i64,
    ) -> EntityStoreResult<Column>;

    /// Merges `update` into an existing column.
    async fn update_column(
        &self,
        board: &BoardId,
        column: &ColumnId,
        update: &ColumnUpdate,
    ) -> EntityStoreResult<()>;

    /// Rewrites only the order key of a column.
    async fn set_column_order(
        &self,
        board: &BoardId,
        column: &ColumnId,
        order: i64,
    ) -> EntityStoreResult<()>;

    /// Deletes a column.
    async fn delete_column(&self, board: &BoardId, column: &ColumnId) -> EntityStoreResult<()>;

    /// Lists a column's tasks in storage iteration order.
    async fn list_tasks(&self, board: &BoardId, column: &ColumnId) -> EntityStoreResult<Vec<Task>>;

    /// Creates an open task at the end of a column.
    async fn create_task(
        &self,
        board: &BoardId,
        column: &ColumnId,
        title: &str,
        description: Option<String>,
    ) -> EntityStoreResult<Task>;

    /// Merges `update` into an existing task.
    async fn update_task(
        &self,
        board: &BoardId,
        column: &ColumnId,
        task: &TaskId,
        update: &TaskUpdate,
    ) -> EntityStoreResult<()>;

    /// Deletes a task.
    async fn delete_task(
        &self,
        board: &BoardId,
        column: &ColumnId,
        task: &TaskId,
    ) -> EntityStoreResult<()>;
}

/// Errors returned by entity store implementations.
#[derive(Debug, Clone, Error)]
pub enum EntityStoreError {
    /// No document exists at the path.
    #[error("document not found: {0}")]
    NotFound(String),

    /// The store could not be reached.
    #[error("entity store unavailable: {0}")]
    Unavailable(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl EntityStoreError {
    /// Wraps a persistence error.
    #[must_use]
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
