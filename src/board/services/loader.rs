//! Fetching a board's columns and tasks into its state.

use super::BoardServiceResult;
use crate::board::{
    domain::{BoardId, ColumnId},
    ports::{EntityStore, EntityStoreError},
};
use crate::ordering::{BoardCommand, BoardStateHandle};
use std::sync::Arc;
use tokio::task::JoinSet;

/// Outcome of a fan-out task fetch.
#[derive(Debug, Clone, Default)]
pub struct TaskLoadSummary {
    /// Columns whose tasks were loaded, in completion order.
    pub loaded: Vec<ColumnId>,
    /// Columns whose fetch failed; their task lists are left as they were.
    pub failed: Vec<(ColumnId, EntityStoreError)>,
}

/// Loads columns and tasks from the store into a [`BoardStateHandle`].
pub struct BoardLoader<S>
where
    S: EntityStore + 'static,
{
    store: Arc<S>,
}

impl<S> BoardLoader<S>
where
    S: EntityStore + 'static,
{
    /// Creates a loader.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Replaces the board's columns with the stored ones, sorted by order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`](super::BoardServiceError::Store)
    /// when the fetch fails. The previous columns are kept and the failure
    /// is recorded in the state.
    pub async fn load_columns(&self, state: &BoardStateHandle) -> BoardServiceResult<usize> {
        let board_id = state.board_id();
        state.dispatch(BoardCommand::ColumnsFetchStarted);
        match self.store.list_columns(&board_id).await {
            Ok(columns) => {
                let count = columns.len();
                state.dispatch(BoardCommand::ColumnsLoaded(columns));
                Ok(count)
            }
            Err(err) => {
                tracing::warn!(board_id = %board_id, error = %err, "failed to load columns");
                state.dispatch(BoardCommand::ColumnsFetchFailed(err.to_string()));
                Err(err.into())
            }
        }
    }

    /// Replaces one column's tasks with the stored ones.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`](super::BoardServiceError::Store)
    /// when the fetch fails. The column's task list is left as it was.
    pub async fn load_tasks(
        &self,
        state: &BoardStateHandle,
        column_id: &ColumnId,
    ) -> BoardServiceResult<usize> {
        let board_id = state.board_id();
        fetch_into(self.store.as_ref(), state, &board_id, column_id.clone())
            .await
            .map_err(Into::into)
    }

    /// Fetches the tasks of every column concurrently.
    ///
    /// Each result is written to its own column as soon as it arrives, in
    /// whatever order the fetches complete.
    pub async fn load_all_tasks(&self, state: &BoardStateHandle) -> TaskLoadSummary {
        let board_id = state.board_id();
        let mut fetches = JoinSet::new();
        for column_id in state.read(|board| board.column_ids()) {
            let store = Arc::clone(&self.store);
            let handle = state.clone();
            let fetch_board = board_id.clone();
            fetches.spawn(async move {
                let result =
                    fetch_into(store.as_ref(), &handle, &fetch_board, column_id.clone()).await;
                (column_id, result)
            });
        }

        let mut summary = TaskLoadSummary::default();
        while let Some(joined) = fetches.join_next().await {
            match joined {
                Ok((column_id, Ok(_))) => summary.loaded.push(column_id),
                Ok((column_id, Err(err))) => summary.failed.push((column_id, err)),
                Err(err) => {
                    tracing::error!(board_id = %board_id, error = %err, "task fetch aborted");
                }
            }
        }
        summary
    }

    /// Loads the columns, then the tasks of every column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`](super::BoardServiceError::Store)
    /// when the column fetch fails; task fetch failures are reported in the
    /// summary instead.
    pub async fn load_board(&self, state: &BoardStateHandle) -> BoardServiceResult<TaskLoadSummary> {
        self.load_columns(state).await?;
        Ok(self.load_all_tasks(state).await)
    }
}

async fn fetch_into<S>(
    store: &S,
    state: &BoardStateHandle,
    board_id: &BoardId,
    column_id: ColumnId,
) -> Result<usize, EntityStoreError>
where
    S: EntityStore + ?Sized,
{
    match store.list_tasks(board_id, &column_id).await {
        Ok(tasks) => {
            let count = tasks.len();
            state.dispatch(BoardCommand::TasksLoaded { column_id, tasks });
            Ok(count)
        }
        Err(err) => {
            tracing::warn!(
                board_id = %board_id,
                column_id = %column_id,
                error = %err,
                "failed to load tasks"
            );
            state.dispatch(BoardCommand::TasksFetchFailed {
                column_id,
                reason: err.to_string(),
            });
            Err(err)
        }
    }
}
