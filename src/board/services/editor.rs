//! Column and task editing on a loaded board.

use super::{BoardServiceError, BoardServiceResult};
use crate::board::{
    domain::{Column, ColumnId, ColumnUpdate, Task, TaskId, TaskUpdate, validated_title},
    ports::EntityStore,
};
use crate::ordering::{BoardCommand, BoardStateHandle};
use std::sync::Arc;

/// Creates, updates and deletes columns and tasks.
///
/// Every operation calls the store first and changes local state only once
/// the call succeeds.
pub struct BoardEditor<S>
where
    S: EntityStore,
{
    store: Arc<S>,
}

impl<S> BoardEditor<S>
where
    S: EntityStore,
{
    /// Creates an editor.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Appends a column, giving it the next order value.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] for a blank title or
    /// [`BoardServiceError::Store`] when the store rejects the write.
    pub async fn create_column(
        &self,
        state: &BoardStateHandle,
        title: &str,
    ) -> BoardServiceResult<Column> {
        let validated = validated_title(title, "column")?;
        let (board_id, order) = state.read(|board| {
            let next = board
                .columns()
                .iter()
                .map(|column| column.order().saturating_add(1))
                .max()
                .unwrap_or_default();
            let by_count = i64::try_from(board.columns().len()).unwrap_or(i64::MAX);
            (board.board_id().clone(), next.max(by_count))
        });
        let column = self.store.create_column(&board_id, &validated, order).await?;
        state.dispatch(BoardCommand::ColumnCreated(column.clone()));
        Ok(column)
    }

    /// Renames a column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] for a blank title or
    /// [`BoardServiceError::Store`] when the store rejects the write.
    pub async fn rename_column(
        &self,
        state: &BoardStateHandle,
        column_id: &ColumnId,
        title: &str,
    ) -> BoardServiceResult<()> {
        let update = ColumnUpdate::title(validated_title(title, "column")?);
        let board_id = state.board_id();
        self.store
            .update_column(&board_id, column_id, &update)
            .await?;
        state.dispatch(BoardCommand::ColumnUpdated {
            column_id: column_id.clone(),
            update,
        });
        Ok(())
    }

    /// Deletes a column and drops its task list.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when the store rejects the
    /// delete.
    pub async fn delete_column(
        &self,
        state: &BoardStateHandle,
        column_id: &ColumnId,
    ) -> BoardServiceResult<()> {
        let board_id = state.board_id();
        self.store.delete_column(&board_id, column_id).await?;
        state.dispatch(BoardCommand::ColumnDeleted(column_id.clone()));
        Ok(())
    }

    /// Appends an open task to a column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::UnknownColumn`] when the column is not
    /// on the board, [`BoardServiceError::Domain`] for a blank title or
    /// [`BoardServiceError::Store`] when the store rejects the write.
    pub async fn create_task(
        &self,
        state: &BoardStateHandle,
        column_id: &ColumnId,
        title: &str,
        description: Option<String>,
    ) -> BoardServiceResult<Task> {
        let validated = validated_title(title, "task")?;
        let (board_id, known) =
            state.read(|board| (board.board_id().clone(), board.has_column(column_id)));
        if !known {
            return Err(BoardServiceError::UnknownColumn(column_id.clone()));
        }
        let task = self
            .store
            .create_task(&board_id, column_id, &validated, description)
            .await?;
        state.dispatch(BoardCommand::TaskCreated {
            column_id: column_id.clone(),
            task: task.clone(),
        });
        Ok(task)
    }

    /// Merges partial fields into a task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] when a present title is blank
    /// or [`BoardServiceError::Store`] when the store rejects the write.
    pub async fn update_task(
        &self,
        state: &BoardStateHandle,
        column_id: &ColumnId,
        task_id: &TaskId,
        mut update: TaskUpdate,
    ) -> BoardServiceResult<()> {
        if let Some(title) = update.title.take() {
            update.title = Some(validated_title(title, "task")?);
        }
        if update.is_empty() {
            return Ok(());
        }
        let board_id = state.board_id();
        self.store
            .update_task(&board_id, column_id, task_id, &update)
            .await?;
        state.dispatch(BoardCommand::TaskUpdated {
            column_id: column_id.clone(),
            task_id: task_id.clone(),
            update,
        });
        Ok(())
    }

    /// Flips a task's completion flag and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::UnknownTask`] when the task is not in
    /// the column or [`BoardServiceError::Store`] when the store rejects the
    /// write.
    pub async fn toggle_task(
        &self,
        state: &BoardStateHandle,
        column_id: &ColumnId,
        task_id: &TaskId,
    ) -> BoardServiceResult<bool> {
        let current = state
            .read(|board| board.task(column_id, task_id).map(Task::is_completed))
            .ok_or_else(|| BoardServiceError::UnknownTask {
                column_id: column_id.clone(),
                task_id: task_id.clone(),
            })?;
        let completed = !current;
        self.update_task(state, column_id, task_id, TaskUpdate::completed(completed))
            .await?;
        Ok(completed)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when the store rejects the
    /// delete.
    pub async fn delete_task(
        &self,
        state: &BoardStateHandle,
        column_id: &ColumnId,
        task_id: &TaskId,
    ) -> BoardServiceResult<()> {
        let board_id = state.board_id();
        self.store.delete_task(&board_id, column_id, task_id).await?;
        state.dispatch(BoardCommand::TaskDeleted {
            column_id: column_id.clone(),
            task_id: task_id.clone(),
        });
        Ok(())
    }
}
