//! In-memory board state and its reducer.

use super::{BoardCommand, reorder};
use crate::board::domain::{BoardId, Column, ColumnId, Task, TaskId};
use std::collections::HashMap;

/// Columns and tasks of one board as currently held by the client.
///
/// The column list is sorted by [`Column::order`] after every fetch; between
/// fetches its array order is authoritative. Task lists are keyed by column.
/// A missing key means the column's tasks have not been loaded yet, which is
/// different from an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    board_id: BoardId,
    columns: Vec<Column>,
    tasks_by_column: HashMap<ColumnId, Vec<Task>>,
    loading: bool,
    last_error: Option<String>,
}

impl BoardState {
    /// Creates an empty state for `board_id`.
    #[must_use]
    pub fn new(board_id: BoardId) -> Self {
        Self {
            board_id,
            columns: Vec::new(),
            tasks_by_column: HashMap::new(),
            loading: false,
            last_error: None,
        }
    }

    /// Returns the board this state belongs to.
    #[must_use]
    pub const fn board_id(&self) -> &BoardId {
        &self.board_id
    }

    /// Returns the columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the column identifiers in display order.
    #[must_use]
    pub fn column_ids(&self) -> Vec<ColumnId> {
        self.columns.iter().map(|column| column.id().clone()).collect()
    }

    /// Returns a column's tasks, or `None` if they have not been loaded.
    #[must_use]
    pub fn tasks(&self, column_id: &ColumnId) -> Option<&[Task]> {
        self.tasks_by_column.get(column_id).map(Vec::as_slice)
    }

    /// Returns the number of loaded tasks in a column (zero when unloaded).
    #[must_use]
    pub fn task_count(&self, column_id: &ColumnId) -> usize {
        self.tasks_by_column.get(column_id).map_or(0, Vec::len)
    }

    /// Returns the total number of loaded tasks across the board's columns.
    #[must_use]
    pub fn total_task_count(&self) -> usize {
        self.columns
            .iter()
            .map(|column| self.task_count(column.id()))
            .sum()
    }

    /// Iterates every loaded task, column by column in display order.
    #[must_use]
    pub fn all_tasks(&self) -> impl Iterator<Item = &Task> {
        self.columns
            .iter()
            .filter_map(|column| self.tasks_by_column.get(column.id()))
            .flatten()
    }

    /// Returns the display index of a column.
    #[must_use]
    pub fn column_index(&self, column_id: &ColumnId) -> Option<usize> {
        self.columns
            .iter()
            .position(|column| column.id() == column_id)
    }

    /// Returns `true` when the board has a column with this identifier.
    #[must_use]
    pub fn has_column(&self, column_id: &ColumnId) -> bool {
        self.column_index(column_id).is_some()
    }

    /// Finds the column holding a task and the task's index within it.
    ///
    /// Columns are searched in display order so the answer is deterministic.
    #[must_use]
    pub fn locate_task(&self, task_id: &TaskId) -> Option<(&ColumnId, usize)> {
        self.columns.iter().find_map(|column| {
            self.tasks_by_column
                .get(column.id())?
                .iter()
                .position(|task| task.id() == task_id)
                .map(|index| (column.id(), index))
        })
    }

    /// Returns a task by column and identifier.
    #[must_use]
    pub fn task(&self, column_id: &ColumnId, task_id: &TaskId) -> Option<&Task> {
        self.tasks_by_column
            .get(column_id)?
            .iter()
            .find(|task| task.id() == task_id)
    }

    /// Returns `true` while a column fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the most recent fetch failure, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Applies a command, returning `true` when the state changed.
    ///
    /// Commands naming unknown columns or tasks are ignored.
    pub fn apply(&mut self, command: BoardCommand) -> bool {
        match command {
            BoardCommand::ColumnsFetchStarted => {
                self.loading = true;
                self.last_error = None;
                true
            }
            BoardCommand::ColumnsLoaded(mut columns) => {
                columns.sort_by_key(Column::order);
                self.tasks_by_column
                    .retain(|column_id, _| columns.iter().any(|column| column.id() == column_id));
                self.columns = columns;
                self.loading = false;
                true
            }
            BoardCommand::ColumnsFetchFailed(reason) => {
                self.loading = false;
                self.last_error = Some(reason);
                true
            }
            BoardCommand::ColumnCreated(column) => {
                self.columns.push(column);
                true
            }
            BoardCommand::ColumnUpdated { column_id, update } => self
                .columns
                .iter_mut()
                .find(|column| column.id() == &column_id)
                .map(|column| column.apply_update(&update))
                .is_some(),
            BoardCommand::ColumnDeleted(column_id) => {
                let before = self.columns.len();
                self.columns.retain(|column| column.id() != &column_id);
                let dropped_tasks = self.tasks_by_column.remove(&column_id).is_some();
                self.columns.len() != before || dropped_tasks
            }
            BoardCommand::ReorderColumns { from, to } => reorder(&mut self.columns, from, to),
            BoardCommand::TasksLoaded { column_id, tasks } => {
                self.tasks_by_column.insert(column_id, tasks);
                true
            }
            BoardCommand::TasksFetchFailed { column_id, reason } => {
                self.last_error = Some(format!("tasks of column {column_id}: {reason}"));
                true
            }
            BoardCommand::TaskCreated { column_id, task } => {
                self.tasks_by_column.entry(column_id).or_default().push(task);
                true
            }
            BoardCommand::TaskUpdated {
                column_id,
                task_id,
                update,
            } => self
                .tasks_by_column
                .get_mut(&column_id)
                .and_then(|tasks| tasks.iter_mut().find(|task| task.id() == &task_id))
                .map(|task| task.apply_update(&update))
                .is_some(),
            BoardCommand::TaskDeleted { column_id, task_id } => {
                self.tasks_by_column.get_mut(&column_id).is_some_and(|tasks| {
                    let before = tasks.len();
                    tasks.retain(|task| task.id() != &task_id);
                    tasks.len() != before
                })
            }
            BoardCommand::ReorderTasks {
                column_id,
                from,
                to,
            } => self
                .tasks_by_column
                .get_mut(&column_id)
                .is_some_and(|tasks| reorder(tasks, from, to)),
            BoardCommand::TaskMoved {
                from_column,
                to_column,
                task_id,
                task,
                dest_index,
            } => self.move_task(&from_column, to_column, &task_id, task, dest_index),
            BoardCommand::TaskReplaced {
                column_id,
                old_id,
                task,
            } => self
                .tasks_by_column
                .get_mut(&column_id)
                .and_then(|tasks| tasks.iter_mut().find(|existing| existing.id() == &old_id))
                .map(|existing| *existing = task)
                .is_some(),
        }
    }

    /// Consumes the state and returns it with `command` applied.
    #[must_use]
    pub fn reduce(mut self, command: BoardCommand) -> Self {
        self.apply(command);
        self
    }

    fn move_task(
        &mut self,
        from_column: &ColumnId,
        to_column: ColumnId,
        task_id: &TaskId,
        task: Task,
        dest_index: usize,
    ) -> bool {
        let Some(source) = self.tasks_by_column.get_mut(from_column) else {
            return false;
        };
        let Some(position) = source.iter().position(|existing| existing.id() == task_id) else {
            return false;
        };
        source.remove(position);

        let destination = self.tasks_by_column.entry(to_column).or_default();
        destination.retain(|existing| existing.id() != task.id());
        let index = dest_index.min(destination.len());
        destination.insert(index, task);
        true
    }
}
