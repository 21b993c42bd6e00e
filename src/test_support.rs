//! Builders shared by unit tests.

use crate::board::domain::{BoardId, Column, ColumnId, Task, TaskId};
use crate::ordering::{BoardCommand, BoardState};
use chrono::{DateTime, Utc};

pub(crate) const BOARD: &str = "board-1";

pub(crate) fn timestamp() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(1_700_000_000_000).expect("valid fixed timestamp")
}

pub(crate) fn column(id: &str, order: i64) -> Column {
    Column::new(ColumnId::new(id), format!("Column {id}"), order, timestamp())
}

pub(crate) fn task(id: &str) -> Task {
    Task::new(TaskId::new(id), format!("Task {id}"), timestamp())
}

/// Builds a loaded board whose columns are ordered as listed.
pub(crate) fn board_state(layout: &[(&str, &[&str])]) -> BoardState {
    let mut state = BoardState::new(BoardId::new(BOARD));
    let columns = layout
        .iter()
        .zip(0_i64..)
        .map(|((id, _), order)| column(id, order))
        .collect();
    state.apply(BoardCommand::ColumnsLoaded(columns));
    for (id, tasks) in layout {
        state.apply(BoardCommand::TasksLoaded {
            column_id: ColumnId::new(*id),
            tasks: tasks.iter().map(|task_id| task(task_id)).collect(),
        });
    }
    state
}

/// Task identifiers of a column, in order.
pub(crate) fn task_ids(state: &BoardState, column_id: &str) -> Vec<String> {
    state
        .tasks(&ColumnId::new(column_id))
        .unwrap_or_default()
        .iter()
        .map(|task| task.id().to_string())
        .collect()
}

/// Column identifiers in display order.
pub(crate) fn column_ids(state: &BoardState) -> Vec<String> {
    state
        .columns()
        .iter()
        .map(|column| column.id().to_string())
        .collect()
}
