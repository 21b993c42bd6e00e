//! Shared helpers for in-memory board integration tests.

use std::sync::Arc;

use corkboard::{
    board::{
        adapters::memory::InMemoryEntityStore,
        domain::{BoardId, ColumnId},
        ports::EntityStore,
        services::BoardLoader,
    },
    drag::{DragId, Rect},
    ordering::BoardStateHandle,
};
use eyre::WrapErr;
use rstest::fixture;

/// Board used by every seeded scenario.
pub const BOARD: &str = "board-1";

/// Horizontal distance between the left edges of adjacent columns.
pub const COLUMN_PITCH: u32 = 120;

/// Vertical distance between the top edges of adjacent task cards.
pub const TASK_PITCH: u32 = 50;

/// Provides a fresh in-memory store for each test.
#[fixture]
pub fn store() -> Arc<InMemoryEntityStore> {
    Arc::new(InMemoryEntityStore::new())
}

/// A board created in the store and loaded into local state.
pub struct SeededBoard {
    /// Loaded board state.
    pub handle: BoardStateHandle,
    /// Column identifiers in creation order.
    pub columns: Vec<ColumnId>,
}

impl SeededBoard {
    /// Returns the identifier of the column created at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if no column was created at that index.
    pub fn column(&self, index: usize) -> Result<ColumnId, eyre::Report> {
        self.columns
            .get(index)
            .cloned()
            .ok_or_else(|| eyre::eyre!("no column seeded at index {index}"))
    }
}

/// Creates columns (ordered as listed) and their tasks, then loads the
/// board.
///
/// # Errors
///
/// Returns an error if any store call or the board load fails.
pub async fn seed_board(
    store: &Arc<InMemoryEntityStore>,
    layout: &[(&str, &[&str])],
) -> Result<SeededBoard, eyre::Report> {
    let board_id = BoardId::new(BOARD);
    let mut columns = Vec::new();
    for ((title, tasks), order) in layout.iter().zip(0_i64..) {
        let column = store
            .create_column(&board_id, title, order)
            .await
            .wrap_err_with(|| format!("create column {title}"))?;
        for task in *tasks {
            store
                .create_task(&board_id, column.id(), task, None)
                .await
                .wrap_err_with(|| format!("create task {task}"))?;
        }
        columns.push(column.id().clone());
    }
    let handle = load_board(store).await?;
    Ok(SeededBoard { handle, columns })
}

/// Loads the stored board into a fresh state handle.
///
/// # Errors
///
/// Returns an error if the column fetch or any task fetch fails.
pub async fn load_board(
    store: &Arc<InMemoryEntityStore>,
) -> Result<BoardStateHandle, eyre::Report> {
    let handle = BoardStateHandle::for_board(BoardId::new(BOARD));
    let summary = BoardLoader::new(Arc::clone(store))
        .load_board(&handle)
        .await
        .wrap_err("load board")?;
    eyre::ensure!(
        summary.failed.is_empty(),
        "task fetch failed for {} column(s)",
        summary.failed.len()
    );
    Ok(handle)
}

/// Column titles in display order.
#[must_use]
pub fn column_titles(handle: &BoardStateHandle) -> Vec<String> {
    handle.read(|board| {
        board
            .columns()
            .iter()
            .map(|column| column.title().to_owned())
            .collect()
    })
}

/// Task titles of a column in display order.
#[must_use]
pub fn task_titles(handle: &BoardStateHandle, column_id: &ColumnId) -> Vec<String> {
    handle.read(|board| {
        board
            .tasks(column_id)
            .unwrap_or_default()
            .iter()
            .map(|task| task.title().to_owned())
            .collect()
    })
}

/// Task titles of a column as stored.
///
/// # Errors
///
/// Returns an error if the task fetch fails.
pub async fn stored_task_titles(
    store: &Arc<InMemoryEntityStore>,
    column_id: &ColumnId,
) -> Result<Vec<String>, eyre::Report> {
    let tasks = store
        .list_tasks(&BoardId::new(BOARD), column_id)
        .await
        .wrap_err("list stored tasks")?;
    Ok(tasks.iter().map(|task| task.title().to_owned()).collect())
}

/// Bounding box of the column at display position `index`.
#[must_use]
pub fn column_rect(index: u32) -> Rect {
    Rect::new(f64::from(index * COLUMN_PITCH), 0.0, 100.0, 400.0)
}

/// Bounding box of the task card at `row` in the column at `index`.
#[must_use]
pub fn task_rect(index: u32, row: u32) -> Rect {
    Rect::new(
        f64::from(index * COLUMN_PITCH),
        f64::from(40 + row * TASK_PITCH),
        100.0,
        40.0,
    )
}

/// Lays out every column and task card of the board as droppables.
#[must_use]
pub fn board_layout(handle: &BoardStateHandle) -> Vec<(DragId, Rect)> {
    handle.read(|board| {
        let mut layout = Vec::new();
        for (index, column) in (0_u32..).zip(board.columns()) {
            layout.push((DragId::Column(column.id().clone()), column_rect(index)));
            for (row, task) in (0_u32..).zip(board.tasks(column.id()).unwrap_or_default()) {
                layout.push((DragId::Task(task.id().clone()), task_rect(index, row)));
            }
        }
        layout
    })
}
