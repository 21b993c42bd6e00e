//! Shared world state for board drag BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use corkboard::{
    board::{
        adapters::memory::InMemoryEntityStore,
        domain::{BoardId, ColumnId, TaskId},
        services::BoardLoader,
    },
    config::MoveConfig,
    drag::{DragId, classify_raw},
    moves::{MoveExecutor, PersistenceReport},
    ordering::BoardStateHandle,
};
use eyre::WrapErr;
use rstest::fixture;

/// Scenario world for board drag behaviour tests.
pub struct BoardWorld {
    pub store: Arc<InMemoryEntityStore>,
    pub handle: BoardStateHandle,
    pub executor: MoveExecutor<InMemoryEntityStore>,
    pub seeded_task_ids: HashMap<String, TaskId>,
    pub calls_before_drop: usize,
    pub last_report: Option<PersistenceReport>,
}

impl BoardWorld {
    /// Creates a world around an empty board.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(InMemoryEntityStore::new());
        Self {
            executor: MoveExecutor::new(Arc::clone(&store), MoveConfig::default()),
            store,
            handle: BoardStateHandle::for_board(BoardId::new("board-1")),
            seeded_task_ids: HashMap::new(),
            calls_before_drop: 0,
            last_report: None,
        }
    }

    /// Replaces local state with the stored board.
    pub fn reload(&self) -> Result<(), eyre::Report> {
        let loader = BoardLoader::new(Arc::clone(&self.store));
        let summary = run_async(loader.load_board(&self.handle)).wrap_err("reload board")?;
        eyre::ensure!(summary.failed.is_empty(), "task fetch failed during reload");
        Ok(())
    }

    /// Looks up a column by title.
    pub fn column_id(&self, title: &str) -> Result<ColumnId, eyre::Report> {
        self.handle
            .read(|board| {
                board
                    .columns()
                    .iter()
                    .find(|column| column.title() == title)
                    .map(|column| column.id().clone())
            })
            .ok_or_else(|| eyre::eyre!("no column titled {title}"))
    }

    /// Looks up a loaded task by title.
    pub fn task_id(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.handle
            .read(|board| {
                board
                    .all_tasks()
                    .find(|task| task.title() == title)
                    .map(|task| task.id().clone())
            })
            .ok_or_else(|| eyre::eyre!("no task titled {title}"))
    }

    /// Commits a drop of `active` onto the raw element identifier `over` and
    /// waits for its persistence.
    pub fn drop_onto(&mut self, active: &DragId, over: &str) {
        self.calls_before_drop = self.store.total_calls();
        let plan = self
            .handle
            .read(|board| classify_raw(&active.to_string(), Some(over), board));
        let ticket = self.executor.execute(&self.handle, plan);
        self.last_report = Some(run_async(ticket.settle()));
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Splits a comma-separated list of titles.
pub fn titles(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
