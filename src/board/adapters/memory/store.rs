//! [`EntityStore`] over an in-memory [`DocumentDb`].

use super::document::{DocumentDb, DocumentPath};
use crate::board::{
    domain::{
        Board, BoardId, BoardUpdate, Column, ColumnId, ColumnUpdate, OwnerId, Task, TaskId,
        TaskUpdate,
    },
    ports::{EntityStore, EntityStoreError, EntityStoreResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Entity store operations, used to count calls and arm failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOperation {
    /// [`EntityStore::list_boards`].
    ListBoards,
    /// [`EntityStore::create_board`].
    CreateBoard,
    /// [`EntityStore::update_board`].
    UpdateBoard,
    /// [`EntityStore::delete_board`].
    DeleteBoard,
    /// [`EntityStore::list_columns`].
    ListColumns,
    /// [`EntityStore::create_column`].
    CreateColumn,
    /// [`EntityStore::update_column`].
    UpdateColumn,
    /// [`EntityStore::set_column_order`].
    SetColumnOrder,
    /// [`EntityStore::delete_column`].
    DeleteColumn,
    /// [`EntityStore::list_tasks`].
    ListTasks,
    /// [`EntityStore::create_task`].
    CreateTask,
    /// [`EntityStore::update_task`].
    UpdateTask,
    /// [`EntityStore::delete_task`].
    DeleteTask,
}

#[derive(Debug, Default)]
struct Instrumentation {
    calls: HashMap<StoreOperation, usize>,
    armed_failures: HashMap<StoreOperation, usize>,
}

/// Thread-safe in-memory entity store.
///
/// Identifiers are random UUIDs and creation timestamps come from the
/// injected clock, truncated to the millisecond precision of the document
/// format.
#[derive(Clone)]
pub struct InMemoryEntityStore {
    db: Arc<RwLock<DocumentDb>>,
    instrumentation: Arc<RwLock<Instrumentation>>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl fmt::Debug for InMemoryEntityStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryEntityStore")
            .field("db", &self.db)
            .finish_non_exhaustive()
    }
}

impl Default for InMemoryEntityStore {
    fn default() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl InMemoryEntityStore {
    /// Creates an empty store using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store that stamps documents with `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            db: Arc::new(RwLock::new(DocumentDb::default())),
            instrumentation: Arc::new(RwLock::new(Instrumentation::default())),
            clock,
        }
    }

    /// Makes the next call of `operation` fail with
    /// [`EntityStoreError::Unavailable`]. Arming repeatedly queues more
    /// failures.
    pub fn fail_next(&self, operation: StoreOperation) {
        if let Ok(mut instrumentation) = self.instrumentation.write() {
            *instrumentation.armed_failures.entry(operation).or_default() += 1;
        }
    }

    /// Returns how many times `operation` has been invoked, failed calls
    /// included.
    #[must_use]
    pub fn call_count(&self, operation: StoreOperation) -> usize {
        self.instrumentation
            .read()
            .ok()
            .and_then(|instrumentation| instrumentation.calls.get(&operation).copied())
            .unwrap_or_default()
    }

    /// Returns the total number of calls across all operations.
    #[must_use]
    pub fn total_calls(&self) -> usize {
        self.instrumentation
            .read()
            .map(|instrumentation| instrumentation.calls.values().sum())
            .unwrap_or_default()
    }

    /// Records a call and consumes an armed failure, if any.
    fn enter(&self, operation: StoreOperation) -> EntityStoreResult<()> {
        let mut instrumentation = self.instrumentation.write().map_err(poisoned)?;
        *instrumentation.calls.entry(operation).or_default() += 1;
        if let Some(remaining) = instrumentation.armed_failures.get_mut(&operation) {
            if *remaining > 0 {
                *remaining -= 1;
                return Err(EntityStoreError::Unavailable(format!(
                    "injected failure for {operation:?}"
                )));
            }
        }
        Ok(())
    }

    fn read(&self) -> EntityStoreResult<RwLockReadGuard<'_, DocumentDb>> {
        self.db.read().map_err(poisoned)
    }

    fn write(&self) -> EntityStoreResult<RwLockWriteGuard<'_, DocumentDb>> {
        self.db.write().map_err(poisoned)
    }

    fn now(&self) -> DateTime<Utc> {
        let now = self.clock.utc();
        DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
    }

    fn list_entities<T: DeserializeOwned>(
        &self,
        collection: &DocumentPath,
    ) -> EntityStoreResult<Vec<T>> {
        self.read()?
            .list(collection)
            .into_iter()
            .map(|(key, fields)| from_document(key, fields))
            .collect()
    }

    fn insert_entity<T: Serialize>(
        &self,
        collection: &DocumentPath,
        key: &str,
        entity: &T,
    ) -> EntityStoreResult<()> {
        let fields = to_document(entity)?;
        self.write()?.insert(collection, key.to_owned(), fields);
        Ok(())
    }

    fn merge_fields<T: Serialize>(
        &self,
        document: &DocumentPath,
        update: &T,
    ) -> EntityStoreResult<()> {
        let fields = to_document(update)?;
        self.write()?.merge(document, fields)
    }
}

fn poisoned<E: fmt::Display>(err: E) -> EntityStoreError {
    EntityStoreError::persistence(std::io::Error::other(err.to_string()))
}

/// Serializes an entity into document fields, dropping the `id` key since
/// the document key already carries it.
fn to_document<T: Serialize>(entity: &T) -> EntityStoreResult<Map<String, Value>> {
    match serde_json::to_value(entity).map_err(EntityStoreError::persistence)? {
        Value::Object(mut fields) => {
            fields.remove("id");
            Ok(fields)
        }
        other => Err(EntityStoreError::persistence(std::io::Error::other(
            format!("expected a JSON object, got {other}"),
        ))),
    }
}

fn from_document<T: DeserializeOwned>(
    key: String,
    mut fields: Map<String, Value>,
) -> EntityStoreResult<T> {
    fields.insert("id".to_owned(), Value::String(key));
    serde_json::from_value(Value::Object(fields)).map_err(EntityStoreError::persistence)
}

#[async_trait]
impl EntityStore for InMemoryEntityStore {
    async fn list_boards(&self, owner: &OwnerId) -> EntityStoreResult<Vec<Board>> {
        self.enter(StoreOperation::ListBoards)?;
        let boards: Vec<Board> = self.list_entities(&DocumentPath::boards())?;
        Ok(boards
            .into_iter()
            .filter(|board| board.owner_id() == owner)
            .collect())
    }

    async fn create_board(&self, owner: &OwnerId, title: &str) -> EntityStoreResult<Board> {
        self.enter(StoreOperation::CreateBoard)?;
        let board = Board::new(BoardId::generate(), title, owner.clone(), self.now());
        self.insert_entity(&DocumentPath::boards(), board.id().as_str(), &board)?;
        Ok(board)
    }

    async fn update_board(&self, board: &BoardId, update: &BoardUpdate) -> EntityStoreResult<()> {
        self.enter(StoreOperation::UpdateBoard)?;
        self.merge_fields(&DocumentPath::board(board), update)
    }

    async fn delete_board(&self, board: &BoardId) -> EntityStoreResult<()> {
        self.enter(StoreOperation::DeleteBoard)?;
        self.write()?.delete(&DocumentPath::board(board))
    }

    async fn list_columns(&self, board: &BoardId) -> EntityStoreResult<Vec<Column>> {
        self.enter(StoreOperation::ListColumns)?;
        let mut columns: Vec<Column> = self.list_entities(&DocumentPath::columns(board))?;
        columns.sort_by_key(Column::order);
        Ok(columns)
    }

    async fn create_column(
        &self,
        board: &BoardId,
        title: &str,
        order: i64,
    ) -> EntityStoreResult<Column> {
        self.enter(StoreOperation::CreateColumn)?;
        let column = Column::new(ColumnId::generate(), title, order, self.now());
        self.insert_entity(&DocumentPath::columns(board), column.id().as_str(), &column)?;
        Ok(column)
    }

    async fn update_column(
        &self,
        board: &BoardId,
        column: &ColumnId,
        update: &ColumnUpdate,
    ) -> EntityStoreResult<()> {
        self.enter(StoreOperation::UpdateColumn)?;
        self.merge_fields(&DocumentPath::column(board, column), update)
    }

    async fn set_column_order(
        &self,
        board: &BoardId,
        column: &ColumnId,
        order: i64,
    ) -> EntityStoreResult<()> {
        self.enter(StoreOperation::SetColumnOrder)?;
        self.merge_fields(
            &DocumentPath::column(board, column),
            &ColumnUpdate::order(order),
        )
    }

    async fn delete_column(&self, board: &BoardId, column: &ColumnId) -> EntityStoreResult<()> {
        self.enter(StoreOperation::DeleteColumn)?;
        self.write()?.delete(&DocumentPath::column(board, column))
    }

    async fn list_tasks(&self, board: &BoardId, column: &ColumnId) -> EntityStoreResult<Vec<Task>> {
        self.enter(StoreOperation::ListTasks)?;
        self.list_entities(&DocumentPath::tasks(board, column))
    }

    async fn create_task(
        &self,
        board: &BoardId,
        column: &ColumnId,
        title: &str,
        description: Option<String>,
    ) -> EntityStoreResult<Task> {
        self.enter(StoreOperation::CreateTask)?;
        let column_path = DocumentPath::column(board, column);
        if self.read()?.get(&column_path).is_none() {
            return Err(EntityStoreError::NotFound(column_path.to_string()));
        }
        let task = Task::new(TaskId::generate(), title, self.now()).with_description(description);
        self.insert_entity(
            &DocumentPath::tasks(board, column),
            task.id().as_str(),
            &task,
        )?;
        Ok(task)
    }

    async fn update_task(
        &self,
        board: &BoardId,
        column: &ColumnId,
        task: &TaskId,
        update: &TaskUpdate,
    ) -> EntityStoreResult<()> {
        self.enter(StoreOperation::UpdateTask)?;
        self.merge_fields(&DocumentPath::task(board, column, task), update)
    }

    async fn delete_task(
        &self,
        board: &BoardId,
        column: &ColumnId,
        task: &TaskId,
    ) -> EntityStoreResult<()> {
        self.enter(StoreOperation::DeleteTask)?;
        self.write()?.delete(&DocumentPath::task(board, column, task))
    }
}
