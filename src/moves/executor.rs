//! Applies move plans locally and reconciles them with the entity store.

use super::{
    ApplyPolicy, ColumnOrderReport, ColumnOrderScope, MoveError, MoveTicket, PersistenceReport,
};
use crate::board::domain::{BoardId, ColumnId, ColumnUpdate, Task, TaskId};
use crate::board::ports::EntityStore;
use crate::config::MoveConfig;
use crate::drag::MovePlan;
use crate::ordering::{BoardCommand, BoardStateHandle};
use std::future::Future;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Executes [`MovePlan`]s against a board.
///
/// Local changes are synchronous. Remote calls run as a spawned task on the
/// current tokio runtime and are neither retried nor cancelled.
pub struct MoveExecutor<S>
where
    S: EntityStore + 'static,
{
    store: Arc<S>,
    config: MoveConfig,
}

impl<S> Clone for MoveExecutor<S>
where
    S: EntityStore + 'static,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: self.config,
        }
    }
}

/// Parameters of a cross-column move, shared by both apply policies.
struct CrossColumnMove {
    board_id: BoardId,
    task: Task,
    from_column: ColumnId,
    to_column: ColumnId,
    dest_index: usize,
}

impl<S> MoveExecutor<S>
where
    S: EntityStore + 'static,
{
    /// Creates an executor.
    #[must_use]
    pub const fn new(store: Arc<S>, config: MoveConfig) -> Self {
        Self { store, config }
    }

    /// Executes `plan` against the board behind `state`.
    ///
    /// No-op plans touch nothing. Column reorders and same-column task
    /// reorders change local state immediately; only column reorders are
    /// persisted. Cross-column moves follow the configured
    /// [`ApplyPolicy`].
    #[must_use]
    pub fn execute(&self, state: &BoardStateHandle, plan: MovePlan) -> MoveTicket {
        match plan {
            MovePlan::NoOp(reason) => {
                tracing::debug!(?reason, "drop resolved to no move");
                MoveTicket::ready(plan, false, PersistenceReport::NotRequired)
            }
            MovePlan::ReorderColumns { from, to } => self.reorder_columns(state, from, to),
            MovePlan::ReorderTasks {
                ref column_id,
                from,
                to,
            } => {
                let applied = state.dispatch(BoardCommand::ReorderTasks {
                    column_id: column_id.clone(),
                    from,
                    to,
                });
                tracing::debug!(
                    column_id = %column_id,
                    from,
                    to,
                    applied,
                    "reordered tasks locally; task order is not persisted"
                );
                MoveTicket::ready(plan, applied, PersistenceReport::NotRequired)
            }
            MovePlan::MoveTask {
                ref task_id,
                ref from_column,
                ref to_column,
                dest_index,
            } => {
                let board_id = state.board_id();
                let Some(task) = state.read(|board| board.task(from_column, task_id).cloned())
                else {
                    tracing::warn!(
                        board_id = %board_id,
                        column_id = %from_column,
                        task_id = %task_id,
                        "dragged task is not in its source column"
                    );
                    let error = MoveError::SourceTaskMissing {
                        column_id: from_column.clone(),
                        task_id: task_id.clone(),
                    };
                    return MoveTicket::ready(plan, false, PersistenceReport::TaskMoveFailed(error));
                };
                let request = CrossColumnMove {
                    board_id,
                    task,
                    from_column: from_column.clone(),
                    to_column: to_column.clone(),
                    dest_index,
                };
                match self.config.apply_policy {
                    ApplyPolicy::AfterRemote => self.move_after_remote(state, plan, request),
                    ApplyPolicy::Optimistic => self.move_optimistically(state, plan, request),
                }
            }
        }
    }

    fn reorder_columns(&self, state: &BoardStateHandle, from: usize, to: usize) -> MoveTicket {
        let plan = MovePlan::ReorderColumns { from, to };
        if !state.dispatch(BoardCommand::ReorderColumns { from, to }) {
            return MoveTicket::ready(plan, false, PersistenceReport::NotRequired);
        }

        let range = match self.config.column_order_scope {
            ColumnOrderScope::All => None,
            ColumnOrderScope::AffectedRange => Some(from.min(to)..=from.max(to)),
        };
        let (board_id, orders) = state.read(|board| {
            let columns = board.columns();
            // A partial write only keeps the stored order when everything
            // outside the range already sits at its own index.
            let scoped = range.filter(|span| {
                columns
                    .iter()
                    .enumerate()
                    .filter(|(index, _)| !span.contains(index))
                    .all(|(index, column)| {
                        i64::try_from(index).is_ok_and(|order| column.order() == order)
                    })
            });
            let orders: Vec<(ColumnId, i64)> = columns
                .iter()
                .enumerate()
                .filter(|(index, _)| scoped.as_ref().is_none_or(|span| span.contains(index)))
                .filter_map(|(index, column)| {
                    i64::try_from(index).ok().map(|order| (column.id().clone(), order))
                })
                .collect();
            (board.board_id().clone(), orders)
        });

        let store = Arc::clone(&self.store);
        let handle = state.clone();
        let work = async move {
            let mut report = ColumnOrderReport::default();
            for (column_id, order) in orders {
                match store.set_column_order(&board_id, &column_id, order).await {
                    Ok(()) => {
                        handle.dispatch(BoardCommand::ColumnUpdated {
                            column_id: column_id.clone(),
                            update: ColumnUpdate::order(order),
                        });
                        report.written.push((column_id, order));
                    }
                    Err(err) => {
                        tracing::warn!(
                            board_id = %board_id,
                            column_id = %column_id,
                            order,
                            error = %err,
                            "failed to persist column order"
                        );
                        report.failed.push((column_id, err));
                    }
                }
            }
            PersistenceReport::ColumnOrders(report)
        };
        spawn_persistence(plan, true, work)
    }

    fn move_after_remote(
        &self,
        state: &BoardStateHandle,
        plan: MovePlan,
        request: CrossColumnMove,
    ) -> MoveTicket {
        let store = Arc::clone(&self.store);
        let handle = state.clone();
        let compensate = self.config.compensate_partial_move;
        let work = async move {
            let old_id = request.task.id().clone();
            let created = match copy_then_delete(store.as_ref(), &request, compensate).await {
                Ok(created) => created,
                Err(err) => return PersistenceReport::TaskMoveFailed(err),
            };
            handle.dispatch(BoardCommand::TaskMoved {
                from_column: request.from_column,
                to_column: request.to_column,
                task_id: old_id.clone(),
                task: created.clone(),
                dest_index: request.dest_index,
            });
            PersistenceReport::TaskMoved {
                old_id,
                new_task: created,
            }
        };
        spawn_persistence(plan, false, work)
    }

    fn move_optimistically(
        &self,
        state: &BoardStateHandle,
        plan: MovePlan,
        request: CrossColumnMove,
    ) -> MoveTicket {
        let old_id = request.task.id().clone();
        let applied = state.dispatch(BoardCommand::TaskMoved {
            from_column: request.from_column.clone(),
            to_column: request.to_column.clone(),
            task_id: old_id.clone(),
            task: request.task.clone(),
            dest_index: request.dest_index,
        });

        let store = Arc::clone(&self.store);
        let handle = state.clone();
        let compensate = self.config.compensate_partial_move;
        let work = async move {
            let created = match copy_then_delete(store.as_ref(), &request, compensate).await {
                Ok(created) => created,
                Err(err) => return PersistenceReport::TaskMoveFailed(err),
            };
            handle.dispatch(BoardCommand::TaskReplaced {
                column_id: request.to_column,
                old_id: old_id.clone(),
                task: created.clone(),
            });
            PersistenceReport::TaskMoved {
                old_id,
                new_task: created,
            }
        };
        spawn_persistence(plan, applied, work)
    }
}

/// Creates the copy in the destination, then deletes the original.
///
/// A failed delete leaves the task stored twice; with `compensate` the copy
/// is deleted again.
async fn copy_then_delete<S>(
    store: &S,
    request: &CrossColumnMove,
    compensate: bool,
) -> Result<Task, MoveError>
where
    S: EntityStore + ?Sized,
{
    let CrossColumnMove {
        board_id,
        task,
        from_column,
        to_column,
        ..
    } = request;
    let task_id: &TaskId = task.id();

    let created = store
        .create_task(
            board_id,
            to_column,
            task.title(),
            task.description().map(str::to_owned),
        )
        .await
        .map_err(|source| {
            tracing::warn!(
                board_id = %board_id,
                column_id = %to_column,
                task_id = %task_id,
                error = %source,
                "failed to create task copy in destination column"
            );
            MoveError::CreateFailed {
                column_id: to_column.clone(),
                task_id: task_id.clone(),
                source,
            }
        })?;

    if let Err(source) = store.delete_task(board_id, from_column, task_id).await {
        tracing::error!(
            board_id = %board_id,
            task_id = %task_id,
            copy_id = %created.id(),
            from_column = %from_column,
            to_column = %to_column,
            error = %source,
            "task stored twice: source delete failed after destination create"
        );
        let compensated = compensate
            && store
                .delete_task(board_id, to_column, created.id())
                .await
                .inspect_err(|err| {
                    tracing::error!(
                        board_id = %board_id,
                        copy_id = %created.id(),
                        error = %err,
                        "failed to remove duplicated task copy"
                    );
                })
                .is_ok();
        return Err(MoveError::SourceDeleteFailed {
            task_id: task_id.clone(),
            copy_id: created.id().clone(),
            from_column: from_column.clone(),
            to_column: to_column.clone(),
            compensated,
            source,
        });
    }

    tracing::debug!(
        board_id = %board_id,
        task_id = %task_id,
        copy_id = %created.id(),
        from_column = %from_column,
        to_column = %to_column,
        "moved task between columns"
    );
    Ok(created)
}

fn spawn_persistence<F>(plan: MovePlan, applied_locally: bool, work: F) -> MoveTicket
where
    F: Future<Output = PersistenceReport> + Send + 'static,
{
    match Handle::try_current() {
        Ok(runtime) => MoveTicket::spawned(plan, applied_locally, runtime.spawn(work)),
        Err(err) => {
            tracing::error!(error = %err, "cannot persist move without a tokio runtime");
            MoveTicket::ready(
                plan,
                applied_locally,
                PersistenceReport::Aborted(err.to_string()),
            )
        }
    }
}
