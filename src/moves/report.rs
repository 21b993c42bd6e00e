//! Results of move execution.

use super::MoveError;
use crate::board::domain::{ColumnId, Task, TaskId};
use crate::board::ports::EntityStoreError;
use crate::drag::MovePlan;
use tokio::task::JoinHandle;

/// Outcome of the column order writes following a column reorder.
#[derive(Debug, Clone, Default)]
pub struct ColumnOrderReport {
    /// Columns whose new order was stored, with the value written.
    pub written: Vec<(ColumnId, i64)>,
    /// Columns whose write failed; their stored order is stale.
    pub failed: Vec<(ColumnId, EntityStoreError)>,
}

impl ColumnOrderReport {
    /// Returns `true` when every write succeeded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Outcome of the remote half of a move.
#[derive(Debug, Clone)]
pub enum PersistenceReport {
    /// The move needs no remote call.
    NotRequired,
    /// Column order writes finished.
    ColumnOrders(ColumnOrderReport),
    /// A cross-column move was stored.
    TaskMoved {
        /// Identifier of the original task.
        old_id: TaskId,
        /// The copy now stored in the destination.
        new_task: Task,
    },
    /// A cross-column move failed.
    TaskMoveFailed(MoveError),
    /// The remote work could not run to completion (no runtime, panic or
    /// abort).
    Aborted(String),
}

#[derive(Debug)]
enum Persistence {
    Ready(PersistenceReport),
    Spawned(JoinHandle<PersistenceReport>),
}

/// Handle on an executed move.
///
/// The local half of the move has already happened when the ticket is
/// returned. The remote half keeps running whether or not the ticket is
/// awaited or dropped.
#[derive(Debug)]
pub struct MoveTicket {
    plan: MovePlan,
    applied_locally: bool,
    persistence: Persistence,
}

impl MoveTicket {
    pub(crate) const fn ready(
        plan: MovePlan,
        applied_locally: bool,
        report: PersistenceReport,
    ) -> Self {
        Self {
            plan,
            applied_locally,
            persistence: Persistence::Ready(report),
        }
    }

    pub(crate) const fn spawned(
        plan: MovePlan,
        applied_locally: bool,
        handle: JoinHandle<PersistenceReport>,
    ) -> Self {
        Self {
            plan,
            applied_locally,
            persistence: Persistence::Spawned(handle),
        }
    }

    /// Returns the executed plan.
    #[must_use]
    pub const fn plan(&self) -> &MovePlan {
        &self.plan
    }

    /// Returns `true` when local state changed before the ticket was issued.
    #[must_use]
    pub const fn applied_locally(&self) -> bool {
        self.applied_locally
    }

    /// Returns `true` when remote work was started.
    #[must_use]
    pub const fn has_remote_work(&self) -> bool {
        matches!(self.persistence, Persistence::Spawned(_))
    }

    /// Waits for the remote half of the move.
    pub async fn settle(self) -> PersistenceReport {
        match self.persistence {
            Persistence::Ready(report) => report,
            Persistence::Spawned(handle) => match handle.await {
                Ok(report) => report,
                Err(err) => PersistenceReport::Aborted(err.to_string()),
            },
        }
    }
}
