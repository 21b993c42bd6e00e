//! Tagged identifiers of draggable and droppable elements.

use crate::board::domain::{ColumnId, TaskId};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const COLUMN_PREFIX: &str = "column-";
const TASK_PREFIX: &str = "task-";

/// Identifier of an element taking part in a drag gesture.
///
/// The kind is an explicit discriminant, so a column and a task can share a
/// raw key without colliding. The `column-<id>` / `task-<id>` text form is
/// only produced and parsed at the element boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DragId {
    /// A column element.
    Column(ColumnId),
    /// A task element.
    Task(TaskId),
}

impl DragId {
    /// Tags a column identifier.
    #[must_use]
    pub fn column(id: impl Into<ColumnId>) -> Self {
        Self::Column(id.into())
    }

    /// Tags a task identifier.
    #[must_use]
    pub fn task(id: impl Into<TaskId>) -> Self {
        Self::Task(id.into())
    }

    /// Returns the column identifier when this is a column.
    #[must_use]
    pub const fn as_column(&self) -> Option<&ColumnId> {
        match self {
            Self::Column(id) => Some(id),
            Self::Task(_) => None,
        }
    }

    /// Returns the task identifier when this is a task.
    #[must_use]
    pub const fn as_task(&self) -> Option<&TaskId> {
        match self {
            Self::Task(id) => Some(id),
            Self::Column(_) => None,
        }
    }
}

impl fmt::Display for DragId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Column(id) => write!(f, "{COLUMN_PREFIX}{id}"),
            Self::Task(id) => write!(f, "{TASK_PREFIX}{id}"),
        }
    }
}

/// Error returned when an element identifier carries no known kind prefix.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognised drag identifier '{0}'")]
pub struct DragIdParseError(pub String);

impl FromStr for DragId {
    type Err = DragIdParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let unrecognised = || DragIdParseError(value.to_owned());
        if let Some(raw) = value.strip_prefix(COLUMN_PREFIX) {
            if raw.is_empty() {
                return Err(unrecognised());
            }
            return Ok(Self::column(raw));
        }
        if let Some(raw) = value.strip_prefix(TASK_PREFIX) {
            if raw.is_empty() {
                return Err(unrecognised());
            }
            return Ok(Self::task(raw));
        }
        Err(unrecognised())
    }
}
