//! Domain model for boards, columns and tasks.
//!
//! These are plain records mirroring the documents held by the entity store.
//! Ordering of columns is carried by [`Column::order`]; ordering of tasks is
//! positional and lives in the board state, not in the task itself.

mod board;
mod column;
mod error;
mod ids;
mod task;

pub use board::{Board, BoardUpdate};
pub use column::{Column, ColumnUpdate};
pub use error::{BoardDomainError, validated_title};
pub use ids::{BoardId, ColumnId, OwnerId, TaskId};
pub use task::{Task, TaskUpdate};
