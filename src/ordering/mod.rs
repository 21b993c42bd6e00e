//! Ordering state for a single board.
//!
//! Holds the columns of a board and the ordered task list of each column,
//! and applies [`BoardCommand`]s through a pure reducer. Column order is
//! persisted through [`Column::order`](crate::board::domain::Column::order);
//! task order is positional only and does not survive a reload.

mod command;
mod handle;
mod reorder;
mod state;

pub use command::BoardCommand;
pub use handle::BoardStateHandle;
pub use reorder::reorder;
pub use state::BoardState;
