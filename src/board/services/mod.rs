//! Application services for boards, columns and tasks.
//!
//! - [`BoardCatalog`]: the owner's board list
//! - [`BoardLoader`]: fetching columns and fanning out task fetches
//! - [`BoardEditor`]: column and task create/update/delete
//! - [`calendar`]: grouping tasks by creation day

pub mod calendar;
mod catalog;
mod editor;
mod error;
mod loader;

pub use catalog::{BoardCatalog, BoardList};
pub use editor::BoardEditor;
pub use error::{BoardServiceError, BoardServiceResult};
pub use loader::{BoardLoader, TaskLoadSummary};
