//! Move executor.
//!
//! Applies a classified [`MovePlan`](crate::drag::MovePlan) to the board
//! state and reconciles it with the [`EntityStore`](crate::board::ports::EntityStore):
//! column reorders rewrite `order` fields, cross-column task moves create a
//! copy in the destination and delete the original. Nothing is retried and
//! nothing is rolled back; failures are logged and reported on the
//! [`MoveTicket`].

mod error;
mod executor;
mod policy;
mod report;

pub use error::MoveError;
pub use executor::MoveExecutor;
pub use policy::{ApplyPolicy, ColumnOrderScope};
pub use report::{ColumnOrderReport, MoveTicket, PersistenceReport};

#[cfg(test)]
mod tests;
