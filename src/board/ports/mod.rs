//! Port contracts for board persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the board
//! services and the move executor.

pub mod store;

pub use store::{EntityStore, EntityStoreError, EntityStoreResult};

#[cfg(test)]
pub(crate) use store::MockEntityStore;
