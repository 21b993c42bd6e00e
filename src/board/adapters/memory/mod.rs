//! In-memory implementation of the [`EntityStore`] port.
//!
//! Documents are kept as JSON objects under slash-separated collection
//! paths, mirroring the layout of the remote document database. Collection
//! iteration order is insertion order.
//!
//! [`EntityStore`]: crate::board::ports::EntityStore

mod document;
mod store;

pub use document::{DocumentDb, DocumentPath, StoredDocument};
pub use store::{InMemoryEntityStore, StoreOperation};
