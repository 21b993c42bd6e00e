//! Entity store adapters.
//!
//! - [`memory::InMemoryEntityStore`]: thread-safe in-memory document store
//!   used by tests and embedders that do not need durability.

pub mod memory;
