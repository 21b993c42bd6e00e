//! Boards, columns and tasks.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain records in [`domain`]
//! - The entity store contract in [`ports`]
//! - Store implementations in [`adapters`]
//! - Catalog, loading, editing and calendar services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
