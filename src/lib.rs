//! Corkboard: the drag-and-drop engine of a kanban board client.
//!
//! Boards hold ordered columns and columns hold ordered tasks. This crate
//! keeps that two-level ordering consistent between local state and a
//! remote document store while the user drags columns and tasks around.
//!
//! # Architecture
//!
//! - [`board`]: domain records, the entity store port and its adapters, and
//!   board services
//! - [`ordering`]: the in-memory board state and its command reducer
//! - [`drag`]: drag identifiers, collision detection, the gesture state
//!   machine and drop classification
//! - [`moves`]: applying classified moves and reconciling them with the
//!   store
//! - [`coordinator`]: pointer events in, executed moves out
//! - [`config`]: engine settings

pub mod board;
pub mod config;
pub mod coordinator;
pub mod drag;
pub mod moves;
pub mod ordering;

#[cfg(test)]
mod test_support;
