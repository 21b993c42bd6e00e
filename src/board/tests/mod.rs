//! Unit tests for the board module.
//!
//! Covers domain validation and serialisation, the in-memory document store,
//! calendar grouping and the board services.
