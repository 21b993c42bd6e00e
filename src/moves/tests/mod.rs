//! Unit tests for move execution.
