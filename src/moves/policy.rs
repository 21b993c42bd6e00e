//! Execution policies for moves.

use serde::{Deserialize, Serialize};

/// When a cross-column task move is applied to local state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplyPolicy {
    /// Apply only after the destination create and the source delete both
    /// succeed. A failed move leaves local state untouched.
    #[default]
    AfterRemote,
    /// Apply at once with the original task record, then swap in the stored
    /// copy when the create succeeds. Failures are not rolled back.
    Optimistic,
}

/// Which columns get their `order` rewritten after a column reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnOrderScope {
    /// Rewrite every column, which also repairs orders left stale by an
    /// earlier partial failure.
    #[default]
    All,
    /// Rewrite only the columns between the source and target indices.
    AffectedRange,
}
