//! Column entity and its partial update.

use super::{ColumnId, OwnerId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ordered lane within a board.
///
/// `order` is the persisted sequence key. It is dense in practice but not
/// required to be contiguous; only its relative ordering matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    id: ColumnId,
    title: String,
    #[serde(default)]
    order: i64,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    owner_id: Option<OwnerId>,
}

impl Column {
    /// Creates a column record.
    #[must_use]
    pub fn new(
        id: ColumnId,
        title: impl Into<String>,
        order: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            order,
            created_at,
            owner_id: None,
        }
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> &ColumnId {
        &self.id
    }

    /// Returns the column title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the persisted order key.
    #[must_use]
    pub const fn order(&self) -> i64 {
        self.order
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the owning user, if recorded.
    #[must_use]
    pub const fn owner_id(&self) -> Option<&OwnerId> {
        self.owner_id.as_ref()
    }

    /// Merges the present fields of `update` into this column.
    pub fn apply_update(&mut self, update: &ColumnUpdate) {
        if let Some(title) = &update.title {
            self.title.clone_from(title);
        }
        if let Some(order) = update.order {
            self.order = order;
        }
    }
}

/// Partial column fields; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnUpdate {
    /// Replacement title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Replacement order key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl ColumnUpdate {
    /// Creates an update that renames the column.
    #[must_use]
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            order: None,
        }
    }

    /// Creates an update that rewrites only the order key.
    #[must_use]
    pub const fn order(order: i64) -> Self {
        Self {
            title: None,
            order: Some(order),
        }
    }
}
