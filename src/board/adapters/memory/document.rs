//! Path-addressed JSON document collections.

use crate::board::{
    domain::{BoardId, ColumnId, TaskId},
    ports::{EntityStoreError, EntityStoreResult},
};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// Slash-separated location of a collection or a document.
///
/// Paths with an odd number of segments name collections
/// (`boards/b1/columns`); paths with an even number name documents
/// (`boards/b1/columns/c1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentPath(Vec<String>);

impl DocumentPath {
    /// The top-level `boards` collection.
    #[must_use]
    pub fn boards() -> Self {
        Self(vec!["boards".to_owned()])
    }

    /// The document of a single board.
    #[must_use]
    pub fn board(board: &BoardId) -> Self {
        Self::boards().child(board.as_str())
    }

    /// The column collection of a board.
    #[must_use]
    pub fn columns(board: &BoardId) -> Self {
        Self::board(board).child("columns")
    }

    /// The document of a single column.
    #[must_use]
    pub fn column(board: &BoardId, column: &ColumnId) -> Self {
        Self::columns(board).child(column.as_str())
    }

    /// The task collection of a column.
    #[must_use]
    pub fn tasks(board: &BoardId, column: &ColumnId) -> Self {
        Self::column(board, column).child("tasks")
    }

    /// The document of a single task.
    #[must_use]
    pub fn task(board: &BoardId, column: &ColumnId, task: &TaskId) -> Self {
        Self::tasks(board, column).child(task.as_str())
    }

    /// Appends a segment.
    #[must_use]
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }

    /// Returns `true` when the path names a collection.
    #[must_use]
    pub fn is_collection(&self) -> bool {
        !self.0.len().is_multiple_of(2)
    }

    /// Returns `true` when `self` lies strictly beneath `ancestor`.
    #[must_use]
    pub fn is_beneath(&self, ancestor: &Self) -> bool {
        self.0.len() > ancestor.0.len() && self.0.starts_with(&ancestor.0)
    }

    /// Splits a document path into its collection path and document key.
    fn split_document(&self) -> Option<(Self, &str)> {
        if self.is_collection() {
            return None;
        }
        let (last, parent) = self.0.split_last()?;
        Some((Self(parent.to_vec()), last.as_str()))
    }
}

impl fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("/"))
    }
}

/// A stored document: its key and its fields.
pub type StoredDocument = (String, Map<String, Value>);

/// Collections of JSON documents keyed by collection path.
#[derive(Debug, Default)]
pub struct DocumentDb {
    collections: BTreeMap<DocumentPath, Vec<StoredDocument>>,
}

impl DocumentDb {
    /// Appends a document to a collection.
    pub fn insert(&mut self, collection: &DocumentPath, key: String, fields: Map<String, Value>) {
        self.collections
            .entry(collection.clone())
            .or_default()
            .push((key, fields));
    }

    /// Returns every document of a collection in insertion order.
    #[must_use]
    pub fn list(&self, collection: &DocumentPath) -> Vec<StoredDocument> {
        self.collections.get(collection).cloned().unwrap_or_default()
    }

    /// Returns the fields of a single document.
    #[must_use]
    pub fn get(&self, document: &DocumentPath) -> Option<&Map<String, Value>> {
        let (collection, key) = document.split_document()?;
        self.collections
            .get(&collection)?
            .iter()
            .find(|(stored_key, _)| stored_key == key)
            .map(|(_, fields)| fields)
    }

    /// Merges `fields` into an existing document, overwriting matching keys.
    ///
    /// # Errors
    ///
    /// Returns [`EntityStoreError::NotFound`] when no document exists at the
    /// path.
    pub fn merge(
        &mut self,
        document: &DocumentPath,
        fields: Map<String, Value>,
    ) -> EntityStoreResult<()> {
        let stored = self.find_mut(document)?;
        stored.extend(fields);
        Ok(())
    }

    /// Removes a document together with every collection nested beneath it.
    ///
    /// # Errors
    ///
    /// Returns [`EntityStoreError::NotFound`] when no document exists at the
    /// path.
    pub fn delete(&mut self, document: &DocumentPath) -> EntityStoreResult<()> {
        let not_found = || EntityStoreError::NotFound(document.to_string());
        let (collection, key) = document.split_document().ok_or_else(not_found)?;
        let documents = self.collections.get_mut(&collection).ok_or_else(not_found)?;
        let before = documents.len();
        documents.retain(|(stored_key, _)| stored_key != key);
        if documents.len() == before {
            return Err(not_found());
        }
        self.collections.retain(|path, _| !path.is_beneath(document));
        Ok(())
    }

    fn find_mut(&mut self, document: &DocumentPath) -> EntityStoreResult<&mut Map<String, Value>> {
        let not_found = || EntityStoreError::NotFound(document.to_string());
        let (collection, key) = document.split_document().ok_or_else(not_found)?;
        self.collections
            .get_mut(&collection)
            .and_then(|documents| {
                documents
                    .iter_mut()
                    .find(|(stored_key, _)| stored_key == key)
                    .map(|(_, fields)| fields)
            })
            .ok_or_else(not_found)
    }
}
