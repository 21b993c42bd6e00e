//! Board catalog: the per-owner list of boards.

use super::{BoardServiceError, BoardServiceResult};
use crate::board::{
    domain::{Board, BoardId, BoardUpdate, OwnerId, validated_title},
    ports::EntityStore,
};
use std::sync::{Arc, PoisonError, RwLock};

/// Boards known to the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardList {
    items: Vec<Board>,
    loading: bool,
    error: Option<String>,
}

impl BoardList {
    /// Returns the boards in fetch order, newly created ones appended.
    #[must_use]
    pub fn items(&self) -> &[Board] {
        &self.items
    }

    /// Returns `true` while a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the last fetch failure.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Creates, lists, renames and deletes boards.
///
/// Local state changes only after the store call succeeds.
pub struct BoardCatalog<S>
where
    S: EntityStore,
{
    store: Arc<S>,
    boards: RwLock<BoardList>,
}

impl<S> BoardCatalog<S>
where
    S: EntityStore,
{
    /// Creates a catalog with an empty board list.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            boards: RwLock::new(BoardList::default()),
        }
    }

    /// Returns a copy of the current board list.
    #[must_use]
    pub fn boards(&self) -> BoardList {
        self.boards
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn update(&self, f: impl FnOnce(&mut BoardList)) {
        f(&mut self.boards.write().unwrap_or_else(PoisonError::into_inner));
    }

    /// Fetches the boards owned by `owner`, replacing the list.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when the fetch fails; the
    /// previous list is kept and the failure recorded.
    pub async fn load(&self, owner: &OwnerId) -> BoardServiceResult<Vec<Board>> {
        self.update(|list| {
            list.loading = true;
            list.error = None;
        });
        match self.store.list_boards(owner).await {
            Ok(boards) => {
                self.update(|list| {
                    list.items.clone_from(&boards);
                    list.loading = false;
                });
                Ok(boards)
            }
            Err(err) => {
                tracing::warn!(owner = %owner, error = %err, "failed to load boards");
                self.update(|list| {
                    list.loading = false;
                    list.error = Some(err.to_string());
                });
                Err(err.into())
            }
        }
    }

    /// Creates a board owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] for a blank title or
    /// [`BoardServiceError::Store`] when the store rejects the write.
    pub async fn create(&self, owner: &OwnerId, title: &str) -> BoardServiceResult<Board> {
        let validated = validated_title(title, "board")?;
        let board = self.store.create_board(owner, &validated).await?;
        self.update(|list| list.items.push(board.clone()));
        Ok(board)
    }

    /// Renames a board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] for a blank title or
    /// [`BoardServiceError::Store`] when the store rejects the write.
    pub async fn rename(&self, board_id: &BoardId, title: &str) -> BoardServiceResult<()> {
        let update = BoardUpdate::title(validated_title(title, "board")?);
        self.store.update_board(board_id, &update).await?;
        self.update(|list| {
            if let Some(board) = list.items.iter_mut().find(|board| board.id() == board_id) {
                board.apply_update(&update);
            }
        });
        Ok(())
    }

    /// Deletes a board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when the store rejects the
    /// delete.
    pub async fn delete(&self, board_id: &BoardId) -> BoardServiceResult<()> {
        self.store.delete_board(board_id).await?;
        self.update(|list| list.items.retain(|board| board.id() != board_id));
        Ok(())
    }

    /// Returns a loaded board by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::UnknownBoard`] when the board is not in
    /// the list.
    pub fn board(&self, board_id: &BoardId) -> BoardServiceResult<Board> {
        self.boards()
            .items
            .into_iter()
            .find(|board| board.id() == board_id)
            .ok_or_else(|| BoardServiceError::UnknownBoard(board_id.clone()))
    }
}
