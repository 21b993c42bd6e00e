//! Shared ownership of a [`BoardState`].

use super::{BoardCommand, BoardState};
use crate::board::domain::BoardId;
use std::sync::{Arc, PoisonError, RwLock};

/// Cloneable handle to the single [`BoardState`] of a board.
///
/// All mutation goes through [`dispatch`](Self::dispatch). The lock is held
/// only for the duration of one reducer step or one read closure and never
/// across an `.await`.
#[derive(Debug, Clone)]
pub struct BoardStateHandle {
    inner: Arc<RwLock<BoardState>>,
}

impl BoardStateHandle {
    /// Wraps an existing state.
    #[must_use]
    pub fn new(state: BoardState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(state)),
        }
    }

    /// Creates a handle to an empty state for `board_id`.
    #[must_use]
    pub fn for_board(board_id: BoardId) -> Self {
        Self::new(BoardState::new(board_id))
    }

    /// Applies a command, returning `true` when the state changed.
    pub fn dispatch(&self, command: BoardCommand) -> bool {
        let name = command.name();
        let changed = self
            .inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .apply(command);
        tracing::trace!(command = name, changed, "applied board command");
        changed
    }

    /// Runs `f` against the current state.
    #[must_use]
    pub fn read<R>(&self, f: impl FnOnce(&BoardState) -> R) -> R {
        f(&self.inner.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> BoardState {
        self.read(Clone::clone)
    }

    /// Returns the board this handle belongs to.
    #[must_use]
    pub fn board_id(&self) -> BoardId {
        self.read(|state| state.board_id().clone())
    }
}
