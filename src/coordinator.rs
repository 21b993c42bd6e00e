//! Pointer-event facing coordinator for one board.

use crate::board::ports::EntityStore;
use crate::config::EngineConfig;
use crate::drag::{DragId, DragOutcome, DragSession, MovePlan, Point, Rect, classify};
use crate::moves::{MoveExecutor, MoveTicket};
use crate::ordering::BoardStateHandle;
use std::sync::Arc;

/// Routes pointer events through the drag session, classification and the
/// move executor.
///
/// The coordinator is the only writer of board state during a gesture.
/// Persistence started by one drop does not block the next gesture.
pub struct BoardCoordinator<S>
where
    S: EntityStore + 'static,
{
    state: BoardStateHandle,
    session: DragSession,
    executor: MoveExecutor<S>,
}

impl<S> BoardCoordinator<S>
where
    S: EntityStore + 'static,
{
    /// Creates a coordinator for the board behind `state`.
    #[must_use]
    pub fn new(state: BoardStateHandle, store: Arc<S>, config: &EngineConfig) -> Self {
        Self {
            state,
            session: DragSession::new(config.drag.activation_distance),
            executor: MoveExecutor::new(store, config.moves),
        }
    }

    /// Returns the board state handle.
    #[must_use]
    pub const fn state(&self) -> &BoardStateHandle {
        &self.state
    }

    /// Returns the drag session.
    #[must_use]
    pub const fn session(&self) -> &DragSession {
        &self.session
    }

    /// Registers or re-measures a droppable element.
    pub fn register(&mut self, id: DragId, rect: Rect) {
        self.session.register(id, rect);
    }

    /// Removes a droppable element, cancelling the gesture if it was the one
    /// being dragged.
    pub fn unregister(&mut self, id: &DragId) -> Option<DragOutcome> {
        self.session.unregister(id)
    }

    /// Handles a pointer press on a draggable element.
    pub fn pointer_down(&mut self, id: DragId, at: Point) -> bool {
        self.session.pointer_down(id, at)
    }

    /// Handles pointer movement and returns the drop candidate.
    pub fn pointer_move(&mut self, at: Point) -> Option<DragId> {
        self.session.pointer_move(at).cloned()
    }

    /// Handles pointer release.
    ///
    /// Returns a ticket when the release committed a drag; clicks and
    /// releases without a gesture return `None`.
    pub fn pointer_up(&mut self, at: Point) -> Option<MoveTicket> {
        match self.session.pointer_up(at) {
            DragOutcome::Drop { active, over } => Some(self.commit(&active, over.as_ref())),
            DragOutcome::Ignored | DragOutcome::Click(_) | DragOutcome::Cancelled(_) => None,
        }
    }

    /// Cancels the gesture; board state is left untouched.
    pub fn cancel(&mut self) -> DragOutcome {
        self.session.cancel()
    }

    /// Classifies and executes a drop without a pointer gesture.
    #[must_use]
    pub fn commit(&self, active: &DragId, over: Option<&DragId>) -> MoveTicket {
        let plan: MovePlan = self.state.read(|board| classify(active, over, board));
        tracing::debug!(active = %active, ?plan, "executing drop");
        self.executor.execute(&self.state, plan)
    }
}
