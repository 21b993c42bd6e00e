//! Pointer-drag state machine for a single gesture.

use super::geometry::{Droppable, Point, Rect, closest_corners};
use super::DragId;

/// Pointer travel, in pixels, needed before a press becomes a drag.
pub const DEFAULT_ACTIVATION_DISTANCE: f64 = 5.0;

/// Tracking data for the element under the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveDrag {
    /// Element being dragged.
    pub active: DragId,
    /// Pointer position at press time.
    pub origin: Point,
    /// Bounding box of the active element at press time.
    pub initial_rect: Rect,
    /// Latest pointer position.
    pub pointer: Point,
    /// Current collision candidate.
    pub over: Option<DragId>,
}

impl ActiveDrag {
    /// Bounding box of the active element following the pointer.
    #[must_use]
    pub fn collision_rect(&self) -> Rect {
        self.initial_rect
            .translated(self.pointer.delta_from(self.origin))
    }
}

/// Phase of the gesture.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragPhase {
    /// No pointer is pressed on a draggable.
    #[default]
    Idle,
    /// Pressed, but the pointer has not yet travelled past the activation
    /// distance.
    Pending(ActiveDrag),
    /// A drag is in progress.
    Dragging(ActiveDrag),
}

/// How a gesture ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// There was no gesture to end.
    Ignored,
    /// The pointer was released before the activation distance was reached.
    Click(DragId),
    /// The drag was committed over `over` (or over nothing).
    Drop {
        /// Dragged element.
        active: DragId,
        /// Drop target at release time.
        over: Option<DragId>,
    },
    /// The drag was discarded.
    Cancelled(DragId),
}

/// Drag session over a set of registered droppables.
///
/// `Idle → Pending` on press, `Pending → Dragging` once the pointer moves
/// strictly further than the activation distance from the press point, and
/// back to `Idle` on release or cancel. While dragging, the drop candidate
/// is the droppable with the closest corners.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    activation_distance: f64,
    droppables: Vec<Droppable>,
    phase: DragPhase,
}

impl Default for DragSession {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVATION_DISTANCE)
    }
}

impl DragSession {
    /// Creates an idle session with the given activation distance.
    ///
    /// Negative or NaN distances are treated as zero.
    #[must_use]
    pub fn new(activation_distance: f64) -> Self {
        Self {
            activation_distance: activation_distance.max(0.0),
            droppables: Vec::new(),
            phase: DragPhase::Idle,
        }
    }

    /// Returns the activation distance in pixels.
    #[must_use]
    pub const fn activation_distance(&self) -> f64 {
        self.activation_distance
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> &DragPhase {
        &self.phase
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging(_))
    }

    /// Returns the pressed or dragged element.
    #[must_use]
    pub const fn active(&self) -> Option<&DragId> {
        match &self.phase {
            DragPhase::Idle => None,
            DragPhase::Pending(drag) | DragPhase::Dragging(drag) => Some(&drag.active),
        }
    }

    /// Returns the current drop candidate while dragging.
    #[must_use]
    pub const fn over(&self) -> Option<&DragId> {
        match &self.phase {
            DragPhase::Dragging(drag) => drag.over.as_ref(),
            DragPhase::Idle | DragPhase::Pending(_) => None,
        }
    }

    /// Returns the registered droppables in registration order.
    #[must_use]
    pub fn droppables(&self) -> &[Droppable] {
        &self.droppables
    }

    /// Registers a droppable, or updates its bounding box if already known.
    ///
    /// Updating keeps the original registration position.
    pub fn register(&mut self, id: DragId, rect: Rect) {
        if let Some(existing) = self.droppables.iter_mut().find(|droppable| droppable.id == id) {
            existing.rect = rect;
        } else {
            self.droppables.push(Droppable { id, rect });
        }
        self.refresh_over();
    }

    /// Removes a droppable.
    ///
    /// Removing the element being dragged cancels the gesture, in which case
    /// the cancellation outcome is returned.
    pub fn unregister(&mut self, id: &DragId) -> Option<DragOutcome> {
        self.droppables.retain(|droppable| &droppable.id != id);
        if self.active() == Some(id) {
            return Some(self.cancel());
        }
        self.refresh_over();
        None
    }

    /// Presses the pointer on `active` at `at`.
    ///
    /// Ignored (returns `false`) unless the session is idle.
    pub fn pointer_down(&mut self, active: DragId, at: Point) -> bool {
        if !matches!(self.phase, DragPhase::Idle) {
            return false;
        }
        let initial_rect = self
            .droppables
            .iter()
            .find(|droppable| droppable.id == active)
            .map_or_else(|| Rect::at(at), |droppable| droppable.rect);
        self.phase = DragPhase::Pending(ActiveDrag {
            active,
            origin: at,
            initial_rect,
            pointer: at,
            over: None,
        });
        true
    }

    /// Moves the pointer, activating the drag once past the threshold.
    ///
    /// Returns the drop candidate after the move.
    pub fn pointer_move(&mut self, at: Point) -> Option<&DragId> {
        match &mut self.phase {
            DragPhase::Idle => {}
            DragPhase::Pending(drag) => {
                drag.pointer = at;
                if at.distance_to(drag.origin) > self.activation_distance {
                    let mut activated = drag.clone();
                    activated.over =
                        closest_corners(activated.collision_rect(), &self.droppables).cloned();
                    tracing::debug!(active = %activated.active, "drag activated");
                    self.phase = DragPhase::Dragging(activated);
                }
            }
            DragPhase::Dragging(drag) => {
                drag.pointer = at;
                drag.over = closest_corners(drag.collision_rect(), &self.droppables).cloned();
            }
        }
        self.over()
    }

    /// Releases the pointer at `at`.
    ///
    /// A release while dragging commits the drop; a release before
    /// activation is a click wherever it lands.
    pub fn pointer_up(&mut self, at: Point) -> DragOutcome {
        if self.is_dragging() {
            self.pointer_move(at);
        }
        match std::mem::take(&mut self.phase) {
            DragPhase::Idle => DragOutcome::Ignored,
            DragPhase::Pending(drag) => DragOutcome::Click(drag.active),
            DragPhase::Dragging(drag) => {
                tracing::debug!(
                    active = %drag.active,
                    over = ?drag.over.as_ref().map(ToString::to_string),
                    "drag committed"
                );
                DragOutcome::Drop {
                    active: drag.active,
                    over: drag.over,
                }
            }
        }
    }

    /// Discards the current gesture.
    pub fn cancel(&mut self) -> DragOutcome {
        match std::mem::take(&mut self.phase) {
            DragPhase::Idle => DragOutcome::Ignored,
            DragPhase::Pending(drag) | DragPhase::Dragging(drag) => {
                tracing::debug!(active = %drag.active, "drag cancelled");
                DragOutcome::Cancelled(drag.active)
            }
        }
    }

    fn refresh_over(&mut self) {
        if let DragPhase::Dragging(drag) = &mut self.phase {
            drag.over = closest_corners(drag.collision_rect(), &self.droppables).cloned();
        }
    }
}
