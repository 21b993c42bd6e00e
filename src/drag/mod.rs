//! Drag session controller.
//!
//! Turns a pointer-drag gesture into a [`MovePlan`]:
//!
//! - [`DragId`] tags every draggable and droppable element with its kind.
//! - [`DragSession`] tracks the gesture (idle, pending, dragging) and picks
//!   the drop candidate by closest corners.
//! - [`classify`] maps a committed `(active, over)` pair onto the current
//!   [`BoardState`](crate::ordering::BoardState).

mod classify;
pub mod geometry;
mod id;
mod session;

pub use classify::{MovePlan, NoOpReason, classify, classify_raw};
pub use geometry::{Droppable, Point, Rect};
pub use id::{DragId, DragIdParseError};
pub use session::{ActiveDrag, DEFAULT_ACTIVATION_DISTANCE, DragOutcome, DragPhase, DragSession};
