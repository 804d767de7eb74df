//! Pickable objects, per-frame hit sets, and the hover state machine.
//!
//! The data model for picking: a [`PickRegistry`] of objects eligible for
//! ray intersection, the [`FrameHits`] produced by one oracle query, the
//! [`HoverTracker`] that turns consecutive hit sets into enter/leave
//! transitions, and the [`PickHandler`] event sink.

mod handler;
mod hits;
mod hover;
mod registry;

pub use handler::{NullHandler, PickHandler};
pub use hits::{FrameHits, HitRecord};
pub use hover::{HoverState, HoverTracker};
pub use registry::{Highlight, Pickable, PickableId, PickRegistry};
