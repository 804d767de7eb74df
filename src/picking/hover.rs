use super::handler::PickHandler;
use super::hits::FrameHits;
use super::registry::PickableId;

/// Hover slot state: at most one object is hovered at any instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverState {
    /// No object under the pointer.
    #[default]
    Idle,
    /// Exactly one object under the pointer — always the nearest hit of the
    /// most recent frame.
    Hovering(PickableId),
}

/// Per-frame hover state machine.
///
/// Consumes one [`FrameHits`] per frame and emits enter/leave transitions:
///
/// - empty hits while hovering `x` → `on_leave(x)`, back to idle
/// - nearest hit `n` while idle → `on_enter(n)`
/// - nearest hit unchanged across frames → no event (one enter per
///   continuous hover)
/// - nearest hit changes `x` → `y` → `on_leave(x)` then `on_enter(y)`, in
///   that order, within the same frame
///
/// There is no terminal state; the machine runs for the life of the session.
#[derive(Debug, Clone, Copy, Default)]
pub struct HoverTracker {
    state: HoverState,
}

impl HoverTracker {
    /// Create a tracker in the idle state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: HoverState::Idle,
        }
    }

    /// Current state of the hover slot.
    #[must_use]
    pub fn state(&self) -> HoverState {
        self.state
    }

    /// The hovered object, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<PickableId> {
        match self.state {
            HoverState::Idle => None,
            HoverState::Hovering(id) => Some(id),
        }
    }

    /// Advance the machine by one frame.
    pub fn advance(
        &mut self,
        hits: &FrameHits,
        handler: &mut dyn PickHandler,
    ) {
        let nearest = hits.nearest().map(|r| r.target);
        match (self.state, nearest) {
            (HoverState::Idle, None) => {}
            (HoverState::Hovering(old), None) => {
                handler.on_leave(old);
                self.state = HoverState::Idle;
            }
            (HoverState::Idle, Some(new)) => {
                handler.on_enter(new);
                self.state = HoverState::Hovering(new);
            }
            (HoverState::Hovering(old), Some(new)) => {
                if old != new {
                    // Reassignment is an implicit leave-then-enter.
                    handler.on_leave(old);
                    handler.on_enter(new);
                    self.state = HoverState::Hovering(new);
                }
            }
        }
    }
}
