use super::registry::PickableId;

/// Event sink for hover/click transitions.
///
/// Implemented by the embedding application to receive the discrete events
/// the state machine derives from raw hit streams: `on_enter` when an
/// object becomes the hovered target, `on_leave` when it stops being the
/// hovered target, and `on_clicked` when an activate signal resolves
/// against a hovered object.
pub trait PickHandler {
    /// `id` became the hovered object.
    fn on_enter(&mut self, id: PickableId);
    /// `id` stopped being the hovered object.
    fn on_leave(&mut self, id: PickableId);
    /// `id` was clicked while hovered.
    fn on_clicked(&mut self, id: PickableId);
}

/// Handler that ignores every event. Useful for driving frames where no
/// consumer cares about transitions.
pub struct NullHandler;

impl PickHandler for NullHandler {
    fn on_enter(&mut self, _id: PickableId) {}
    fn on_leave(&mut self, _id: PickableId) {}
    fn on_clicked(&mut self, _id: PickableId) {}
}
