/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`PickCommand`](crate::session::PickCommand) values.
///
/// # Example
///
/// ```
/// use raypick::input::{InputEvent, InputProcessor};
///
/// let mut processor = InputProcessor::new();
/// let cmd = processor
///     .handle_event(InputEvent::CursorMoved { x: 100.0, y: 200.0 });
/// assert!(cmd.is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Viewport resized.
    Resized {
        /// New viewport width in physical pixels.
        width: f32,
        /// New viewport height in physical pixels.
        height: f32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}
