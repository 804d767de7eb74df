//! Converts raw platform events into session commands.
//!
//! The `InputProcessor` owns the transient press state needed to pair a
//! left-button press with its release. It is the only thing that sits
//! between raw window events and the session's
//! [`execute`](crate::session::PickSession::execute) method.

use super::event::{InputEvent, MouseButton};
use crate::session::PickCommand;

/// Converts raw window events into [`PickCommand`]s.
///
/// Cursor moves become [`PickCommand::MovePointer`], resizes become
/// [`PickCommand::ResizeViewport`], and a left-button release that follows
/// a left-button press becomes [`PickCommand::Activate`] (click semantics:
/// the click fires on release, and a release without a preceding press —
/// e.g. a drag that started outside the window — is ignored).
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input_processor.handle_event(event) {
///     session.execute(cmd, &mut handler);
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct InputProcessor {
    /// Whether the primary mouse button is currently held.
    left_pressed: bool,
}

impl InputProcessor {
    /// Create a processor with no button held.
    #[must_use]
    pub fn new() -> Self {
        Self {
            left_pressed: false,
        }
    }

    /// Whether the primary mouse button is pressed.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.left_pressed
    }

    /// Release the mouse button without triggering click detection.
    ///
    /// Used by consumers that intercept mouse events for external drag
    /// operations and need to release the button cleanly.
    pub fn release_mouse_state(&mut self) {
        self.left_pressed = false;
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<PickCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                Some(PickCommand::MovePointer { x, y })
            }
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed)
            }
            InputEvent::Resized { width, height } => {
                Some(PickCommand::ResizeViewport { width, height })
            }
        }
    }

    /// Track press state; produce `Activate` on a paired release.
    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
    ) -> Option<PickCommand> {
        if button != MouseButton::Left {
            return None;
        }
        if pressed {
            self.left_pressed = true;
            return None;
        }
        let was_pressed = self.left_pressed;
        self.left_pressed = false;
        was_pressed.then_some(PickCommand::Activate)
    }
}
