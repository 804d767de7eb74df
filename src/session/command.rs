//! The session's complete interactive vocabulary.
//!
//! Every driver-facing operation — whether produced by the input processor
//! or constructed programmatically — is represented as a `PickCommand`.
//! Consumers construct commands and pass them to
//! [`PickSession::execute`](super::PickSession::execute).

/// One driver-facing session operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickCommand {
    /// Move the tracked pointer to an absolute pixel position.
    MovePointer {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Update the tracked viewport size.
    ResizeViewport {
        /// New viewport width in physical pixels.
        width: f32,
        /// New viewport height in physical pixels.
        height: f32,
    },
    /// Click: resolve the hover state of the most recent completed frame.
    Activate,
}
