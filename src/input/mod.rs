//! Input handling: event types, pointer tracking, and the input processor
//! that converts raw window events into session commands.

/// Platform-agnostic input events.
pub mod event;
/// Viewport tracking and pixel-to-NDC conversion.
pub mod pointer;
/// Converts raw events into session commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use pointer::PointerTracker;
pub use processor::InputProcessor;
