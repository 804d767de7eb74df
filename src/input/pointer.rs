use glam::Vec2;

/// Tracks the viewport size and the last pointer position, exposing the
/// normalized-device coordinate the picking ray is built from.
///
/// Until the first cursor event arrives the pointer reports the NDC origin
/// (the viewport center), so a frame rendered before any mouse movement
/// picks through the middle of the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerTracker {
    viewport: Vec2,
    /// Last cursor position in physical pixels, `None` before the first
    /// cursor event.
    position: Option<Vec2>,
}

impl PointerTracker {
    /// Create a tracker for a viewport of the given pixel size.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Vec2::new(width, height),
            position: None,
        }
    }

    /// Record a cursor move in physical pixels (origin top-left, +y down).
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = Some(Vec2::new(x, y));
    }

    /// Record a viewport resize. The last cursor position is kept; its NDC
    /// value shifts with the new size.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
    }

    /// Viewport size in physical pixels.
    #[must_use]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Viewport aspect ratio (width / height), or 1.0 for a degenerate
    /// viewport.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        if self.viewport.y > 0.0 {
            self.viewport.x / self.viewport.y
        } else {
            1.0
        }
    }

    /// The pointer's normalized-device coordinate: x in [-1, 1] left to
    /// right, y in [-1, 1] bottom to top.
    #[must_use]
    pub fn ndc(&self) -> Vec2 {
        let Some(pos) = self.position else {
            return Vec2::ZERO;
        };
        if self.viewport.x <= 0.0 || self.viewport.y <= 0.0 {
            return Vec2::ZERO;
        }
        Vec2::new(
            (pos.x / self.viewport.x) * 2.0 - 1.0,
            -((pos.y / self.viewport.y) * 2.0 - 1.0),
        )
    }
}
