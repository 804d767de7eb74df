//! Perspective camera and picking-ray construction.

use glam::{Mat4, Vec2, Vec3};

use crate::raycast::Ray;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        // perspective_rh uses [0,1] depth range
        let proj = Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
        proj * view
    }

    /// Update the aspect ratio after a viewport resize.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Build the world-space picking ray through a normalized-device
    /// coordinate (`x` and `y` in [-1, 1], +y up).
    ///
    /// Unprojects the near-plane and far-plane points at `ndc` through the
    /// inverse view-projection; the ray runs from the near point toward the
    /// far point with a normalized direction.
    #[must_use]
    pub fn pick_ray(&self, ndc: Vec2) -> Ray {
        let inverse = self.build_matrix().inverse();
        let near = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
        let far = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        Ray::new(near, far - near)
    }
}

impl Default for Camera {
    /// A camera on the +z axis looking at the origin, matching the demo
    /// scene's defaults.
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 3.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 800.0 / 600.0,
            fovy: 75.0,
            znear: 0.1,
            zfar: 100.0,
        }
    }
}
