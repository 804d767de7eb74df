//! The ray-casting oracle seam and a reference implementation over
//! analytic spheres.
//!
//! The picking core never intersects geometry itself — it consumes ordered
//! hit records from a [`Raycaster`]. Embedding engines implement the trait
//! over their own scene representation; [`SphereRaycaster`] is the
//! reference oracle used by the demo driver and the test suite.

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::error::RaypickError;
use crate::picking::{HitRecord, PickableId, PickRegistry};

/// A world-space ray: origin plus normalized direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin in world space.
    pub origin: Vec3,
    /// Normalized direction. Zero if constructed from a degenerate input.
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray, normalizing `direction`. A zero-length direction
    /// yields a degenerate ray that intersects nothing.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }
}

/// An analytic sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center in world space.
    pub center: Vec3,
    /// Radius (> 0 for meaningful intersection).
    pub radius: f32,
}

impl Sphere {
    /// Nearest non-negative intersection distance along `ray`, or `None`.
    ///
    /// Intersections behind the ray origin are rejected; a ray starting
    /// inside the sphere hits the far surface.
    #[must_use]
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        if ray.direction == Vec3::ZERO {
            return None;
        }
        // Quadratic in t with a = 1 (direction is normalized).
        let oc = ray.origin - self.center;
        let b = oc.dot(ray.direction);
        let c = oc.length_squared() - self.radius * self.radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let sqrt_disc = disc.sqrt();
        let t_near = -b - sqrt_disc;
        if t_near >= 0.0 {
            return Some(t_near);
        }
        let t_far = -b + sqrt_disc;
        (t_far >= 0.0).then_some(t_far)
    }
}

/// The picking oracle: intersects a ray against the registered candidates.
///
/// Contract: the returned records are sorted ascending by distance and
/// every distance is ≥ 0. The state machine tolerates violations (it
/// re-sorts and filters on [`crate::picking::FrameHits`] construction), but
/// implementations should honor the contract.
///
/// An `Err` means the oracle could not be queried this frame (for example,
/// scene state not yet initialized); the session treats that as an empty
/// hit set rather than failing the frame loop.
pub trait Raycaster {
    /// Cast `ray` against every candidate in the registry.
    fn cast(
        &self,
        ray: &Ray,
        candidates: &PickRegistry,
    ) -> Result<Vec<HitRecord>, RaypickError>;
}

/// Reference oracle over per-object analytic spheres.
///
/// Each registered id may carry one sphere; candidates without a sphere
/// contribute no hits. The driver animates positions between frames via
/// [`set_center`](Self::set_center).
#[derive(Debug, Clone, Default)]
pub struct SphereRaycaster {
    spheres: FxHashMap<PickableId, Sphere>,
}

impl SphereRaycaster {
    /// Create an oracle with no geometry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            spheres: FxHashMap::default(),
        }
    }

    /// Attach or replace the sphere for `id`.
    pub fn set_sphere(&mut self, id: PickableId, sphere: Sphere) {
        let _ = self.spheres.insert(id, sphere);
    }

    /// Move the sphere for `id`, keeping its radius. Returns `false` if
    /// `id` has no sphere.
    pub fn set_center(&mut self, id: PickableId, center: Vec3) -> bool {
        self.spheres.get_mut(&id).is_some_and(|sphere| {
            sphere.center = center;
            true
        })
    }

    /// The sphere attached to `id`, if any.
    #[must_use]
    pub fn sphere(&self, id: PickableId) -> Option<&Sphere> {
        self.spheres.get(&id)
    }
}

impl Raycaster for SphereRaycaster {
    fn cast(
        &self,
        ray: &Ray,
        candidates: &PickRegistry,
    ) -> Result<Vec<HitRecord>, RaypickError> {
        let mut records = Vec::new();
        for pickable in candidates.iter() {
            let Some(sphere) = self.spheres.get(&pickable.id()) else {
                continue;
            };
            if let Some(distance) = sphere.intersect(ray) {
                records.push(HitRecord {
                    target: pickable.id(),
                    distance,
                });
            }
        }
        records.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        Ok(records)
    }
}
