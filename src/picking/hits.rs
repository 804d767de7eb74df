use rustc_hash::FxHashSet;

use super::registry::PickableId;

/// Result of one picking query against one object: the object's identity
/// and the hit distance along the ray (≥ 0). Produced fresh every frame by
/// the oracle; never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// The intersected object.
    pub target: PickableId,
    /// Distance from the ray origin to the intersection point.
    pub distance: f32,
}

/// The ordered hit set for one frame, ascending by distance.
///
/// The oracle contract already promises ascending order, but construction
/// re-sorts unconditionally so a misbehaving oracle cannot break the
/// nearest-wins invariant. Records with a non-finite or negative distance
/// are dropped — they carry no usable depth ordering.
#[derive(Debug, Clone, Default)]
pub struct FrameHits {
    /// Hit records, ascending by distance.
    records: Vec<HitRecord>,
    /// Membership set for the highlight pass.
    members: FxHashSet<PickableId>,
}

impl FrameHits {
    /// Build a frame hit set from raw oracle records, restoring ascending
    /// distance order.
    #[must_use]
    pub fn new(mut records: Vec<HitRecord>) -> Self {
        records.retain(|r| r.distance.is_finite() && r.distance >= 0.0);
        records.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        let mut members = FxHashSet::default();
        for r in &records {
            let _ = members.insert(r.target);
        }
        Self { records, members }
    }

    /// Whether no object was hit this frame.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of hits this frame.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// The nearest hit, if any. This is the hover candidate.
    #[must_use]
    pub fn nearest(&self) -> Option<&HitRecord> {
        self.records.first()
    }

    /// Whether `id` was intersected anywhere in this frame, not just as the
    /// nearest hit.
    #[must_use]
    pub fn contains(&self, id: PickableId) -> bool {
        self.members.contains(&id)
    }

    /// Iterate hits in ascending distance order.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = &HitRecord> {
        self.records.iter()
    }
}
