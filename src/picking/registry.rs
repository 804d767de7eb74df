use super::hits::FrameHits;

// ---------------------------------------------------------------------------
// PickableId / Highlight
// ---------------------------------------------------------------------------

/// Opaque identity token for a registered pickable object.
///
/// Minted by [`PickRegistry::register`]; compared by identity, never by the
/// object's geometry or label. Ids stay valid for the life of the session —
/// the registry has no removal operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PickableId(u32);

/// Visual state of one pickable object, rewritten every frame by the
/// highlight pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    /// Not intersected by the current frame's ray.
    #[default]
    Normal,
    /// Intersected by the current frame's ray (not necessarily hovered).
    Highlighted,
}

// ---------------------------------------------------------------------------
// Pickable
// ---------------------------------------------------------------------------

/// A registered scene object: identity, setup-time label, and the mutable
/// highlight state the driver applies to its render materials.
#[derive(Debug, Clone)]
pub struct Pickable {
    id: PickableId,
    label: String,
    highlight: Highlight,
}

impl Pickable {
    /// Identity token for this object.
    #[must_use]
    pub fn id(&self) -> PickableId {
        self.id
    }

    /// Label given at registration.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current highlight state.
    #[must_use]
    pub fn highlight(&self) -> Highlight {
        self.highlight
    }
}

// ---------------------------------------------------------------------------
// PickRegistry
// ---------------------------------------------------------------------------

/// The fixed set of objects eligible for ray intersection testing.
///
/// Objects are registered once at scene setup and never removed. Iteration
/// order is registration order.
#[derive(Debug, Clone, Default)]
pub struct PickRegistry {
    /// Pickables in registration order.
    pickables: Vec<Pickable>,
    next_id: u32,
}

impl PickRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pickables: Vec::new(),
            next_id: 0,
        }
    }

    /// Register an object under `label` and return its identity.
    ///
    /// Idempotent: registering a label that is already present returns the
    /// existing id and adds nothing.
    pub fn register(&mut self, label: &str) -> PickableId {
        if let Some(existing) =
            self.pickables.iter().find(|p| p.label == label)
        {
            return existing.id;
        }
        let id = PickableId(self.next_id);
        self.next_id += 1;
        self.pickables.push(Pickable {
            id,
            label: label.to_owned(),
            highlight: Highlight::Normal,
        });
        id
    }

    /// Number of registered objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pickables.len()
    }

    /// Whether no objects are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pickables.is_empty()
    }

    /// Whether `id` belongs to a registered object.
    #[must_use]
    pub fn contains(&self, id: PickableId) -> bool {
        self.get(id).is_some()
    }

    /// Look up an object by id.
    #[must_use]
    pub fn get(&self, id: PickableId) -> Option<&Pickable> {
        self.pickables.iter().find(|p| p.id == id)
    }

    /// Iterate registered objects in registration order.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = &Pickable> {
        self.pickables.iter()
    }

    /// Iterate registered ids in registration order.
    #[must_use]
    pub fn ids(&self) -> impl Iterator<Item = PickableId> + '_ {
        self.pickables.iter().map(|p| p.id)
    }

    /// Current highlight state of `id`, or `None` if not registered.
    #[must_use]
    pub fn highlight(&self, id: PickableId) -> Option<Highlight> {
        self.get(id).map(|p| p.highlight)
    }

    /// Set the highlight state of one object. Returns `false` (and changes
    /// nothing) if `id` is not registered.
    pub fn set_highlight(
        &mut self,
        id: PickableId,
        highlight: Highlight,
    ) -> bool {
        self.pickables
            .iter_mut()
            .find(|p| p.id == id)
            .is_some_and(|p| {
                p.highlight = highlight;
                true
            })
    }

    /// Per-object highlight assignments, in registration order. This is the
    /// driver-facing sink: read once per frame and applied to the render
    /// material system.
    #[must_use]
    pub fn highlights(
        &self,
    ) -> impl Iterator<Item = (PickableId, Highlight)> + '_ {
        self.pickables.iter().map(|p| (p.id, p.highlight))
    }

    /// The per-frame highlight pass: every object intersected anywhere in
    /// `hits` becomes [`Highlight::Highlighted`], every other object
    /// [`Highlight::Normal`].
    ///
    /// Pure function of `hits` and the registry — it does not depend on the
    /// prior frame's highlight state, so re-running it on the same hit set
    /// yields identical assignments.
    pub fn apply_highlights(&mut self, hits: &FrameHits) {
        for p in &mut self.pickables {
            p.highlight = if hits.contains(p.id) {
                Highlight::Highlighted
            } else {
                Highlight::Normal
            };
        }
    }
}
