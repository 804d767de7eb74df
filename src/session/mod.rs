//! The picking session: registry, hover state, and pointer grouped behind
//! one driver-facing facade.

mod command;

pub use command::PickCommand;
use glam::Vec2;

use crate::camera::Camera;
use crate::input::PointerTracker;
use crate::picking::{
    FrameHits, HoverState, HoverTracker, PickHandler, PickRegistry,
    PickableId,
};
use crate::raycast::Raycaster;

/// Owns everything the picking core keeps between frames: the pickable
/// registry, the hover state machine, and the tracked pointer.
///
/// The driver calls [`frame`](Self::frame) once per animation tick and
/// routes input through [`execute`](Self::execute). Clicks resolve against
/// the hover state of the most recent completed frame — never a fresh
/// oracle query — so what the click hits is exactly what the user currently
/// sees highlighted.
///
/// All methods take `&mut self`; frame ticks and click events must be
/// serialized onto one logical thread by the caller. There is no internal
/// synchronization.
#[derive(Debug)]
pub struct PickSession {
    registry: PickRegistry,
    hover: HoverTracker,
    pointer: PointerTracker,
}

impl PickSession {
    /// Create a session for a viewport of the given pixel size, with an
    /// empty registry and an idle hover slot.
    #[must_use]
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            registry: PickRegistry::new(),
            hover: HoverTracker::new(),
            pointer: PointerTracker::new(viewport_width, viewport_height),
        }
    }

    /// Register a pickable object under `label`. Idempotent per label.
    pub fn register(&mut self, label: &str) -> PickableId {
        self.registry.register(label)
    }

    /// The pickable registry (highlight states are read from here).
    #[must_use]
    pub fn registry(&self) -> &PickRegistry {
        &self.registry
    }

    /// Current hover slot state.
    #[must_use]
    pub fn hover_state(&self) -> HoverState {
        self.hover.state()
    }

    /// The hovered object from the most recent completed frame, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<PickableId> {
        self.hover.hovered()
    }

    /// The tracked pointer's current NDC coordinate.
    #[must_use]
    pub fn pointer_ndc(&self) -> Vec2 {
        self.pointer.ndc()
    }

    /// Viewport aspect ratio from the tracked pointer.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.pointer.aspect()
    }

    /// Dispatch one command.
    ///
    /// `MovePointer` and `ResizeViewport` only mutate tracked state; their
    /// effect on hover and highlights lands on the next [`frame`](Self::frame)
    /// call. `Activate` resolves immediately against the last frame.
    pub fn execute(
        &mut self,
        command: PickCommand,
        handler: &mut dyn PickHandler,
    ) {
        match command {
            PickCommand::MovePointer { x, y } => {
                self.pointer.set_position(x, y);
            }
            PickCommand::ResizeViewport { width, height } => {
                self.pointer.resize(width, height);
            }
            PickCommand::Activate => self.activate(handler),
        }
    }

    /// Run one picking pass: build the ray from the tracked pointer, query
    /// the oracle, apply the highlight pass, and advance the hover machine
    /// (emitting enter/leave events through `handler`).
    ///
    /// A failed oracle query is logged and treated as an empty hit set for
    /// this frame; the frame loop never aborts. Hits referencing ids not in
    /// the registry are dropped before they reach the state machine.
    pub fn frame(
        &mut self,
        caster: &dyn Raycaster,
        camera: &Camera,
        handler: &mut dyn PickHandler,
    ) {
        let ray = camera.pick_ray(self.pointer.ndc());
        let mut records = match caster.cast(&ray, &self.registry) {
            Ok(records) => records,
            Err(e) => {
                log::debug!("pick oracle unavailable this frame: {e}");
                Vec::new()
            }
        };
        records.retain(|record| {
            let known = self.registry.contains(record.target);
            if !known {
                log::debug!(
                    "dropping hit on unregistered pickable {:?}",
                    record.target
                );
            }
            known
        });

        let hits = FrameHits::new(records);
        self.registry.apply_highlights(&hits);
        self.hover.advance(&hits, handler);
    }

    /// Resolve a click against the hover state of the most recent completed
    /// frame. Hovering an object dispatches `on_clicked`; idle is a no-op.
    ///
    /// A hover target that is no longer registered (stale handle from a
    /// torn-down scene) is ignored with a warning.
    pub fn activate(&mut self, handler: &mut dyn PickHandler) {
        let Some(id) = self.hover.hovered() else {
            return;
        };
        if self.registry.contains(id) {
            handler.on_clicked(id);
        } else {
            log::warn!("ignoring click on unregistered pickable {id:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use glam::Vec3;

    use super::*;
    use crate::error::RaypickError;
    use crate::picking::{Highlight, HitRecord};
    use crate::raycast::{Ray, Sphere, SphereRaycaster};

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Enter(PickableId),
        Leave(PickableId),
        Clicked(PickableId),
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<Event>,
    }

    impl PickHandler for Recorder {
        fn on_enter(&mut self, id: PickableId) {
            self.events.push(Event::Enter(id));
        }
        fn on_leave(&mut self, id: PickableId) {
            self.events.push(Event::Leave(id));
        }
        fn on_clicked(&mut self, id: PickableId) {
            self.events.push(Event::Clicked(id));
        }
    }

    /// Oracle stub replaying a scripted sequence of per-frame results.
    struct ScriptedCaster {
        frames: RefCell<VecDeque<Result<Vec<HitRecord>, RaypickError>>>,
    }

    impl ScriptedCaster {
        fn new(
            frames: Vec<Result<Vec<HitRecord>, RaypickError>>,
        ) -> Self {
            Self {
                frames: RefCell::new(frames.into()),
            }
        }
    }

    impl Raycaster for ScriptedCaster {
        fn cast(
            &self,
            _ray: &Ray,
            _candidates: &PickRegistry,
        ) -> Result<Vec<HitRecord>, RaypickError> {
            self.frames.borrow_mut().pop_front().unwrap_or_else(|| Ok(Vec::new()))
        }
    }

    fn hit(target: PickableId, distance: f32) -> HitRecord {
        HitRecord { target, distance }
    }

    #[test]
    fn full_hover_click_scenario() {
        let mut session = PickSession::new(800.0, 600.0);
        let a = session.register("a");
        let b = session.register("b");
        let c = session.register("c");
        let camera = Camera::default();
        let mut rec = Recorder::default();

        let caster = ScriptedCaster::new(vec![
            Ok(Vec::new()),
            Ok(vec![hit(b, 2.0), hit(c, 5.0)]),
            Ok(vec![hit(a, 1.0), hit(b, 2.0)]),
            Ok(Vec::new()),
        ]);

        // Frame 1: nothing hit.
        session.frame(&caster, &camera, &mut rec);
        assert_eq!(session.hover_state(), HoverState::Idle);
        assert!(rec.events.is_empty());

        // Frame 2: B nearest, C also hit.
        session.frame(&caster, &camera, &mut rec);
        assert_eq!(rec.events, vec![Event::Enter(b)]);
        assert_eq!(session.hovered(), Some(b));
        assert_eq!(session.registry().highlight(a), Some(Highlight::Normal));
        assert_eq!(
            session.registry().highlight(b),
            Some(Highlight::Highlighted)
        );
        assert_eq!(
            session.registry().highlight(c),
            Some(Highlight::Highlighted)
        );

        // Frame 3: A takes over as nearest.
        session.frame(&caster, &camera, &mut rec);
        assert_eq!(
            rec.events,
            vec![Event::Enter(b), Event::Leave(b), Event::Enter(a)]
        );
        assert_eq!(session.hovered(), Some(a));
        assert_eq!(
            session.registry().highlight(a),
            Some(Highlight::Highlighted)
        );
        assert_eq!(
            session.registry().highlight(b),
            Some(Highlight::Highlighted)
        );
        assert_eq!(session.registry().highlight(c), Some(Highlight::Normal));

        // Click resolves against the last completed frame.
        session.activate(&mut rec);
        assert_eq!(rec.events.last(), Some(&Event::Clicked(a)));

        // Frame 4: empty again.
        session.frame(&caster, &camera, &mut rec);
        assert_eq!(rec.events.last(), Some(&Event::Leave(a)));
        assert_eq!(session.hover_state(), HoverState::Idle);
    }

    #[test]
    fn click_while_idle_is_a_no_op() {
        let mut session = PickSession::new(800.0, 600.0);
        let _ = session.register("a");
        let mut rec = Recorder::default();
        session.activate(&mut rec);
        assert!(rec.events.is_empty());
    }

    #[test]
    fn oracle_error_degrades_to_an_empty_frame() {
        let mut session = PickSession::new(800.0, 600.0);
        let a = session.register("a");
        let camera = Camera::default();
        let mut rec = Recorder::default();

        let caster = ScriptedCaster::new(vec![
            Ok(vec![hit(a, 1.0)]),
            Err(RaypickError::Raycast("camera not ready".to_owned())),
        ]);

        session.frame(&caster, &camera, &mut rec);
        assert_eq!(session.hovered(), Some(a));

        session.frame(&caster, &camera, &mut rec);
        assert_eq!(session.hover_state(), HoverState::Idle);
        assert_eq!(session.registry().highlight(a), Some(Highlight::Normal));
        assert_eq!(rec.events, vec![Event::Enter(a), Event::Leave(a)]);
    }

    #[test]
    fn hits_on_unregistered_ids_are_dropped() {
        let mut session = PickSession::new(800.0, 600.0);
        let a = session.register("a");

        // Mint an id the session's registry never saw.
        let mut other = PickRegistry::new();
        let _ = other.register("decoy");
        let foreign = other.register("foreign");

        let camera = Camera::default();
        let mut rec = Recorder::default();
        let caster = ScriptedCaster::new(vec![Ok(vec![
            hit(foreign, 0.5),
            hit(a, 2.0),
        ])]);

        session.frame(&caster, &camera, &mut rec);
        // The foreign hit is ignored even though it is nearer.
        assert_eq!(session.hovered(), Some(a));
        assert_eq!(rec.events, vec![Event::Enter(a)]);
    }

    #[test]
    fn unsorted_oracle_output_is_resorted_before_nearest_selection() {
        let mut session = PickSession::new(800.0, 600.0);
        let far = session.register("far");
        let near = session.register("near");
        let camera = Camera::default();
        let mut rec = Recorder::default();

        let caster = ScriptedCaster::new(vec![Ok(vec![
            hit(far, 9.0),
            hit(near, 1.0),
        ])]);

        session.frame(&caster, &camera, &mut rec);
        assert_eq!(session.hovered(), Some(near));
    }

    #[test]
    fn empty_registry_stays_idle() {
        let mut session = PickSession::new(800.0, 600.0);
        let camera = Camera::default();
        let mut rec = Recorder::default();
        let caster = SphereRaycaster::new();

        session.frame(&caster, &camera, &mut rec);
        assert_eq!(session.hover_state(), HoverState::Idle);
        assert!(rec.events.is_empty());
    }

    #[test]
    fn commands_route_pointer_and_clicks_through_the_session() {
        let mut session = PickSession::new(800.0, 600.0);
        let ball = session.register("ball");
        let camera = Camera::default();
        let mut rec = Recorder::default();

        let mut caster = SphereRaycaster::new();
        caster.set_sphere(
            ball,
            Sphere {
                center: Vec3::ZERO,
                radius: 0.5,
            },
        );

        // Pointer at the viewport center looks straight at the sphere.
        session.execute(
            PickCommand::MovePointer { x: 400.0, y: 300.0 },
            &mut rec,
        );
        session.frame(&caster, &camera, &mut rec);
        assert_eq!(session.hovered(), Some(ball));

        session.execute(PickCommand::Activate, &mut rec);
        assert_eq!(
            rec.events,
            vec![Event::Enter(ball), Event::Clicked(ball)]
        );

        // Pointer into the top-left corner misses everything.
        session.execute(PickCommand::MovePointer { x: 1.0, y: 1.0 }, &mut rec);
        session.frame(&caster, &camera, &mut rec);
        assert_eq!(session.hover_state(), HoverState::Idle);
        assert_eq!(rec.events.last(), Some(&Event::Leave(ball)));
    }

    #[test]
    fn resize_updates_the_tracked_aspect() {
        let mut session = PickSession::new(800.0, 600.0);
        let mut rec = Recorder::default();
        session.execute(
            PickCommand::ResizeViewport {
                width: 1200.0,
                height: 600.0,
            },
            &mut rec,
        );
        assert!((session.aspect() - 2.0).abs() < 1e-6);
    }
}
