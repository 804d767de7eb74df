//! Headless demo driver: three bobbing spheres, a scripted pointer sweep,
//! and dwell-triggered clicks, with enter/leave/click events and highlight
//! color changes reported through `log`.

use std::f32::consts::TAU;
use std::path::Path;

use glam::Vec3;
use raypick::camera::Camera;
use raypick::input::{InputEvent, InputProcessor, MouseButton};
use raypick::motion::Bobbing;
use raypick::options::Options;
use raypick::picking::{Highlight, PickHandler, PickableId};
use raypick::raycast::{Sphere, SphereRaycaster};
use raypick::session::PickSession;
use rustc_hash::FxHashMap;

/// Event sink that resolves ids back to labels for the log.
struct LogHandler {
    labels: FxHashMap<PickableId, String>,
}

impl LogHandler {
    fn label(&self, id: PickableId) -> &str {
        self.labels.get(&id).map_or("<unknown>", String::as_str)
    }
}

impl PickHandler for LogHandler {
    fn on_enter(&mut self, id: PickableId) {
        log::info!("mouse enter: {}", self.label(id));
    }

    fn on_leave(&mut self, id: PickableId) {
        log::info!("mouse leave: {}", self.label(id));
    }

    fn on_clicked(&mut self, id: PickableId) {
        log::info!("click on {}", self.label(id));
    }
}

/// Stand-in for the render material system: one RGB color per object.
struct MaterialTable {
    colors: FxHashMap<PickableId, [f32; 3]>,
    base: [f32; 3],
    highlighted: [f32; 3],
}

impl MaterialTable {
    fn new(base: [f32; 3], highlighted: [f32; 3]) -> Self {
        Self {
            colors: FxHashMap::default(),
            base,
            highlighted,
        }
    }

    /// Apply one frame's highlight assignments, logging color changes.
    fn apply(&mut self, session: &PickSession, handler: &LogHandler) {
        for (id, highlight) in session.registry().highlights() {
            let color = match highlight {
                Highlight::Normal => self.base,
                Highlight::Highlighted => self.highlighted,
            };
            let previous = self.colors.insert(id, color);
            if previous.is_some_and(|prev| prev != color) {
                log::debug!(
                    "{} color -> {:?}",
                    handler.label(id),
                    color
                );
            }
        }
    }
}

/// One scene object: its pickable id, rest position, and bobbing motion.
struct DemoSphere {
    id: PickableId,
    rest: Vec3,
    bob: Bobbing,
}

fn run(options: &Options) {
    let mut session =
        PickSession::new(options.viewport.width, options.viewport.height);
    let mut camera = Camera {
        eye: Vec3::new(0.0, 0.0, options.camera.distance),
        target: Vec3::ZERO,
        up: Vec3::Y,
        aspect: session.aspect(),
        fovy: options.camera.fovy,
        znear: options.camera.znear,
        zfar: options.camera.zfar,
    };

    // The original demo scene: spheres spaced along the x axis.
    let mut caster = SphereRaycaster::new();
    let mut labels = FxHashMap::default();
    let count = options.scene.bob_frequencies.len();
    let spheres: Vec<DemoSphere> = options
        .scene
        .bob_frequencies
        .iter()
        .enumerate()
        .map(|(i, &frequency)| {
            let label = format!("object{}", i + 1);
            let id = session.register(&label);
            let _ = labels.insert(id, label);
            let rest = Vec3::new(
                (i as f32 - (count as f32 - 1.0) / 2.0)
                    * options.scene.spacing,
                0.0,
                0.0,
            );
            caster.set_sphere(
                id,
                Sphere {
                    center: rest,
                    radius: options.scene.radius,
                },
            );
            DemoSphere {
                id,
                rest,
                bob: Bobbing::new(options.scene.bob_amplitude, frequency),
            }
        })
        .collect();

    let mut handler = LogHandler { labels };
    let mut materials = MaterialTable::new(
        options.scene.base_color,
        options.scene.highlight_color,
    );
    let mut processor = InputProcessor::new();

    let dt = 1.0 / options.driver.frame_rate;
    let mut hover_run: Option<(PickableId, f32)> = None;
    let mut clicked_this_hover = false;

    for frame in 0..options.driver.frames {
        let elapsed = frame as f32 * dt;

        // Advance animated object positions before the pick query.
        for sphere in &spheres {
            let center =
                sphere.rest + Vec3::Y * sphere.bob.offset(elapsed);
            let _ = caster.set_center(sphere.id, center);
        }

        // Scripted pointer sweep across the middle of the viewport.
        let phase = (elapsed / options.driver.sweep_period) * TAU;
        let x = (0.5 + 0.45 * phase.sin()) * options.viewport.width;
        let y = options.viewport.height / 2.0;
        if let Some(cmd) =
            processor.handle_event(InputEvent::CursorMoved { x, y })
        {
            session.execute(cmd, &mut handler);
        }

        camera.set_aspect(session.aspect());
        session.frame(&caster, &camera, &mut handler);
        materials.apply(&session, &handler);

        // Click once per continuous hover after the dwell time.
        match session.hovered() {
            Some(id) => {
                let dwell = match hover_run {
                    Some((prev, dwell)) if prev == id => dwell + dt,
                    _ => {
                        clicked_this_hover = false;
                        0.0
                    }
                };
                hover_run = Some((id, dwell));
                if dwell >= options.driver.click_dwell && !clicked_this_hover
                {
                    clicked_this_hover = true;
                    for event in [
                        InputEvent::MouseButton {
                            button: MouseButton::Left,
                            pressed: true,
                        },
                        InputEvent::MouseButton {
                            button: MouseButton::Left,
                            pressed: false,
                        },
                    ] {
                        if let Some(cmd) = processor.handle_event(event) {
                            session.execute(cmd, &mut handler);
                        }
                    }
                }
            }
            None => {
                hover_run = None;
                clicked_this_hover = false;
            }
        }
    }

    log::info!("ran {} frames", options.driver.frames);
}

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("failed to load options from {path}: {e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    run(&options);
}
