// bench_function returns &mut Self for chaining; we call it statement-style.
#![allow(unused_results)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::{Vec2, Vec3};
use raypick::camera::Camera;
use raypick::picking::{FrameHits, HitRecord, NullHandler, PickRegistry};
use raypick::raycast::{Ray, Raycaster, Sphere, SphereRaycaster};
use raypick::session::PickSession;

fn sphere_scene(count: usize) -> (PickRegistry, SphereRaycaster) {
    let mut registry = PickRegistry::new();
    let mut caster = SphereRaycaster::new();
    for i in 0..count {
        let id = registry.register(&format!("sphere{i}"));
        // A line of spheres receding along -z so the center ray hits many.
        caster.set_sphere(
            id,
            Sphere {
                center: Vec3::new(0.0, 0.0, -2.0 - i as f32),
                radius: 0.5,
            },
        );
    }
    (registry, caster)
}

fn oracle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("sphere_oracle_cast");
    for count in [3, 100, 1000] {
        let (registry, caster) = sphere_scene(count);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        group.bench_function(format!("{count}_spheres"), |b| {
            b.iter(|| black_box(caster.cast(black_box(&ray), &registry)))
        });
    }
    group.finish();
}

fn highlight_pass_benchmark(c: &mut Criterion) {
    let (mut registry, _) = sphere_scene(1000);
    let records: Vec<HitRecord> = registry
        .ids()
        .enumerate()
        .filter(|(i, _)| i % 3 == 0)
        .map(|(i, id)| HitRecord {
            target: id,
            distance: i as f32,
        })
        .collect();
    let hits = FrameHits::new(records);

    c.bench_function("highlight_pass_1000", |b| {
        b.iter(|| registry.apply_highlights(black_box(&hits)))
    });
}

fn session_frame_benchmark(c: &mut Criterion) {
    let mut session = PickSession::new(800.0, 600.0);
    let mut caster = SphereRaycaster::new();
    for i in 0..100 {
        let id = session.register(&format!("sphere{i}"));
        caster.set_sphere(
            id,
            Sphere {
                center: Vec3::new(0.0, 0.0, -2.0 - i as f32),
                radius: 0.5,
            },
        );
    }
    let camera = Camera::default();
    let mut handler = NullHandler;

    c.bench_function("session_frame_100_spheres", |b| {
        b.iter(|| session.frame(&caster, &camera, &mut handler))
    });

    // Keep the pick ray warm through the pointer path too.
    c.bench_function("pick_ray_from_ndc", |b| {
        b.iter(|| black_box(camera.pick_ray(black_box(Vec2::new(0.1, -0.2)))))
    });
}

criterion_group!(
    benches,
    oracle_benchmark,
    highlight_pass_benchmark,
    session_frame_benchmark
);
criterion_main!(benches);
