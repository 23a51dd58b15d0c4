//! Turntable example.
//!
//! Builds a cube on a floor, walks the camera around it with rig moves and
//! saves one PPM frame per step.
//!
//! Run with: cargo run --example turntable -- [frames] [output-dir]

use crt_core::{Camera, Light, Mesh, Scene, Settings};
use crt_math::{Color, IVec2, Vec2, Vec3};
use crt_renderer::{render, save_image};
use std::env;
use std::f32::consts::TAU;
use std::path::PathBuf;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let frames: u32 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(8);
    let out_dir = PathBuf::from(args.get(2).map(String::as_str).unwrap_or("render"));

    println!("CRT - Turntable Example");
    println!("=======================");

    if let Err(e) = std::fs::create_dir_all(&out_dir) {
        eprintln!("Cannot create {}: {}", out_dir.display(), e);
        std::process::exit(1);
    }

    let mut scene = build_scene();
    let radius = 4.0;
    let step = TAU / frames.max(1) as f32;

    for frame in 0..frames {
        let start = std::time::Instant::now();
        let image = render(&scene);
        let path = out_dir.join(format!("turntable_{:03}.ppm", frame));

        if let Err(e) = save_image(&image, &path) {
            eprintln!("Frame {}: {}", frame, e);
            std::process::exit(1);
        }
        println!("Frame {} -> {} ({:?})", frame, path.display(), start.elapsed());

        // Orbit right: step along the chord, turning left to keep the cube centered
        let camera = &mut scene.camera;
        camera.pan(-step / 2.0);
        camera.truck(2.0 * radius * (step / 2.0).sin());
        camera.pan(-step / 2.0);
    }
}

fn build_scene() -> Scene {
    let camera = Camera::new(Vec2::new(2.0, 1.5), 1.5)
        .with_position(Vec3::new(0.0, 0.0, 4.0));

    let settings = Settings {
        background_color: Color::new(0.05, 0.07, 0.1),
        image_resolution: IVec2::new(320, 240),
        shadow_bias: 1e-3,
    };

    let mut scene = Scene::new(camera, settings);

    // Floor
    scene.add_mesh(
        Mesh::new(
            vec![
                Vec3::new(-5.0, -1.0, -5.0),
                Vec3::new(-5.0, -1.0, 5.0),
                Vec3::new(5.0, -1.0, 5.0),
                Vec3::new(5.0, -1.0, -5.0),
            ],
            vec![[0, 1, 2], [0, 2, 3]],
        )
        .with_albedo(Color::splat(0.8)),
    );

    scene.add_mesh(cube(Vec3::new(0.0, -0.5, 0.0), 0.5).with_albedo(Color::new(0.9, 0.3, 0.2)));

    scene.add_light(Light::new(Vec3::new(2.0, 4.0, 3.0), 900.0).with_albedo(Color::ONE));
    scene.add_light(
        Light::new(Vec3::new(-3.0, 2.0, 2.0), 300.0).with_albedo(Color::new(0.4, 0.5, 1.0)),
    );

    println!(
        "Created {} meshes, {} triangles",
        scene.meshes.len(),
        scene.total_triangle_count()
    );
    scene
}

/// Axis-aligned cube with outward-facing, counter-clockwise triangles.
fn cube(center: Vec3, half: f32) -> Mesh {
    let vertices = (0..8)
        .map(|i| {
            let corner = Vec3::new(
                if i & 4 != 0 { 1.0 } else { -1.0 },
                if i & 2 != 0 { 1.0 } else { -1.0 },
                if i & 1 != 0 { 1.0 } else { -1.0 },
            );
            center + corner * half
        })
        .collect();

    let triangles = vec![
        [0, 1, 3], [0, 3, 2], // -X
        [4, 6, 7], [4, 7, 5], // +X
        [0, 4, 5], [0, 5, 1], // -Y
        [2, 3, 7], [2, 7, 6], // +Y
        [0, 2, 6], [0, 6, 4], // -Z
        [1, 5, 7], [1, 7, 3], // +Z
    ];

    Mesh::new(vertices, triangles)
}
