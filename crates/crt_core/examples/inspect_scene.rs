//! Example: Load and inspect a `.crtscene` file.
//!
//! Run with: cargo run --example inspect_scene -- scenes/cube.crtscene

use std::env;

use crt_core::load_scene;
use crt_math::{triangle_area, Vec3};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: inspect_scene <path-to-crtscene-file>");
        println!("\nExample:");
        println!("  cargo run --example inspect_scene -- scenes/cube.crtscene");
        return;
    }

    let path = &args[1];
    println!("Loading scene file: {}", path);

    match load_scene(path) {
        Ok(scene) => {
            let settings = &scene.settings;
            println!("\n=== Scene: {} ===", path);
            println!(
                "Resolution: {}x{}",
                settings.image_resolution.x, settings.image_resolution.y
            );
            println!("Background: {:?}", settings.background_color);
            println!("Shadow bias: {}", settings.shadow_bias);
            println!(
                "Camera: position {:?}, looking {:?}",
                scene.camera.position,
                scene.camera.forward()
            );

            println!("\n--- Meshes ---");
            for (i, mesh) in scene.meshes.iter().enumerate() {
                let area: f32 = mesh
                    .iter_triangles()
                    .map(|[a, b, c]| triangle_area(a, b, c))
                    .sum();
                let degenerate = (0..mesh.triangle_count())
                    .filter(|&t| mesh.face_normal(t) == Vec3::ZERO)
                    .count();

                println!(
                    "  [{}] {} vertices, {} triangles, area {:.3}, albedo {:?}",
                    i,
                    mesh.vertex_count(),
                    mesh.triangle_count(),
                    area,
                    mesh.albedo
                );
                if degenerate > 0 {
                    println!("      {} degenerate triangles (never hit)", degenerate);
                }
            }

            println!("\n--- Lights ---");
            for (i, light) in scene.lights.iter().enumerate() {
                println!(
                    "  [{}] at {:?}, intensity {}, albedo {:?}",
                    i, light.position, light.intensity, light.albedo
                );
            }
        }
        Err(e) => {
            eprintln!("Error loading scene: {}", e);
            std::process::exit(1);
        }
    }
}
