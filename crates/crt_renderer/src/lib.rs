//! CRT Renderer - CPU ray tracing with point lights.
//!
//! A single-bounce, brute-force ray tracer: one primary ray per pixel,
//! nearest front-facing triangle hit, Lambertian shading from point lights
//! with hard shadows.

mod camera;
mod hittable;
mod output;
mod renderer;
mod shading;
mod triangle;

pub use camera::generate_ray;
pub use hittable::{FaceFilter, HitRecord, Hittable};
pub use output::{save_image, save_ppm, write_ppm, OutputError, MAX_COLOR_COMPONENT};
pub use renderer::{color_to_rgb, render, render_pixel, trace_ray, ImageBuffer};
pub use shading::{is_in_shadow, light_contribution, shade};
pub use triangle::{intersect_triangle, TriangleHit};

/// Re-export the scene model and common math types
pub use crt_core::{Camera, Light, Mesh, Scene, Settings};
pub use crt_math::{Color, Interval, Ray, Vec3};
