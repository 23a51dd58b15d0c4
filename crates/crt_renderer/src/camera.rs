//! Primary ray generation.

use crt_core::Camera;
use crt_math::{Ray, UVec2, Vec2, Vec3};

/// Generate the primary ray through the center of `pixel` (column, row).
///
/// Row 0 is the top of the image. The pixel center is mapped to NDC in
/// [0, 1]², then to screen space in [-1, 1]², scaled onto the camera's view
/// plane and rotated into world space.
pub fn generate_ray(camera: &Camera, pixel: UVec2, resolution: UVec2) -> Ray {
    let pixel_center = pixel.as_vec2() + Vec2::splat(0.5);
    let ndc = pixel_center / resolution.as_vec2();

    // Flip Y so rows grow downwards
    let screen = Vec2::new(ndc.x * 2.0 - 1.0, 1.0 - ndc.y * 2.0);
    let on_plane = screen * camera.view_size * 0.5;

    let local = Vec3::new(on_plane.x, on_plane.y, -camera.view_depth).normalize_or_zero();

    Ray::new(camera.position, camera.rotation * local)
}
