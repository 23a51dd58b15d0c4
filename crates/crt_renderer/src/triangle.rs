//! Ray-triangle intersection.
//!
//! Intersects the ray with the triangle's plane, then checks the plane hit
//! against the three edges. The normal follows the counter-clockwise winding
//! `(v1 - v0) x (v2 - v0)`.

use crt_math::{is_approx_zero, triangle_normal, Ray, Vec3};

/// A successful ray-triangle intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleHit {
    /// Point of intersection
    pub point: Vec3,
    /// Unit geometric normal of the triangle (not flipped towards the ray)
    pub normal: Vec3,
    /// Distance along the ray, always >= 0
    pub t: f32,
    /// Whether the ray approached from the side the normal points to
    pub front_face: bool,
}

/// Intersect `ray` with the triangle `[v0, v1, v2]`.
///
/// Returns `None` when the ray is (nearly) parallel to the plane, when the
/// plane lies behind the ray origin, when the plane hit falls outside the
/// triangle, and for every degenerate triangle.
pub fn intersect_triangle(ray: &Ray, [v0, v1, v2]: [Vec3; 3]) -> Option<TriangleHit> {
    let normal = triangle_normal(v0, v1, v2);

    // Zero for degenerate triangles, so those are rejected here too
    let ray_proj = ray.direction.dot(normal);
    if is_approx_zero(ray_proj) {
        return None;
    }

    let dist_to_plane = (v0 - ray.origin).dot(normal);

    // Opposite signs: the plane is behind the ray
    if ray_proj * dist_to_plane < 0.0 {
        return None;
    }

    // Same signs, so t is never negative
    let t = dist_to_plane / ray_proj;
    let point = ray.at(t);

    let inside = normal.dot((v1 - v0).cross(point - v0)) >= 0.0
        && normal.dot((v2 - v1).cross(point - v1)) >= 0.0
        && normal.dot((v0 - v2).cross(point - v2)) >= 0.0;

    if !inside {
        return None;
    }

    Some(TriangleHit {
        point,
        normal,
        t,
        front_face: ray_proj < 0.0,
    })
}
