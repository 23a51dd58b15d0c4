//! Stateless geometry helpers shared by the scene model and the renderer.

use glam::Vec3;

/// Default tolerance for approximate float comparisons.
pub const EPSILON: f32 = 1e-4;

/// Returns true if `a` and `b` differ by less than [`EPSILON`].
#[inline]
pub fn is_approx(a: f32, b: f32) -> bool {
    is_approx_eps(a, b, EPSILON)
}

/// Returns true if `a` and `b` differ by less than `epsilon`.
#[inline]
pub fn is_approx_eps(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Returns true if `x` is within [`EPSILON`] of zero.
#[inline]
pub fn is_approx_zero(x: f32) -> bool {
    is_approx_zero_eps(x, EPSILON)
}

/// Returns true if `x` is within `epsilon` of zero.
#[inline]
pub fn is_approx_zero_eps(x: f32, epsilon: f32) -> bool {
    x.abs() < epsilon
}

/// Unit normal of the triangle `(a, b, c)`, following the right-hand rule on
/// `(b - a) x (c - a)`.
///
/// Degenerate (collinear or coincident) vertices give the zero vector.
#[inline]
pub fn triangle_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (b - a).cross(c - a).normalize_or_zero()
}

/// Area of the triangle `(a, b, c)`.
#[inline]
pub fn triangle_area(a: Vec3, b: Vec3, c: Vec3) -> f32 {
    (b - a).cross(c - a).length() * 0.5
}
