// Re-export glam for convenience
pub use glam::*;

// CRT math types
mod geometry;
mod interval;
mod ray;

pub use geometry::{
    is_approx, is_approx_eps, is_approx_zero, is_approx_zero_eps, triangle_area, triangle_normal,
    EPSILON,
};
pub use interval::Interval;
pub use ray::Ray;

/// Linear RGB color, channels nominally in [0, 1].
pub type Color = Vec3;
