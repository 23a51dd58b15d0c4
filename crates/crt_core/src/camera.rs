//! Pinhole camera description and rig moves.

use crt_math::{Mat3, Vec2, Vec3};

/// A pinhole camera looking down its local -Z axis.
///
/// The view plane sits `view_depth` units in front of the camera and spans
/// `view_size` world units. `rotation` holds the images of the camera's local
/// X/Y/Z axes as its columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Position of the camera in world space
    pub position: Vec3,
    /// Orientation (columns are the camera's right, up and back vectors)
    pub rotation: Mat3,
    /// Full width and height of the view plane in world units
    pub view_size: Vec2,
    /// Distance from the camera to the view plane
    pub view_depth: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Mat3::IDENTITY,
            view_size: Vec2::new(2.0, 2.0),
            view_depth: 1.0,
        }
    }
}

impl Camera {
    /// Create a camera with the given view plane at the origin, unrotated.
    pub fn new(view_size: Vec2, view_depth: f32) -> Self {
        Self {
            view_size,
            view_depth,
            ..Default::default()
        }
    }

    /// Set camera position.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Set camera orientation.
    pub fn with_rotation(mut self, rotation: Mat3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Direction the camera looks at, in world space.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// Move forward (positive) or backward along the viewing direction.
    pub fn dolly(&mut self, amount: f32) {
        self.position += self.rotation * Vec3::new(0.0, 0.0, -amount);
    }

    /// Move up (positive) or down along the camera's up axis.
    pub fn boom(&mut self, amount: f32) {
        self.position += self.rotation * Vec3::new(0.0, amount, 0.0);
    }

    /// Move right (positive) or left along the camera's right axis.
    pub fn truck(&mut self, amount: f32) {
        self.position += self.rotation * Vec3::new(amount, 0.0, 0.0);
    }

    /// Rotate around the camera's X axis; positive angles look up.
    pub fn tilt(&mut self, angle: f32) {
        self.rotation *= Mat3::from_rotation_x(angle);
    }

    /// Rotate around the camera's Y axis; positive angles turn right.
    pub fn pan(&mut self, angle: f32) {
        self.rotation *= Mat3::from_rotation_y(-angle);
    }

    /// Rotate around the viewing axis; positive angles roll counter-clockwise.
    pub fn roll(&mut self, angle: f32) {
        self.rotation *= Mat3::from_rotation_z(angle);
    }
}
