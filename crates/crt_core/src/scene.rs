//! Scene model consumed by the renderer.
//!
//! A scene is built once (in code or from a `.crtscene` file) and stays
//! read-only for the whole render.

use crt_math::{Color, IVec2, UVec2};

use crate::camera::Camera;
use crate::light::Light;
use crate::mesh::Mesh;

/// Image and lighting settings of a scene.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Color returned by primary rays that hit nothing
    pub background_color: Color,

    /// Output width and height in pixels
    pub image_resolution: IVec2,

    /// Offset along the surface normal applied to shadow ray origins
    pub shadow_bias: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            background_color: Color::ZERO,
            image_resolution: IVec2::new(640, 480),
            shadow_bias: 1e-3,
        }
    }
}

impl Settings {
    /// Resolution as unsigned dimensions, or `None` if either one is not
    /// positive.
    pub fn render_resolution(&self) -> Option<UVec2> {
        let IVec2 { x, y } = self.image_resolution;
        (x > 0 && y > 0).then(|| UVec2::new(x as u32, y as u32))
    }
}

/// A complete scene: camera, geometry, lights and settings.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    /// Camera through which the scene is rendered
    pub camera: Camera,

    /// Image and lighting settings
    pub settings: Settings,

    /// Triangle meshes
    pub meshes: Vec<Mesh>,

    /// Point lights
    pub lights: Vec<Light>,
}

impl Scene {
    /// Create an empty scene with the given camera and settings.
    pub fn new(camera: Camera, settings: Settings) -> Self {
        Self {
            camera,
            settings,
            ..Default::default()
        }
    }

    /// Add a mesh and return its index.
    pub fn add_mesh(&mut self, mesh: Mesh) -> usize {
        self.meshes.push(mesh);
        self.meshes.len() - 1
    }

    /// Add a light and return its index.
    pub fn add_light(&mut self, light: Light) -> usize {
        self.lights.push(light);
        self.lights.len() - 1
    }

    /// Get total triangle count across all meshes.
    pub fn total_triangle_count(&self) -> usize {
        self.meshes.iter().map(Mesh::triangle_count).sum()
    }
}
