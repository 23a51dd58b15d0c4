//! Core ray tracing renderer.
//!
//! Casts one primary ray through the center of every pixel, shades the
//! nearest front-facing hit and falls back to the background color on a
//! miss. Rendering is a pure function of the scene: the image buffer is the
//! only thing allocated, and it is handed back to the caller.

use std::time::Instant;

use crate::camera::generate_ray;
use crate::hittable::{FaceFilter, Hittable};
use crate::shading::shade;
use crt_core::Scene;
use crt_math::{Color, Interval, Ray, UVec2};

/// Compute the color seen by a primary ray.
pub fn trace_ray(scene: &Scene, ray: &Ray) -> Color {
    match scene.hit(ray, Interval::forward(), FaceFilter::FrontOnly) {
        Some(hit) => shade(scene, &hit),
        None => scene.settings.background_color,
    }
}

/// Render a single pixel (column `x`, row `y`).
pub fn render_pixel(scene: &Scene, x: u32, y: u32, resolution: UVec2) -> Color {
    let ray = generate_ray(&scene.camera, UVec2::new(x, y), resolution);
    trace_ray(scene, &ray)
}

/// Clamp a value to [0, 1] range.
#[inline]
fn clamp_01(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Convert a linear color to 8-bit RGB.
///
/// Channels are clamped to [0, 1] and scaled to [0, 255]; the fractional
/// part is dropped.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let r = (255.0 * clamp_01(color.x)) as u8;
    let g = (255.0 * clamp_01(color.y)) as u8;
    let b = (255.0 * clamp_01(color.z)) as u8;
    [r, g, b]
}

/// Row-major buffer of linear colors, `index = y * width + x`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// A 0x0 image.
    pub fn empty() -> Self {
        Self::new(0, 0)
    }

    /// Returns true if the image has no pixels.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Convert to packed 8-bit RGB bytes, row by row.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }
}

/// Render the entire scene to an image buffer.
///
/// A resolution with a zero or negative dimension renders nothing and
/// returns an empty buffer.
pub fn render(scene: &Scene) -> ImageBuffer {
    let Some(resolution) = scene.settings.render_resolution() else {
        log::warn!(
            "Nothing to render: image resolution is {}x{}",
            scene.settings.image_resolution.x,
            scene.settings.image_resolution.y
        );
        return ImageBuffer::empty();
    };

    log::info!(
        "Rendering {}x{}: {} meshes, {} triangles, {} lights",
        resolution.x,
        resolution.y,
        scene.meshes.len(),
        scene.total_triangle_count(),
        scene.lights.len()
    );

    let start = Instant::now();
    let mut image = ImageBuffer::new(resolution.x, resolution.y);

    for y in 0..resolution.y {
        for x in 0..resolution.x {
            let color = render_pixel(scene, x, y, resolution);
            image.set(x, y, color);
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());

    image
}
