//! High-level `.crtscene` loading.
//!
//! Parses the JSON document, applies defaults for anything left out and
//! validates mesh data so the renderer can index vertices without checks.

use std::path::Path;

use crt_math::{Color, IVec2, Mat3, Vec2, Vec3};
use thiserror::Error;

use crate::camera::Camera;
use crate::crtscene::types::{CameraDesc, LightDesc, ObjectDesc, SceneFile, SettingsDesc};
use crate::light::Light;
use crate::mesh::{Mesh, MeshError};
use crate::scene::{Scene, Settings};

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("object {object}: vertex array has {len} values, expected a multiple of 3")]
    VertexArrayLength { object: usize, len: usize },

    #[error("object {object}: triangle array has {len} values, expected a multiple of 3")]
    TriangleArrayLength { object: usize, len: usize },

    #[error("object {object}: {source}")]
    InvalidMesh {
        object: usize,
        #[source]
        source: MeshError,
    },

    #[error("light {light}: negative intensity {intensity}")]
    NegativeIntensity { light: usize, intensity: f32 },
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, SceneError>;

/// Load a `.crtscene` file from disk.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<Scene> {
    let path = path.as_ref();
    log::debug!("Loading scene file {}", path.display());

    let text = std::fs::read_to_string(path)?;
    load_scene_from_str(&text)
}

/// Parse a `.crtscene` document held in memory.
pub fn load_scene_from_str(text: &str) -> LoadResult<Scene> {
    let file: SceneFile = serde_json::from_str(text)?;
    build_scene(file)
}

/// Convert a parsed document into a validated scene.
pub fn build_scene(file: SceneFile) -> LoadResult<Scene> {
    let settings = convert_settings(file.settings.unwrap_or_default());
    let camera = convert_camera(file.camera.unwrap_or_default());

    let mut scene = Scene::new(camera, settings);

    for (object, desc) in file.objects.unwrap_or_default().into_iter().enumerate() {
        scene.add_mesh(convert_object(object, desc)?);
    }

    for (light, desc) in file.lights.unwrap_or_default().into_iter().enumerate() {
        scene.add_light(convert_light(light, desc)?);
    }

    log::debug!(
        "Scene: {} meshes, {} triangles, {} lights, resolution {}x{}",
        scene.meshes.len(),
        scene.total_triangle_count(),
        scene.lights.len(),
        scene.settings.image_resolution.x,
        scene.settings.image_resolution.y
    );

    Ok(scene)
}

fn convert_settings(desc: SettingsDesc) -> Settings {
    let defaults = Settings::default();
    Settings {
        background_color: desc
            .background_color
            .map(Color::from_array)
            .unwrap_or(defaults.background_color),
        image_resolution: desc
            .image_settings
            .map(|image| IVec2::new(image.width, image.height))
            .unwrap_or(defaults.image_resolution),
        shadow_bias: desc.shadow_bias.unwrap_or(defaults.shadow_bias),
    }
}

fn convert_camera(desc: CameraDesc) -> Camera {
    let mut camera = Camera::default();
    if let Some(matrix) = desc.matrix {
        camera.rotation = Mat3::from_cols_array(&matrix);
    }
    if let Some(position) = desc.position {
        camera.position = Vec3::from_array(position);
    }
    if let Some(view_size) = desc.view_size {
        camera.view_size = Vec2::from_array(view_size);
    }
    if let Some(view_depth) = desc.view_depth {
        camera.view_depth = view_depth;
    }
    camera
}

fn convert_object(object: usize, desc: ObjectDesc) -> LoadResult<Mesh> {
    let flat_vertices = desc.vertices.unwrap_or_default();
    if flat_vertices.len() % 3 != 0 {
        return Err(SceneError::VertexArrayLength {
            object,
            len: flat_vertices.len(),
        });
    }

    let flat_triangles = desc.triangles.unwrap_or_default();
    if flat_triangles.len() % 3 != 0 {
        return Err(SceneError::TriangleArrayLength {
            object,
            len: flat_triangles.len(),
        });
    }

    let vertices = flat_vertices
        .chunks_exact(3)
        .map(|v| Vec3::new(v[0], v[1], v[2]))
        .collect();
    let triangles = flat_triangles
        .chunks_exact(3)
        .map(|t| [t[0], t[1], t[2]])
        .collect();

    let mut mesh = Mesh::new(vertices, triangles);
    if let Some(albedo) = desc.albedo {
        mesh.albedo = Color::from_array(albedo);
    }

    mesh.validate()
        .map_err(|source| SceneError::InvalidMesh { object, source })?;

    Ok(mesh)
}

fn convert_light(light: usize, desc: LightDesc) -> LoadResult<Light> {
    let mut result = Light::default();
    if let Some(position) = desc.position {
        result.position = Vec3::from_array(position);
    }
    if let Some(intensity) = desc.intensity {
        if intensity < 0.0 {
            return Err(SceneError::NegativeIntensity { light, intensity });
        }
        result.intensity = intensity;
    }
    if let Some(albedo) = desc.albedo {
        result.albedo = Color::from_array(albedo);
    }
    Ok(result)
}
