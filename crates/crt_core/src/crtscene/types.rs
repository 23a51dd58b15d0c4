//! Raw `.crtscene` document types.
//!
//! These mirror the JSON layout one to one; conversion into the scene model
//! (and validation) happens in the loader.

use serde::Deserialize;

/// Top-level `.crtscene` document.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SceneFile {
    #[serde(default)]
    pub settings: Option<SettingsDesc>,

    #[serde(default)]
    pub camera: Option<CameraDesc>,

    #[serde(default)]
    pub objects: Option<Vec<ObjectDesc>>,

    #[serde(default)]
    pub lights: Option<Vec<LightDesc>>,
}

/// The `settings` block.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SettingsDesc {
    #[serde(default)]
    pub background_color: Option<[f32; 3]>,

    #[serde(default)]
    pub image_settings: Option<ImageSettingsDesc>,

    #[serde(default)]
    pub shadow_bias: Option<f32>,
}

/// The `settings.image_settings` block.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct ImageSettingsDesc {
    pub width: i32,
    pub height: i32,
}

/// The `camera` block.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CameraDesc {
    /// Orientation, three columns of three floats
    #[serde(default)]
    pub matrix: Option<[f32; 9]>,

    #[serde(default)]
    pub position: Option<[f32; 3]>,

    #[serde(default)]
    pub view_size: Option<[f32; 2]>,

    #[serde(default)]
    pub view_depth: Option<f32>,
}

/// One entry of `objects`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ObjectDesc {
    /// Flat `x, y, z` triples
    #[serde(default)]
    pub vertices: Option<Vec<f32>>,

    /// Flat vertex index triples
    #[serde(default)]
    pub triangles: Option<Vec<u32>>,

    #[serde(default)]
    pub albedo: Option<[f32; 3]>,
}

/// One entry of `lights`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LightDesc {
    #[serde(default)]
    pub position: Option<[f32; 3]>,

    #[serde(default)]
    pub intensity: Option<f32>,

    #[serde(default)]
    pub albedo: Option<[f32; 3]>,
}
