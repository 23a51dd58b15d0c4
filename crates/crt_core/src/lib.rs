//! CRT Core - Scene model and `.crtscene` loading.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Settings`, `Camera`, `Mesh`, `Light`
//! - **Scene files**: JSON `.crtscene` parsing and validation
//!
//! # Example
//!
//! ```ignore
//! use crt_core::load_scene;
//!
//! let scene = load_scene("scenes/scene4.crtscene")?;
//! println!("Loaded {} meshes, {} lights",
//!     scene.meshes.len(),
//!     scene.lights.len());
//! ```

pub mod camera;
pub mod crtscene;
pub mod light;
pub mod mesh;
pub mod scene;

// Re-export commonly used types
pub use camera::Camera;
pub use crtscene::{load_scene, load_scene_from_str, SceneError};
pub use light::Light;
pub use mesh::{Mesh, MeshError};
pub use scene::{Scene, Settings};
