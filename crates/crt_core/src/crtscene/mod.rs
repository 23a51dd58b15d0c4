//! `.crtscene` support for CRT.
//!
//! A `.crtscene` file is a JSON document with four top-level sections:
//!
//! - `settings`: background color, image resolution, shadow bias
//! - `camera`: 3x3 orientation matrix (column-major), position, view plane
//! - `objects`: meshes as flat vertex and index arrays
//! - `lights`: point lights with position, intensity and albedo
//!
//! Missing sections and keys fall back to the scene model defaults.
//!
//! # Example
//!
//! ```ignore
//! use crt_core::crtscene::load_scene;
//!
//! let scene = load_scene("scenes/scene4.crtscene")?;
//! println!("{} triangles", scene.total_triangle_count());
//! ```

mod loader;
mod types;

pub use loader::*;
pub use types::*;
