//! `crt`: render a `.crtscene` file to an image.
//!
//! Usage: crt <scene.crtscene> [output]
//!
//! The output format follows the extension (`.ppm` by default). Log verbosity
//! is controlled with `RUST_LOG`.

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Where to write the image when no output path is given.
fn default_output(scene_path: &Path) -> PathBuf {
    scene_path.with_extension("ppm")
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        bail!("usage: {} <scene.crtscene> [output]", args[0]);
    }

    let scene_path = PathBuf::from(&args[1]);
    let output_path = match args.get(2) {
        Some(path) => PathBuf::from(path),
        None => default_output(&scene_path),
    };

    let start = Instant::now();
    let scene = crt_core::load_scene(&scene_path)
        .with_context(|| format!("failed to load scene {}", scene_path.display()))?;
    log::info!(
        "Loaded {} in {:?}: {} meshes, {} lights",
        scene_path.display(),
        start.elapsed(),
        scene.meshes.len(),
        scene.lights.len()
    );

    let image = crt_renderer::render(&scene);
    if image.is_empty() {
        log::warn!("Empty render, nothing written");
        return Ok(());
    }

    crt_renderer::save_image(&image, &output_path)
        .with_context(|| format!("failed to save image to {}", output_path.display()))?;

    log::info!("Done in {:?}", start.elapsed());
    Ok(())
}
