//! Image output.
//!
//! The native format is plain-text PPM (`P3`): a three line header followed
//! by one text line per image row, top to bottom. Other formats go through
//! the `image` crate.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::renderer::{color_to_rgb, ImageBuffer};

/// Largest channel value written to PPM files.
pub const MAX_COLOR_COMPONENT: u8 = 255;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Write `image` as a plain-text PPM.
///
/// Each row is one line of tab-separated `R G B` triples.
pub fn write_ppm<W: Write>(image: &ImageBuffer, mut writer: W) -> io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "{}", MAX_COLOR_COMPONENT)?;

    for y in 0..image.height {
        for x in 0..image.width {
            let [r, g, b] = color_to_rgb(image.get(x, y));
            if x > 0 {
                write!(writer, "\t")?;
            }
            write!(writer, "{} {} {}", r, g, b)?;
        }
        writeln!(writer)?;
    }

    writer.flush()
}

/// Save `image` as a plain-text PPM file.
pub fn save_ppm<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> Result<(), OutputError> {
    let path = path.as_ref();
    let io_error = |source: io::Error| OutputError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_error)?;
    write_ppm(image, BufWriter::new(file)).map_err(io_error)
}

/// Save `image`, choosing the format from the file extension.
///
/// `.ppm` (or no extension) writes plain-text PPM; anything else is encoded
/// by the `image` crate as 8-bit RGB.
pub fn save_image<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> Result<(), OutputError> {
    let path = path.as_ref();

    let is_ppm = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(true, |ext| ext.eq_ignore_ascii_case("ppm"));

    if is_ppm {
        save_ppm(image, path)?;
    } else {
        image::save_buffer(
            path,
            &image.to_rgb8(),
            image.width,
            image.height,
            image::ColorType::Rgb8,
        )
        .map_err(|source| OutputError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    }

    log::info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crt_math::Color;

    fn checker() -> ImageBuffer {
        let mut image = ImageBuffer::new(2, 2);
        image.set(0, 0, Color::new(1.0, 0.0, 0.0));
        image.set(1, 0, Color::new(0.0, 1.0, 0.0));
        image.set(0, 1, Color::new(0.0, 0.0, 1.0));
        image.set(1, 1, Color::ONE);
        image
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("crt_output_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_write_ppm_layout() {
        let mut out = Vec::new();
        write_ppm(&checker(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "P3\n2 2\n255\n255 0 0\t0 255 0\n0 0 255\t255 255 255\n"
        );
    }

    #[test]
    fn test_write_ppm_rows_top_to_bottom() {
        let mut image = ImageBuffer::new(3, 2);
        image.set(2, 1, Color::splat(0.5));

        let mut out = Vec::new();
        write_ppm(&image, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], "3 2");
        assert_eq!(lines[3], "0 0 0\t0 0 0\t0 0 0");
        assert_eq!(lines[4], "0 0 0\t0 0 0\t127 127 127");
    }

    #[test]
    fn test_write_ppm_empty_image() {
        let mut out = Vec::new();
        write_ppm(&ImageBuffer::empty(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "P3\n0 0\n255\n");
    }

    #[test]
    fn test_save_ppm_roundtrip() {
        let path = temp_path("checker.ppm");
        save_image(&checker(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("P3\n2 2\n255\n"));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_save_png() {
        let path = temp_path("checker.png");
        save_image(&checker(), &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_unwritable_destination() {
        let path = temp_path("missing_dir").join("out.ppm");
        let err = save_ppm(&checker(), &path).unwrap_err();
        assert!(matches!(err, OutputError::Io { .. }));
    }

    #[test]
    fn test_unsupported_extension() {
        let path = temp_path("checker.definitely-not-a-format");
        let err = save_image(&checker(), &path).unwrap_err();
        assert!(matches!(err, OutputError::Encode { .. }));
    }
}
