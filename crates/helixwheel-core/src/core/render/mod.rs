//! # Rendering Module
//!
//! Turns a [`WheelScene`] into an image file using `plotters`.
//!
//! - [`format`] - Output format detection from the file extension
//! - [`style`] - Canvas size, marker size and which decorations to draw
//!
//! Bitmap formats (PNG, JPEG, BMP) go through the bitmap backend, SVG through the
//! SVG backend. Either way the image is first drawn into a temporary file next to the
//! destination and only moved over the destination once it is complete, so a failed
//! render never leaves a truncated image behind.

pub mod format;
pub mod style;
mod wheel;

use crate::core::models::palette::Palette;
use crate::core::models::scene::WheelScene;
use format::ImageFormat;
use plotters::prelude::{BitMapBackend, IntoDrawingArea, SVGBackend};
use std::path::{Path, PathBuf};
use style::RenderStyle;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Unsupported output format for '{path}'. Use .png, .jpg, .jpeg, .bmp or .svg.", path = path.display())]
    UnsupportedFormat {
        path: PathBuf,
        extension: Option<String>,
    },

    #[error("Invalid render style: {0}")]
    InvalidStyle(String),

    #[error("Output path '{path}' is not writable: {source}", path = path.display())]
    OutputNotWritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write image to '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Drawing failed: {0}")]
    Drawing(String),
}

/// Draws `scene` and writes it to `path`, overwriting any existing file.
///
/// The format is inferred from the extension of `path`. Returns the format that was
/// written.
pub fn render(
    scene: &WheelScene,
    palette: &Palette,
    style: &RenderStyle,
    path: &Path,
) -> Result<ImageFormat, RenderError> {
    let format = ImageFormat::from_path(path)?;
    style.validate()?;

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let suffix = format!(".{}", format.extension());
    let mut builder = tempfile::Builder::new();
    builder.prefix(".helixwheel-").suffix(&suffix);
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o644));
    }
    let staging = builder
        .tempfile_in(directory)
        .map_err(|source| RenderError::OutputNotWritable {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(
        staging = %staging.path().display(),
        %format,
        text = style.draws_text(),
        "Drawing wheel into staging file."
    );
    let size = (style.width, style.height);
    if format.is_vector() {
        wheel::draw(
            SVGBackend::new(staging.path(), size).into_drawing_area(),
            scene,
            palette,
            style,
        )?;
    } else {
        wheel::draw(
            BitMapBackend::new(staging.path(), size).into_drawing_area(),
            scene,
            palette,
            style,
        )?;
    }

    staging.persist(path).map_err(|e| RenderError::Io {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    info!(
        "Wrote {} residue(s) as {} to {}",
        scene.placements().len(),
        format,
        path.display()
    );
    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::sequence::Sequence;
    use std::fs;
    use tempfile::tempdir;

    fn scene(raw: &str) -> WheelScene {
        WheelScene::build(&Sequence::new(raw).unwrap(), 100.0, 1.0).unwrap()
    }

    fn small_style() -> RenderStyle {
        RenderStyle {
            width: 320,
            height: 240,
            ..RenderStyle::default()
        }
    }

    fn entries(dir: &Path) -> Vec<PathBuf> {
        fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect()
    }

    #[test]
    fn render_writes_svg_with_labels_and_legend() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wheel.svg");
        let style = RenderStyle {
            title: Some("Test helix".to_string()),
            show_moment: true,
            ..small_style()
        };

        let format = render(&scene("ACDX"), &Palette::default(), &style, &path).unwrap();

        assert_eq!(format, ImageFormat::Svg);
        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(">A<"));
        assert!(svg.contains(">X<"));
        assert!(svg.contains("Other"));
        assert!(svg.contains("Acidic"));
        assert!(!svg.contains("Basic"));
        assert!(svg.contains("Test helix"));
        assert_eq!(entries(dir.path()), vec![path]);
    }

    #[test]
    fn render_writes_png_without_text() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wheel.png");
        let style = small_style().without_text();

        render(&scene("KLLKLLKKLLKLLK"), &Palette::default(), &style, &path).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    fn render_default_bitmap(file_name: &str) -> (tempfile::TempDir, PathBuf, Vec<u8>) {
        let dir = tempdir().unwrap();
        let path = dir.path().join(file_name);
        let style = RenderStyle {
            title: Some("Magainin 2".to_string()),
            show_moment: true,
            ..RenderStyle::default()
        };

        render(
            &scene("GIGKFLHSAKKFGKAFVGEIMNS"),
            &Palette::default(),
            &style,
            &path,
        )
        .unwrap();

        let bytes = fs::read(&path).unwrap();
        (dir, path, bytes)
    }

    #[test]
    fn render_writes_png_with_default_decorations() {
        let (dir, path, bytes) = render_default_bitmap("wheel.png");
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        assert_eq!(entries(dir.path()), vec![path]);
    }

    #[test]
    fn render_writes_jpeg_with_default_decorations() {
        let (dir, path, bytes) = render_default_bitmap("wheel.jpg");
        assert_eq!(&bytes[..3], &[0xFF, 0xD8, 0xFF]);
        assert_eq!(entries(dir.path()), vec![path]);
    }

    #[test]
    fn render_writes_bmp_with_default_decorations() {
        let (dir, path, bytes) = render_default_bitmap("wheel.BMP");
        assert_eq!(&bytes[..2], b"BM");
        assert_eq!(entries(dir.path()), vec![path]);
    }

    #[test]
    fn render_overwrites_existing_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wheel.svg");
        fs::write(&path, "stale").unwrap();

        render(&scene("GIGKFLHSAK"), &Palette::default(), &small_style(), &path).unwrap();

        assert!(fs::read_to_string(&path).unwrap().starts_with("<svg"));
    }

    #[test]
    fn render_is_repeatable() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("first.svg");
        let second = dir.path().join("second.svg");
        let wheel = scene("GIGKFLHSAKKFGKAFVGEIMNS");

        render(&wheel, &Palette::default(), &small_style(), &first).unwrap();
        render(&wheel, &Palette::default(), &small_style(), &second).unwrap();

        assert_eq!(
            fs::read_to_string(first).unwrap(),
            fs::read_to_string(second).unwrap()
        );
    }

    #[test]
    fn unsupported_extension_fails_without_creating_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wheel.tiff");

        let result = render(&scene("KLA"), &Palette::default(), &small_style(), &path);

        assert!(matches!(result, Err(RenderError::UnsupportedFormat { .. })));
        assert!(entries(dir.path()).is_empty());
    }

    #[test]
    fn missing_directory_is_reported_as_not_writable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("wheel.svg");

        let result = render(&scene("KLA"), &Palette::default(), &small_style(), &path);

        assert!(matches!(result, Err(RenderError::OutputNotWritable { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn invalid_style_fails_before_touching_the_filesystem() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wheel.svg");
        let style = RenderStyle {
            height: 0,
            ..small_style()
        };

        let result = render(&scene("KLA"), &Palette::default(), &style, &path);

        assert!(matches!(result, Err(RenderError::InvalidStyle(_))));
        assert!(entries(dir.path()).is_empty());
    }
}
