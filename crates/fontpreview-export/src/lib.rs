//! Export module for fontpreview
//!
//! Writes previews to disk in whatever format the file extension names,
//! and hands them to the desktop image viewer.

use std::borrow::Cow;
use std::io::Write;
use std::path::{Path, PathBuf};

use image::{error::UnsupportedErrorKind, ColorType, DynamicImage, ImageError, ImageFormat};

use fontpreview_core::{
    error::{ImageWriteError, PreviewError, Result},
    traits::Exporter,
    types::PreviewImage,
};

pub mod png;

pub use png::PngExporter;

/// File name used when the caller gives no path
pub const DEFAULT_FILE_NAME: &str = "fontpreview.png";

/// `fontpreview.png` in the current working directory
pub fn default_output_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(DEFAULT_FILE_NAME)
}

/// Saves `image` to `path`, picking the encoder from the extension
///
/// The preview itself is only borrowed, so a failed save never touches it.
pub fn save(image: &PreviewImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path)
        .ok()
        .filter(ImageFormat::writing_enabled)
        .ok_or_else(|| ImageWriteError::UnsupportedFormat(path.display().to_string()))?;

    let encodable = encodable_for(format, image.as_dynamic());
    encodable
        .save_with_format(path, format)
        .map_err(|e| write_error(path, e))?;

    log::info!(
        "Saved {}x{} preview to {} ({:?})",
        image.width(),
        image.height(),
        path.display(),
        format
    );
    Ok(())
}

/// Converts pixels into a layout the encoder for `format` accepts
///
/// JPEG has no alpha, GIF only takes RGB(A) and TIFF has no gray+alpha.
fn encodable_for(format: ImageFormat, image: &DynamicImage) -> Cow<'_, DynamicImage> {
    let color = image.color();
    match format {
        ImageFormat::Jpeg if color.has_alpha() => {
            if color.has_color() {
                Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8()))
            } else {
                Cow::Owned(DynamicImage::ImageLuma8(image.to_luma8()))
            }
        },
        ImageFormat::Gif if !matches!(color, ColorType::Rgb8 | ColorType::Rgba8) => {
            if color.has_alpha() {
                Cow::Owned(DynamicImage::ImageRgba8(image.to_rgba8()))
            } else {
                Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8()))
            }
        },
        ImageFormat::Tiff if color == ColorType::La8 => {
            Cow::Owned(DynamicImage::ImageRgba8(image.to_rgba8()))
        },
        _ => Cow::Borrowed(image),
    }
}

fn write_error(path: &Path, err: ImageError) -> ImageWriteError {
    match err {
        ImageError::IoError(io) => ImageWriteError::WriteFailed {
            path: path.display().to_string(),
            reason: io.to_string(),
        },
        ImageError::Unsupported(e) if matches!(e.kind(), UnsupportedErrorKind::Format(_)) => {
            ImageWriteError::UnsupportedFormat(path.display().to_string())
        },
        other => ImageWriteError::EncodingFailed(other.to_string()),
    }
}

/// Opens `image` in the host's default image viewer
///
/// The preview is written as PNG into the temp directory first; the path
/// of that file is returned.
pub fn show(image: &PreviewImage) -> Result<PathBuf> {
    let path = write_temp_png(image)?;
    log::debug!("Opening {} in the default viewer", path.display());
    open::that(&path).map_err(|e| PreviewError::Viewer(e.to_string()))?;
    Ok(path)
}

/// PNG-encodes `image` into a fresh, persisted file in the temp directory
fn write_temp_png(image: &PreviewImage) -> Result<PathBuf> {
    let exporter = PngExporter::new();
    let bytes = exporter.export(image)?;

    let mut file = tempfile::Builder::new()
        .prefix("fontpreview-")
        .suffix(&format!(".{}", exporter.extension()))
        .tempfile()?;
    file.write_all(&bytes).map_err(|e| ImageWriteError::WriteFailed {
        path: file.path().display().to_string(),
        reason: e.to_string(),
    })?;
    let (_, path) = file.keep().map_err(|e| ImageWriteError::WriteFailed {
        path: e.file.path().display().to_string(),
        reason: e.error.to_string(),
    })?;
    Ok(path)
}
