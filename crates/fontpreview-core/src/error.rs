//! Error types for fontpreview

use thiserror::Error;

use crate::types::{Dimension, TextSize};

pub type Result<T> = std::result::Result<T, PreviewError>;

/// Main error type for fontpreview
#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("Font loading failed: {0}")]
    FontLoad(#[from] FontLoadError),

    #[error("Image write failed: {0}")]
    ImageWrite(#[from] ImageWriteError),

    #[error("Text of {text} px does not fit a {canvas} canvas at any size down to {size}pt")]
    TextTooLarge {
        size: u32,
        text: TextSize,
        canvas: Dimension,
    },

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Background image could not be opened: {0}")]
    BackgroundImage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Image viewer failed: {0}")]
    Viewer(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Font loading errors
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("Font file not found: {0}")]
    FileNotFound(String),

    #[error("Cannot read font file {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("Invalid font data: {0}")]
    InvalidData(String),

    #[error("Font not supported: {0}")]
    NotSupported(String),
}

/// Saving and encoding errors
#[derive(Debug, Error)]
pub enum ImageWriteError {
    #[error("Cannot infer an image format from {0}")]
    UnsupportedFormat(String),

    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    #[error("Cannot write {path}: {reason}")]
    WriteFailed { path: String, reason: String },
}

/// Rendering errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Font data could not be parsed for outlines")]
    InvalidFont,

    #[error("Failed to extract outline for glyph {0}")]
    OutlineExtractionFailed(u32),

    #[error("Failed to build glyph path")]
    PathBuildingFailed,

    #[error("Failed to allocate pixmap")]
    PixmapCreationFailed,
}
