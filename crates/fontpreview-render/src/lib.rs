//! fontpreview-render: from configuration to pixels
//!
//! - [`canvas`] - Opening the background image or allocating a flat canvas
//! - [`SkiaRenderer`] - Glyph outlines rasterized with tiny-skia
//! - [`render_preview`] - A complete, side-effect free draw

pub mod canvas;
mod preview;
mod skia;

pub use canvas::{canvas_dimension, establish_canvas};
pub use preview::render_preview;
pub use skia::SkiaRenderer;
