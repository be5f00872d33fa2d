//! fontpreview-core: the shared vocabulary of fontpreview
//!
//! Everything the other crates agree on lives here:
//!
//! - [`types`] - Font specs, preview configuration, colors and the finished image
//! - [`placement`] - The nine anchors and explicit coordinates
//! - [`layout`] - Measuring text at a given size
//! - [`fit`] - Shrinking text until it fits the canvas
//! - [`traits`] - `FontFace`, `Renderer` and `Exporter`
//! - [`error`] - What can go wrong, and where

pub mod error;
pub mod fit;
pub mod layout;
pub mod placement;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_support;

pub use error::{PreviewError, Result};
pub use fit::{fit_font_size, FitPolicy};
pub use layout::{layout_text, measure_text, TextLayout};
pub use placement::{Anchor, Placement};
pub use types::{
    Color, ColorModel, Dimension, FontSpec, Position, PreviewConfig, PreviewImage, TextSize,
};
