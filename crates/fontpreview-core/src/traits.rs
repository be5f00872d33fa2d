//! The contracts between fonts, rasterizers and exporters
//!
//! - [`FontFace`] - Your window into font data and metrics
//! - [`Renderer`] - Where glyphs become pixels on a canvas
//! - [`Exporter`] - Where previews become bytes

use std::path::Path;

use image::RgbaImage;

use crate::{
    error::Result,
    types::{Color, Position, PreviewImage},
};

/// A loaded font, independent of the size it is drawn at
///
/// ```ignore
/// struct MyFont;
///
/// impl FontFace for MyFont {
///     fn data(&self) -> &[u8] { &[] }
///     fn units_per_em(&self) -> u16 { 1000 }
///     fn ascender(&self) -> i16 { 800 }
///     fn descender(&self) -> i16 { -200 }
///     fn glyph_id(&self, ch: char) -> Option<u32> { Some(ch as u32) }
///     fn advance_width(&self, _glyph_id: u32) -> f32 { 500.0 }
/// }
/// ```
pub trait FontFace: Send + Sync {
    /// Raw font bytes as they live in the file
    fn data(&self) -> &[u8];

    /// Face index for TTC/OTC collections
    fn face_index(&self) -> u32 {
        0
    }

    /// The font's internal coordinate system scale
    fn units_per_em(&self) -> u16;

    /// Distance from baseline to the top of the line, in font units
    fn ascender(&self) -> i16;

    /// Distance from baseline to the bottom of the line, in font units (negative)
    fn descender(&self) -> i16;

    /// Find the glyph that represents this character
    fn glyph_id(&self, ch: char) -> Option<u32>;

    /// How wide this glyph stands in font units
    fn advance_width(&self, glyph_id: u32) -> f32;

    /// Human readable name of the face
    fn full_name(&self) -> String {
        String::from("unknown")
    }

    /// Where the font was loaded from, if it came from disk
    fn path(&self) -> Option<&Path> {
        None
    }
}

/// Draws text onto an RGBA canvas
pub trait Renderer: Send + Sync {
    fn name(&self) -> &'static str;

    /// Paint `text` with its layout box's top-left corner at `origin`
    ///
    /// Lines are separated by `\n` and left-aligned. Pixels falling
    /// outside the canvas are clipped.
    fn draw_text(
        &self,
        canvas: &mut RgbaImage,
        font: &dyn FontFace,
        size: f32,
        text: &str,
        origin: Position,
        color: Color,
    ) -> Result<()>;
}

/// Encodes a finished preview into bytes
pub trait Exporter: Send + Sync {
    fn name(&self) -> &'static str;

    fn export(&self, image: &PreviewImage) -> Result<Vec<u8>>;

    fn extension(&self) -> &'static str;
}
