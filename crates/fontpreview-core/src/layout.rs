//! Text measurement and line layout
//!
//! Layout is deliberately simple: characters map to glyphs through the
//! font's cmap, advances come straight from `hmtx`, lines split on `\n`
//! and are left-aligned. No kerning, no shaping.

use crate::traits::FontFace;
use crate::types::TextSize;

/// Pixels inserted between consecutive lines
pub const LINE_SPACING: f32 = 4.0;

/// One line of text ready to be drawn
#[derive(Debug, Clone, PartialEq)]
pub struct LineLayout<'a> {
    pub text: &'a str,
    /// Baseline offset from the top of the layout box, in pixels
    pub baseline: f32,
    /// Advance width of the whole line, in pixels
    pub width: f32,
}

/// A block of text laid out at a given size
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout<'a> {
    pub lines: Vec<LineLayout<'a>>,
    /// Pixel distance from the top of a line to its baseline
    pub ascent: f32,
    /// Pixel height of a single line without spacing
    pub line_height: f32,
    /// Bounding box rounded up to whole pixels
    pub size: TextSize,
}

/// Scale factor from font units to pixels
pub fn scale_for(font: &dyn FontFace, size: f32) -> f32 {
    let upem = match font.units_per_em() {
        0 => 1000.0,
        upem => upem as f32,
    };
    size / upem
}

/// Sum of glyph advances for a single line, in pixels
pub fn line_width(font: &dyn FontFace, size: f32, line: &str) -> f32 {
    let scale = scale_for(font, size);
    line.chars()
        .map(|ch| {
            let glyph_id = font.glyph_id(ch).unwrap_or(0); // .notdef
            font.advance_width(glyph_id) * scale
        })
        .sum()
}

/// Lays out `text` at `size` pixels per em
pub fn layout_text<'a>(font: &dyn FontFace, size: f32, text: &'a str) -> TextLayout<'a> {
    let scale = scale_for(font, size);
    let ascent = font.ascender() as f32 * scale;
    let descent = font.descender() as f32 * scale;
    let line_height = (ascent - descent).max(0.0);

    let mut lines = Vec::new();
    let mut max_width: f32 = 0.0;
    for (index, line) in text.split('\n').enumerate() {
        let width = line_width(font, size, line);
        max_width = max_width.max(width);
        lines.push(LineLayout {
            text: line,
            baseline: ascent + index as f32 * (line_height + LINE_SPACING),
            width,
        });
    }

    let count = lines.len() as f32;
    let height = count * line_height + (count - 1.0).max(0.0) * LINE_SPACING;

    let bbox = TextSize::new(ceil_px(max_width), ceil_px(height));
    log::debug!("Measured {} line(s) at {}px: {}", lines.len(), size, bbox);

    TextLayout {
        lines,
        ascent,
        line_height,
        size: bbox,
    }
}

/// Rounds up to whole pixels, ignoring float noise from unit scaling
fn ceil_px(value: f32) -> u32 {
    (value - 1e-3).ceil().max(0.0) as u32
}

/// Bounding box of `text` at `size` pixels per em
pub fn measure_text(font: &dyn FontFace, size: f32, text: &str) -> TextSize {
    layout_text(font, size, text).size
}
