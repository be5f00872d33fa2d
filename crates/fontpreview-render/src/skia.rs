//! Skia Renderer - anti-aliased text via tiny-skia
//!
//! Glyph outlines come from skrifa at the requested pixel size, get
//! flipped into y-down canvas space with kurbo, and are filled as one
//! path into a canvas-sized coverage pixmap. The coverage is then blended
//! onto the canvas in the foreground color.

use image::{Rgba, RgbaImage};
use kurbo::{Affine, BezPath, PathEl, Shape};
use skrifa::{
    instance::{LocationRef, Size},
    outline::DrawSettings,
    GlyphId, MetadataProvider,
};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform};

use fontpreview_core::{
    error::{RenderError, Result},
    layout::{layout_text, scale_for},
    traits::{FontFace, Renderer},
    types::{Color, Position},
};

/// tiny-skia powered renderer
pub struct SkiaRenderer {
    /// Largest canvas side we agree to allocate a coverage pixmap for
    max_size: u32,
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { max_size: 65535 }
    }

    /// Traces every glyph of `text` into a single path in canvas coordinates
    fn build_text_path(
        &self,
        font: &dyn FontFace,
        size: f32,
        text: &str,
        origin: Position,
    ) -> Result<BezPath> {
        let font_ref = skrifa::FontRef::from_index(font.data(), font.face_index())
            .map_err(|_| RenderError::InvalidFont)?;
        let outlines = font_ref.outline_glyphs();
        let layout = layout_text(font, size, text);
        let scale = scale_for(font, size);

        let mut text_path = BezPath::new();
        for line in &layout.lines {
            let baseline = origin.y as f64 + line.baseline as f64;
            let mut pen_x = origin.x as f64;

            for ch in line.text.chars() {
                let glyph_id = font.glyph_id(ch).unwrap_or(0);

                match outlines.get(GlyphId::new(glyph_id)) {
                    Some(glyph) => {
                        let mut glyph_path = BezPath::new();
                        let settings =
                            DrawSettings::unhinted(Size::new(size), LocationRef::default());
                        glyph
                            .draw(settings, &mut PathPen { path: &mut glyph_path })
                            .map_err(|_| RenderError::OutlineExtractionFailed(glyph_id))?;

                        // Fonts are y-up, canvases are y-down
                        let place = Affine::new([1.0, 0.0, 0.0, -1.0, pen_x, baseline]);
                        glyph_path.apply_affine(place);
                        text_path.extend(glyph_path.elements().iter().copied());
                    },
                    None => log::warn!("Skia: no outline for glyph {} ({:?})", glyph_id, ch),
                }

                pen_x += (font.advance_width(glyph_id) * scale) as f64;
            }
        }

        Ok(text_path)
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for SkiaRenderer {
    fn name(&self) -> &'static str {
        "skia"
    }

    fn draw_text(
        &self,
        canvas: &mut RgbaImage,
        font: &dyn FontFace,
        size: f32,
        text: &str,
        origin: Position,
        color: Color,
    ) -> Result<()> {
        let (width, height) = canvas.dimensions();
        if width == 0 || height == 0 || width > self.max_size || height > self.max_size {
            return Err(RenderError::InvalidDimensions { width, height }.into());
        }

        let path = self.build_text_path(font, size, text, origin)?;
        if path.elements().is_empty() {
            // Whitespace only
            return Ok(());
        }

        let bbox = path.bounding_box();
        if bbox.x0.is_infinite()
            || bbox.y0.is_infinite()
            || bbox.x1.is_infinite()
            || bbox.y1.is_infinite()
        {
            return Err(RenderError::PathBuildingFailed.into());
        }
        if bbox.x1 < 0.0 || bbox.y1 < 0.0 || bbox.x0 > width as f64 || bbox.y0 > height as f64 {
            log::debug!("Skia: text at {} lies entirely off canvas", origin);
            return Ok(());
        }

        let mut builder = PathBuilder::new();
        for element in path.elements() {
            match *element {
                PathEl::MoveTo(p) => builder.move_to(p.x as f32, p.y as f32),
                PathEl::LineTo(p) => builder.line_to(p.x as f32, p.y as f32),
                PathEl::QuadTo(ctrl, end) => {
                    builder.quad_to(ctrl.x as f32, ctrl.y as f32, end.x as f32, end.y as f32)
                },
                PathEl::CurveTo(c1, c2, end) => builder.cubic_to(
                    c1.x as f32,
                    c1.y as f32,
                    c2.x as f32,
                    c2.y as f32,
                    end.x as f32,
                    end.y as f32,
                ),
                PathEl::ClosePath => builder.close(),
            }
        }
        let skia_path = builder.finish().ok_or(RenderError::PathBuildingFailed)?;

        let mut pixmap = Pixmap::new(width, height).ok_or(RenderError::PixmapCreationFailed)?;
        let paint = Paint {
            anti_alias: true,
            ..Default::default()
        };
        pixmap.fill_path(&skia_path, &paint, FillRule::Winding, Transform::identity(), None);

        log::debug!(
            "Skia: {} glyph path bbox=({:.1}, {:.1}, {:.1}, {:.1}) on {}x{} canvas",
            text.chars().count(),
            bbox.x0,
            bbox.y0,
            bbox.x1,
            bbox.y1,
            width,
            height
        );

        // Alpha lives in channel 4 and doubles as coverage
        for (pixel, src) in canvas.pixels_mut().zip(pixmap.data().chunks_exact(4)) {
            blend_over(pixel, color, src[3]);
        }

        Ok(())
    }
}

/// Source-over of `color` at `coverage` onto a straight-alpha pixel
pub(crate) fn blend_over(dst: &mut Rgba<u8>, color: Color, coverage: u8) {
    let src_a = coverage as u32 * color.a as u32 / 255;
    if src_a == 0 {
        return;
    }

    let dst_a = dst[3] as u32;
    let inv_a = 255 - src_a;
    let out_a = src_a + dst_a * inv_a / 255;
    if out_a == 0 {
        return;
    }

    let src = [color.r, color.g, color.b];
    for (channel, &src_c) in src.iter().enumerate() {
        let dst_c = dst[channel] as u32;
        let value = (src_c as u32 * src_a * 255 + dst_c * dst_a * inv_a) / (out_a * 255);
        dst[channel] = value.min(255) as u8;
    }
    dst[3] = out_a.min(255) as u8;
}

/// Bridge between skrifa's outline commands and kurbo's path format
struct PathPen<'a> {
    path: &'a mut BezPath,
}

impl skrifa::outline::OutlinePen for PathPen<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        self.path.move_to((x as f64, y as f64));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.line_to((x as f64, y as f64));
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.path.quad_to((cx0 as f64, cy0 as f64), (x as f64, y as f64));
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.path.curve_to(
            (cx0 as f64, cy0 as f64),
            (cx1 as f64, cy1 as f64),
            (x as f64, y as f64),
        );
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}
