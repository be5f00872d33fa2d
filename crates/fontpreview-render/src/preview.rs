//! One complete draw: canvas, placement, text, color model

use fontpreview_core::{
    error::{PreviewError, Result},
    layout::measure_text,
    placement::Placement,
    traits::{FontFace, Renderer},
    types::{Dimension, PreviewConfig, PreviewImage},
};

use crate::canvas::establish_canvas;

/// Draws a fresh preview image
///
/// Nothing is shared with previous draws: the canvas is rebuilt, the text
/// re-measured and the placement re-resolved against the current font
/// size, so the result reflects exactly these inputs.
pub fn render_preview(
    font: &dyn FontFace,
    renderer: &dyn Renderer,
    font_size: u32,
    config: &PreviewConfig,
    placement: Placement,
) -> Result<PreviewImage> {
    config.validate()?;
    if font_size == 0 {
        return Err(PreviewError::Config("Font size must be positive".into()));
    }

    let mut canvas = establish_canvas(config)?;
    let dimension = Dimension::new(canvas.width(), canvas.height());
    let size = font_size as f32;

    let text_size = measure_text(font, size, &config.text);
    let position = placement.resolve(dimension, text_size);
    log::debug!(
        "Drawing {:?} at {}pt: box {} placed {} at {} on {}",
        config.text,
        font_size,
        text_size,
        placement,
        position,
        dimension
    );

    renderer.draw_text(
        &mut canvas,
        font,
        size,
        &config.text,
        position,
        config.foreground,
    )?;

    Ok(PreviewImage::new(
        config.color_model.convert(canvas),
        font_size,
        position,
        text_size,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fontpreview_core::{
        error::RenderError,
        placement::Anchor,
        types::{Color, ColorModel, Position, TextSize},
    };
    use image::{Rgba, RgbaImage};

    /// 1000 upem, 500-unit advances, 800/-200 line metrics
    struct MockFont;

    impl FontFace for MockFont {
        fn data(&self) -> &[u8] {
            &[]
        }

        fn units_per_em(&self) -> u16 {
            1000
        }

        fn ascender(&self) -> i16 {
            800
        }

        fn descender(&self) -> i16 {
            -200
        }

        fn glyph_id(&self, ch: char) -> Option<u32> {
            Some(ch as u32)
        }

        fn advance_width(&self, _glyph_id: u32) -> f32 {
            500.0
        }
    }

    /// Paints the measured text box as a solid rectangle
    struct BoxRenderer;

    impl Renderer for BoxRenderer {
        fn name(&self) -> &'static str {
            "box"
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
            let TextSize { width, height } = measure_text(font, size, text);
            for y in origin.y..origin.y + height as i32 {
                for x in origin.x..origin.x + width as i32 {
                    if x >= 0 && y >= 0 && (x as u32) < canvas.width() && (y as u32) < canvas.height()
                    {
                        canvas.put_pixel(x as u32, y as u32, color.to_rgba());
                    }
                }
            }
            Ok(())
        }
    }

    struct FailingRenderer;

    impl Renderer for FailingRenderer {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn draw_text(
            &self,
            _canvas: &mut RgbaImage,
            _font: &dyn FontFace,
            _size: f32,
            _text: &str,
            _origin: Position,
            _color: Color,
        ) -> Result<()> {
            Err(RenderError::PathBuildingFailed.into())
        }
    }

    #[test]
    fn test_center_placement_on_default_canvas() {
        // "a b c d e f" at 64pt: 11 * 32 = 352 wide, 64 high
        let config = PreviewConfig::default();
        let preview = render_preview(&MockFont, &BoxRenderer, 64, &config, Placement::default())
            .unwrap();

        assert_eq!(preview.dimension(), Dimension::new(700, 327));
        assert_eq!(preview.text_size(), TextSize::new(352, 64));
        assert_eq!(preview.position(), Position::new(174, 131));
        assert_eq!(preview.font_size(), 64);
        assert_eq!(preview.as_dynamic().color(), image::ColorType::Rgb8);

        let rgb = preview.as_dynamic().to_rgb8();
        assert_eq!(rgb.get_pixel(174, 131).0, [0, 0, 0]);
        assert_eq!(rgb.get_pixel(173, 131).0, [255, 255, 255]);
        assert_eq!(rgb.get_pixel(0, 0).0, [255, 255, 255]);
    }

    #[test]
    fn test_absolute_placement_is_used_verbatim() {
        let config = PreviewConfig::default().with_text("a");
        let image =
            render_preview(&MockFont, &BoxRenderer, 10, &config, Placement::from((3, 4))).unwrap();
        assert_eq!(image.position(), Position::new(3, 4));
        let rgb = image.as_dynamic().to_rgb8();
        assert_eq!(rgb.get_pixel(3, 4).0, [0, 0, 0]);
        assert_eq!(rgb.get_pixel(2, 4).0, [255, 255, 255]);
    }

    #[test]
    fn test_anchor_uses_current_size() {
        let config = PreviewConfig::default();
        let big = render_preview(&MockFont, &BoxRenderer, 64, &config, Anchor::LBelow.into())
            .unwrap();
        let small = render_preview(&MockFont, &BoxRenderer, 32, &config, Anchor::LBelow.into())
            .unwrap();
        assert_eq!(big.position(), Position::new(20, 327 - 64 - 20));
        assert_eq!(small.position(), Position::new(20, 327 - 32 - 20));
    }

    #[test]
    fn test_color_model_and_colors_apply() {
        let config = PreviewConfig::default()
            .with_dimension((50, 30))
            .with_text("a")
            .with_background(Color::rgba(0, 0, 255, 0))
            .with_foreground(Color::rgb(255, 0, 0))
            .with_color_model(ColorModel::Rgba);
        let image =
            render_preview(&MockFont, &BoxRenderer, 10, &config, Placement::from((0, 0))).unwrap();
        let rgba = image.as_dynamic().to_rgba8();
        assert_eq!(*rgba.get_pixel(0, 0), Rgba([255, 0, 0, 255]));
        assert_eq!(*rgba.get_pixel(49, 29), Rgba([0, 0, 255, 0]));
    }

    #[test]
    fn test_zero_font_size_is_rejected() {
        let result = render_preview(
            &MockFont,
            &BoxRenderer,
            0,
            &PreviewConfig::default(),
            Placement::default(),
        );
        assert!(matches!(result, Err(PreviewError::Config(_))));
    }

    #[test]
    fn test_renderer_failure_propagates() {
        let result = render_preview(
            &MockFont,
            &FailingRenderer,
            12,
            &PreviewConfig::default(),
            Placement::default(),
        );
        assert!(matches!(
            result,
            Err(PreviewError::Render(RenderError::PathBuildingFailed))
        ));
    }
}
