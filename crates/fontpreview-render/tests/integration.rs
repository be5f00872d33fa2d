//! Skia renderer against a real font
//!
//! These tests need a TrueType font on disk. They look at
//! `FONTPREVIEW_TEST_FONT` first, then a few common system locations,
//! and skip when nothing is found.

use std::sync::Arc;

use image::{Rgba, RgbaImage};

use fontpreview_core::{
    traits::{FontFace, Renderer},
    Anchor, Color, Placement, Position, PreviewConfig,
};
use fontpreview_fontdb::{testing::system_test_font, Font};
use fontpreview_render::{render_preview, SkiaRenderer};

fn load_font() -> Option<Arc<dyn FontFace>> {
    let path = system_test_font()?;
    let font = Font::from_file(&path).expect("system font should load");
    Some(Arc::new(font))
}

fn ink_pixels(canvas: &RgbaImage) -> usize {
    canvas.pixels().filter(|px| px[0] < 128).count()
}

#[test]
fn test_draw_text_when_on_canvas_then_pixels_are_inked() {
    let Some(font) = load_font() else {
        eprintln!("Skipping test: no system font found");
        return;
    };

    let renderer = SkiaRenderer::new();
    let mut canvas = RgbaImage::from_pixel(300, 100, Rgba([255, 255, 255, 255]));
    renderer
        .draw_text(
            &mut canvas,
            font.as_ref(),
            48.0,
            "Hamburg",
            Position::new(10, 10),
            Color::black(),
        )
        .expect("draw should succeed");

    assert!(ink_pixels(&canvas) > 100, "text should leave ink");
    // Nothing lands left of the origin or in the far corner
    assert_eq!(*canvas.get_pixel(0, 50), Rgba([255, 255, 255, 255]));
    assert_eq!(*canvas.get_pixel(299, 99), Rgba([255, 255, 255, 255]));
}

#[test]
fn test_draw_text_when_off_canvas_then_canvas_unchanged() {
    let Some(font) = load_font() else {
        eprintln!("Skipping test: no system font found");
        return;
    };

    let renderer = SkiaRenderer::new();
    let blank = RgbaImage::from_pixel(50, 50, Rgba([255, 255, 255, 255]));
    let mut canvas = blank.clone();
    renderer
        .draw_text(
            &mut canvas,
            font.as_ref(),
            24.0,
            "abc",
            Position::new(500, 500),
            Color::black(),
        )
        .expect("off-canvas draw is not an error");
    assert_eq!(canvas, blank);
}

#[test]
fn test_whitespace_only_text_draws_nothing() {
    let Some(font) = load_font() else {
        eprintln!("Skipping test: no system font found");
        return;
    };

    let renderer = SkiaRenderer::new();
    let blank = RgbaImage::from_pixel(50, 50, Rgba([255, 255, 255, 255]));
    let mut canvas = blank.clone();
    renderer
        .draw_text(
            &mut canvas,
            font.as_ref(),
            24.0,
            "   ",
            Position::new(0, 0),
            Color::black(),
        )
        .expect("whitespace draw should succeed");
    assert_eq!(canvas, blank);
}

#[test]
fn test_render_preview_when_text_changes_then_no_stale_glyphs() {
    let Some(font) = load_font() else {
        eprintln!("Skipping test: no system font found");
        return;
    };

    let renderer = SkiaRenderer::new();
    let first = PreviewConfig::default().with_text("WWWWWWWW");
    let second = PreviewConfig::default().with_text("i");

    let drawn_first =
        render_preview(font.as_ref(), &renderer, 64, &first, Placement::default()).unwrap();
    let drawn_second =
        render_preview(font.as_ref(), &renderer, 64, &second, Placement::default()).unwrap();
    let drawn_second_again =
        render_preview(font.as_ref(), &renderer, 64, &second, Placement::default()).unwrap();

    let first_ink = ink_pixels(&drawn_first.as_dynamic().to_rgba8());
    let second_ink = ink_pixels(&drawn_second.as_dynamic().to_rgba8());
    assert!(second_ink < first_ink);
    assert_eq!(
        drawn_second.as_dynamic().as_bytes(),
        drawn_second_again.as_dynamic().as_bytes(),
        "same inputs should draw the same pixels"
    );
}

#[test]
fn test_render_preview_when_anchored_then_ink_stays_in_region() {
    let Some(font) = load_font() else {
        eprintln!("Skipping test: no system font found");
        return;
    };

    let renderer = SkiaRenderer::new();
    let config = PreviewConfig::default();
    let preview =
        render_preview(font.as_ref(), &renderer, 32, &config, Anchor::LTop.into()).unwrap();
    assert_eq!(preview.position(), Position::new(20, 20));

    let canvas = preview.as_dynamic().to_rgba8();
    let (w, h) = canvas.dimensions();
    // Small top-left text leaves the bottom half of the canvas blank
    for y in h / 2..h {
        for x in 0..w {
            assert_eq!(canvas.get_pixel(x, y)[0], 255, "ink at ({x}, {y})");
        }
    }
    assert!(ink_pixels(&canvas) > 0);
}
