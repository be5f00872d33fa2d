//! End-to-end previews against a real font
//!
//! Skipped when no font is available; set `FONTPREVIEW_TEST_FONT` to point
//! at one explicitly.

use fontpreview::fontdb::testing::system_test_font;
use fontpreview::prelude::*;

#[test]
fn test_default_preview_when_saved_then_file_is_written() {
    let Some(font_path) = system_test_font() else {
        eprintln!("Skipping test: no system font found");
        return;
    };

    let preview = FontPreview::new(FontSpec::new(&font_path), PreviewConfig::default())
        .expect("preview should build");
    assert_eq!(preview.dimension(), Dimension::new(700, 327));
    assert_eq!(preview.font_size(), 64);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preview.png");
    preview.save(&path).expect("save should succeed");
    assert!(std::fs::metadata(&path).unwrap().len() > 0);

    let decoded = image::open(&path).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (700, 327));
}

#[test]
fn test_set_font_size_when_too_big_then_text_fits_canvas() {
    let Some(font_path) = system_test_font() else {
        eprintln!("Skipping test: no system font found");
        return;
    };

    let mut preview = FontPreview::new(FontSpec::new(&font_path), PreviewConfig::default())
        .unwrap()
        .with_fit_policy(FitPolicy::default());
    preview.set_font_size(400).expect("fit should converge");

    assert!(preview.font_size() < 400);
    assert_eq!(preview.font_size() % 2, 0, "ladder steps by 2 from an even size");
    assert_eq!(preview.dimension(), Dimension::new(700, 327));

    let text = preview.image().text_size();
    assert!(text.width <= 700 && text.height <= 327, "{text} overflows");
    let position = preview.position();
    assert!(position.x >= 0 && position.y >= 0);
}

#[test]
fn test_anchor_change_when_redrawn_then_position_follows() {
    let Some(font_path) = system_test_font() else {
        eprintln!("Skipping test: no system font found");
        return;
    };

    let mut preview = FontPreview::new(
        FontSpec::new(&font_path).with_size(32),
        PreviewConfig::default().with_text("Hamburg"),
    )
    .unwrap();
    let text = preview.image().text_size();

    preview.set_text_position(Anchor::RBelow).unwrap();
    assert_eq!(
        preview.position(),
        Position::new(
            700 - text.width as i32,
            327 - text.height as i32 - 20
        )
    );

    preview.set_text_position(Anchor::LTop).unwrap();
    assert_eq!(preview.position(), Position::new(20, 20));
    assert!(preview.to_string().contains("text_position:(20, 20)"));
}

#[test]
fn test_save_when_extension_unknown_then_image_write_error() {
    let Some(font_path) = system_test_font() else {
        eprintln!("Skipping test: no system font found");
        return;
    };

    let preview = FontPreview::open(&font_path).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let result = preview.save(dir.path().join("preview.nope"));
    assert!(matches!(result, Err(PreviewError::ImageWrite(_))));
}

#[test]
fn test_background_image_when_set_then_canvas_takes_its_size() {
    let Some(font_path) = system_test_font() else {
        eprintln!("Skipping test: no system font found");
        return;
    };

    let dir = tempfile::tempdir().unwrap();
    let background = dir.path().join("bg.png");
    image::RgbaImage::from_pixel(320, 120, image::Rgba([0, 128, 255, 255]))
        .save(&background)
        .unwrap();

    let config = PreviewConfig::default()
        .with_background_image(&background)
        .with_color_model(ColorModel::Rgba);
    let mut preview = FontPreview::new(FontSpec::new(&font_path), config).unwrap();
    preview.set_font_size(200).unwrap();

    assert_eq!(preview.dimension(), Dimension::new(320, 120));
    let text = preview.image().text_size();
    assert!(text.width <= 320 && text.height <= 120);
}
