//! Locating a real font for integration tests

use std::path::PathBuf;

/// Environment variable that points tests at a specific font file
pub const TEST_FONT_VAR: &str = "FONTPREVIEW_TEST_FONT";

const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// `FONTPREVIEW_TEST_FONT`, then the first common system font that exists
pub fn system_test_font() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(TEST_FONT_VAR) {
        return Some(PathBuf::from(path));
    }
    SYSTEM_FONTS
        .iter()
        .map(PathBuf::from)
        .find(|path| path.exists())
}
