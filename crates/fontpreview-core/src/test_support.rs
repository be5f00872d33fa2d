//! Deterministic fonts for unit tests

use crate::traits::FontFace;

/// 1000 upem, every glyph 500 units wide, ascender 800, descender -200
pub(crate) struct MockFont;

impl MockFont {
    pub(crate) fn new() -> Self {
        Self
    }
}

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
        if ch.is_ascii() {
            Some(ch as u32)
        } else {
            None
        }
    }

    fn advance_width(&self, _glyph_id: u32) -> f32 {
        500.0
    }
}
