//! Font loading for fontpreview
//!
//! Reads a font file into memory, checks that it can actually be drawn
//! (a cmap and some kind of outline table), and pulls out the handful of
//! metrics the preview needs: units per em, line metrics and advances.
//!
//! ## Memory Management
//!
//! Fonts store their raw data and create `FontRef` on demand for parsing,
//! which keeps TTC collections with several faces working.

#[doc(hidden)]
pub mod testing;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use read_fonts::{types::GlyphId, FontRef as ReadFontRef, TableProvider};
use skrifa::{string::StringId, MetadataProvider};

use fontpreview_core::{
    error::{FontLoadError, Result},
    traits::FontFace,
};

/// A font that's been brought into memory, ready to measure and draw
pub struct Font {
    data: Vec<u8>,
    face_index: u32,
    units_per_em: u16,
    ascender: i16,
    descender: i16,
    full_name: Option<String>,
    path: Option<PathBuf>,
}

impl Font {
    /// Opens a font file from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_file_index(path, 0)
    }

    /// Opens a specific face from a font file (for TTC collections)
    pub fn from_file_index(path: impl AsRef<Path>, face_index: u32) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => FontLoadError::FileNotFound(path.display().to_string()),
            _ => FontLoadError::Unreadable {
                path: path.display().to_string(),
                reason: e.to_string(),
            },
        })?;

        let mut font = Self::from_data_index(data, face_index)?;
        font.path = Some(path.to_path_buf());
        log::debug!(
            "Loaded font {:?} from {} (face {})",
            font.full_name(),
            path.display(),
            face_index
        );
        Ok(font)
    }

    /// Turns raw font bytes into something we can work with
    pub fn from_data(data: Vec<u8>) -> Result<Self> {
        Self::from_data_index(data, 0)
    }

    /// Turns raw font bytes into a specific face (for TTC collections)
    pub fn from_data_index(data: Vec<u8>, face_index: u32) -> Result<Self> {
        let font_ref = ReadFontRef::from_index(&data, face_index)
            .map_err(|e| FontLoadError::InvalidData(e.to_string()))?;

        if font_ref.cmap().is_err() {
            return Err(FontLoadError::NotSupported("font has no cmap table".into()).into());
        }
        let has_outlines =
            font_ref.glyf().is_ok() || font_ref.cff().is_ok() || font_ref.cff2().is_ok();
        if !has_outlines {
            return Err(FontLoadError::NotSupported(
                "font has no glyf, CFF or CFF2 outlines".into(),
            )
            .into());
        }

        let units_per_em = font_ref
            .head()
            .map(|head| head.units_per_em())
            .unwrap_or(1000);
        let (ascender, descender) = line_metrics(&font_ref, units_per_em);
        let full_name = face_name(&data, face_index);

        Ok(Font {
            data,
            face_index,
            units_per_em,
            ascender,
            descender,
            full_name,
            path: None,
        })
    }

    /// Creates a FontRef on demand for parsing operations
    fn font_ref(&self) -> Option<ReadFontRef<'_>> {
        ReadFontRef::from_index(&self.data, self.face_index).ok()
    }
}

/// Line metrics from `hhea`, then OS/2 typo metrics, then a plain 0.8/0.2 split
fn line_metrics(font: &ReadFontRef<'_>, units_per_em: u16) -> (i16, i16) {
    if let Ok(hhea) = font.hhea() {
        let (ascender, descender) = (hhea.ascender().to_i16(), hhea.descender().to_i16());
        if ascender != 0 || descender != 0 {
            return (ascender, descender);
        }
    }
    if let Ok(os2) = font.os2() {
        let (ascender, descender) = (os2.s_typo_ascender(), os2.s_typo_descender());
        if ascender != 0 || descender != 0 {
            return (ascender, descender);
        }
    }
    let upem = units_per_em as i32;
    ((upem * 4 / 5) as i16, -((upem / 5) as i16))
}

/// Full name from the name table, falling back to the family name
fn face_name(data: &[u8], face_index: u32) -> Option<String> {
    let font = skrifa::FontRef::from_index(data, face_index).ok()?;
    [StringId::FULL_NAME, StringId::FAMILY_NAME]
        .into_iter()
        .find_map(|id| font.localized_strings(id).english_or_first())
        .map(|name| name.to_string())
}

impl FontFace for Font {
    fn data(&self) -> &[u8] {
        &self.data
    }

    fn face_index(&self) -> u32 {
        self.face_index
    }

    fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    fn ascender(&self) -> i16 {
        self.ascender
    }

    fn descender(&self) -> i16 {
        self.descender
    }

    fn glyph_id(&self, ch: char) -> Option<u32> {
        self.font_ref()
            .and_then(|font| font.cmap().ok()?.map_codepoint(ch).map(|gid| gid.to_u32()))
    }

    fn advance_width(&self, glyph_id: u32) -> f32 {
        self.font_ref()
            .and_then(|font| {
                let hmtx = font.hmtx().ok()?;
                let advance = hmtx.advance(GlyphId::new(glyph_id))?;
                Some(advance as f32)
            })
            .unwrap_or(self.units_per_em as f32 / 2.0)
    }

    fn full_name(&self) -> String {
        if let Some(name) = &self.full_name {
            return name.clone();
        }
        self.path
            .as_deref()
            .and_then(Path::file_stem)
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("unknown"))
    }

    fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
