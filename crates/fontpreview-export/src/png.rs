//! PNG export format
//!
//! Encodes previews to PNG in memory using the `image` crate.

use image::{
    codecs::png::{CompressionType, FilterType, PngEncoder},
    ImageEncoder,
};

use fontpreview_core::{
    error::{ImageWriteError, Result},
    traits::Exporter,
    types::PreviewImage,
};

/// Encode a preview to PNG bytes, keeping its color model
pub fn encode_png(image: &PreviewImage) -> Result<Vec<u8>> {
    let dynamic = image.as_dynamic();
    let mut png_data = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut png_data, CompressionType::Default, FilterType::Sub);

    encoder
        .write_image(
            dynamic.as_bytes(),
            dynamic.width(),
            dynamic.height(),
            dynamic.color().into(),
        )
        .map_err(|e| ImageWriteError::EncodingFailed(format!("PNG encoding failed: {}", e)))?;

    Ok(png_data)
}

/// PNG exporter for previews
///
/// # Examples
///
/// ```
/// use fontpreview_export::PngExporter;
/// let exporter = PngExporter::new();
/// ```
pub struct PngExporter;

impl PngExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for PngExporter {
    fn name(&self) -> &'static str {
        "png"
    }

    fn export(&self, image: &PreviewImage) -> Result<Vec<u8>> {
        encode_png(image)
    }

    fn extension(&self) -> &'static str {
        "png"
    }
}

impl Default for PngExporter {
    fn default() -> Self {
        Self::new()
    }
}
