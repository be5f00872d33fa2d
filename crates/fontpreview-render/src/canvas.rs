//! Establishing the surface text is drawn onto

use image::RgbaImage;

use fontpreview_core::{
    error::{PreviewError, RenderError, Result},
    types::{Dimension, PreviewConfig},
};

/// Size of the canvas `config` describes, without decoding any pixels
///
/// A background image brings its own size; otherwise the configured
/// dimension is used.
pub fn canvas_dimension(config: &PreviewConfig) -> Result<Dimension> {
    match &config.background_image {
        Some(path) => image::image_dimensions(path)
            .map(Dimension::from)
            .map_err(|e| PreviewError::BackgroundImage(format!("{}: {}", path.display(), e))),
        None => Ok(config.dimension),
    }
}

/// Opens the background image, or allocates a flat canvas in the background color
pub fn establish_canvas(config: &PreviewConfig) -> Result<RgbaImage> {
    let canvas = match &config.background_image {
        Some(path) => image::open(path)
            .map_err(|e| PreviewError::BackgroundImage(format!("{}: {}", path.display(), e)))?
            .to_rgba8(),
        None => {
            let Dimension { width, height } = config.dimension;
            RgbaImage::from_pixel(width, height, config.background.to_rgba())
        },
    };

    if canvas.width() == 0 || canvas.height() == 0 {
        return Err(RenderError::InvalidDimensions {
            width: canvas.width(),
            height: canvas.height(),
        }
        .into());
    }
    Ok(canvas)
}
