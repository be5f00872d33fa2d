//! fontpreview - Render a sample string in a font onto a preview image
//!
//! A [`FontPreview`] owns one loaded font, a canvas description and the
//! most recent image drawn from them. Every mutator redraws from scratch
//! and only commits when the draw succeeds:
//!
//! 1. Validate the new setting
//! 2. Shrink the font size until the text fits (size changes only)
//! 3. Draw a fresh image with the current font, size and placement
//! 4. Swap in the new state
//!
//! # Example
//!
//! ```ignore
//! use fontpreview::prelude::*;
//!
//! let mut preview = FontPreview::new(
//!     FontSpec::new("DejaVuSans.ttf"),
//!     PreviewConfig::default().with_text("Hamburgefonstiv"),
//! )?;
//! preview.set_text_position(Anchor::LTop)?;
//! preview.set_font_size(120)?;
//! preview.save("preview.png")?;
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub use fontpreview_core::{
    error, fit, layout, placement, traits, types, Anchor, Color, ColorModel, Dimension, FitPolicy,
    FontSpec, Placement, Position, PreviewConfig, PreviewError, PreviewImage, Result, TextSize,
};
pub use fontpreview_export as export;
pub use fontpreview_fontdb as fontdb;
pub use fontpreview_render as render;

use fontpreview_core::{
    fit::fit_font_size,
    traits::{FontFace, Renderer},
};
use fontpreview_fontdb::Font;
use fontpreview_render::{canvas_dimension, render_preview, SkiaRenderer};

/// Common imports for typical usage
pub mod prelude {
    pub use crate::FontPreview;
    pub use fontpreview_core::{
        error::{PreviewError, Result},
        traits::{FontFace, Renderer},
        Anchor, Color, ColorModel, Dimension, FitPolicy, FontSpec, Placement, Position,
        PreviewConfig, PreviewImage,
    };
}

/// A font, a canvas description and the image last drawn from them
pub struct FontPreview {
    font: Arc<dyn FontFace>,
    renderer: Arc<dyn Renderer>,
    font_size: u32,
    config: PreviewConfig,
    placement: Placement,
    fit: FitPolicy,
    image: PreviewImage,
}

impl FontPreview {
    /// Loads the font in `spec` and draws it centered on the canvas
    ///
    /// The initial size is used as given; it is not shrunk to fit.
    pub fn new(spec: FontSpec, config: PreviewConfig) -> Result<Self> {
        config.validate()?;
        let font = Font::from_file_index(&spec.path, spec.face_index)?;
        log::debug!("Loaded {} from {}", font.full_name(), spec.path.display());

        Self::with_renderer(
            Arc::new(font),
            spec.size,
            config,
            Arc::new(SkiaRenderer::new()),
        )
    }

    /// Default preview of the font at `path`
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::new(FontSpec::new(path), PreviewConfig::default())
    }

    /// Builds a preview from an already loaded font and any renderer
    pub fn with_renderer(
        font: Arc<dyn FontFace>,
        font_size: u32,
        config: PreviewConfig,
        renderer: Arc<dyn Renderer>,
    ) -> Result<Self> {
        let placement = Placement::default();
        let image = render_preview(
            font.as_ref(),
            renderer.as_ref(),
            font_size,
            &config,
            placement,
        )?;

        Ok(Self {
            font,
            renderer,
            font_size,
            config,
            placement,
            fit: FitPolicy::from_env(),
            image,
        })
    }

    /// Replaces the resize-to-fit policy used by [`set_font_size`](Self::set_font_size)
    pub fn with_fit_policy(mut self, policy: FitPolicy) -> Self {
        self.fit = policy;
        self
    }

    fn render_with(
        &self,
        font_size: u32,
        config: &PreviewConfig,
        placement: Placement,
    ) -> Result<PreviewImage> {
        render_preview(
            self.font.as_ref(),
            self.renderer.as_ref(),
            font_size,
            config,
            placement,
        )
    }

    /// Redraws the current state onto a fresh canvas
    pub fn draw(&mut self) -> Result<()> {
        self.image = self.render_with(self.font_size, &self.config, self.placement)?;
        Ok(())
    }

    /// Changes the font size, shrinking it until the text fits, then redraws
    pub fn set_font_size(&mut self, size: u32) -> Result<()> {
        if size == 0 {
            return Err(PreviewError::Config("Font size must be positive".into()));
        }

        let canvas = canvas_dimension(&self.config)?;
        let fitted = fit_font_size(self.font.as_ref(), &self.config.text, size, canvas, self.fit)?;
        if fitted != size {
            log::debug!("Requested {}pt, fitted to {}pt on {}", size, fitted, canvas);
        }

        let image = self.render_with(fitted, &self.config, self.placement)?;
        self.font_size = fitted;
        self.image = image;
        Ok(())
    }

    /// Moves the text to an anchor, an explicit `(x, y)` or an anchor name, then redraws
    pub fn set_text_position(&mut self, placement: impl Into<Placement>) -> Result<()> {
        let placement = placement.into();
        let image = self.render_with(self.font_size, &self.config, placement)?;
        self.placement = placement;
        self.image = image;
        Ok(())
    }

    /// Replaces the sample text and redraws at the current size
    pub fn set_text(&mut self, text: impl Into<String>) -> Result<()> {
        let config = self.config.clone().with_text(text);
        let image = self.render_with(self.font_size, &config, self.placement)?;
        self.config = config;
        self.image = image;
        Ok(())
    }

    /// Writes the current image, format chosen by the extension of `path`
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fontpreview_export::save(&self.image, path)
    }

    /// Writes `fontpreview.png` into the working directory and returns its path
    pub fn save_default(&self) -> Result<PathBuf> {
        let path = fontpreview_export::default_output_path();
        self.save(&path)?;
        Ok(path)
    }

    /// Opens the current image in the host's image viewer
    pub fn show(&self) -> Result<PathBuf> {
        fontpreview_export::show(&self.image)
    }

    pub fn image(&self) -> &PreviewImage {
        &self.image
    }

    pub fn into_image(self) -> PreviewImage {
        self.image
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    pub fn text(&self) -> &str {
        &self.config.text
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Top-left corner the text was last drawn at
    pub fn position(&self) -> Position {
        self.image.position()
    }

    /// Size of the last drawn image
    pub fn dimension(&self) -> Dimension {
        self.image.dimension()
    }

    pub fn config(&self) -> &PreviewConfig {
        &self.config
    }

    pub fn font(&self) -> &dyn FontFace {
        self.font.as_ref()
    }
}

impl fmt::Display for FontPreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "font_name:{},font_size:{},text:{},text_position:{},dimension:{}",
            self.font.full_name(),
            self.font_size,
            self.config.text,
            self.position(),
            DimensionPair(self.dimension()),
        )
    }
}

impl fmt::Debug for FontPreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontPreview")
            .field("font", &self.font.full_name())
            .field("renderer", &self.renderer.name())
            .field("font_size", &self.font_size)
            .field("config", &self.config)
            .field("placement", &self.placement)
            .field("fit", &self.fit)
            .field("position", &self.position())
            .finish()
    }
}

/// `(w, h)` rather than the `WxH` form `Dimension` displays as
struct DimensionPair(Dimension);

impl fmt::Display for DimensionPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0.width, self.0.height)
    }
}
