//! The data model shared by every fontpreview crate

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use image::{DynamicImage, Rgba, RgbaImage};

use crate::error::{PreviewError, Result};

/// Point size used when none is given
pub const DEFAULT_FONT_SIZE: u32 = 64;

/// Sample text used when none is given
pub const DEFAULT_TEXT: &str = "a b c d e f";

/// Simple RGBA color that works everywhere
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    /// Looks up one of the common named colors
    pub fn named(name: &str) -> Option<Self> {
        let color = match name.to_ascii_lowercase().as_str() {
            "black" => Self::rgb(0, 0, 0),
            "white" => Self::rgb(255, 255, 255),
            "red" => Self::rgb(255, 0, 0),
            "green" => Self::rgb(0, 128, 0),
            "lime" => Self::rgb(0, 255, 0),
            "blue" => Self::rgb(0, 0, 255),
            "yellow" => Self::rgb(255, 255, 0),
            "cyan" | "aqua" => Self::rgb(0, 255, 255),
            "magenta" | "fuchsia" => Self::rgb(255, 0, 255),
            "gray" | "grey" => Self::rgb(128, 128, 128),
            "lightgray" | "lightgrey" => Self::rgb(211, 211, 211),
            "darkgray" | "darkgrey" => Self::rgb(169, 169, 169),
            "silver" => Self::rgb(192, 192, 192),
            "maroon" => Self::rgb(128, 0, 0),
            "olive" => Self::rgb(128, 128, 0),
            "navy" => Self::rgb(0, 0, 128),
            "teal" => Self::rgb(0, 128, 128),
            "purple" => Self::rgb(128, 0, 128),
            "orange" => Self::rgb(255, 165, 0),
            "pink" => Self::rgb(255, 192, 203),
            "brown" => Self::rgb(165, 42, 42),
            "gold" => Self::rgb(255, 215, 0),
            "transparent" => Self::rgba(0, 0, 0, 0),
            _ => return None,
        };
        Some(color)
    }

    fn from_hex(hex: &str) -> Option<Self> {
        if !hex.is_ascii() {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            3 => {
                let mut c = [0u8; 3];
                for (slot, digit) in c.iter_mut().zip(hex.chars()) {
                    let v = digit.to_digit(16)? as u8;
                    *slot = v * 17;
                }
                Some(Self::rgb(c[0], c[1], c[2]))
            },
            6 => Some(Self::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            8 => Some(Self::rgba(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
                channel(&hex[6..8])?,
            )),
            _ => None,
        }
    }

    fn from_components(list: &str) -> Option<Self> {
        let parts = list
            .split(',')
            .map(|p| p.trim().parse::<u8>().ok())
            .collect::<Option<Vec<u8>>>()?;
        match parts.as_slice() {
            [r, g, b] => Some(Self::rgb(*r, *g, *b)),
            [r, g, b, a] => Some(Self::rgba(*r, *g, *b, *a)),
            _ => None,
        }
    }

    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, self.a])
    }
}

impl FromStr for Color {
    type Err = PreviewError;

    /// Accepts names (`white`), `#RGB`, `#RRGGBB`, `#RRGGBBAA`,
    /// `rgb(r, g, b)` and bare `r,g,b[,a]` lists.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let parsed = if let Some(hex) = s.strip_prefix('#') {
            Self::from_hex(hex)
        } else if let Some(inner) = s
            .strip_prefix("rgb(")
            .or_else(|| s.strip_prefix("rgba("))
            .and_then(|rest| rest.strip_suffix(')'))
        {
            Self::from_components(inner)
        } else if s.contains(',') {
            Self::from_components(s)
        } else {
            Self::named(s)
        };
        parsed.ok_or_else(|| PreviewError::Config(format!("Unknown color: {s:?}")))
    }
}

/// Pixel layout of the final preview image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorModel {
    /// 8-bit red, green, blue
    #[default]
    Rgb,
    /// RGB plus alpha
    Rgba,
    /// 8-bit grayscale
    L,
    /// Grayscale plus alpha
    La,
}

impl ColorModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rgb => "RGB",
            Self::Rgba => "RGBA",
            Self::L => "L",
            Self::La => "LA",
        }
    }

    /// Converts the RGBA working canvas into this model
    pub fn convert(self, canvas: RgbaImage) -> DynamicImage {
        let image = DynamicImage::ImageRgba8(canvas);
        match self {
            Self::Rgba => image,
            Self::Rgb => DynamicImage::ImageRgb8(image.to_rgb8()),
            Self::L => DynamicImage::ImageLuma8(image.to_luma8()),
            Self::La => DynamicImage::ImageLumaA8(image.to_luma_alpha8()),
        }
    }
}

impl FromStr for ColorModel {
    type Err = PreviewError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "RGB" => Ok(Self::Rgb),
            "RGBA" => Ok(Self::Rgba),
            "L" | "GRAY" | "GREY" => Ok(Self::L),
            "LA" => Ok(Self::La),
            other => Err(PreviewError::Config(format!(
                "Unsupported color model: {other} (expected RGB, RGBA, L or LA)"
            ))),
        }
    }
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canvas size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimension {
    pub width: u32,
    pub height: u32,
}

impl Dimension {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether a measured text box fits inside this canvas
    pub fn contains(&self, text: TextSize) -> bool {
        text.width <= self.width && text.height <= self.height
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::new(700, 327)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Dimension {
    type Err = PreviewError;

    /// Parses `<width>x<height>`, e.g. `700x327`
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || PreviewError::Config(format!("Invalid dimension: {s:?} (expected WxH)"));
        let (w, h) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(invalid)?;
        let width = w.trim().parse::<u32>().map_err(|_| invalid())?;
        let height = h.trim().parse::<u32>().map_err(|_| invalid())?;
        let dimension = Self::new(width, height);
        if dimension.is_empty() {
            return Err(invalid());
        }
        Ok(dimension)
    }
}

impl From<(u32, u32)> for Dimension {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

/// Measured text bounding box in whole pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextSize {
    pub width: u32,
    pub height: u32,
}

impl TextSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for TextSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Top-left draw coordinate, negative when text overflows the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Which font to load and at what size
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub path: PathBuf,
    /// Point size, treated as pixels per em
    pub size: u32,
    /// Face index inside TTC/OTC collections
    pub face_index: u32,
}

impl FontSpec {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            size: DEFAULT_FONT_SIZE,
            face_index: 0,
        }
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn with_face_index(mut self, face_index: u32) -> Self {
        self.face_index = face_index;
        self
    }
}

/// What to draw and on which canvas
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewConfig {
    pub text: String,
    pub dimension: Dimension,
    pub background: Color,
    pub foreground: Color,
    pub color_model: ColorModel,
    /// Supplies the canvas instead of a flat `background` fill
    pub background_image: Option<PathBuf>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT.to_string(),
            dimension: Dimension::default(),
            background: Color::white(),
            foreground: Color::black(),
            color_model: ColorModel::Rgb,
            background_image: None,
        }
    }
}

impl PreviewConfig {
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_dimension(mut self, dimension: impl Into<Dimension>) -> Self {
        self.dimension = dimension.into();
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = color;
        self
    }

    pub fn with_color_model(mut self, model: ColorModel) -> Self {
        self.color_model = model;
        self
    }

    pub fn with_background_image(mut self, path: impl AsRef<Path>) -> Self {
        self.background_image = Some(path.as_ref().to_path_buf());
        self
    }

    /// Rejects canvases that could never hold a pixel
    pub fn validate(&self) -> Result<()> {
        if self.background_image.is_none() && self.dimension.is_empty() {
            return Err(PreviewError::Config(format!(
                "Canvas dimensions must be positive, got {}",
                self.dimension
            )));
        }
        Ok(())
    }
}

/// A finished preview together with the facts it was drawn from
#[derive(Debug, Clone)]
pub struct PreviewImage {
    image: DynamicImage,
    font_size: u32,
    position: Position,
    text_size: TextSize,
}

impl PreviewImage {
    pub fn new(image: DynamicImage, font_size: u32, position: Position, text_size: TextSize) -> Self {
        Self {
            image,
            font_size,
            position,
            text_size,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimension(&self) -> Dimension {
        Dimension::new(self.image.width(), self.image.height())
    }

    /// Point size the text was drawn at
    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    /// Where the text's top-left corner landed
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn text_size(&self) -> TextSize {
        self.text_size
    }

    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }

    pub fn into_dynamic(self) -> DynamicImage {
        self.image
    }
}
