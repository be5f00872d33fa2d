//! Command-line arguments using Clap v4

use std::path::PathBuf;

use clap::Parser;
use fontpreview::{
    types::{DEFAULT_FONT_SIZE, DEFAULT_TEXT},
    Color, ColorModel, Dimension,
};

/// fontpreview - Render sample text in a font onto a preview image
#[derive(Parser, Debug)]
#[command(name = "fontpreview")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Font file path (.ttf, .otf, .ttc, .otc)
    pub font: PathBuf,

    /// Face index for TTC/OTC collections
    #[arg(short = 'y', long = "face-index", default_value_t = 0)]
    pub face_index: u32,

    /// Sample text; `\n` separates lines
    #[arg(short = 't', long = "text", default_value = DEFAULT_TEXT)]
    pub text: String,

    /// Font size in points, shrunk until the text fits the canvas
    #[arg(short = 's', long = "font-size", default_value_t = DEFAULT_FONT_SIZE)]
    pub font_size: u32,

    /// Canvas size as <width>x<height>
    #[arg(short = 'W', long = "width-height", default_value = "700x327")]
    pub dimension: Dimension,

    /// Background color: name, #RRGGBB[AA] or r,g,b[,a]
    #[arg(short = 'b', long = "background", default_value = "white")]
    pub background: Color,

    /// Text color: name, #RRGGBB[AA] or r,g,b[,a]
    #[arg(short = 'c', long = "foreground", default_value = "black")]
    pub foreground: Color,

    /// Color model of the output: RGB, RGBA, L or LA
    #[arg(short = 'm', long = "color-model", default_value = "RGB")]
    pub color_model: ColorModel,

    /// Image to draw on instead of a flat background
    #[arg(short = 'B', long = "background-image")]
    pub background_image: Option<PathBuf>,

    /// Anchor (center, top, below, rcenter, rtop, rbelow, lcenter, ltop, lbelow) or x,y
    #[arg(short = 'p', long = "position", default_value = "center", allow_hyphen_values = true)]
    pub position: String,

    /// Output file path, format from the extension [default: ./fontpreview.png]
    #[arg(short = 'o', long = "output-file")]
    pub output: Option<PathBuf>,

    /// Open the result in the default image viewer
    #[arg(long = "show")]
    pub show: bool,

    /// Silent mode (errors only)
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose output
    #[arg(long = "verbose")]
    pub verbose: bool,
}
