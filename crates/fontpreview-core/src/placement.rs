//! Where the text goes on the canvas
//!
//! Nine named anchors turn a canvas size and a measured text box into a
//! top-left coordinate. Explicit coordinates skip the table entirely.
//!
//! | Anchor  | X                 | Y                     |
//! |---------|-------------------|-----------------------|
//! | center  | (W - w) / 2       | (H - h) / 2           |
//! | top     | (W - w) / 2       | 20                    |
//! | below   | (W - w) / 2       | H - h - 20            |
//! | rcenter | W - w             | (H - h) / 2           |
//! | rtop    | W - w             | 20                    |
//! | rbelow  | W - w             | H - h - 20            |
//! | lcenter | 20                | (H - h) / 2           |
//! | ltop    | 20                | 20                    |
//! | lbelow  | 20                | H - h - 20            |
//!
//! Halving rounds toward negative infinity, so text wider than the
//! canvas is still placed consistently.

use std::fmt;
use std::str::FromStr;

use crate::error::{PreviewError, Result};
use crate::types::{Dimension, Position, TextSize};

/// Fixed distance kept from the canvas edge by edge-hugging anchors
pub const MARGIN: i32 = 20;

/// A named placement policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Anchor {
    #[default]
    Center,
    Top,
    Below,
    RCenter,
    RTop,
    RBelow,
    LCenter,
    LTop,
    LBelow,
}

impl Anchor {
    pub const ALL: [Anchor; 9] = [
        Anchor::Center,
        Anchor::Top,
        Anchor::Below,
        Anchor::RCenter,
        Anchor::RTop,
        Anchor::RBelow,
        Anchor::LCenter,
        Anchor::LTop,
        Anchor::LBelow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Top => "top",
            Self::Below => "below",
            Self::RCenter => "rcenter",
            Self::RTop => "rtop",
            Self::RBelow => "rbelow",
            Self::LCenter => "lcenter",
            Self::LTop => "ltop",
            Self::LBelow => "lbelow",
        }
    }

    /// Resolves a name, treating anything unknown as [`Anchor::Center`]
    pub fn lookup(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            log::debug!("Unknown anchor {:?}, falling back to center", name);
            Self::Center
        })
    }

    /// Top-left coordinate for `text` inside `canvas`
    pub fn position(self, canvas: Dimension, text: TextSize) -> Position {
        let free_x = canvas.width as i64 - text.width as i64;
        let free_y = canvas.height as i64 - text.height as i64;

        let centered_x = free_x.div_euclid(2);
        let centered_y = free_y.div_euclid(2);
        let margin = MARGIN as i64;

        let (x, y) = match self {
            Self::Center => (centered_x, centered_y),
            Self::Top => (centered_x, margin),
            Self::Below => (centered_x, free_y - margin),
            Self::RCenter => (free_x, centered_y),
            Self::RTop => (free_x, margin),
            Self::RBelow => (free_x, free_y - margin),
            Self::LCenter => (margin, centered_y),
            Self::LTop => (margin, margin),
            Self::LBelow => (margin, free_y - margin),
        };

        Position::new(clamp_i32(x), clamp_i32(y))
    }
}

fn clamp_i32(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

impl FromStr for Anchor {
    type Err = PreviewError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|anchor| anchor.as_str() == s)
            .ok_or_else(|| PreviewError::Config(format!("Unknown anchor: {s:?}")))
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Either a named anchor or an explicit coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Anchor(Anchor),
    Absolute(Position),
}

impl Placement {
    /// Resolves to a top-left coordinate; absolute positions pass through untouched
    pub fn resolve(&self, canvas: Dimension, text: TextSize) -> Position {
        match *self {
            Self::Anchor(anchor) => anchor.position(canvas, text),
            Self::Absolute(position) => position,
        }
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::Anchor(Anchor::Center)
    }
}

impl From<Anchor> for Placement {
    fn from(anchor: Anchor) -> Self {
        Self::Anchor(anchor)
    }
}

impl From<Position> for Placement {
    fn from(position: Position) -> Self {
        Self::Absolute(position)
    }
}

impl From<(i32, i32)> for Placement {
    fn from(xy: (i32, i32)) -> Self {
        Self::Absolute(xy.into())
    }
}

impl From<&str> for Placement {
    fn from(name: &str) -> Self {
        Self::Anchor(Anchor::lookup(name))
    }
}

impl FromStr for Placement {
    type Err = PreviewError;

    /// Parses `x,y` as an absolute position and anything else as an anchor
    /// name, with unknown names falling back to center.
    fn from_str(s: &str) -> Result<Self> {
        if let Some((x, y)) = s.split_once(',') {
            let parse = |v: &str| {
                v.trim()
                    .parse::<i32>()
                    .map_err(|_| PreviewError::Config(format!("Invalid position: {s:?}")))
            };
            return Ok(Self::Absolute(Position::new(parse(x)?, parse(y)?)));
        }
        Ok(Self::from(s))
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anchor(anchor) => anchor.fmt(f),
            Self::Absolute(position) => position.fmt(f),
        }
    }
}
