//! Resize-to-fit: shrink the font until the text fits the canvas
//!
//! The size drops by a fixed step until the measured box fits in both
//! directions. A floor stops the loop from ever reaching zero; crossing it
//! is reported as [`PreviewError::TextTooLarge`].
//!
//! # Environment Variables
//!
//! `FitPolicy::from_env` reads these once per process:
//!
//! ```bash
//! FONTPREVIEW_FIT_STEP=4 FONTPREVIEW_MIN_FONT_SIZE=8 ./my_app
//! ```

use std::sync::OnceLock;

use crate::error::{PreviewError, Result};
use crate::layout::measure_text;
use crate::traits::FontFace;
use crate::types::Dimension;

/// Points removed per iteration
pub const DEFAULT_FIT_STEP: u32 = 2;

/// Smallest size the loop may reach
pub const DEFAULT_MIN_FONT_SIZE: u32 = 1;

const STEP_VAR: &str = "FONTPREVIEW_FIT_STEP";
const MIN_SIZE_VAR: &str = "FONTPREVIEW_MIN_FONT_SIZE";

static ENV_POLICY: OnceLock<FitPolicy> = OnceLock::new();

/// How resize-to-fit walks down the size ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitPolicy {
    pub step: u32,
    pub min_size: u32,
}

impl Default for FitPolicy {
    fn default() -> Self {
        Self {
            step: DEFAULT_FIT_STEP,
            min_size: DEFAULT_MIN_FONT_SIZE,
        }
    }
}

impl FitPolicy {
    pub fn new(step: u32, min_size: u32) -> Self {
        Self {
            step: step.max(1),
            min_size: min_size.max(1),
        }
    }

    /// Defaults overridden by `FONTPREVIEW_FIT_STEP` / `FONTPREVIEW_MIN_FONT_SIZE`
    pub fn from_env() -> Self {
        *ENV_POLICY.get_or_init(|| {
            Self::from_vars(std::env::var(STEP_VAR).ok(), std::env::var(MIN_SIZE_VAR).ok())
        })
    }

    fn from_vars(step: Option<String>, min_size: Option<String>) -> Self {
        let defaults = Self::default();
        let step = parse_positive(STEP_VAR, step).unwrap_or(defaults.step);
        let min_size = parse_positive(MIN_SIZE_VAR, min_size).unwrap_or(defaults.min_size);
        if step != defaults.step || min_size != defaults.min_size {
            log::info!("Fit policy from environment: step={}, min_size={}", step, min_size);
        }
        Self::new(step, min_size)
    }
}

fn parse_positive(name: &str, value: Option<String>) -> Option<u32> {
    let value = value?;
    match value.trim().parse::<u32>() {
        Ok(v) if v > 0 => Some(v),
        _ => {
            log::warn!("Ignoring {}={:?}: expected a positive integer", name, value);
            None
        },
    }
}

/// Largest size on the ladder from `size` at which `text` fits `canvas`
///
/// The ladder is `size`, `size - step`, `size - 2 * step`, ... down to the
/// policy floor. Measured boxes never shrink as the size grows, so the
/// first fitting rung is found by bisection instead of walking every rung.
pub fn fit_font_size(
    font: &dyn FontFace,
    text: &str,
    size: u32,
    canvas: Dimension,
    policy: FitPolicy,
) -> Result<u32> {
    let step = policy.step.max(1);
    let floor = policy.min_size.max(1);
    let fits = |size: u32| canvas.contains(measure_text(font, size as f32, text));

    if fits(size) {
        return Ok(size);
    }

    // Rungs below `size` that stay at or above the floor
    let rungs = size.saturating_sub(floor) / step;
    let lowest = size - rungs * step;
    if rungs == 0 || !fits(lowest) {
        return Err(PreviewError::TextTooLarge {
            size: lowest,
            text: measure_text(font, lowest as f32, text),
            canvas,
        });
    }

    // Rung `hi` fits, every rung before `lo` overflows
    let (mut lo, mut hi) = (1, rungs);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if fits(size - mid * step) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }

    let fitted = size - lo * step;
    log::debug!(
        "Text overflows canvas {} at {}pt, fits at {}pt",
        canvas,
        size,
        fitted
    );
    Ok(fitted)
}
