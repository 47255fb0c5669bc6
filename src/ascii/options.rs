//! Per-call render options.

use serde::Deserialize;

use super::charset::Ramp;

/// Default output width in characters.
pub const DEFAULT_OUTPUT_WIDTH: u32 = 100;

/// Default threshold for braille dots and edge magnitude.
pub const DEFAULT_THRESHOLD: u8 = 128;

/// Default character aspect ratio (glyph width / glyph height).
///
/// Terminal and monospace glyphs are about twice as tall as wide, so half as
/// many rows as a square-pixel mapping would give.
pub const DEFAULT_ASPECT_RATIO: f32 = 0.5;

/// Resampling filter used when shrinking the source to the character grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleFilter {
    /// Pick the source pixel under each output cell's top-left corner
    #[default]
    Nearest,
    /// Average every source pixel covered by the output cell
    Area,
}

/// Options for a single render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Output width in characters
    pub output_width: u32,
    /// Glyphs used by the ramp-based renderers
    pub ramp: Ramp,
    /// Flip the ramp (classic) or the dot test (braille)
    pub invert: bool,
    /// Braille dot threshold / edge magnitude threshold
    pub threshold: u8,
    /// Character width divided by character height
    pub aspect_ratio: f32,
    pub filter: SampleFilter,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            output_width: DEFAULT_OUTPUT_WIDTH,
            ramp: Ramp::default(),
            invert: false,
            threshold: DEFAULT_THRESHOLD,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            filter: SampleFilter::default(),
        }
    }
}

impl RenderOptions {
    pub fn with_width(mut self, output_width: u32) -> Self {
        self.output_width = output_width;
        self
    }

    pub fn with_ramp(mut self, ramp: impl Into<Ramp>) -> Self {
        self.ramp = ramp.into();
        self
    }

    pub fn with_invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: f32) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    pub fn with_filter(mut self, filter: SampleFilter) -> Self {
        self.filter = filter;
        self
    }
}
