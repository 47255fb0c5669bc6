//! Character ramp definitions.
//!
//! Every ramp is ordered so that index 0 is the glyph used for the darkest
//! luminance. Several renderers split `[0, 255]` into `len - 1` equal steps,
//! so the glyph counts below are part of the output contract.

use std::borrow::Cow;

use serde::Deserialize;

use crate::error::RenderError;

/// Standard density ramp (70 levels), densest glyph first.
pub const STANDARD_CHARSET: &[char] = &[
    '$', '@', 'B', '%', '8', '&', 'W', 'M', '#', '*', 'o', 'a', 'h', 'k', 'b', 'd', 'p', 'q',
    'w', 'm', 'Z', 'O', '0', 'Q', 'L', 'C', 'J', 'U', 'Y', 'X', 'z', 'c', 'v', 'u', 'n', 'x',
    'r', 'j', 'f', 't', '/', '\\', '|', '(', ')', '1', '{', '}', '[', ']', '?', '-', '_', '+',
    '~', '<', '>', 'i', '!', 'l', 'I', ';', ':', ',', '"', '^', '`', '\'', '.', ' ',
];

/// Detailed ramp (12 levels).
pub const DETAILED_CHARSET: &[char] = &['@', '#', 'S', '%', '?', '*', '+', ';', ':', ',', '.', ' '];

/// Simple ramp (10 levels).
pub const SIMPLE_CHARSET: &[char] = &['@', '%', '#', '*', '+', '=', '-', ':', '.', ' '];

/// Unicode shade blocks (5 levels), full block first.
pub const BLOCKS_CHARSET: &[char] = &['█', '▓', '▒', '░', ' '];

/// Round dots (6 levels).
pub const DOTS_CHARSET: &[char] = &['●', '◍', '◎', '○', '·', ' '];

/// Two-level ramp for pure silhouettes.
pub const BINARY_CHARSET: &[char] = &['█', ' '];

/// Shade blocks followed by box-drawing glyphs (22 levels).
pub const TECH_CHARSET: &[char] = &[
    '█', '▓', '▒', '░', '╬', '╫', '╪', '┼', '╋', '╂', '┿', '├', '┤', '┬', '┴', '┌', '┐', '└',
    '┘', '─', '│', ' ',
];

/// Named character ramps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharSet {
    /// 70-level density ramp
    #[default]
    Standard,
    /// 12-level ramp
    Detailed,
    /// 10-level ramp
    Simple,
    /// 5 shade blocks
    Blocks,
    /// 6 round dots
    Dots,
    /// Full block or blank
    Binary,
    /// 22 box-drawing glyphs
    Tech,
    /// Caller-supplied glyphs
    Custom,
}

impl CharSet {
    /// All registered charsets, in listing order.
    pub const ALL: [CharSet; 8] = [
        CharSet::Standard,
        CharSet::Detailed,
        CharSet::Simple,
        CharSet::Blocks,
        CharSet::Dots,
        CharSet::Binary,
        CharSet::Tech,
        CharSet::Custom,
    ];

    /// Get the glyphs of this charset.
    ///
    /// `Custom` has no built-in glyphs and returns an empty slice; supply them
    /// through [`Ramp::custom`].
    pub fn chars(&self) -> &'static [char] {
        match self {
            CharSet::Standard => STANDARD_CHARSET,
            CharSet::Detailed => DETAILED_CHARSET,
            CharSet::Simple => SIMPLE_CHARSET,
            CharSet::Blocks => BLOCKS_CHARSET,
            CharSet::Dots => DOTS_CHARSET,
            CharSet::Binary => BINARY_CHARSET,
            CharSet::Tech => TECH_CHARSET,
            CharSet::Custom => &[],
        }
    }

    /// Get a human-readable name for the charset.
    pub fn name(&self) -> &'static str {
        match self {
            CharSet::Standard => "standard",
            CharSet::Detailed => "detailed",
            CharSet::Simple => "simple",
            CharSet::Blocks => "blocks",
            CharSet::Dots => "dots",
            CharSet::Binary => "binary",
            CharSet::Tech => "tech",
            CharSet::Custom => "custom",
        }
    }
}

/// An ordered glyph sequence used to map luminance to characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ramp {
    glyphs: Cow<'static, [char]>,
}

impl Ramp {
    /// Ramp backed by a registered charset.
    pub fn named(charset: CharSet) -> Self {
        Self {
            glyphs: Cow::Borrowed(charset.chars()),
        }
    }

    /// Ramp built from the characters of `glyphs`, in order.
    pub fn custom(glyphs: &str) -> Self {
        Self {
            glyphs: Cow::Owned(glyphs.chars().collect()),
        }
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyph at `idx`, clamped to the last glyph.
    ///
    /// Panics on an empty ramp; call [`validate`](Self::validate) first.
    #[inline]
    pub fn glyph(&self, idx: usize) -> char {
        self.glyphs[idx.min(self.glyphs.len() - 1)]
    }

    /// Reject ramps that cannot be split into at least one step.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.glyphs.len() < 2 {
            return Err(RenderError::EmptyRamp {
                len: self.glyphs.len(),
            });
        }
        Ok(())
    }
}

impl Default for Ramp {
    fn default() -> Self {
        Self::named(CharSet::Standard)
    }
}

impl From<CharSet> for Ramp {
    fn from(charset: CharSet) -> Self {
        Self::named(charset)
    }
}
