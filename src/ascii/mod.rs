//! Image to text-art rendering engine.
//!
//! This module provides a complete pipeline for converting an RGBA image to a
//! character grid:
//!
//! 1. **Sampling** - Resize to the character grid, keeping the aspect ratio
//! 2. **Grayscale conversion** - RGB to luminance using BT.601
//! 3. **Rendering** - One of seven algorithms picks a glyph per cell
//!
//! # Render modes
//!
//! Available through [`RenderMode`] or the `render_*` functions:
//! - `Classic` - luminance ramp
//! - `Color` - ramp glyphs annotated with the source color
//! - `Braille` - 2x4 dots per character
//! - `Edges` - Sobel gradient direction glyphs
//! - `Floyd`, `Bayer`, `Atkinson` - dithered ramps

pub mod braille;
mod charset;
mod dimensions;
pub mod dither;
mod downsample;
pub mod edges;
mod grayscale;
mod mapping;
mod options;
mod pixels;
mod render;

pub use charset::{
    CharSet, Ramp, BINARY_CHARSET, BLOCKS_CHARSET, DETAILED_CHARSET, DOTS_CHARSET, SIMPLE_CHARSET,
    STANDARD_CHARSET, TECH_CHARSET,
};
pub use dimensions::{braille_dimensions, grid_dimensions, MAX_GRID_CELLS};
pub use downsample::sample;
pub use edges::EdgeDirection;
pub use grayscale::{luminance, to_grayscale};
pub use mapping::{grayscale_to_char, grayscale_to_index, ColorCell, ColorGrid};
pub use options::{
    RenderOptions, SampleFilter, DEFAULT_ASPECT_RATIO, DEFAULT_OUTPUT_WIDTH, DEFAULT_THRESHOLD,
};
pub use pixels::{PixelBuffer, BYTES_PER_PIXEL};
pub use render::{
    render_atkinson, render_bayer, render_braille, render_classic, render_color, render_edges,
    render_floyd, RenderMode, Rendered,
};

pub use braille::{grid_to_braille, BRAILLE_BASE};
