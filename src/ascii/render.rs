//! Render entry points: validation, sampling and dispatch.

use serde::Deserialize;

use super::braille;
use super::dimensions::{braille_dimensions, grid_dimensions};
use super::dither;
use super::downsample::sample;
use super::edges;
use super::mapping::{self, ColorGrid};
use super::options::RenderOptions;
use super::pixels::PixelBuffer;
use crate::error::RenderError;

/// Rendering algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Luminance ramp
    #[default]
    Classic,
    /// Luminance ramp with per-glyph color
    Color,
    /// 2x4 braille dots per character
    Braille,
    /// Sobel edge directions
    Edges,
    /// Floyd-Steinberg error diffusion
    Floyd,
    /// 4x4 Bayer ordered dithering
    Bayer,
    /// Atkinson error diffusion
    Atkinson,
}

impl RenderMode {
    pub const ALL: [RenderMode; 7] = [
        RenderMode::Classic,
        RenderMode::Color,
        RenderMode::Braille,
        RenderMode::Edges,
        RenderMode::Floyd,
        RenderMode::Bayer,
        RenderMode::Atkinson,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RenderMode::Classic => "classic",
            RenderMode::Color => "color",
            RenderMode::Braille => "braille",
            RenderMode::Edges => "edges",
            RenderMode::Floyd => "floyd",
            RenderMode::Bayer => "bayer",
            RenderMode::Atkinson => "atkinson",
        }
    }

    /// Whether this mode maps luminance through the character ramp.
    pub fn uses_ramp(&self) -> bool {
        !matches!(self, RenderMode::Braille | RenderMode::Edges)
    }

    /// Render `source` with this mode.
    pub fn render(&self, source: &PixelBuffer, options: &RenderOptions) -> Result<Rendered, RenderError> {
        log::debug!("rendering {}x{} with {} mode", source.width(), source.height(), self.name());

        let rendered = match self {
            RenderMode::Classic => Rendered::Text(render_classic(source, options)?),
            RenderMode::Color => Rendered::Colored(render_color(source, options)?),
            RenderMode::Braille => Rendered::Text(render_braille(source, options)?),
            RenderMode::Edges => Rendered::Text(render_edges(source, options)?),
            RenderMode::Floyd => Rendered::Text(render_floyd(source, options)?),
            RenderMode::Bayer => Rendered::Text(render_bayer(source, options)?),
            RenderMode::Atkinson => Rendered::Text(render_atkinson(source, options)?),
        };
        Ok(rendered)
    }
}

/// Output of a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// Glyph rows, each terminated by `'\n'`
    Text(String),
    /// Glyphs with the color of their source pixel
    Colored(ColorGrid),
}

impl Rendered {
    /// The glyphs alone, without color.
    pub fn text(&self) -> String {
        match self {
            Rendered::Text(text) => text.clone(),
            Rendered::Colored(grid) => grid.to_text(),
        }
    }
}

fn check_dimensions(source: &PixelBuffer, options: &RenderOptions) -> Result<(), RenderError> {
    if source.is_empty() || options.output_width == 0 {
        return Err(RenderError::InvalidDimensions {
            width: source.width(),
            height: source.height(),
            output_width: options.output_width,
        });
    }
    Ok(())
}

/// Validate inputs for a ramp-based mode and sample to the character grid.
fn sample_grid(source: &PixelBuffer, options: &RenderOptions) -> Result<PixelBuffer, RenderError> {
    check_dimensions(source, options)?;
    options.ramp.validate()?;

    let (width, height) = grid_dimensions(
        source.width(),
        source.height(),
        options.output_width,
        options.aspect_ratio,
    );
    log::debug!("character grid {}x{}", width, height);

    Ok(sample(source, width, height, options.filter))
}

/// Classic luminance-ramp rendering.
pub fn render_classic(source: &PixelBuffer, options: &RenderOptions) -> Result<String, RenderError> {
    let sampled = sample_grid(source, options)?;
    Ok(mapping::render_classic(&sampled, &options.ramp, options.invert))
}

/// Ramp rendering that keeps each pixel's RGB. `invert` is not applied.
pub fn render_color(source: &PixelBuffer, options: &RenderOptions) -> Result<ColorGrid, RenderError> {
    let sampled = sample_grid(source, options)?;
    Ok(mapping::render_color(&sampled, &options.ramp))
}

/// Braille rendering at twice the character grid resolution.
///
/// Produces `output_width` columns and `ceil(rows / 2)` lines, where `rows`
/// is the classic grid height. The ramp is not used.
///
/// Dots mark dark pixels (`gray < threshold`), so a black block is `U+28FF`
/// and a white block is `U+2800`; `invert` raises dots for bright pixels.
pub fn render_braille(source: &PixelBuffer, options: &RenderOptions) -> Result<String, RenderError> {
    check_dimensions(source, options)?;

    let (width, height) = braille_dimensions(
        source.width(),
        source.height(),
        options.output_width,
        options.aspect_ratio,
    );
    log::debug!("braille dot grid {}x{}", width, height);

    let sampled = sample(source, width, height, options.filter);
    Ok(braille::render(&sampled, options.threshold, options.invert))
}

/// Sobel edge rendering. The ramp is not used.
pub fn render_edges(source: &PixelBuffer, options: &RenderOptions) -> Result<String, RenderError> {
    check_dimensions(source, options)?;

    let (width, height) = grid_dimensions(
        source.width(),
        source.height(),
        options.output_width,
        options.aspect_ratio,
    );
    log::debug!("character grid {}x{}", width, height);

    let sampled = sample(source, width, height, options.filter);
    Ok(edges::render(&sampled, options.threshold))
}

/// Floyd-Steinberg dithering over the ramp's levels.
pub fn render_floyd(source: &PixelBuffer, options: &RenderOptions) -> Result<String, RenderError> {
    let sampled = sample_grid(source, options)?;
    Ok(dither::render_floyd(&sampled, &options.ramp))
}

/// Bayer ordered dithering.
pub fn render_bayer(source: &PixelBuffer, options: &RenderOptions) -> Result<String, RenderError> {
    let sampled = sample_grid(source, options)?;
    Ok(dither::render_bayer(&sampled, &options.ramp))
}

/// Atkinson dithering.
pub fn render_atkinson(source: &PixelBuffer, options: &RenderOptions) -> Result<String, RenderError> {
    let sampled = sample_grid(source, options)?;
    Ok(dither::render_atkinson(&sampled, &options.ramp))
}
