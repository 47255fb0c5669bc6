//! Dithering renderers: Floyd-Steinberg, ordered (Bayer) and Atkinson.
//!
//! All three start from a per-call grayscale buffer. The two error-diffusion
//! renderers quantize that buffer in place, strictly in row-major order,
//! because each pixel's error lands on neighbors that have not been visited
//! yet.

use super::charset::Ramp;
use super::grayscale::to_grayscale;
use super::mapping::grayscale_to_index;
use super::pixels::PixelBuffer;

/// 4x4 Bayer threshold matrix (0-15).
#[rustfmt::skip]
pub const BAYER_4X4: [[u8; 4]; 4] = [
    [ 0,  8,  2, 10],
    [12,  4, 14,  6],
    [ 3, 11,  1,  9],
    [15,  7, 13,  5],
];

/// Atkinson neighbor offsets `(dx, dy)`; each receives a full eighth of the
/// error, so 2/8 is dropped.
const ATKINSON_OFFSETS: [(isize, isize); 6] = [(1, 0), (2, 0), (-1, 1), (0, 1), (1, 1), (0, 2)];

/// Floyd-Steinberg neighbor offsets and weights (sixteenths).
const FLOYD_STEINBERG_OFFSETS: [(isize, isize, f32); 4] =
    [(1, 0, 7.0), (-1, 1, 3.0), (0, 1, 5.0), (1, 1, 1.0)];

/// Add `amount` to the cell at `(x + dx, y + dy)` if it is inside the buffer.
#[inline]
#[allow(clippy::too_many_arguments)]
fn diffuse(gray: &mut [f32], width: usize, height: usize, x: usize, y: usize, dx: isize, dy: isize, amount: f32) {
    let nx = x as isize + dx;
    let ny = y as isize + dy;
    if nx < 0 || ny < 0 || nx as usize >= width || ny as usize >= height {
        return;
    }
    gray[ny as usize * width + nx as usize] += amount;
}

/// Turn a quantized grayscale buffer into ramp glyphs, one row per line.
fn glyph_rows(gray: &[f32], width: usize, ramp: &Ramp) -> String {
    let height = if width == 0 { 0 } else { gray.len() / width };
    let mut out = String::with_capacity((width + 1) * height);
    for row in gray.chunks(width.max(1)) {
        for &v in row {
            out.push(ramp.glyph(grayscale_to_index(v, ramp.len())));
        }
        out.push('\n');
    }
    out
}

/// Quantize the value at `(x, y)` to the nearest multiple of `step` and push
/// the rounding error onto the Floyd-Steinberg neighbors.
fn floyd_steinberg_step(gray: &mut [f32], width: usize, height: usize, x: usize, y: usize, step: f32) {
    let idx = y * width + x;
    let old = gray[idx];
    let new = ((old / step).round() * step).clamp(0.0, 255.0);
    gray[idx] = new;

    let error = old - new;
    for (dx, dy, weight) in FLOYD_STEINBERG_OFFSETS {
        diffuse(gray, width, height, x, y, dx, dy, error * weight / 16.0);
    }
}

/// Quantize `gray` in place with Floyd-Steinberg error diffusion.
///
/// Each value is snapped to the nearest of `levels` equal steps across
/// `[0, 255]` (clamped to that range) and the rounding error is spread
/// 7/16 right, 3/16 below-left, 5/16 below and 1/16 below-right.
pub fn floyd_steinberg_in_place(gray: &mut [f32], width: usize, height: usize, levels: usize) {
    let step = 255.0 / levels.saturating_sub(1).max(1) as f32;

    for y in 0..height {
        for x in 0..width {
            floyd_steinberg_step(gray, width, height, x, y, step);
        }
    }
}

/// Snap the value at `(x, y)` to 0 or 255 and give each Atkinson neighbor
/// an eighth of the error.
fn atkinson_step(gray: &mut [f32], width: usize, height: usize, x: usize, y: usize) {
    let idx = y * width + x;
    let old = gray[idx];
    let new = if old > 128.0 { 255.0 } else { 0.0 };
    gray[idx] = new;

    let error = (old - new) / 8.0;
    for (dx, dy) in ATKINSON_OFFSETS {
        diffuse(gray, width, height, x, y, dx, dy, error);
    }
}

/// Quantize `gray` in place to 0/255 with Atkinson error diffusion.
pub fn atkinson_in_place(gray: &mut [f32], width: usize, height: usize) {
    for y in 0..height {
        for x in 0..width {
            atkinson_step(gray, width, height, x, y);
        }
    }
}

/// Ordered-dither one luminance value at `(x, y)`.
///
/// `threshold = M[y % 4][x % 4] / 16 * 255`, then
/// `clamp(gray + threshold - 128, 0, 255)`.
#[inline]
pub fn bayer_adjust(gray: f32, x: usize, y: usize) -> f32 {
    let threshold = BAYER_4X4[y % 4][x % 4] as f32 / 16.0 * 255.0;
    (gray + (threshold - 128.0)).clamp(0.0, 255.0)
}

/// Render with Floyd-Steinberg dithering over the ramp's levels.
pub fn render_floyd(sampled: &PixelBuffer, ramp: &Ramp) -> String {
    let width = sampled.width() as usize;
    let height = sampled.height() as usize;
    let mut gray = to_grayscale(sampled);
    floyd_steinberg_in_place(&mut gray, width, height, ramp.len());
    glyph_rows(&gray, width, ramp)
}

/// Render with the 4x4 Bayer matrix. Stateless per pixel.
pub fn render_bayer(sampled: &PixelBuffer, ramp: &Ramp) -> String {
    let width = sampled.width() as usize;
    let mut gray = to_grayscale(sampled);
    for (i, v) in gray.iter_mut().enumerate() {
        *v = bayer_adjust(*v, i % width, i / width);
    }
    glyph_rows(&gray, width, ramp)
}

/// Render with Atkinson dithering; only the first and last glyph appear.
pub fn render_atkinson(sampled: &PixelBuffer, ramp: &Ramp) -> String {
    let width = sampled.width() as usize;
    let height = sampled.height() as usize;
    let mut gray = to_grayscale(sampled);
    atkinson_in_place(&mut gray, width, height);
    glyph_rows(&gray, width, ramp)
}
