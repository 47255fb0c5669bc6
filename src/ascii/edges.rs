//! Sobel edge detection rendering.
//!
//! Every pixel is classified by the direction of its luminance gradient and
//! drawn as a line glyph; pixels whose gradient is weaker than the threshold
//! stay blank.

use super::grayscale::to_grayscale;
use super::pixels::PixelBuffer;

/// Horizontal gradient kernel.
pub const SOBEL_X: [[f32; 3]; 3] = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];

/// Vertical gradient kernel.
pub const SOBEL_Y: [[f32; 3]; 3] = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Glyph for pixels below the edge threshold.
pub const EMPTY_GLYPH: char = ' ';

/// Dominant orientation of a gradient, folded into `[0, 180)` degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeDirection {
    /// `[0, 22.5)` and `[157.5, 180)`
    Horizontal,
    /// `[22.5, 67.5)`
    DiagonalRight,
    /// `[67.5, 112.5)`
    Vertical,
    /// `[112.5, 157.5)`
    DiagonalLeft,
}

impl EdgeDirection {
    /// Classify a gradient by `atan2(gy, gx)`.
    pub fn from_gradient(gx: f32, gy: f32) -> Self {
        let deg = (gy.atan2(gx).to_degrees() + 180.0) % 180.0;
        Self::from_degrees(deg)
    }

    /// Classify an angle already folded into `[0, 180)`.
    pub fn from_degrees(deg: f32) -> Self {
        if deg < 22.5 || deg >= 157.5 {
            EdgeDirection::Horizontal
        } else if deg < 67.5 {
            EdgeDirection::DiagonalRight
        } else if deg < 112.5 {
            EdgeDirection::Vertical
        } else {
            EdgeDirection::DiagonalLeft
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            EdgeDirection::Horizontal => '─',
            EdgeDirection::DiagonalRight => '/',
            EdgeDirection::Vertical => '│',
            EdgeDirection::DiagonalLeft => '\\',
        }
    }
}

/// Sobel gradient `(gx, gy)` at `(x, y)`.
///
/// Neighbors outside the image are replaced by the nearest edge pixel.
pub fn sobel_at(gray: &[f32], width: usize, height: usize, x: usize, y: usize) -> (f32, f32) {
    let mut gx = 0.0;
    let mut gy = 0.0;

    for ky in 0..3 {
        let sy = (y + ky).saturating_sub(1).min(height - 1);
        for kx in 0..3 {
            let sx = (x + kx).saturating_sub(1).min(width - 1);
            let val = gray[sy * width + sx];
            gx += SOBEL_X[ky][kx] * val;
            gy += SOBEL_Y[ky][kx] * val;
        }
    }

    (gx, gy)
}

/// Render a sampled buffer as edge glyphs.
///
/// A pixel is blank when `sqrt(gx² + gy²) < threshold`; otherwise it gets
/// the glyph for its [`EdgeDirection`]. Rows end with `'\n'`.
pub fn render(sampled: &PixelBuffer, threshold: u8) -> String {
    let width = sampled.width() as usize;
    let height = sampled.height() as usize;
    let gray = to_grayscale(sampled);
    let threshold = threshold as f32;

    let mut out = String::with_capacity((width * 3 + 1) * height);

    for y in 0..height {
        for x in 0..width {
            let (gx, gy) = sobel_at(&gray, width, height, x, y);
            let magnitude = (gx * gx + gy * gy).sqrt();
            if magnitude < threshold {
                out.push(EMPTY_GLYPH);
            } else {
                out.push(EdgeDirection::from_gradient(gx, gy).glyph());
            }
        }
        out.push('\n');
    }

    out
}
