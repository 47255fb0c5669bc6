//! RGB to grayscale conversion using the ITU-R BT.601 luminance formula.

use super::pixels::PixelBuffer;

/// Luminance of one RGB triple: `0.299*R + 0.587*G + 0.114*B`.
///
/// The result is in `[0.0, 255.0]`; pure white is exactly `255.0`. Alpha is
/// not considered.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> f32 {
    0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32
}

/// Convert a whole RGBA buffer to one luminance value per pixel.
///
/// The returned vector is row-major with `width * height` entries. Error
/// diffusion renderers take ownership of it and write quantized values back.
pub fn to_grayscale(buffer: &PixelBuffer) -> Vec<f32> {
    buffer
        .pixels()
        .map(|px| luminance(px[0], px[1], px[2]))
        .collect()
}
