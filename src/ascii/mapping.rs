//! Brightness to character mapping: the classic and color renderers.

use super::charset::Ramp;
use super::grayscale::luminance;
use super::pixels::PixelBuffer;

/// Map a luminance value to a ramp index.
///
/// `idx = floor(gray / 255 * (levels - 1))`, clamped to `[0, levels - 1]` so
/// out-of-range input (error-diffused values can overshoot) still picks a
/// valid glyph. `levels` must be at least 1.
#[inline]
pub fn grayscale_to_index(gray: f32, levels: usize) -> usize {
    let max = levels.saturating_sub(1);
    let idx = (gray / 255.0 * max as f32).floor();
    // Saturating cast sends NaN and negatives to 0
    (idx as usize).min(max)
}

/// Map a luminance value to a glyph, optionally reversing the ramp.
#[inline]
pub fn grayscale_to_char(gray: f32, ramp: &Ramp, invert: bool) -> char {
    let idx = grayscale_to_index(gray, ramp.len());
    let idx = if invert { ramp.len() - 1 - idx } else { idx };
    ramp.glyph(idx)
}

/// A glyph together with the color of the pixel it was picked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCell {
    pub glyph: char,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Grid of colored glyphs produced by the color renderer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorGrid {
    width: u32,
    height: u32,
    cells: Vec<ColorCell>,
}

impl ColorGrid {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[ColorCell] {
        &self.cells
    }

    /// Iterate over rows of cells.
    pub fn rows(&self) -> impl Iterator<Item = &[ColorCell]> {
        // chunks() panics on 0; an empty grid has no cells anyway
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// The glyphs alone, `'\n'` after every row.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for row in self.rows() {
            out.extend(row.iter().map(|c| c.glyph));
            out.push('\n');
        }
        out
    }
}

/// Render a sampled buffer with the classic luminance ramp.
///
/// One glyph per pixel, `'\n'` after every row including the last.
pub fn render_classic(sampled: &PixelBuffer, ramp: &Ramp, invert: bool) -> String {
    let width = sampled.width() as usize;
    let mut out = String::with_capacity((width + 1) * sampled.height() as usize);

    for y in 0..sampled.height() {
        for x in 0..sampled.width() {
            let [r, g, b] = sampled.rgb(x, y);
            out.push(grayscale_to_char(luminance(r, g, b), ramp, invert));
        }
        out.push('\n');
    }

    out
}

/// Render a sampled buffer as glyphs annotated with their pixel color.
///
/// Uses the same index as [`render_classic`] but never inverts the ramp.
pub fn render_color(sampled: &PixelBuffer, ramp: &Ramp) -> ColorGrid {
    let cells = sampled
        .pixels()
        .map(|px| ColorCell {
            glyph: grayscale_to_char(luminance(px[0], px[1], px[2]), ramp, false),
            r: px[0],
            g: px[1],
            b: px[2],
        })
        .collect();

    ColorGrid {
        width: sampled.width(),
        height: sampled.height(),
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::charset::CharSet;

    #[test]
    fn test_index_endpoints() {
        assert_eq!(grayscale_to_index(0.0, 10), 0);
        assert_eq!(grayscale_to_index(255.0, 10), 9);
        assert_eq!(grayscale_to_index(254.9, 2), 0);
    }

    #[test]
    fn test_index_clamps_out_of_range() {
        assert_eq!(grayscale_to_index(-40.0, 10), 0);
        assert_eq!(grayscale_to_index(400.0, 10), 9);
        assert_eq!(grayscale_to_index(f32::NAN, 10), 0);
    }

    #[test]
    fn test_index_always_in_range() {
        for cs in CharSet::ALL.iter().filter(|c| **c != CharSet::Custom) {
            let levels = cs.chars().len();
            for g in 0..=255 {
                assert!(grayscale_to_index(g as f32, levels) < levels);
            }
        }
    }

    #[test]
    fn test_invert_reverses() {
        let ramp = Ramp::custom("abc");
        assert_eq!(grayscale_to_char(0.0, &ramp, false), 'a');
        assert_eq!(grayscale_to_char(0.0, &ramp, true), 'c');
        assert_eq!(grayscale_to_char(255.0, &ramp, true), 'a');
    }

    #[test]
    fn test_classic_rows() {
        let buf = PixelBuffer::from_rgb(2, 2, &[0, 0, 0, 255, 255, 255, 0, 0, 0, 255, 255, 255])
            .unwrap();
        assert_eq!(render_classic(&buf, &Ramp::custom("01"), false), "01\n01\n");
        assert_eq!(render_classic(&buf, &Ramp::custom("01"), true), "10\n10\n");
    }

    #[test]
    fn test_color_keeps_rgb_and_ignores_invert() {
        let buf = PixelBuffer::from_rgb(2, 1, &[200, 10, 10, 0, 0, 0]).unwrap();
        let grid = render_color(&buf, &Ramp::custom("01"));
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 1);
        assert_eq!(
            grid.cells()[0],
            ColorCell {
                glyph: '0',
                r: 200,
                g: 10,
                b: 10
            }
        );
        assert_eq!(grid.to_text(), "00\n");
    }
}
