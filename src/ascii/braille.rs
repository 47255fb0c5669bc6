//! Braille dot-matrix rendering.
//!
//! Each braille character represents a 2x4 dot matrix, giving 8 subpixels per
//! character cell. The renderer works on a buffer sampled at twice the
//! character grid and walks it in 2-wide, 4-tall blocks.

use super::grayscale::luminance;
use super::pixels::PixelBuffer;

/// Braille base character (U+2800, empty braille pattern).
pub const BRAILLE_BASE: char = '\u{2800}';

/// Dot bit for each position, indexed `[dy][dx]`.
///
/// ```text
/// dot 1 = 0x01   dot 4 = 0x08
/// dot 2 = 0x02   dot 5 = 0x10
/// dot 3 = 0x04   dot 6 = 0x20
/// dot 7 = 0x40   dot 8 = 0x80
/// ```
pub const BRAILLE_BITS: [[u8; 2]; 4] = [[0x01, 0x08], [0x02, 0x10], [0x04, 0x20], [0x40, 0x80]];

/// Convert a 2x4 boolean grid to a braille character.
///
/// `grid[x][y]` is the dot in column `x` (0-1), row `y` (0-3).
pub fn grid_to_braille(grid: [[bool; 4]; 2]) -> char {
    let mut code = 0u8;
    for (dy, bits) in BRAILLE_BITS.iter().enumerate() {
        for (dx, bit) in bits.iter().enumerate() {
            if grid[dx][dy] {
                code |= bit;
            }
        }
    }
    braille_char(code)
}

/// Braille character for an 8-bit dot pattern.
#[inline]
pub fn braille_char(bits: u8) -> char {
    char::from_u32(BRAILLE_BASE as u32 | bits as u32).unwrap_or(BRAILLE_BASE)
}

/// Whether a dot is raised for a pixel of luminance `gray`.
///
/// Dots mark dark pixels: `gray < threshold`. `invert` raises dots for
/// bright pixels instead (`gray > threshold`). A pixel exactly at the
/// threshold is never raised.
#[inline]
pub fn dot_on(gray: f32, threshold: u8, invert: bool) -> bool {
    let threshold = threshold as f32;
    if invert {
        gray > threshold
    } else {
        gray < threshold
    }
}

/// Render a dot-resolution buffer as braille characters.
///
/// The output has `ceil(width / 2)` columns and `ceil(height / 4)` rows,
/// with `'\n'` after every row. Dots in a partial block past the buffer edge
/// are left off.
pub fn render(sampled: &PixelBuffer, threshold: u8, invert: bool) -> String {
    let width = sampled.width();
    let height = sampled.height();
    let cols = width.div_ceil(2) as usize;
    let rows = height.div_ceil(4) as usize;

    let mut out = String::with_capacity(rows * (cols * 3 + 1));

    for by in (0..height).step_by(4) {
        for bx in (0..width).step_by(2) {
            let mut dots = [[false; 4]; 2];

            for (dy, y) in (by..height.min(by + 4)).enumerate() {
                for (dx, column) in dots.iter_mut().enumerate() {
                    let x = bx + dx as u32;
                    if x >= width {
                        break;
                    }
                    let [r, g, b] = sampled.rgb(x, y);
                    column[dy] = dot_on(luminance(r, g, b), threshold, invert);
                }
            }

            out.push(grid_to_braille(dots));
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, v: u8) -> PixelBuffer {
        let rgb = vec![v; width as usize * height as usize * 3];
        PixelBuffer::from_rgb(width, height, &rgb).unwrap()
    }

    #[test]
    fn test_braille_base() {
        assert_eq!(BRAILLE_BASE, '\u{2800}');
    }

    #[test]
    fn test_grid_to_braille_empty() {
        let grid = [[false; 4]; 2];
        assert_eq!(grid_to_braille(grid), BRAILLE_BASE);
    }

    #[test]
    fn test_grid_to_braille_full() {
        let grid = [[true; 4]; 2];
        assert_eq!(grid_to_braille(grid), '\u{28FF}');
    }

    #[test]
    fn test_grid_to_braille_single_dots() {
        // Top-left dot only
        let mut grid = [[false; 4]; 2];
        grid[0][0] = true;
        assert_eq!(grid_to_braille(grid), '\u{2801}');

        // Top-right dot only
        let mut grid = [[false; 4]; 2];
        grid[1][0] = true;
        assert_eq!(grid_to_braille(grid), '\u{2808}');

        // Bottom row uses dots 7 and 8
        let mut grid = [[false; 4]; 2];
        grid[0][3] = true;
        grid[1][3] = true;
        assert_eq!(grid_to_braille(grid), '\u{28C0}');
    }

    #[test]
    fn test_black_block_is_full() {
        assert_eq!(render(&solid(2, 4, 0), 128, false), "\u{28FF}\n");
    }

    #[test]
    fn test_white_block_is_empty() {
        assert_eq!(render(&solid(2, 4, 255), 128, false), "\u{2800}\n");
    }

    #[test]
    fn test_invert_swaps() {
        assert_eq!(render(&solid(2, 4, 255), 128, true), "\u{28FF}\n");
        assert_eq!(render(&solid(2, 4, 0), 128, true), "\u{2800}\n");
    }

    #[test]
    fn test_threshold_is_strict() {
        // Gray 128 is neither below nor above 128
        assert_eq!(render(&solid(2, 4, 128), 128, false), "\u{2800}\n");
        assert_eq!(render(&solid(2, 4, 128), 128, true), "\u{2800}\n");
    }

    #[test]
    fn test_partial_block_skips_missing_dots() {
        // 1 column x 2 rows of black: only dots 1 and 2 exist
        assert_eq!(render(&solid(1, 2, 0), 128, false), "\u{2803}\n");
    }

    #[test]
    fn test_render_matches_dot_grid() {
        // Diagonal of dark dots from top-left to bottom-right
        #[rustfmt::skip]
        let rgb: Vec<u8> = [
            0, 255,
            255, 0,
            0, 255,
            255, 0,
        ].iter().flat_map(|&v| [v, v, v]).collect();
        let img = PixelBuffer::from_rgb(2, 4, &rgb).unwrap();

        let mut grid = [[false; 4]; 2];
        grid[0][0] = true;
        grid[1][1] = true;
        grid[0][2] = true;
        grid[1][3] = true;
        let expected = grid_to_braille(grid);
        assert_eq!(expected, '\u{2895}');
        assert_eq!(render(&img, 128, false), format!("{}\n", expected));
    }

    #[test]
    fn test_output_shape() {
        let out = render(&solid(6, 10, 0), 128, false);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.chars().count() == 3));
    }
}
