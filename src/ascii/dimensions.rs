//! Character grid dimensions for aspect-ratio-correct rendering.

/// Upper bound on `columns * rows` for a character grid.
///
/// Very large aspect ratios would otherwise ask the sampler for billions of
/// cells. Rows are cut back so the grid stays within this many cells.
pub const MAX_GRID_CELLS: u64 = 1 << 22;

/// Calculate the character grid for a source image.
///
/// The width is taken as requested; the height follows the image aspect
/// ratio scaled by the glyph aspect ratio:
///
/// ```text
/// rows = floor(img_height / img_width * columns * char_aspect)
/// ```
///
/// The product is evaluated in `f64` so exact integer results are not lost
/// to rounding. `char_aspect` is glyph width divided by glyph height (about
/// 0.5 for terminal fonts). The row count is clamped to at least 1, so tiny
/// or non-finite aspect ratios still produce a single row, and to at most
/// `MAX_GRID_CELLS / columns` (but never below 1).
///
/// Callers must reject a zero-sized image or zero columns beforehand; this
/// function returns `(0, 0)` for them.
///
/// # Example
/// ```
/// use glyphcast::ascii::grid_dimensions;
/// // 640x480 at 80 columns with 2:1 glyphs
/// assert_eq!(grid_dimensions(640, 480, 80, 0.5), (80, 30));
/// ```
pub fn grid_dimensions(img_width: u32, img_height: u32, columns: u32, char_aspect: f32) -> (u32, u32) {
    if img_width == 0 || img_height == 0 || columns == 0 {
        return (0, 0);
    }

    let rows = img_height as f64 / img_width as f64 * columns as f64 * char_aspect as f64;
    if !rows.is_finite() {
        return (columns, 1);
    }

    let max_rows = (MAX_GRID_CELLS / columns as u64).max(1);
    let rows = rows.floor();
    let rows = if rows >= max_rows as f64 {
        max_rows
    } else {
        // Saturating cast: negatives land on 0
        (rows as u64).max(1)
    };

    (columns, rows as u32)
}

/// Sampling resolution for braille output.
///
/// Braille works at dot granularity, so the sampled buffer is twice the
/// character grid in both directions.
pub fn braille_dimensions(img_width: u32, img_height: u32, columns: u32, char_aspect: f32) -> (u32, u32) {
    let (w, h) = grid_dimensions(img_width, img_height, columns, char_aspect);
    (w.saturating_mul(2), h.saturating_mul(2))
}
