//! Resampling the source image to the character (or dot) grid.

use super::options::SampleFilter;
use super::pixels::{PixelBuffer, BYTES_PER_PIXEL};

/// Resample `source` to `width x height` RGBA pixels.
///
/// Both filters are deterministic. `Nearest` picks the pixel at
/// `floor(dst * src_dim / dst_dim)`; `Area` averages the source rectangle
/// covered by each output cell and always covers at least one pixel, so
/// upscaling degrades to nearest.
///
/// Returns an empty buffer when either side is zero-sized.
pub fn sample(source: &PixelBuffer, width: u32, height: u32, filter: SampleFilter) -> PixelBuffer {
    if width == 0 || height == 0 || source.is_empty() {
        return PixelBuffer::empty();
    }

    log::trace!(
        "sampling {}x{} -> {}x{} ({:?})",
        source.width(),
        source.height(),
        width,
        height,
        filter
    );

    let data = match filter {
        SampleFilter::Nearest => sample_nearest(source, width, height),
        SampleFilter::Area => sample_area(source, width, height),
    };

    PixelBuffer::from_raw(width, height, data)
}

/// Map an output coordinate to the first source coordinate it covers.
#[inline]
fn source_start(dst: u32, dst_len: u32, src_len: u32) -> u32 {
    ((dst as u64 * src_len as u64) / dst_len as u64) as u32
}

fn sample_nearest(source: &PixelBuffer, width: u32, height: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity(width as usize * height as usize * BYTES_PER_PIXEL);

    for y in 0..height {
        let src_y = source_start(y, height, source.height());
        for x in 0..width {
            let src_x = source_start(x, width, source.width());
            data.extend_from_slice(&source.rgba(src_x, src_y));
        }
    }

    data
}

fn sample_area(source: &PixelBuffer, width: u32, height: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity(width as usize * height as usize * BYTES_PER_PIXEL);

    for y in 0..height {
        let start_y = source_start(y, height, source.height());
        let end_y = source_start(y + 1, height, source.height()).max(start_y + 1);

        for x in 0..width {
            let start_x = source_start(x, width, source.width());
            let end_x = source_start(x + 1, width, source.width()).max(start_x + 1);

            let mut sum = [0u64; BYTES_PER_PIXEL];
            let mut count = 0u64;

            for py in start_y..end_y {
                for px in start_x..end_x {
                    for (acc, v) in sum.iter_mut().zip(source.rgba(px, py)) {
                        *acc += v as u64;
                    }
                    count += 1;
                }
            }

            for acc in sum {
                data.push((acc / count) as u8);
            }
        }
    }

    data
}
