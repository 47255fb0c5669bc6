//! RGBA pixel buffer handed to the engine by an image loader.

use crate::error::RenderError;

/// Bytes per RGBA pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// An immutable RGBA8 image, row-major with the origin at the top-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap an RGBA byte buffer.
    ///
    /// Fails with [`RenderError::BufferLength`] when `data` is not exactly
    /// `width * height * 4` bytes long. Zero-sized images are accepted here
    /// and rejected when rendering.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, RenderError> {
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if data.len() != expected {
            return Err(RenderError::BufferLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build an opaque buffer from packed RGB triplets.
    pub fn from_rgb(width: u32, height: u32, rgb: &[u8]) -> Result<Self, RenderError> {
        let expected = width as usize * height as usize * 3;
        if rgb.len() != expected {
            return Err(RenderError::BufferLength {
                expected,
                actual: rgb.len(),
            });
        }
        let mut data = Vec::with_capacity(width as usize * height as usize * BYTES_PER_PIXEL);
        for px in rgb.chunks_exact(3) {
            data.extend_from_slice(&[px[0], px[1], px[2], 255]);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A 0x0 buffer.
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            data: Vec::new(),
        }
    }

    /// Wrap bytes whose length the caller has already guaranteed.
    pub(crate) fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize * BYTES_PER_PIXEL);
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// RGBA value at `(x, y)`. Callers must stay in bounds.
    #[inline]
    pub fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }

    /// RGB triple at `(x, y)`, alpha dropped.
    #[inline]
    pub fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        let [r, g, b, _] = self.rgba(x, y);
        [r, g, b]
    }

    /// Iterate over pixels in row-major order as RGBA slices.
    pub fn pixels(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(BYTES_PER_PIXEL)
    }
}
