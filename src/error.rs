//! Error types for the rendering engine.

/// Errors that can occur when preparing or running a render.
///
/// All of these are detected before any sampling happens; once a render
/// starts it always produces output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("invalid dimensions: source is {width}x{height}, output width is {output_width}")]
    InvalidDimensions {
        /// Source image width in pixels
        width: u32,
        /// Source image height in pixels
        height: u32,
        /// Requested output width in characters
        output_width: u32,
    },

    #[error("character ramp needs at least 2 glyphs, got {len}")]
    EmptyRamp {
        /// Number of glyphs in the rejected ramp
        len: usize,
    },

    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    BufferLength {
        /// Byte length implied by width * height * 4
        expected: usize,
        /// Byte length actually supplied
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RenderError::InvalidDimensions {
            width: 0,
            height: 10,
            output_width: 80,
        };
        assert_eq!(
            err.to_string(),
            "invalid dimensions: source is 0x10, output width is 80"
        );

        let err = RenderError::EmptyRamp { len: 1 };
        assert_eq!(err.to_string(), "character ramp needs at least 2 glyphs, got 1");
    }
}
