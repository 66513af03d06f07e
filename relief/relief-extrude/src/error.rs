//! Error types for relief extrusion.

use thiserror::Error;

/// Result type for relief extrusion operations.
pub type ExtrudeResult<T> = Result<T, ExtrudeError>;

/// Errors raised when extrusion input fails validation.
///
/// All variants are caller errors detected before any geometry is built; a
/// well-formed bitmap with valid dimensions never fails to extrude.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtrudeError {
    /// Pixel buffer length does not match the declared image dimensions.
    #[error("pixel buffer length mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch {
        /// Expected length, `width * height`.
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },

    /// Image width or height is zero.
    #[error("invalid image size {width}x{height}: both sides must be at least 1 pixel")]
    InvalidImageSize {
        /// Declared width in pixels.
        width: u32,
        /// Declared height in pixels.
        height: u32,
    },

    /// Physical dimensions are not positive finite millimeter values.
    #[error("invalid physical dimensions {width}x{height}x{depth}: all axes must be positive finite millimeters")]
    InvalidDimensions {
        /// Footprint width in mm.
        width: f64,
        /// Footprint height in mm.
        height: f64,
        /// Extrusion depth in mm.
        depth: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_offending_values() {
        let err = ExtrudeError::BufferSizeMismatch {
            expected: 100,
            actual: 99,
        };
        let message = err.to_string();
        assert!(message.contains("100"));
        assert!(message.contains("99"));

        let err = ExtrudeError::InvalidImageSize {
            width: 0,
            height: 32,
        };
        assert!(err.to_string().contains("0x32"));
    }
}
