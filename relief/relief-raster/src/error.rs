//! Error types for raster decoding.

use thiserror::Error;

/// Result type for raster operations.
pub type RasterResult<T> = Result<T, RasterError>;

/// Errors raised while turning encoded image bytes into a bitmap.
#[derive(Debug, Error)]
pub enum RasterError {
    /// The byte stream is not a decodable image.
    #[error("image decode error: {0}")]
    Decode(#[from] image::ImageError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode_grayscale;

    #[test]
    fn garbage_bytes_produce_decode_error() {
        let err = decode_grayscale(b"definitely not an image").unwrap_err();
        assert!(matches!(err, RasterError::Decode(_)));
        assert!(err.to_string().contains("image decode error"));
    }
}
