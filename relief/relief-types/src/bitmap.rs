//! Grayscale pixel buffer.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A row-major 8-bit grayscale pixel buffer.
///
/// One intensity sample per pixel, 0 for black through 255 for white,
/// stored row by row from the top-left corner. The buffer is produced by
/// the raster front end and read exactly once by the extruder; nothing in
/// the pipeline mutates it.
///
/// A well-formed bitmap has `data.len() == width * height` and both sides
/// at least 1. [`Bitmap::has_valid_buffer`] checks the length advisorily;
/// the extruder rejects malformed input with a typed error before building
/// any geometry.
///
/// # Example
///
/// ```
/// use relief_types::Bitmap;
///
/// let bitmap = Bitmap::from_raw(2, 2, vec![0, 255, 255, 0]);
/// assert!(bitmap.has_valid_buffer());
/// assert_eq!(bitmap.sample(1, 0), 255);
/// assert_eq!(bitmap.sample(5, 5), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bitmap {
    /// Raw intensity samples, row-major from the top-left corner.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Bitmap {
    /// Create a bitmap from raw parts.
    ///
    /// The buffer length is not checked here; call
    /// [`Bitmap::has_valid_buffer`] or let the extruder validate.
    #[inline]
    #[must_use]
    pub const fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Self {
        Self {
            data,
            width,
            height,
        }
    }

    /// Create a bitmap with every sample set to `intensity`.
    #[must_use]
    pub fn filled(width: u32, height: u32, intensity: u8) -> Self {
        let len = width as usize * height as usize;
        Self::from_raw(width, height, vec![intensity; len])
    }

    /// Total number of pixel positions (`width * height`).
    #[inline]
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Buffer length a well-formed bitmap of these dimensions must have.
    #[inline]
    #[must_use]
    pub const fn expected_len(&self) -> usize {
        self.pixel_count()
    }

    /// Whether the buffer length matches the declared dimensions.
    #[inline]
    #[must_use]
    pub fn has_valid_buffer(&self) -> bool {
        self.data.len() == self.expected_len()
    }

    /// Intensity at `(x, y)`.
    ///
    /// Coordinates outside the declared grid, or positions past the end of
    /// an undersized buffer, read as 0 (not raised) rather than panicking.
    #[must_use]
    pub fn sample(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        let index = y as usize * self.width as usize + x as usize;
        self.data.get(index).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_keeps_parts() {
        let bitmap = Bitmap::from_raw(3, 2, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(bitmap.width, 3);
        assert_eq!(bitmap.height, 2);
        assert_eq!(bitmap.data.len(), 6);
    }

    #[test]
    fn filled_matches_expected_len() {
        let bitmap = Bitmap::filled(4, 5, 255);
        assert_eq!(bitmap.expected_len(), 20);
        assert!(bitmap.has_valid_buffer());
        assert!(bitmap.data.iter().all(|&v| v == 255));
    }

    #[test]
    fn sample_reads_row_major() {
        // 3x2 grid, second row starts at index 3
        let bitmap = Bitmap::from_raw(3, 2, vec![10, 20, 30, 40, 50, 60]);
        assert_eq!(bitmap.sample(0, 0), 10);
        assert_eq!(bitmap.sample(2, 0), 30);
        assert_eq!(bitmap.sample(0, 1), 40);
        assert_eq!(bitmap.sample(2, 1), 60);
    }

    #[test]
    fn sample_out_of_range_is_black() {
        let bitmap = Bitmap::filled(2, 2, 255);
        assert_eq!(bitmap.sample(2, 0), 0);
        assert_eq!(bitmap.sample(0, 2), 0);
        assert_eq!(bitmap.sample(100, 100), 0);
    }

    #[test]
    fn sample_past_short_buffer_is_black() {
        // Declared 2x2 but only 3 samples present
        let bitmap = Bitmap::from_raw(2, 2, vec![255, 255, 255]);
        assert!(!bitmap.has_valid_buffer());
        assert_eq!(bitmap.sample(0, 1), 255);
        assert_eq!(bitmap.sample(1, 1), 0);
    }

    #[test]
    fn buffer_length_mismatch_detected() {
        let bitmap = Bitmap::from_raw(10, 10, vec![0; 99]);
        assert!(!bitmap.has_valid_buffer());
        let bitmap = Bitmap::from_raw(10, 10, vec![0; 101]);
        assert!(!bitmap.has_valid_buffer());
    }
}
