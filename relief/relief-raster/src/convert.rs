//! Grayscale decoding and thresholding.

use relief_types::Bitmap;
use tracing::debug;

use crate::error::RasterResult;

/// Decode encoded image bytes into a grayscale bitmap.
///
/// Accepts any container format the `image` crate recognizes from the byte
/// signature. Each pixel is reduced to one intensity with the BT.601 luma
/// weights (0.299 R, 0.587 G, 0.114 B), rounded to the nearest integer.
/// The alpha channel is ignored; transparent black reads as black.
///
/// # Errors
///
/// Returns [`RasterError::Decode`] when the bytes are not a decodable
/// image.
///
/// [`RasterError::Decode`]: crate::RasterError::Decode
pub fn decode_grayscale(bytes: &[u8]) -> RasterResult<Bitmap> {
    let image = image::load_from_memory(bytes)?;
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut data = Vec::with_capacity(width as usize * height as usize);
    for pixel in rgba.pixels() {
        let [r, g, b, _alpha] = pixel.0;
        data.push(luma601(r, g, b));
    }

    debug!(width, height, "Decoded image to grayscale");

    Ok(Bitmap::from_raw(width, height, data))
}

/// Snap a grayscale bitmap to pure black and white.
///
/// Samples strictly brighter than `threshold` become 255, everything else
/// 0. This is the same comparison the extruder applies, so a binarized
/// bitmap extrudes identically to its grayscale source.
#[must_use]
pub fn binarize(bitmap: &Bitmap, threshold: u8) -> Bitmap {
    let data = bitmap
        .data
        .iter()
        .map(|&value| if value > threshold { 255 } else { 0 })
        .collect();
    Bitmap::from_raw(bitmap.width, bitmap.height, data)
}

/// BT.601 luma from 8-bit RGB, rounded to the nearest intensity.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
// The weights sum to 1.0, so the rounded value always fits in u8.
fn luma601(r: u8, g: u8, b: u8) -> u8 {
    f64::from(b)
        .mul_add(0.114, f64::from(r).mul_add(0.299, f64::from(g) * 0.587))
        .round() as u8
}
