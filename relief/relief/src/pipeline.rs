//! End-to-end generation pipeline.

use relief_3mf::{pack_3mf, PackError};
use relief_extrude::{extrude_bitmap, ExtrudeError, ExtrudeParams};
use relief_raster::{decode_grayscale, RasterError};
use relief_types::{Bitmap, Dimensions, Size};
use thiserror::Error;
use tracing::info;

/// Errors from the end-to-end generation pipeline.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Input bytes could not be decoded as an image.
    #[error(transparent)]
    Raster(#[from] RasterError),

    /// Input failed mesh-builder validation.
    #[error(transparent)]
    Extrude(#[from] ExtrudeError),

    /// Archive packaging failed.
    #[error(transparent)]
    Pack(#[from] PackError),
}

/// Generate a complete 3MF archive from a bitmap.
///
/// Runs the extruder with production parameters and packages the result.
/// The call holds no shared state: identical inputs produce byte-identical
/// buffers, and concurrent generations need no coordination. It is
/// synchronous and CPU-bound, so request handlers should keep it off
/// latency-critical paths; a large image means tens of thousands of
/// vertices.
///
/// # Errors
///
/// Returns [`GenerateError::Extrude`] for malformed input and
/// [`GenerateError::Pack`] when archive assembly fails.
///
/// # Example
///
/// ```
/// use relief::generate_3mf;
/// use relief_types::{Bitmap, Dimensions};
///
/// let bitmap = Bitmap::filled(10, 10, 0);
/// let archive = generate_3mf(&bitmap, Dimensions::new(40.0, 40.0, 4.0)).unwrap();
/// assert!(!archive.is_empty());
/// ```
pub fn generate_3mf(
    bitmap: &Bitmap,
    dims: impl Into<Dimensions>,
) -> Result<Vec<u8>, GenerateError> {
    let dims = dims.into();
    let mesh = extrude_bitmap(bitmap, dims, &ExtrudeParams::default())?;
    let archive = pack_3mf(&mesh)?;

    info!(
        width = bitmap.width,
        height = bitmap.height,
        %dims,
        bytes = archive.len(),
        "Generated 3MF archive"
    );

    Ok(archive)
}

/// Generate a 3MF archive straight from encoded image bytes.
///
/// Decodes and grayscales the image, then generates at the given product
/// size preset.
///
/// # Errors
///
/// Returns [`GenerateError::Raster`] when the bytes are not a decodable
/// image, plus everything [`generate_3mf`] can return.
pub fn generate_3mf_from_image(bytes: &[u8], size: Size) -> Result<Vec<u8>, GenerateError> {
    let bitmap = decode_grayscale(bytes)?;
    generate_3mf(&bitmap, size)
}
