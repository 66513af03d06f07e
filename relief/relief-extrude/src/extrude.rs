//! Bitmap extrusion into a relief mesh.

use hashbrown::HashMap;
use relief_types::{Bitmap, Dimensions, IndexedMesh, Vertex};
use tracing::{debug, info};

use crate::error::{ExtrudeError, ExtrudeResult};
use crate::params::ExtrudeParams;

/// Quantization factor for the dedup key: positions are keyed at 0.1 mm.
const KEY_QUANTA_PER_MM: f64 = 10.0;

/// Face-index template for one rectangular block.
///
/// Indices refer to the block's 8 corners in emission order: the 4 top
/// corners counter-clockwise from the (-x, -y) corner, then the 4 base
/// corners in the same order. Every face winds counter-clockwise viewed
/// from outside the block, so normals point outward.
const BLOCK_FACES: [[u32; 3]; 12] = [
    // +z top
    [0, 1, 2],
    [0, 2, 3],
    // -z base
    [4, 6, 5],
    [4, 7, 6],
    // +y side
    [3, 2, 6],
    [3, 6, 7],
    // -y side
    [0, 5, 1],
    [0, 4, 5],
    // +x side
    [1, 5, 6],
    [1, 6, 2],
    // -x side
    [0, 7, 4],
    [0, 3, 7],
];

/// Extrude a thresholded bitmap into a printable relief mesh.
///
/// Walks the pixel grid at a stride of `max(1, width / max_samples)` on
/// both axes and raises one rectangular block above the footprint plane for
/// every sample strictly brighter than the threshold. Blocks whose
/// positions coincide after 0.1 mm quantization are emitted once. An image
/// with no raised samples falls back to a single solid plate spanning the
/// full footprint, so the result always contains printable geometry.
///
/// The footprint is centered on the origin: X spans
/// `[-width/2, width/2)` across sampled columns and Y likewise across rows.
/// Raised blocks sit between `depth * base_scale` and
/// `depth * (base_scale + relief_scale)` on Z.
///
/// Block half-extents are `block_scale` times the pixel footprint, wider
/// than half the sample spacing at the default 0.8, so adjacent raised
/// samples produce overlapping prisms rather than a merged solid. Slicers
/// tolerate the overlap; boolean union is out of scope.
///
/// # Errors
///
/// Returns [`ExtrudeError::InvalidImageSize`] when either image side is
/// zero, [`ExtrudeError::BufferSizeMismatch`] when the buffer length does
/// not match `width * height`, and [`ExtrudeError::InvalidDimensions`]
/// when any physical dimension is not a positive finite millimeter value.
///
/// # Example
///
/// ```
/// use relief_extrude::{extrude_bitmap, ExtrudeParams};
/// use relief_types::{Bitmap, Dimensions};
///
/// // No raised pixels: a solid 40x40x4 plate comes back.
/// let bitmap = Bitmap::filled(10, 10, 0);
/// let dims = Dimensions::new(40.0, 40.0, 4.0);
/// let mesh = extrude_bitmap(&bitmap, dims, &ExtrudeParams::default()).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.face_count(), 12);
/// ```
pub fn extrude_bitmap(
    bitmap: &Bitmap,
    dims: Dimensions,
    params: &ExtrudeParams,
) -> ExtrudeResult<IndexedMesh> {
    validate(bitmap, dims)?;

    let scale_x = dims.width / f64::from(bitmap.width);
    let scale_y = dims.height / f64::from(bitmap.height);
    let pixel_size = scale_x.min(scale_y);

    // A zero cap is treated as 1
    let sample_rate = (bitmap.width / params.max_samples.max(1)).max(1);

    info!(
        width = bitmap.width,
        height = bitmap.height,
        sample_rate,
        "Starting bitmap extrusion"
    );

    let half_extent = pixel_size * params.block_scale;
    let z_lo = dims.depth * params.base_scale;
    let z_hi = z_lo + dims.depth * params.relief_scale;

    let mut mesh = IndexedMesh::new();
    // Quantized block position -> base vertex index of the emitted block
    let mut block_index: HashMap<u64, u32> = HashMap::new();

    for y in (0..bitmap.height).step_by(sample_rate as usize) {
        for x in (0..bitmap.width).step_by(sample_rate as usize) {
            if bitmap.sample(x, y) <= params.threshold {
                continue;
            }
            let x_pos = f64::from(x).mul_add(scale_x, -dims.width / 2.0);
            let y_pos = f64::from(y).mul_add(scale_y, -dims.height / 2.0);
            let key = dedup_key(x_pos, y_pos);
            if !block_index.contains_key(&key) {
                let base = push_block(&mut mesh, x_pos, y_pos, half_extent, half_extent, z_lo, z_hi);
                block_index.insert(key, base);
            }
        }
    }

    let blocks = block_index.len();
    debug!(blocks, "Sampled raised blocks");

    if mesh.vertices.is_empty() {
        debug!("No raised samples, falling back to solid plate");
        push_block(
            &mut mesh,
            0.0,
            0.0,
            dims.width / 2.0,
            dims.height / 2.0,
            -dims.depth / 2.0,
            dims.depth / 2.0,
        );
    }

    info!(
        blocks,
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "Extrusion complete"
    );

    Ok(mesh)
}

fn validate(bitmap: &Bitmap, dims: Dimensions) -> ExtrudeResult<()> {
    if bitmap.width == 0 || bitmap.height == 0 {
        return Err(ExtrudeError::InvalidImageSize {
            width: bitmap.width,
            height: bitmap.height,
        });
    }
    if !bitmap.has_valid_buffer() {
        return Err(ExtrudeError::BufferSizeMismatch {
            expected: bitmap.expected_len(),
            actual: bitmap.data.len(),
        });
    }
    if !dims.is_valid() {
        return Err(ExtrudeError::InvalidDimensions {
            width: dims.width,
            height: dims.height,
            depth: dims.depth,
        });
    }
    Ok(())
}

/// Append the 8 corners and 12 faces of one axis-aligned block and return
/// its base vertex index.
///
/// Corners are emitted top ring first, then base ring, both counter-
/// clockwise from the (-x, -y) corner; [`BLOCK_FACES`] indexes that order.
#[allow(clippy::cast_possible_truncation)] // vertex counts stay far below u32::MAX
fn push_block(
    mesh: &mut IndexedMesh,
    center_x: f64,
    center_y: f64,
    half_w: f64,
    half_h: f64,
    z_lo: f64,
    z_hi: f64,
) -> u32 {
    let base = mesh.vertex_count() as u32;

    mesh.vertices.push(Vertex::from_coords(center_x - half_w, center_y - half_h, z_hi));
    mesh.vertices.push(Vertex::from_coords(center_x + half_w, center_y - half_h, z_hi));
    mesh.vertices.push(Vertex::from_coords(center_x + half_w, center_y + half_h, z_hi));
    mesh.vertices.push(Vertex::from_coords(center_x - half_w, center_y + half_h, z_hi));
    mesh.vertices.push(Vertex::from_coords(center_x - half_w, center_y - half_h, z_lo));
    mesh.vertices.push(Vertex::from_coords(center_x + half_w, center_y - half_h, z_lo));
    mesh.vertices.push(Vertex::from_coords(center_x + half_w, center_y + half_h, z_lo));
    mesh.vertices.push(Vertex::from_coords(center_x - half_w, center_y + half_h, z_lo));

    for [a, b, c] in BLOCK_FACES {
        mesh.faces.push([base + a, base + b, base + c]);
    }

    base
}

/// Pack the decimillimeter-quantized block position into a single map key.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
// Quantized coordinates fit i32 for any realistic footprint; the key only
// needs the two's-complement bit patterns.
fn dedup_key(x_pos: f64, y_pos: f64) -> u64 {
    let qx = (x_pos * KEY_QUANTA_PER_MM).floor() as i32;
    let qy = (y_pos * KEY_QUANTA_PER_MM).floor() as i32;
    (u64::from(qx as u32) << 32) | u64::from(qy as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;
    // Signed-volume sums accumulate rounding error across many triangles
    const VOLUME_EPS: f64 = 1e-6;

    fn default_params() -> ExtrudeParams {
        ExtrudeParams::default()
    }

    fn small_dims() -> Dimensions {
        Dimensions::new(40.0, 40.0, 4.0)
    }

    #[test]
    fn all_black_falls_back_to_solid_plate() {
        let bitmap = Bitmap::filled(10, 10, 0);
        let mesh = extrude_bitmap(&bitmap, small_dims(), &default_params()).unwrap();

        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.face_count(), 12);

        let bounds = mesh.bounds();
        assert!((bounds.min.x + 20.0).abs() < EPS);
        assert!((bounds.max.x - 20.0).abs() < EPS);
        assert!((bounds.min.y + 20.0).abs() < EPS);
        assert!((bounds.max.y - 20.0).abs() < EPS);
        assert!((bounds.min.z + 2.0).abs() < EPS);
        assert!((bounds.max.z - 2.0).abs() < EPS);

        // Closed plate, outward winding
        assert!((mesh.signed_volume() - 40.0 * 40.0 * 4.0).abs() < VOLUME_EPS);
    }

    #[test]
    fn all_white_emits_one_block_per_pixel() {
        let bitmap = Bitmap::filled(10, 10, 255);
        let mesh = extrude_bitmap(&bitmap, small_dims(), &default_params()).unwrap();

        // 100 blocks of 8 vertices and 12 faces each
        assert_eq!(mesh.vertex_count(), 800);
        assert_eq!(mesh.face_count(), 1200);

        // Each block is 6.4 x 6.4 x 1.2 mm, all wound outward
        let expected = 100.0 * 6.4 * 6.4 * 1.2;
        assert!((mesh.signed_volume() - expected).abs() < VOLUME_EPS);

        // Raised band sits between depth * 0.5 and depth * 0.8
        let bounds = mesh.bounds();
        assert!((bounds.min.z - 2.0).abs() < EPS);
        assert!((bounds.max.z - 3.2).abs() < EPS);
    }

    #[test]
    fn faces_reference_valid_distinct_vertices() {
        let bitmap = Bitmap::filled(10, 10, 255);
        let mesh = extrude_bitmap(&bitmap, small_dims(), &default_params()).unwrap();

        let count = u32::try_from(mesh.vertex_count()).unwrap();
        for face in &mesh.faces {
            assert!(face.iter().all(|&i| i < count));
            assert_ne!(face[0], face[1]);
            assert_ne!(face[1], face[2]);
            assert_ne!(face[0], face[2]);
        }
    }

    #[test]
    fn threshold_comparison_is_strict() {
        let mut bitmap = Bitmap::filled(10, 10, 0);
        bitmap.data[0] = 128;
        let mesh = extrude_bitmap(&bitmap, small_dims(), &default_params()).unwrap();
        // Exactly at the threshold stays flat, so only the fallback plate remains
        assert_eq!(mesh.vertex_count(), 8);

        bitmap.data[0] = 129;
        let mesh = extrude_bitmap(&bitmap, small_dims(), &default_params()).unwrap();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.face_count(), 12);
        // One raised block, not the plate: it spans the relief band on Z
        let bounds = mesh.bounds();
        assert!((bounds.min.z - 2.0).abs() < EPS);
        assert!((bounds.max.z - 3.2).abs() < EPS);
    }

    #[test]
    fn single_pixel_block_geometry() {
        let bitmap = Bitmap::filled(1, 1, 255);
        let mesh = extrude_bitmap(&bitmap, small_dims(), &default_params()).unwrap();

        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.face_count(), 12);

        // Pixel footprint is the whole 40 mm, half-extent 32 mm, centered
        // on the (-20, -20) sample position
        let first = mesh.vertices[0].position;
        assert!((first.x + 52.0).abs() < EPS);
        assert!((first.y + 52.0).abs() < EPS);
        assert!((first.z - 3.2).abs() < EPS);

        let expected = 64.0 * 64.0 * 1.2;
        assert!((mesh.signed_volume() - expected).abs() < VOLUME_EPS);
    }

    #[test]
    fn quantized_duplicates_collapse() {
        // 256 pixels over 2 mm: sampled positions land 0.015625 mm apart,
        // far inside one 0.1 mm quantum, and the arithmetic is exact in f64.
        // 128 sampled columns collapse to the 20 quanta spanning [-10, 10).
        let bitmap = Bitmap::filled(256, 256, 255);
        let dims = Dimensions::new(2.0, 2.0, 4.0);
        let mesh = extrude_bitmap(&bitmap, dims, &default_params()).unwrap();

        assert_eq!(mesh.vertex_count(), 20 * 20 * 8);
        assert_eq!(mesh.face_count(), 20 * 20 * 12);
    }

    #[test]
    fn sampling_stride_caps_block_count() {
        // 305 px wide: stride floor(305 / 100) = 3, 102 samples per axis
        let bitmap = Bitmap::filled(305, 305, 255);
        let mesh = extrude_bitmap(&bitmap, small_dims(), &default_params()).unwrap();

        assert_eq!(mesh.vertex_count(), 102 * 102 * 8);
        assert_eq!(mesh.face_count(), 102 * 102 * 12);
    }

    #[test]
    fn zero_sample_cap_is_clamped() {
        let bitmap = Bitmap::filled(10, 10, 255);
        let params = default_params().max_samples(0);
        let mesh = extrude_bitmap(&bitmap, small_dims(), &params).unwrap();
        // Cap clamps to 1, stride becomes the full width: one sample
        assert_eq!(mesh.vertex_count(), 8);
    }

    #[test]
    fn buffer_length_mismatch_is_a_typed_error() {
        let bitmap = Bitmap::from_raw(10, 10, vec![255; 99]);
        let err = extrude_bitmap(&bitmap, small_dims(), &default_params()).unwrap_err();
        assert_eq!(
            err,
            ExtrudeError::BufferSizeMismatch {
                expected: 100,
                actual: 99,
            }
        );
    }

    #[test]
    fn zero_sized_image_is_a_typed_error() {
        let bitmap = Bitmap::from_raw(0, 10, Vec::new());
        let err = extrude_bitmap(&bitmap, small_dims(), &default_params()).unwrap_err();
        assert!(matches!(err, ExtrudeError::InvalidImageSize { width: 0, .. }));
    }

    #[test]
    fn degenerate_dimensions_are_a_typed_error() {
        let bitmap = Bitmap::filled(10, 10, 255);
        for dims in [
            Dimensions::new(0.0, 40.0, 4.0),
            Dimensions::new(40.0, 40.0, -4.0),
            Dimensions::new(40.0, f64::NAN, 4.0),
        ] {
            let err = extrude_bitmap(&bitmap, dims, &default_params()).unwrap_err();
            assert!(matches!(err, ExtrudeError::InvalidDimensions { .. }));
        }
    }

    #[test]
    fn extrusion_is_deterministic() {
        let mut bitmap = Bitmap::filled(64, 64, 0);
        for (i, value) in bitmap.data.iter_mut().enumerate() {
            if i % 7 == 0 {
                *value = 255;
            }
        }
        let first = extrude_bitmap(&bitmap, small_dims(), &default_params()).unwrap();
        let second = extrude_bitmap(&bitmap, small_dims(), &default_params()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn dedup_key_separates_neighboring_quanta() {
        assert_eq!(dedup_key(0.0, 0.0), dedup_key(0.05, 0.09));
        assert_ne!(dedup_key(0.0, 0.0), dedup_key(0.1, 0.0));
        assert_ne!(dedup_key(0.0, 0.0), dedup_key(0.0, 0.1));
        // Sign matters: -0.05 floors to the quantum below zero
        assert_ne!(dedup_key(-0.05, 0.0), dedup_key(0.05, 0.0));
        // X and Y quanta never alias each other
        assert_ne!(dedup_key(0.1, 0.0), dedup_key(0.0, 0.1));
    }
}
