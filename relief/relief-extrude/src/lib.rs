//! Pixel-grid extrusion of bitmaps into printable relief meshes.
//!
//! The extruder walks a thresholded grayscale [`Bitmap`] on a fixed stride
//! and raises one rectangular block above the footprint plane for every
//! bright sample, producing an [`IndexedMesh`] sized to the requested
//! physical [`Dimensions`]. An image with no bright samples falls back to a
//! single solid plate, so the output always contains printable geometry.
//!
//! # Example
//!
//! ```
//! use relief_extrude::{extrude_bitmap, ExtrudeParams};
//! use relief_types::{Bitmap, Dimensions};
//!
//! // All-white 10x10 tile: one block per pixel.
//! let bitmap = Bitmap::filled(10, 10, 255);
//! let dims = Dimensions::new(40.0, 40.0, 4.0);
//! let mesh = extrude_bitmap(&bitmap, dims, &ExtrudeParams::default()).unwrap();
//! assert_eq!(mesh.vertex_count(), 800);
//! assert_eq!(mesh.face_count(), 1200);
//! ```
//!
//! [`Bitmap`]: relief_types::Bitmap
//! [`Dimensions`]: relief_types::Dimensions
//! [`IndexedMesh`]: relief_types::IndexedMesh

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod extrude;
mod params;

pub use error::{ExtrudeError, ExtrudeResult};
pub use extrude::extrude_bitmap;
pub use params::ExtrudeParams;
