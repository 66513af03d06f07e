//! Black and white raster images to printable 3MF packages.
//!
//! Umbrella crate for the relief pipeline. It re-exports the individual
//! stages and provides the one-call generation operations used by the shop
//! backend, running the whole decode-to-archive flow in memory.
//!
//! # Quick Start
//!
//! ```
//! use relief::prelude::*;
//!
//! // An all-white 10x10 tile at the small product size.
//! let bitmap = Bitmap::filled(10, 10, 255);
//! let archive = relief::generate_3mf(&bitmap, Size::Small).unwrap();
//! assert_eq!(&archive[..2], b"PK");
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - Core data types: bitmaps, dimensions, meshes
//! - [`raster`] - Image decoding and binarization
//! - [`extrude`] - Pixel-grid extrusion into relief meshes
//! - [`threemf`] - 3MF model serialization and archive packaging

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

pub use relief_3mf as threemf;
pub use relief_extrude as extrude;
pub use relief_raster as raster;
pub use relief_types as types;

mod pipeline;

pub use pipeline::{generate_3mf, generate_3mf_from_image, GenerateError};

/// Common imports for relief generation.
pub mod prelude {
    pub use crate::pipeline::{generate_3mf, generate_3mf_from_image, GenerateError};
    pub use relief_3mf::{pack_3mf, write_3mf};
    pub use relief_extrude::{extrude_bitmap, ExtrudeParams};
    pub use relief_raster::{binarize, decode_grayscale};
    pub use relief_types::{Aabb, Bitmap, Dimensions, IndexedMesh, Point3, Size, Vertex};
}
