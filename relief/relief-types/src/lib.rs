//! Core data types for the relief pipeline.
//!
//! This crate provides the foundational types shared by every stage of the
//! pipeline, from raster input to 3MF packaging:
//!
//! - [`Bitmap`] - Row-major 8-bit grayscale pixel buffer
//! - [`Dimensions`] - Physical target dimensions in millimeters
//! - [`Size`] - Fixed product size presets
//! - [`Vertex`] - A point in 3D space
//! - [`IndexedMesh`] - Triangle mesh with indexed vertices
//! - [`Aabb`] - Axis-aligned bounding box
//!
//! # Units and Coordinate System
//!
//! All mesh coordinates are `f64` millimeters in a right-handed system:
//! X spans the footprint width, Y the footprint height (image rows), and Z
//! the extrusion depth. The model origin sits at the center of the
//! width/height footprint. Triangle winding is counter-clockwise viewed
//! from outside the solid, so normals point outward.
//!
//! # Example
//!
//! ```
//! use relief_types::{Bitmap, Dimensions, Size};
//!
//! let bitmap = Bitmap::filled(10, 10, 255);
//! assert!(bitmap.has_valid_buffer());
//!
//! let dims: Dimensions = Size::Small.into();
//! assert!((dims.width - 40.0).abs() < f64::EPSILON);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod bitmap;
mod bounds;
mod dimensions;
mod mesh;
mod vertex;

pub use bitmap::Bitmap;
pub use bounds::Aabb;
pub use dimensions::{Dimensions, ParseSizeError, Size};
pub use mesh::IndexedMesh;
pub use vertex::Vertex;

// Re-export nalgebra types used in the public API
pub use nalgebra::{Point3, Vector3};
