//! Image decoding and binarization for the relief pipeline.
//!
//! The front end of the pipeline: encoded image bytes come in, a
//! [`Bitmap`] ready for extrusion comes out. Decoding accepts any format
//! the `image` crate recognizes, grayscale conversion uses BT.601 luma
//! weights, and [`binarize`] snaps intensities to pure black and white with
//! the same strict threshold the extruder applies.
//!
//! # Example
//!
//! ```no_run
//! use relief_raster::{binarize, decode_grayscale};
//!
//! let bytes = std::fs::read("logo.png").unwrap();
//! let bitmap = decode_grayscale(&bytes).unwrap();
//! let bw = binarize(&bitmap, 128);
//! assert!(bw.data.iter().all(|&v| v == 0 || v == 255));
//! ```
//!
//! [`Bitmap`]: relief_types::Bitmap

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod convert;
mod error;

pub use convert::{binarize, decode_grayscale};
pub use error::{RasterError, RasterResult};
