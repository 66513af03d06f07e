//! 3MF model serialization and archive packaging.
//!
//! Turns an [`IndexedMesh`] into a complete 3MF package: the mesh is
//! serialized as the core-spec model document, then zipped together with
//! the fixed OPC relationship and content-type documents. Everything
//! happens in memory; persisting or uploading the buffer is the caller's
//! concern.
//!
//! # Example
//!
//! ```
//! use relief_3mf::pack_3mf;
//! use relief_types::{IndexedMesh, Vertex};
//!
//! let mesh = IndexedMesh::from_parts(
//!     vec![
//!         Vertex::from_coords(0.0, 0.0, 0.0),
//!         Vertex::from_coords(10.0, 0.0, 0.0),
//!         Vertex::from_coords(0.0, 10.0, 0.0),
//!     ],
//!     vec![[0, 1, 2]],
//! );
//! let archive = pack_3mf(&mesh).unwrap();
//! assert_eq!(&archive[..2], b"PK");
//! ```
//!
//! [`IndexedMesh`]: relief_types::IndexedMesh

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod model;
mod package;

pub use error::{PackError, PackResult};
pub use model::{model_xml, MODEL_NAMESPACE};
pub use package::{pack_3mf, write_3mf, CONTENT_TYPES_PATH, MODEL_PATH, RELS_PATH};
