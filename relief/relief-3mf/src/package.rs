//! 3MF archive assembly.

use std::io::{Cursor, Seek, Write};

use relief_types::IndexedMesh;
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::PackResult;
use crate::model::model_xml;

/// Archive path of the model document.
pub const MODEL_PATH: &str = "3D/3dmodel.model";

/// Archive path of the package relationships document.
pub const RELS_PATH: &str = "_rels/.rels";

/// Archive path of the content-types document.
pub const CONTENT_TYPES_PATH: &str = "[Content_Types].xml";

/// OPC relationships document marking the model file as the package's
/// primary 3D payload.
const RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Type="http://schemas.microsoft.com/3dmanufacturing/core/2015/02/relationship" Target="/3D/3dmodel.model" Id="rel0" />
</Relationships>"#;

/// OPC content-types document mapping the `rels` and `model` extensions.
const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml" />
  <Default Extension="model" ContentType="application/vnd.ms-package.3dmanufacturing-3dmodel+xml" />
</Types>"#;

/// Write a mesh as a complete 3MF archive into any seekable sink and hand
/// the sink back.
///
/// The archive holds exactly three entries, written deflated in a fixed
/// order with fixed options, so identical meshes produce byte-identical
/// archives.
///
/// # Errors
///
/// Returns an error when the model document cannot be serialized or the
/// archive cannot be written to the sink.
pub fn write_3mf<W: Write + Seek>(mesh: &IndexedMesh, sink: W) -> PackResult<W> {
    let model = model_xml(mesh)?;

    let mut zip = ZipWriter::new(sink);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file(MODEL_PATH, options)?;
    zip.write_all(model.as_bytes())?;

    zip.start_file(RELS_PATH, options)?;
    zip.write_all(RELS_XML.as_bytes())?;

    zip.start_file(CONTENT_TYPES_PATH, options)?;
    zip.write_all(CONTENT_TYPES_XML.as_bytes())?;

    let sink = zip.finish()?;

    debug!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        model_bytes = model.len(),
        "Wrote 3MF archive"
    );

    Ok(sink)
}

/// Package a mesh into an in-memory 3MF archive.
///
/// Pure transform: the returned buffer is the only artifact, and no disk or
/// network I/O happens here. A degenerate mesh with no faces still packages
/// into a structurally valid archive; consumers that cannot handle empty
/// geometry fail downstream, not here.
///
/// # Errors
///
/// Returns an error when the model document cannot be serialized or the
/// archive cannot be assembled.
pub fn pack_3mf(mesh: &IndexedMesh) -> PackResult<Vec<u8>> {
    let cursor = write_3mf(mesh, Cursor::new(Vec::new()))?;
    Ok(cursor.into_inner())
}
