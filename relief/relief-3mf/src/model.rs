//! Mesh serialization into the 3MF model document.

use std::io::Cursor;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use relief_types::IndexedMesh;

use crate::error::{PackError, PackResult};

/// 3MF core specification namespace.
pub const MODEL_NAMESPACE: &str = "http://schemas.microsoft.com/3dmanufacturing/core/2015/02";

/// Resource id of the single mesh object; the build section references it.
const OBJECT_ID: &str = "1";

/// Serialize a mesh as a 3MF core-spec model document.
///
/// The document declares millimeter units and an en-US locale on the
/// `<model>` root, carries one `<object id="1" type="model">` resource
/// holding every vertex and triangle, and closes with a `<build>` section
/// referencing that object once. Coordinates are written in their shortest
/// round-trip `f64` form, never re-quantized on the way out.
///
/// # Errors
///
/// Returns [`PackError::Model`] when an XML event cannot be written and
/// [`PackError::FromUtf8`] if the writer produces invalid UTF-8.
pub fn model_xml(mesh: &IndexedMesh) -> PackResult<String> {
    let mut xml_bytes = Vec::new();
    let mut writer = Writer::new_with_indent(Cursor::new(&mut xml_bytes), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(|e| PackError::model(format!("failed to write XML declaration: {e}")))?;

    let mut model = BytesStart::new("model");
    model.push_attribute(("unit", "millimeter"));
    model.push_attribute(("xml:lang", "en-US"));
    model.push_attribute(("xmlns", MODEL_NAMESPACE));
    writer
        .write_event(Event::Start(model))
        .map_err(|e| PackError::model(format!("failed to open model element: {e}")))?;

    writer
        .write_event(Event::Start(BytesStart::new("resources")))
        .map_err(|e| PackError::model(format!("failed to open resources element: {e}")))?;

    let mut object = BytesStart::new("object");
    object.push_attribute(("id", OBJECT_ID));
    object.push_attribute(("type", "model"));
    writer
        .write_event(Event::Start(object))
        .map_err(|e| PackError::model(format!("failed to open object element: {e}")))?;

    writer
        .write_event(Event::Start(BytesStart::new("mesh")))
        .map_err(|e| PackError::model(format!("failed to open mesh element: {e}")))?;

    writer
        .write_event(Event::Start(BytesStart::new("vertices")))
        .map_err(|e| PackError::model(format!("failed to open vertices element: {e}")))?;

    for v in &mesh.vertices {
        let (x, y, z) = (
            v.position.x.to_string(),
            v.position.y.to_string(),
            v.position.z.to_string(),
        );
        let mut vertex = BytesStart::new("vertex");
        vertex.push_attribute(("x", x.as_str()));
        vertex.push_attribute(("y", y.as_str()));
        vertex.push_attribute(("z", z.as_str()));
        writer
            .write_event(Event::Empty(vertex))
            .map_err(|e| PackError::model(format!("failed to write vertex element: {e}")))?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("vertices")))
        .map_err(|e| PackError::model(format!("failed to close vertices element: {e}")))?;

    writer
        .write_event(Event::Start(BytesStart::new("triangles")))
        .map_err(|e| PackError::model(format!("failed to open triangles element: {e}")))?;

    for face in &mesh.faces {
        let (v1, v2, v3) = (
            face[0].to_string(),
            face[1].to_string(),
            face[2].to_string(),
        );
        let mut triangle = BytesStart::new("triangle");
        triangle.push_attribute(("v1", v1.as_str()));
        triangle.push_attribute(("v2", v2.as_str()));
        triangle.push_attribute(("v3", v3.as_str()));
        writer
            .write_event(Event::Empty(triangle))
            .map_err(|e| PackError::model(format!("failed to write triangle element: {e}")))?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("triangles")))
        .map_err(|e| PackError::model(format!("failed to close triangles element: {e}")))?;

    writer
        .write_event(Event::End(BytesEnd::new("mesh")))
        .map_err(|e| PackError::model(format!("failed to close mesh element: {e}")))?;

    writer
        .write_event(Event::End(BytesEnd::new("object")))
        .map_err(|e| PackError::model(format!("failed to close object element: {e}")))?;

    writer
        .write_event(Event::End(BytesEnd::new("resources")))
        .map_err(|e| PackError::model(format!("failed to close resources element: {e}")))?;

    writer
        .write_event(Event::Start(BytesStart::new("build")))
        .map_err(|e| PackError::model(format!("failed to open build element: {e}")))?;

    let mut item = BytesStart::new("item");
    item.push_attribute(("objectid", OBJECT_ID));
    writer
        .write_event(Event::Empty(item))
        .map_err(|e| PackError::model(format!("failed to write build item: {e}")))?;

    writer
        .write_event(Event::End(BytesEnd::new("build")))
        .map_err(|e| PackError::model(format!("failed to close build element: {e}")))?;

    writer
        .write_event(Event::End(BytesEnd::new("model")))
        .map_err(|e| PackError::model(format!("failed to close model element: {e}")))?;

    Ok(String::from_utf8(xml_bytes)?)
}
