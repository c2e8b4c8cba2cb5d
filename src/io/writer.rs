//! Output side of the pipeline: copying pages into a fresh document and
//! persisting the result without ever exposing a half-written file.
use std::collections::BTreeSet;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use lopdf::{Dictionary, Document, Object, ObjectId, StringFormat, dictionary};
use rand::Rng;
use tracing::{debug, info};

use crate::error::Result;

/// Page attributes a page may inherit from its ancestor `Pages` nodes.
const INHERITABLE: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

fn parent_of(dict: &Dictionary) -> Option<ObjectId> {
    dict.get(b"Parent").and_then(Object::as_reference).ok()
}

/// Walk the `Parent` chain starting above `page_id` and return the first value for `key`.
fn inherited_attribute(source: &Document, page_id: ObjectId, key: &[u8]) -> Option<Object> {
    let mut seen = BTreeSet::from([page_id]);
    let mut next = source.get_dictionary(page_id).ok().and_then(parent_of);
    while let Some(node_id) = next {
        if !seen.insert(node_id) {
            break;
        }
        let node = source.get_dictionary(node_id).ok()?;
        if let Ok(value) = node.get(key) {
            return Some(value.clone());
        }
        next = parent_of(node);
    }
    None
}

/// Copy every page of `source` into a new document with a flat page tree.
///
/// Inherited attributes are materialized on each page, the information
/// dictionary and catalog XMP metadata are carried over, and anything no
/// longer reachable from the new trailer is dropped.
pub fn copy_pages(source: &Document) -> Result<Document> {
    let mut out = Document::with_version(source.version.clone());
    out.objects = source.objects.clone();
    out.max_id = source.max_id;

    let pages_id = out.new_object_id();
    let source_pages = source.get_pages();
    let mut kids = Vec::with_capacity(source_pages.len());

    for (number, page_id) in &source_pages {
        let mut page = source.get_dictionary(*page_id)?.clone();
        for key in INHERITABLE {
            if !page.has(key) {
                if let Some(value) = inherited_attribute(source, *page_id, key) {
                    debug!(
                        "Page {}: materialized inherited /{}",
                        number,
                        String::from_utf8_lossy(key)
                    );
                    page.set(key, value);
                }
            }
        }
        page.set("Parent", Object::Reference(pages_id));
        out.objects.insert(*page_id, Object::Dictionary(page));
        kids.push(Object::Reference(*page_id));
    }

    let count = kids.len() as i64;
    out.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let mut catalog = dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    };
    if let Ok(metadata) = source.catalog().and_then(|c| c.get(b"Metadata")) {
        catalog.set("Metadata", metadata.clone());
    }
    let catalog_id = out.add_object(catalog);
    out.trailer.set("Root", Object::Reference(catalog_id));

    if let Ok(info) = source.trailer.get(b"Info") {
        out.trailer.set("Info", info.clone());
    }

    let pruned = out.prune_objects();
    debug!("Pruned {} unreachable objects", pruned.len());

    match source.trailer.get(b"ID") {
        Ok(id) => out.trailer.set("ID", id.clone()),
        Err(_) => out.trailer.set("ID", generate_document_id()),
    }

    info!("Copied {} pages into a new document", count);
    Ok(out)
}

/// Two identical 16-byte random strings, as a fresh file identifier.
fn generate_document_id() -> Object {
    let mut id = [0u8; 16];
    rand::rng().fill(&mut id);
    Object::Array(vec![
        Object::String(id.to_vec(), StringFormat::Hexadecimal),
        Object::String(id.to_vec(), StringFormat::Hexadecimal),
    ])
}

/// Serialize `document` next to `output` and rename it into place.
///
/// Returns the number of bytes written. If anything fails the temporary file
/// is removed and `output` is left untouched.
pub fn save_atomically(document: &mut Document, output: &Path) -> Result<u64> {
    let dir = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::Builder::new()
        .prefix(".pdf-protect-")
        .suffix(".pdf.tmp")
        .tempfile_in(dir)?;

    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        document.save_to(&mut writer)?;
        writer.flush()?;
    }
    tmp.as_file().sync_all()?;

    tmp.persist(output).map_err(|e| e.error)?;
    let written = fs::metadata(output)?.len();
    info!("Wrote {:?} ({} bytes)", output, written);
    Ok(written)
}
