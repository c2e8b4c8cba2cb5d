#![allow(dead_code)]

use std::path::{Path, PathBuf};

use lopdf::{Document, Object, Stream, StringFormat, dictionary};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let dir = tmp.path().to_path_buf();
        Self { _tmp: tmp, dir }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Write a sample PDF with `pages` pages and return its path.
    pub fn sample_pdf(&self, name: &str, pages: usize, title: &str) -> PathBuf {
        let path = self.path(name);
        write_sample_pdf(&path, pages, title);
        path
    }

    /// Write a one-page, unencrypted PDF whose content stream shows `text`.
    pub fn pdf_with_page_text(&self, name: &str, text: &str) -> PathBuf {
        let path = self.path(name);
        let mut doc = sample_document(1, "Plain");
        let page_id = doc.get_pages()[&1];
        let content_id = doc
            .get_dictionary(page_id)
            .and_then(|page| page.get(b"Contents"))
            .and_then(Object::as_reference)
            .expect("page content reference");
        let content = format!("BT\n/F1 12 Tf\n100 700 Td\n({}) Tj\nET\n", text);
        doc.objects.insert(
            content_id,
            Object::Stream(Stream::new(dictionary! {}, content.into_bytes())),
        );
        doc.save(&path).expect("save pdf");
        path
    }
}

/// Build a text-only PDF where page N shows "Page N of <total>".
pub fn sample_document(pages: usize, title: &str) -> Document {
    let mut doc = Document::with_version("1.5");
    doc.trailer.set(
        "ID",
        Object::Array(vec![
            Object::String(vec![7u8; 16], StringFormat::Hexadecimal),
            Object::String(vec![7u8; 16], StringFormat::Hexadecimal),
        ]),
    );

    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => Object::Reference(font_id),
        },
    });

    let mut kids = Vec::with_capacity(pages);
    for n in 1..=pages {
        let content = format!("BT\n/F1 12 Tf\n100 700 Td\n(Page {} of {}) Tj\nET\n", n, pages);
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => Object::Reference(pages_id),
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(612),
                Object::Integer(792),
            ],
            "Resources" => Object::Reference(resources_id),
            "Contents" => Object::Reference(content_id),
        });
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(title),
        "Author" => Object::string_literal("Finance Team"),
    });
    doc.trailer.set("Info", Object::Reference(info_id));
    doc
}

pub fn write_sample_pdf(path: &Path, pages: usize, title: &str) {
    let mut doc = sample_document(pages, title);
    doc.save(path).expect("save sample pdf");
}

/// Title from the document information dictionary, if any.
pub fn info_title(doc: &Document) -> Option<Vec<u8>> {
    let info = match doc.trailer.get(b"Info").ok()? {
        Object::Reference(id) => doc.get_dictionary(*id).ok()?,
        Object::Dictionary(dict) => dict,
        _ => return None,
    };
    info.get(b"Title").ok()?.as_str().ok().map(|s| s.to_vec())
}
