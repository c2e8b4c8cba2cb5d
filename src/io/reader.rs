use std::fs;
use std::path::{Path, PathBuf};

use lopdf::Document;
use tracing::{debug, info};

use crate::error::{Error, Result};

fn is_whitespace(b: u8) -> bool {
    matches!(b, b'\0' | b'\t' | b'\n' | b'\x0c' | b'\r' | b' ')
}

fn is_pdf_delimiter(b: u8) -> bool {
    is_whitespace(b)
        || matches!(
            b,
            b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%'
        )
}

fn skip_whitespace(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && is_whitespace(bytes[i]) {
        i += 1;
    }
    i
}

/// Offsets just past each standalone occurrence of `keyword`.
fn keyword_ends<'a>(bytes: &'a [u8], keyword: &'a [u8]) -> impl Iterator<Item = usize> + 'a {
    bytes
        .windows(keyword.len())
        .enumerate()
        .filter_map(move |(i, window)| {
            let before = i.checked_sub(1).map(|j| bytes[j]);
            let after = bytes.get(i + keyword.len()).copied();
            (window == keyword
                && before.is_none_or(is_whitespace)
                && after.is_none_or(is_pdf_delimiter))
            .then_some(i + keyword.len())
        })
}

/// Index just past the literal string opening at `i`.
fn skip_literal_string(bytes: &[u8], mut i: usize) -> usize {
    let mut depth = 0usize;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 1,
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return i + 1;
                }
            }
            _ => {}
        }
        i += 1;
    }
    bytes.len()
}

/// Names written directly inside the dictionary opening at `start`, keys and
/// values alike. Names in nested dictionaries, arrays' strings and comments
/// are skipped. `None` if the dictionary never closes.
fn top_level_names(bytes: &[u8], start: usize) -> Option<Vec<&[u8]>> {
    let mut names = Vec::new();
    let mut depth = 0usize;
    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            b'<' if bytes.get(i + 1) == Some(&b'<') => {
                depth += 1;
                i += 2;
            }
            b'>' if bytes.get(i + 1) == Some(&b'>') => {
                depth = depth.saturating_sub(1);
                i += 2;
                if depth == 0 {
                    return Some(names);
                }
            }
            b'<' => {
                i = bytes[i..]
                    .iter()
                    .position(|b| *b == b'>')
                    .map_or(bytes.len(), |p| i + p + 1);
            }
            b'(' => i = skip_literal_string(bytes, i),
            b'%' => {
                while i < bytes.len() && !matches!(bytes[i], b'\r' | b'\n') {
                    i += 1;
                }
            }
            b'/' => {
                let mut end = i + 1;
                while end < bytes.len() && !is_pdf_delimiter(bytes[end]) {
                    end += 1;
                }
                if depth == 1 {
                    names.push(&bytes[i..end]);
                }
                i = end;
            }
            _ => i += 1,
        }
    }
    None
}

/// Top-level names of the dictionary that directly follows `keyword`.
fn dictionaries_after<'a>(
    bytes: &'a [u8],
    keyword: &'a [u8],
) -> impl Iterator<Item = Vec<&'a [u8]>> + 'a {
    keyword_ends(bytes, keyword).filter_map(move |end| {
        let start = skip_whitespace(bytes, end);
        if bytes[start..].starts_with(b"<<") {
            top_level_names(bytes, start)
        } else {
            None
        }
    })
}

/// True if a trailer or cross-reference stream dictionary has an `/Encrypt` entry.
///
/// Only those dictionaries are looked at, so `/Encrypt` appearing in page
/// content, strings or other objects does not count, nor do longer names
/// such as `/EncryptMetadata`.
pub fn has_encrypt_marker(bytes: &[u8]) -> bool {
    let trailers = dictionaries_after(bytes, b"trailer");
    let xref_streams = dictionaries_after(bytes, b"obj")
        .filter(|names| names.iter().any(|n| *n == b"/XRef"));
    trailers
        .chain(xref_streams)
        .any(|names| names.iter().any(|n| *n == b"/Encrypt"))
}

/// An input document loaded through lopdf, plus what we learned reading it.
pub struct SourceDocument {
    path: PathBuf,
    document: Document,
    byte_len: u64,
}

impl SourceDocument {
    pub fn open(path: &Path) -> Result<Self> {
        Self::from_bytes(path, &fs::read(path)?)
    }

    /// Parse `bytes` already read from `path`.
    pub fn from_bytes(path: &Path, bytes: &[u8]) -> Result<Self> {
        let byte_len = bytes.len() as u64;
        let document = Document::load_mem(bytes)?;
        info!("Loaded {:?} ({} bytes, PDF {})", path, byte_len, document.version);
        Ok(Self {
            path: path.to_path_buf(),
            document,
            byte_len,
        })
    }

    /// lopdf tries the empty user password on load. A document that is still
    /// encrypted afterwards, or that carried encryption at all, counts.
    pub fn is_encrypted(&self) -> bool {
        self.document.is_encrypted() || self.document.encryption_state.is_some()
    }

    /// Fail with `AlreadyEncrypted` or `NoPages` when the document cannot be protected.
    pub fn ensure_protectable(&self) -> Result<()> {
        if self.is_encrypted() {
            return Err(Error::AlreadyEncrypted {
                path: self.path.clone(),
            });
        }
        if self.page_count() == 0 {
            return Err(Error::NoPages {
                path: self.path.clone(),
            });
        }
        debug!("{:?} has {} pages", self.path, self.page_count());
        Ok(())
    }

    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }

    pub fn byte_len(&self) -> u64 {
        self.byte_len
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}
