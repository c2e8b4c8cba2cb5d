//! I/O layer around the PDF library: loading inputs (`reader`), copying and
//! persisting outputs (`writer`), and the encryption capability (`encrypt`).
pub mod reader;
pub use reader::SourceDocument;

pub mod writer;

pub mod encrypt;
pub use encrypt::{EncryptedDocument, Encryptor, LopdfEncryptor};
