//! High-level library API: run the whole protection pipeline for one request.
//! Prefer these entrypoints over the `core`/`io` building blocks when
//! embedding pdf-protect.
use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::core::params::ProtectOptions;
use crate::core::request::InvocationRequest;
use crate::core::validate::{read_validated_input, validate_output, validate_password};
use crate::error::Result;
use crate::io::encrypt::{Encryptor, LopdfEncryptor};
use crate::io::reader::SourceDocument;
use crate::io::writer::copy_pages;
use crate::types::EncryptionAlgorithm;

fn bytes_to_kb(bytes: u64) -> f64 {
    (bytes as f64 / 1024.0 * 100.0).round() / 100.0
}

/// Summary of a successful run
#[derive(Debug, Clone, PartialEq)]
pub struct ProtectReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub pages: usize,
    pub input_bytes: u64,
    pub output_bytes: u64,
    pub algorithm: EncryptionAlgorithm,
}

impl ProtectReport {
    /// Input size in KB, rounded to two decimals
    pub fn input_size_kb(&self) -> f64 {
        bytes_to_kb(self.input_bytes)
    }

    /// Output size in KB, rounded to two decimals
    pub fn output_size_kb(&self) -> f64 {
        bytes_to_kb(self.output_bytes)
    }
}

/// Protect `request.input()` into `request.output()` using lopdf with the
/// algorithm chosen in `options`.
pub fn protect(request: &InvocationRequest, options: &ProtectOptions) -> Result<ProtectReport> {
    protect_with(request, options, &LopdfEncryptor::new(options.algorithm))
}

/// Same pipeline as [`protect`], with the encryption step supplied by the caller.
///
/// Steps run in order and stop at the first failure. The output file is only
/// created once encryption has succeeded.
pub fn protect_with(
    request: &InvocationRequest,
    options: &ProtectOptions,
    encryptor: &dyn Encryptor,
) -> Result<ProtectReport> {
    options.validate()?;
    let bytes = read_validated_input(request.input(), options)?;
    validate_output(request.output(), options)?;
    validate_password(request.user_password(), options.min_password_length)?;
    if let Some(owner) = request.explicit_owner_password() {
        validate_password(owner, options.min_password_length)?;
    }

    // Covers `EncryptionCheck::Parse` as well; the file is read and parsed once.
    let source = SourceDocument::from_bytes(request.input(), &bytes)?;
    source.ensure_protectable()?;

    let copy = copy_pages(source.document())?;
    let encrypted = encryptor.encrypt(copy, request.user_password(), request.owner_password())?;
    let algorithm = encrypted.algorithm();
    let output_bytes = encrypted.write_to(request.output())?;

    let report = ProtectReport {
        input: fs::canonicalize(request.input())?,
        output: fs::canonicalize(request.output())?,
        pages: source.page_count(),
        input_bytes: source.byte_len(),
        output_bytes,
        algorithm,
    };
    info!(
        "Protected {:?} -> {:?}: {} pages, {} -> {} bytes",
        report.input, report.output, report.pages, report.input_bytes, report.output_bytes
    );
    Ok(report)
}
