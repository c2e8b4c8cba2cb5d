#![doc = r#"
pdf-protect — add password protection to PDF documents.

This crate validates an input PDF, copies its pages into a fresh document
(keeping the document information dictionary and XMP metadata), encrypts the
copy with a user and an owner password, and writes it out atomically. It powers
the `pdf-protect` CLI and can be embedded in your own Rust applications.

Parsing, serialization and the cipher work are delegated to [`lopdf`]; this
crate decides *what* gets encrypted and *whether* it should be.

Quick start
-----------
```rust,no_run
use pdf_protect::{protect, InvocationRequest, ProtectOptions};

fn main() -> pdf_protect::Result<()> {
    let request = InvocationRequest::new("report.pdf", "secure_report.pdf", "MyP@ssw0rd");
    let report = protect(&request, &ProtectOptions::default())?;
    println!("{} pages protected ({} KB)", report.pages, report.output_size_kb());
    Ok(())
}
```

Separate owner password and a stronger cipher
---------------------------------------------
```rust,no_run
use pdf_protect::{protect, EncryptionAlgorithm, InvocationRequest, ProtectOptions};

fn main() -> pdf_protect::Result<()> {
    let request = InvocationRequest::new("report.pdf", "secure_report.pdf", "ViewOnly")
        .with_owner_password(Some("Admin123".to_string()));
    let options = ProtectOptions {
        algorithm: EncryptionAlgorithm::Aes256,
        ..ProtectOptions::default()
    };
    protect(&request, &options)?;
    Ok(())
}
```

Error handling
--------------
All public functions return `pdf_protect::Result<T>`. Use [`Error::kind`] to
branch on the failure category rather than on messages.

```rust,no_run
use pdf_protect::{protect, ErrorKind, InvocationRequest, ProtectOptions};

let request = InvocationRequest::new("missing.pdf", "out.pdf", "secret");
match protect(&request, &ProtectOptions::default()) {
    Ok(report) => println!("ok: {} pages", report.pages),
    Err(e) if e.kind() == ErrorKind::NotFound => eprintln!("no such file: {e}"),
    Err(e) => eprintln!("failed: {e}"),
}
```

Useful modules
--------------
- [`api`] — `protect` / `protect_with` and the `ProtectReport`.
- [`core`] — options, the per-run request and the validation checks.
- [`io`] — reader, page-copying writer and the `Encryptor` capability.
- [`error`] — crate-level `Error`, `ErrorKind` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

pub use crate::core::params::ProtectOptions;
pub use crate::core::request::InvocationRequest;
pub use crate::core::validate::{
    ValidationResult, read_validated_input, validate_input, validate_output, validate_password,
};
pub use error::{Error, ErrorKind, Result};
pub use types::{EncryptionAlgorithm, EncryptionCheck};

pub use io::{EncryptedDocument, Encryptor, LopdfEncryptor, SourceDocument};

pub use api::{ProtectReport, protect, protect_with};
