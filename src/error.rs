//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Every failure carries a human-readable message and maps onto an [`ErrorKind`]
//! so callers (the CLI in particular) can categorize it without string matching.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse failure categories reported to users and scripts.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    NotFound,
    NotAFile,
    InvalidExtension,
    Empty,
    AlreadyEncrypted,
    NoPages,
    TooShort,
    PermissionDenied,
    InvalidConfig,
    IoFailure,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorKind::NotFound => "NotFound",
            ErrorKind::NotAFile => "NotAFile",
            ErrorKind::InvalidExtension => "InvalidExtension",
            ErrorKind::Empty => "Empty",
            ErrorKind::AlreadyEncrypted => "AlreadyEncrypted",
            ErrorKind::NoPages => "NoPages",
            ErrorKind::TooShort => "TooShort",
            ErrorKind::PermissionDenied => "PermissionDenied",
            ErrorKind::InvalidConfig => "InvalidConfig",
            ErrorKind::IoFailure => "IOFailure",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Input file not found: '{}'", .path.display())]
    NotFound { path: PathBuf },

    #[error("Output directory does not exist: '{}'", .path.display())]
    OutputDirMissing { path: PathBuf },

    #[error("Path is not a file: '{}'", .path.display())]
    NotAFile { path: PathBuf },

    #[error("File does not have a .{expected} extension: '{}'", .path.display())]
    InvalidExtension { path: PathBuf, expected: String },

    #[error("Input file is empty: '{}'", .path.display())]
    Empty { path: PathBuf },

    #[error(
        "The input PDF is already encrypted: '{}'. Please decrypt it first before re-encrypting.",
        .path.display()
    )]
    AlreadyEncrypted { path: PathBuf },

    #[error("The PDF file has no pages: '{}'", .path.display())]
    NoPages { path: PathBuf },

    #[error("Password cannot be empty.")]
    EmptyPassword,

    #[error("Password must be at least {min} characters long (got {actual}).")]
    PasswordTooShort { min: usize, actual: usize },

    #[error("No write permission for directory: '{}'", .path.display())]
    PermissionDenied { path: PathBuf },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to process PDF: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("Encryption failed: {0}")]
    Encryption(String),
}

impl Error {
    pub fn encryption<E: std::fmt::Display>(e: E) -> Self {
        Error::Encryption(e.to_string())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotFound { .. } | Error::OutputDirMissing { .. } => ErrorKind::NotFound,
            Error::NotAFile { .. } => ErrorKind::NotAFile,
            Error::InvalidExtension { .. } => ErrorKind::InvalidExtension,
            Error::Empty { .. } => ErrorKind::Empty,
            Error::AlreadyEncrypted { .. } => ErrorKind::AlreadyEncrypted,
            Error::NoPages { .. } => ErrorKind::NoPages,
            Error::EmptyPassword | Error::PasswordTooShort { .. } => ErrorKind::TooShort,
            Error::PermissionDenied { .. } => ErrorKind::PermissionDenied,
            Error::InvalidConfig(_) => ErrorKind::InvalidConfig,
            Error::Io(e) => match e.kind() {
                std::io::ErrorKind::NotFound => ErrorKind::NotFound,
                std::io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
                _ => ErrorKind::IoFailure,
            },
            Error::Pdf(_) | Error::Encryption(_) => ErrorKind::IoFailure,
        }
    }
}
