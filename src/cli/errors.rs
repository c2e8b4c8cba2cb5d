use thiserror::Error;

use pdf_protect::ErrorKind;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Protect(#[from] pdf_protect::Error),

    #[error("Failed to write to the terminal: {0}")]
    Terminal(#[from] std::io::Error),
}

impl AppError {
    /// Heading shown in front of the message.
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Protect(e) => match e.kind() {
                ErrorKind::NotFound | ErrorKind::NotAFile => "File Error",
                ErrorKind::PermissionDenied => "Permission Error",
                ErrorKind::InvalidExtension
                | ErrorKind::Empty
                | ErrorKind::AlreadyEncrypted
                | ErrorKind::NoPages
                | ErrorKind::TooShort => "Validation Error",
                ErrorKind::InvalidConfig => "Config Error",
                ErrorKind::IoFailure => "Processing Error",
            },
            AppError::Terminal(_) => "Processing Error",
        }
    }
}

/// One-line, human-readable rendering for stderr.
pub fn describe(e: &AppError) -> String {
    format!("{}: {}", e.category(), e)
}
