//! Pre-flight checks run before any document is parsed or written.
//! Each check returns on the first failure; nothing here touches the output.
use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::core::params::ProtectOptions;
use crate::error::{Error, Result};
use crate::io::reader::{SourceDocument, has_encrypt_marker};
use crate::types::EncryptionCheck;

/// Outcome of a validation step: `Ok` or the reason it failed.
pub type ValidationResult<T = ()> = Result<T>;

fn has_extension(path: &Path, expected: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(expected))
}

/// File-level input checks, then one read of the file. With
/// `EncryptionCheck::Marker` the bytes are also scanned for encryption;
/// with `Parse` that is left to whoever parses the returned bytes.
pub fn read_validated_input(path: &Path, options: &ProtectOptions) -> ValidationResult<Vec<u8>> {
    if !path.exists() {
        return Err(Error::NotFound {
            path: path.to_path_buf(),
        });
    }
    if !path.is_file() {
        return Err(Error::NotAFile {
            path: path.to_path_buf(),
        });
    }
    if !has_extension(path, options.extension()) {
        return Err(Error::InvalidExtension {
            path: path.to_path_buf(),
            expected: options.extension().to_string(),
        });
    }
    if fs::metadata(path)?.len() == 0 {
        return Err(Error::Empty {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path)?;
    if options.encryption_check == EncryptionCheck::Marker && has_encrypt_marker(&bytes) {
        debug!("Encryption marker found in {:?}", path);
        return Err(Error::AlreadyEncrypted {
            path: path.to_path_buf(),
        });
    }
    Ok(bytes)
}

/// Check that `path` names a non-empty, unencrypted document with the
/// recognized suffix.
pub fn validate_input(path: &Path, options: &ProtectOptions) -> ValidationResult {
    let bytes = read_validated_input(path, options)?;
    if options.encryption_check == EncryptionCheck::Parse
        && SourceDocument::from_bytes(path, &bytes)?.is_encrypted()
    {
        return Err(Error::AlreadyEncrypted {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Check that `path` can receive the protected document.
pub fn validate_output(path: &Path, options: &ProtectOptions) -> ValidationResult {
    if !has_extension(path, options.extension()) {
        return Err(Error::InvalidExtension {
            path: path.to_path_buf(),
            expected: options.extension().to_string(),
        });
    }

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.is_dir() {
        return Err(Error::OutputDirMissing {
            path: parent.to_path_buf(),
        });
    }
    if fs::metadata(parent)?.permissions().readonly() {
        return Err(Error::PermissionDenied {
            path: parent.to_path_buf(),
        });
    }
    // Mode bits alone miss directories owned by someone else.
    match tempfile::tempfile_in(parent) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => Err(Error::PermissionDenied {
            path: parent.to_path_buf(),
        }),
        Err(e) => Err(e.into()),
    }
}

/// Check a password against the configured minimum length, counted in characters.
pub fn validate_password(password: &str, min_length: usize) -> ValidationResult {
    if password.is_empty() {
        return Err(Error::EmptyPassword);
    }
    let actual = password.chars().count();
    if actual < min_length {
        return Err(Error::PasswordTooShort {
            min: min_length,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn kind(r: ValidationResult) -> ErrorKind {
        r.unwrap_err().kind()
    }

    #[test]
    fn missing_input_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let options = ProtectOptions::default();
        for name in ["missing.pdf", "missing.txt", "nested/missing.pdf"] {
            let path = dir.path().join(name);
            assert_eq!(kind(validate_input(&path, &options)), ErrorKind::NotFound);
        }
    }

    #[test]
    fn directory_input_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folder.pdf");
        fs::create_dir(&path).unwrap();
        assert_eq!(
            kind(validate_input(&path, &ProtectOptions::default())),
            ErrorKind::NotAFile
        );
    }

    #[test]
    fn wrong_suffix_is_invalid_extension() {
        let dir = tempfile::tempdir().unwrap();
        let options = ProtectOptions::default();
        for name in ["report.txt", "report", "report.pdf.bak", "reportpdf"] {
            let path = dir.path().join(name);
            fs::write(&path, b"%PDF-1.4\n").unwrap();
            assert_eq!(
                kind(validate_input(&path, &options)),
                ErrorKind::InvalidExtension,
                "{name}"
            );
        }
    }

    #[test]
    fn suffix_match_ignores_case() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("REPORT.PDF");
        fs::write(&path, b"%PDF-1.4\n%%EOF\n").unwrap();
        assert!(validate_input(&path, &ProtectOptions::default()).is_ok());
    }

    #[test]
    fn zero_length_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.pdf");
        fs::write(&path, b"").unwrap();
        assert_eq!(
            kind(validate_input(&path, &ProtectOptions::default())),
            ErrorKind::Empty
        );
    }

    #[test]
    fn encrypt_marker_is_already_encrypted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("locked.pdf");
        fs::write(
            &path,
            b"%PDF-1.4\ntrailer\n<< /Root 1 0 R /Encrypt 5 0 R >>\n%%EOF\n",
        )
        .unwrap();
        assert_eq!(
            kind(validate_input(&path, &ProtectOptions::default())),
            ErrorKind::AlreadyEncrypted
        );
    }

    #[test]
    fn custom_extension_is_honored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.ai");
        fs::write(&path, b"%PDF-1.4\n").unwrap();
        let options = ProtectOptions {
            extension: "ai".to_string(),
            ..ProtectOptions::default()
        };
        assert!(validate_input(&path, &options).is_ok());
        assert_eq!(
            kind(validate_input(&path, &ProtectOptions::default())),
            ErrorKind::InvalidExtension
        );
    }

    #[test]
    fn output_needs_suffix_and_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let options = ProtectOptions::default();

        assert!(validate_output(&dir.path().join("out.pdf"), &options).is_ok());
        assert_eq!(
            kind(validate_output(&dir.path().join("out.txt"), &options)),
            ErrorKind::InvalidExtension
        );
        assert_eq!(
            kind(validate_output(&dir.path().join("nope/out.pdf"), &options)),
            ErrorKind::NotFound
        );
    }

    #[cfg(unix)]
    #[test]
    fn read_only_output_directory_is_permission_denied() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

        let output = locked.join("out.pdf");
        let result = validate_output(&output, &ProtectOptions::default());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(kind(result), ErrorKind::PermissionDenied);
        assert!(!output.exists());
    }

    #[test]
    fn writability_check_leaves_nothing_behind() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate_output(&dir.path().join("out.pdf"), &ProtectOptions::default()).is_ok());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn marker_mode_returns_the_bytes_it_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.pdf");
        let content = b"%PDF-1.4\nBT (see the /Encrypt entry) Tj ET\ntrailer\n<< /Root 1 0 R >>\n%%EOF\n";
        fs::write(&path, content).unwrap();

        let bytes = read_validated_input(&path, &ProtectOptions::default()).unwrap();
        assert_eq!(bytes, content);
    }

    #[test]
    fn bare_output_name_uses_current_directory() {
        assert!(validate_output(Path::new("out.pdf"), &ProtectOptions::default()).is_ok());
    }

    #[test]
    fn short_passwords_are_rejected() {
        for (pw, min) in [("abc", 4), ("", 4), ("a", 2), ("seven77", 8)] {
            assert_eq!(kind(validate_password(pw, min)), ErrorKind::TooShort, "{pw}");
        }
    }

    #[test]
    fn password_length_counts_characters() {
        assert!(validate_password("MyP@ssw0rd", 4).is_ok());
        assert!(validate_password("abcd", 4).is_ok());
        // four characters, eight bytes
        assert!(validate_password("äöüß", 4).is_ok());
        assert_eq!(
            kind(validate_password("äöü", 4)),
            ErrorKind::TooShort
        );
    }
}
