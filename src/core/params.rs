use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{EncryptionAlgorithm, EncryptionCheck};

/// Protection policy suitable for config files and scripted presets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProtectOptions {
    /// Minimum number of characters for user and owner passwords
    pub min_password_length: usize,
    /// Recognized document suffix, without the dot; compared case-insensitively
    pub extension: String,
    /// Cipher handed to the encryption backend
    pub algorithm: EncryptionAlgorithm,
    /// Pre-flight heuristic for spotting already encrypted inputs
    pub encryption_check: EncryptionCheck,
}

impl Default for ProtectOptions {
    fn default() -> Self {
        Self {
            min_password_length: 4,
            extension: "pdf".to_string(),
            algorithm: EncryptionAlgorithm::Rc4,
            encryption_check: EncryptionCheck::Marker,
        }
    }
}

impl ProtectOptions {
    /// Load options from a JSON file. Missing fields fall back to defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            Error::InvalidConfig(format!("cannot read '{}': {}", path.display(), e))
        })?;
        let options: ProtectOptions = serde_json::from_str(&raw).map_err(|e| {
            Error::InvalidConfig(format!("cannot parse '{}': {}", path.display(), e))
        })?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_password_length == 0 {
            return Err(Error::InvalidConfig(
                "min_password_length must be greater than 0".to_string(),
            ));
        }
        if self.extension.trim_start_matches('.').is_empty() {
            return Err(Error::InvalidConfig("extension must not be empty".to_string()));
        }
        Ok(())
    }

    /// Extension without a leading dot, as configured.
    pub fn extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }
}
