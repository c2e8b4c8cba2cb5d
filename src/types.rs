//! Shared enums used across the crate: the cipher handed to the encryption
//! backend (`EncryptionAlgorithm`) and the pre-flight "already encrypted"
//! heuristic (`EncryptionCheck`).
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
pub enum EncryptionAlgorithm {
    /// RC4 with a 128-bit key (security handler revision 3)
    #[default]
    #[value(name = "rc4-128")]
    #[serde(rename = "rc4-128")]
    Rc4,
    /// AES-128 (security handler revision 4)
    #[value(name = "aes-128")]
    #[serde(rename = "aes-128")]
    Aes128,
    /// AES-256 (security handler revision 6)
    #[value(name = "aes-256")]
    #[serde(rename = "aes-256")]
    Aes256,
}

impl std::fmt::Display for EncryptionAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EncryptionAlgorithm::Rc4 => "rc4-128",
            EncryptionAlgorithm::Aes128 => "aes-128",
            EncryptionAlgorithm::Aes256 => "aes-256",
        };
        write!(f, "{}", s)
    }
}

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum EncryptionCheck {
    /// Scan the raw bytes for an `/Encrypt` entry
    #[default]
    Marker,
    /// Parse the document and ask the PDF library
    Parse,
}

impl std::fmt::Display for EncryptionCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EncryptionCheck::Marker => write!(f, "marker"),
            EncryptionCheck::Parse => write!(f, "parse"),
        }
    }
}
