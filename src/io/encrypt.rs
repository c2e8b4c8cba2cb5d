//! Encryption capability. The cipher work itself belongs to lopdf; this module
//! only picks the security handler and hands over the passwords.
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use lopdf::encryption::crypt_filters::{Aes128CryptFilter, Aes256CryptFilter, CryptFilter};
use lopdf::{Document, EncryptionState, EncryptionVersion, Permissions};
use rand::Rng;
use tracing::info;

use crate::error::{Error, Result};
use crate::io::writer::save_atomically;
use crate::types::EncryptionAlgorithm;

const STANDARD_CRYPT_FILTER: &[u8] = b"StdCF";

/// A password-protected document waiting to be written out.
pub struct EncryptedDocument {
    document: Document,
    algorithm: EncryptionAlgorithm,
}

impl EncryptedDocument {
    pub fn new(document: Document, algorithm: EncryptionAlgorithm) -> Self {
        Self {
            document,
            algorithm,
        }
    }

    pub fn algorithm(&self) -> EncryptionAlgorithm {
        self.algorithm
    }

    /// Write to `output` atomically, returning the size in bytes.
    pub fn write_to(mut self, output: &Path) -> Result<u64> {
        save_atomically(&mut self.document, output)
    }

    pub fn into_inner(self) -> Document {
        self.document
    }
}

/// Anything able to password-protect a document.
pub trait Encryptor {
    fn encrypt(
        &self,
        document: Document,
        user_password: &str,
        owner_password: &str,
    ) -> Result<EncryptedDocument>;
}

/// [`Encryptor`] backed by lopdf's standard security handler.
///
/// The user password grants every permission; the owner password is what it
/// takes to change them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfEncryptor {
    algorithm: EncryptionAlgorithm,
}

impl LopdfEncryptor {
    pub fn new(algorithm: EncryptionAlgorithm) -> Self {
        Self { algorithm }
    }
}

fn standard_filters(filter: Arc<dyn CryptFilter>) -> BTreeMap<Vec<u8>, Arc<dyn CryptFilter>> {
    BTreeMap::from([(STANDARD_CRYPT_FILTER.to_vec(), filter)])
}

impl Encryptor for LopdfEncryptor {
    fn encrypt(
        &self,
        mut document: Document,
        user_password: &str,
        owner_password: &str,
    ) -> Result<EncryptedDocument> {
        let permissions = Permissions::all();
        let mut file_encryption_key = [0u8; 32];

        let version = match self.algorithm {
            EncryptionAlgorithm::Rc4 => EncryptionVersion::V2 {
                document: &document,
                owner_password,
                user_password,
                key_length: 128,
                permissions,
            },
            EncryptionAlgorithm::Aes128 => EncryptionVersion::V4 {
                document: &document,
                encrypt_metadata: true,
                crypt_filters: standard_filters(Arc::new(Aes128CryptFilter)),
                stream_filter: STANDARD_CRYPT_FILTER.to_vec(),
                string_filter: STANDARD_CRYPT_FILTER.to_vec(),
                owner_password,
                user_password,
                permissions,
            },
            EncryptionAlgorithm::Aes256 => {
                rand::rng().fill(&mut file_encryption_key);
                EncryptionVersion::V5 {
                    encrypt_metadata: true,
                    crypt_filters: standard_filters(Arc::new(Aes256CryptFilter)),
                    file_encryption_key: &file_encryption_key,
                    stream_filter: STANDARD_CRYPT_FILTER.to_vec(),
                    string_filter: STANDARD_CRYPT_FILTER.to_vec(),
                    owner_password,
                    user_password,
                    permissions,
                }
            }
        };

        let state = EncryptionState::try_from(version).map_err(Error::encryption)?;
        document.encrypt(&state).map_err(Error::encryption)?;
        info!("Encrypted document with {}", self.algorithm);

        Ok(EncryptedDocument::new(document, self.algorithm))
    }
}
