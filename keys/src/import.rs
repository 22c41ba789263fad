//! External capability contracts around classified key material.
//!
//! This crate decides what a key structure *is*; turning it into a usable
//! cryptographic object, and asking a human for a passphrase, both belong
//! to the embedding application. [`KeyImport`] and [`Prompt`] are the
//! seams it plugs into.

use thiserror::Error;

use crate::error::Result;
use crate::{ContainerFormat, Error as KeyError, KeyAlgorithm, PrivateKey};

/// Everything an importer needs to construct a key object.
#[derive(Debug, Clone, Copy)]
pub struct ImportRequest<'a> {
    pub format: ContainerFormat,
    pub algorithm: KeyAlgorithm,
    /// The full encoded span of the classified structure.
    pub der: &'a [u8],
    /// Present only for encrypted containers.
    pub passphrase: Option<&'a str>,
}

/// Constructs an asymmetric key object from classified key material.
pub trait KeyImport {
    type Key;

    fn import(&self, request: ImportRequest<'_>) -> std::result::Result<Self::Key, ImportError>;
}

/// Supplies the answers only an interactive caller can give.
pub trait Prompt {
    /// Pick an algorithm when the structure could not reveal one.
    fn choose_algorithm(&self) -> Option<KeyAlgorithm>;

    /// Ask for the passphrase protecting an encrypted key.
    fn passphrase(&self, caption: &str) -> Option<String>;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImportError {
    #[error("key import failed: {0}")]
    Failed(String),

    #[error("importer does not support {0}")]
    UnsupportedAlgorithm(KeyAlgorithm),
}

impl PrivateKey<'_> {
    /// Hands the classified key to an importer, prompting for whatever the
    /// structure itself could not determine.
    ///
    /// An encrypted container needs a passphrase, and an algorithm choice
    /// when classification left it [`KeyAlgorithm::Unknown`]. The other
    /// container formats import directly.
    pub fn import_with<I: KeyImport, P: Prompt>(&self, importer: &I, prompt: &P) -> Result<I::Key> {
        let mut passphrase = None;
        let algorithm = match self.format() {
            ContainerFormat::EncryptedPkcs8 => {
                passphrase = Some(
                    prompt
                        .passphrase("Encrypted Private Key")
                        .ok_or(KeyError::MissingPassphrase)?,
                );
                match self.algorithm() {
                    KeyAlgorithm::Unknown => prompt
                        .choose_algorithm()
                        .ok_or(KeyError::NoAlgorithmChosen)?,
                    algorithm => algorithm,
                }
            }
            _ => self.algorithm(),
        };
        let request = ImportRequest {
            format: self.format(),
            algorithm,
            der: self.raw(),
            passphrase: passphrase.as_deref(),
        };
        importer.import(request).map_err(KeyError::from)
    }
}
