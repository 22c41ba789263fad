use thiserror::Error;

use crate::import::ImportError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("ASN.1 data must be constructed data")]
    NotConstructedData,

    /// A PKCS#8 wrapper promises a resolvable algorithm; this OID is not
    /// in the table.
    #[error("unresolved key algorithm OID: {0}")]
    UnresolvedAlgorithmOid(String),

    #[error("structure does not match any known private key shape")]
    UnrecognizedKeyStructure,

    #[error("no ASN.1 elements decoded from input")]
    NoAsn1Data,

    #[error("no private key block in PEM input")]
    NoPrivateKeyPem,

    #[error("a passphrase is required to import an encrypted key")]
    MissingPassphrase,

    #[error("no key algorithm chosen")]
    NoAlgorithmChosen,

    #[error("PEM error: {0}")]
    Pem(#[from] pem::Error),

    #[error(transparent)]
    Import(#[from] ImportError),
}

pub type Result<T> = std::result::Result<T, Error>;
