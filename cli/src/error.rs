use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PEM decode error: {0}")]
    Pem(#[from] pem::error::Error),

    #[error("key classification error: {0}")]
    Keys(#[from] keys::error::Error),
}

pub(crate) type Result<T> = std::result::Result<T, Error>;
