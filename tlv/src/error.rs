use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("input ends before the encoded value does")]
    TruncatedInput,
    #[error("malformed tag octets")]
    InvalidTag,
    #[error("malformed length octets")]
    InvalidLength,
    #[error("unsupported encoding: {0}")]
    Unsupported(&'static str),
}
