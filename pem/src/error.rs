use base64::DecodeError;
use thiserror::Error;

/// Errors from PEM framing and payload decoding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The input held not a single well-formed BEGIN/END frame.
    #[error("no PEM encoded data found")]
    NoPemDataFound,

    /// The payload between the boundaries is not valid base64.
    #[error("base64 decode: {0}")]
    Base64Decode(DecodeError),
}
