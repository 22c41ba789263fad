//! Error types for ASN.1 node decoding.

use thiserror::Error;
use tlv::Tag;

/// Errors that can occur while turning an encoded element into a typed node.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Tlv(#[from] tlv::Error),

    /// The content octets do not form a valid value for this tag under the
    /// active rule set.
    #[error("unsupported {tag} encoding: {reason}")]
    UnsupportedEncoding { tag: Tag, reason: String },
}

pub(crate) fn unsupported(tag: Tag, reason: impl Into<String>) -> Error {
    Error::UnsupportedEncoding {
        tag,
        reason: reason.into(),
    }
}
