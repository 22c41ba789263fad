//! Object identifiers and the registered-name table.

use std::fmt::Display;
use std::str::FromStr;

use tlv::Tag;

use crate::error::{Error, unsupported};

/// Registered names for identifiers this tool commonly meets in key and
/// certificate material. Extend by adding rows; `lookup` does the rest.
const NAMES: &[(&str, &str)] = &[
    ("1.2.840.10040.4.1", "dsa"),
    ("1.2.840.10045.2.1", "ecPublicKey"),
    ("1.2.840.10045.3.1.7", "prime256v1"),
    ("1.2.840.10045.4.3.2", "ecdsa-with-SHA256"),
    ("1.2.840.113549.1.1.1", "rsaEncryption"),
    ("1.2.840.113549.1.1.5", "sha1WithRSAEncryption"),
    ("1.2.840.113549.1.1.11", "sha256WithRSAEncryption"),
    ("1.2.840.113549.1.5.12", "PBKDF2"),
    ("1.2.840.113549.1.5.13", "PBES2"),
    ("1.2.840.113549.2.9", "hmacWithSHA256"),
    ("1.3.101.112", "Ed25519"),
    ("1.3.132.0.34", "secp384r1"),
    ("2.5.4.3", "commonName"),
    ("2.5.4.6", "countryName"),
    ("2.5.4.7", "localityName"),
    ("2.5.4.8", "stateOrProvinceName"),
    ("2.5.4.10", "organizationName"),
    ("2.5.4.11", "organizationalUnitName"),
    ("2.5.29.14", "subjectKeyIdentifier"),
    ("2.5.29.15", "keyUsage"),
    ("2.5.29.17", "subjectAltName"),
    ("2.5.29.19", "basicConstraints"),
    ("2.16.840.1.101.3.4.1.2", "aes128-CBC"),
    ("2.16.840.1.101.3.4.1.42", "aes256-CBC"),
];

/// Returns the registered name for a dotted-decimal identifier, if any.
pub fn lookup(oid: &str) -> Option<&'static str> {
    NAMES
        .iter()
        .find(|(candidate, _)| *candidate == oid)
        .map(|(_, name)| *name)
}

/// An object identifier: dotted-decimal components, resolvable to a
/// registered name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Oid {
    components: Vec<u64>,
}

impl Oid {
    /// Decodes the content octets of an OBJECT IDENTIFIER element.
    ///
    /// The base-128 sub-identifiers are unpacked first; the leading
    /// sub-identifier then splits into the first two components
    /// (`<40 → 0.x`, `<80 → 1.(x-40)`, else `2.(x-80)`).
    pub(crate) fn from_der(data: &[u8]) -> Result<Self, Error> {
        if data.is_empty() {
            return Err(unsupported(Tag::OID, "no content octets"));
        }
        let mut sub_ids = Vec::new();
        let mut value = 0u64;
        let mut continued = false;
        for &b in data {
            if !continued && b == 0x80 {
                return Err(unsupported(Tag::OID, "non-minimal sub-identifier"));
            }
            if value > u64::MAX >> 7 {
                return Err(unsupported(Tag::OID, "sub-identifier overflows u64"));
            }
            value = (value << 7) | u64::from(b & 0x7f);
            continued = b & 0x80 != 0;
            if !continued {
                sub_ids.push(value);
                value = 0;
            }
        }
        if continued {
            return Err(unsupported(Tag::OID, "truncated sub-identifier"));
        }

        let first = sub_ids[0];
        let mut components = Vec::with_capacity(sub_ids.len() + 1);
        if first < 40 {
            components.push(0);
            components.push(first);
        } else if first < 80 {
            components.push(1);
            components.push(first - 40);
        } else {
            components.push(2);
            components.push(first - 80);
        }
        components.extend_from_slice(&sub_ids[1..]);
        Ok(Oid { components })
    }

    pub fn components(&self) -> &[u64] {
        &self.components
    }

    /// The registered name of this identifier, if the table knows it.
    pub fn name(&self) -> Option<&'static str> {
        lookup(&self.to_string())
    }

    /// `"name (oid)"` when the identifier is registered, the bare dotted
    /// form otherwise.
    pub fn describe(&self) -> String {
        match self.name() {
            Some(name) => format!("{} ({})", name, self),
            None => self.to_string(),
        }
    }
}

impl Display for Oid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self.components.first() {
            Some(n) => self.components[1..]
                .iter()
                .fold(n.to_string(), |s, n| s + "." + &n.to_string()),
            None => String::new(),
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Oid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let components = s
            .split('.')
            .map(|part| {
                part.parse::<u64>()
                    .map_err(|_| unsupported(Tag::OID, format!("invalid component '{}'", part)))
            })
            .collect::<Result<Vec<u64>, Error>>()?;
        Ok(Oid { components })
    }
}

impl PartialEq<&str> for Oid {
    fn eq(&self, other: &&str) -> bool {
        self.components
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(".")
            == *other
    }
}
