use std::fs;
use std::io::{self, Read};

use kigumi::decoder::Decoder;
use tlv::Mode;

use crate::error::Result;

/// Read input from a file, or from stdin when no path is given.
pub(crate) fn read_input(file: Option<&str>) -> Result<Vec<u8>> {
    match file {
        Some(path) => Ok(fs::read(path)?),
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// The encoding rule set, as a command-line choice.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub(crate) enum Rules {
    Ber,
    Cer,
    Der,
}

impl From<Rules> for Mode {
    fn from(rules: Rules) -> Self {
        match rules {
            Rules::Ber => Mode::Ber,
            Rules::Cer => Mode::Cer,
            Rules::Der => Mode::Der,
        }
    }
}

/// Unwraps the first PEM frame when the input is PEM text; otherwise the
/// input is already binary DER.
pub(crate) fn unwrap_pem(input: &[u8]) -> Result<Vec<u8>> {
    if let Ok(text) = std::str::from_utf8(input) {
        if let Ok(blocks) = pem::parse(text) {
            let der: Vec<u8> = blocks[0].decode()?;
            return Ok(der);
        }
    }
    Ok(input.to_vec())
}
