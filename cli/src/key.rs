use clap::Args;
use keys::PrivateKey;

use crate::error::Result;
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the key file (PEM or DER). If not specified, reads from stdin
    file: Option<String>,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let input = read_input(config.file.as_deref())?;

    // PEM text gets its private-key block picked out by label; anything
    // else is taken as raw DER
    let unwrapped = match std::str::from_utf8(&input) {
        Ok(text) if text.contains("-----BEGIN") => Some(keys::find_key_block(text)?),
        _ => None,
    };
    let der = unwrapped.unwrap_or(input);

    let key = PrivateKey::from_der(&der)?;
    print!("{}", summarize(&key));

    Ok(())
}

fn summarize(key: &PrivateKey<'_>) -> String {
    format!(
        "Container: {}\nAlgorithm: {}\nKey data:  {} bytes\n",
        key.format(),
        key.algorithm(),
        key.raw().len(),
    )
}

#[cfg(test)]
mod tests {
    use keys::PrivateKey;

    use super::summarize;

    #[test]
    fn test_summarize_pkcs1_rsa() {
        let der = [
            0x30, 0x1b, 0x02, 0x01, 0x00, 0x02, 0x01, 0x01, 0x02, 0x01, 0x02, 0x02, 0x01, 0x03,
            0x02, 0x01, 0x04, 0x02, 0x01, 0x05, 0x02, 0x01, 0x06, 0x02, 0x01, 0x07, 0x02, 0x01,
            0x08,
        ];
        let key = PrivateKey::from_der(&der).unwrap();
        assert_eq!(
            "Container: PKCS#1\nAlgorithm: RSA\nKey data:  29 bytes\n",
            summarize(&key)
        );
    }
}
