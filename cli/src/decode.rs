use asn1::{Node, Value, deserialize};
use clap::Args;

use crate::error::Result;
use crate::utils::{Rules, read_input, unwrap_pem};

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the DER or PEM file. If not specified, reads from stdin
    file: Option<String>,

    /// Encoding rule set to read under
    #[arg(long, value_enum, default_value = "der")]
    rules: Rules,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let input = read_input(config.file.as_deref())?;
    let der = unwrap_pem(&input)?;

    let nodes = deserialize(&der, config.rules.into());
    print!("{}", format_tree(&nodes));

    Ok(())
}

/// Format decoded nodes in a tree-like style similar to lapo.it/asn1js
fn format_tree(nodes: &[Node<'_>]) -> String {
    let mut output = String::new();
    for node in nodes {
        format_node(node, 0, &mut output);
    }
    output
}

fn format_node(node: &Node<'_>, depth: usize, output: &mut String) {
    let prefix = "  ".repeat(depth);
    match node.value() {
        Value::Constructed(constructed) => {
            let children = constructed.children();
            output.push_str(&format!("{}{} ({} elem)\n", prefix, node.tag(), children.len()));
            for child in children {
                format_node(child, depth + 1, output);
            }
        }
        // long binary payloads collapse to their size
        Value::Bytes(data) if data.len() > 32 => {
            output.push_str(&format!("{}{} ({} bytes)\n", prefix, node.tag(), data.len()));
        }
        _ => {
            output.push_str(&format!("{}{}\n", prefix, node));
        }
    }
}
