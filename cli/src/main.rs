use clap::{Parser, Subcommand};

mod decode;
mod error;
mod key;
mod utils;

use error::Result;

#[derive(Parser)]
#[command(name = "kigumi")]
#[command(about = "ASN.1 structure and private key inspection", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode DER or PEM input and print the node tree
    Decode {
        #[command(flatten)]
        config: decode::Config,
    },
    /// Classify a private key
    Key {
        #[command(flatten)]
        config: key::Config,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Decode { config } => decode::execute(config),
        Commands::Key { config } => key::execute(config),
    }
}
