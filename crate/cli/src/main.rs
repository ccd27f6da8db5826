use std::process;

use clap::{Parser, Subcommand};
use tessera_cli::{
    actions::{card::CardCommands, private_key::PrivateKeyCommands, public_key::PublicKeyCommands},
    config::CliConf,
    error::CliError,
    logger::log_init,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: CliCommands,
}

#[derive(Subcommand)]
enum CliCommands {
    /// Sign Cards with another Card's private key
    #[command(subcommand)]
    Card(CardCommands),
    /// Register and fetch private keys on the Private Keys service
    #[command(subcommand)]
    PrivateKey(PrivateKeyCommands),
    /// Revoke chains of Cards connected by public-key-id
    #[command(subcommand)]
    PublicKey(PublicKeyCommands),
}

#[tokio::main]
async fn main() {
    if let Some(err) = main_().await.err() {
        eprintln!("ERROR: {err}");
        process::exit(1);
    }
}

async fn main_() -> Result<(), CliError> {
    log_init();

    let opts = Cli::parse();
    let cards_client = CliConf::load()?;

    match opts.command {
        CliCommands::Card(command) => command.process(&cards_client).await?,
        CliCommands::PrivateKey(command) => command.process(&cards_client).await?,
        CliCommands::PublicKey(command) => command.process(&cards_client).await?,
    };

    Ok(())
}
