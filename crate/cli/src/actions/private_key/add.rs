use std::path::PathBuf;

use clap::Parser;
use tessera_client::CardsClient;

use crate::{
    actions::shared::credentials::{resolve_credentials, TtyPrompt},
    error::result::CliResult,
};

/// Register a Card's private key with the Private Keys service.
///
/// The service stores the key so it can later be fetched with a validated
/// identity (see `tessera private-key get`).
#[derive(Parser, Debug)]
pub struct PrivateKeyAddAction {
    /// The Card identifier the key belongs to
    #[clap(long = "card-id", short = 'a')]
    card_id: String,

    /// The private key file
    #[clap(long = "key", short = 'k')]
    key: PathBuf,

    /// Password of the private key. If the key is encrypted and no password
    /// is supplied, it is read from the terminal.
    #[clap(long = "key-password", short = 'p')]
    key_password: Option<String>,

    /// Show detailed information
    #[clap(long = "verbose", short = 'V')]
    verbose: bool,
}

impl PrivateKeyAddAction {
    pub async fn run(&self, cards_client: &CardsClient) -> CliResult<()> {
        let credentials = resolve_credentials(&self.key, self.key_password.as_deref(), &TtyPrompt)?;

        cards_client
            .add_private_key(&self.card_id, &credentials)
            .await?;

        if self.verbose {
            println!("Private key has been added to the Private Keys service");
        }

        Ok(())
    }
}
