use std::path::PathBuf;

use clap::Parser;
use tessera_client::CardsClient;

use crate::{
    actions::shared::utils::{read_validated_identity, write_json_to_file_or_stdout},
    error::result::CliResult,
};

/// Fetch the private key of a Card from the Private Keys service.
///
/// The validated identity file proves ownership of the identity the Card
/// binds - see the identity confirmation flow.
#[derive(Parser, Debug)]
pub struct PrivateKeyGetAction {
    /// The Card identifier the key belongs to
    #[clap(long = "card-id", short = 'a')]
    card_id: String,

    /// The validated identity file
    #[clap(long = "validated-identity", short = 'f')]
    validated_identity: PathBuf,

    /// The file to write the private key to. If omitted, stdout is used.
    #[clap(long = "out", short = 'o')]
    output_file: Option<PathBuf>,

    /// Show detailed information
    #[clap(long = "verbose", short = 'V')]
    verbose: bool,
}

impl PrivateKeyGetAction {
    pub async fn run(&self, cards_client: &CardsClient) -> CliResult<()> {
        let validated_identity = read_validated_identity(&self.validated_identity)?;

        let private_key = cards_client
            .get_private_key(&self.card_id, &validated_identity)
            .await?;

        write_json_to_file_or_stdout(&private_key, self.output_file.as_ref())?;

        if self.verbose {
            println!(
                "Private key connected with the Card containing card-id: {} has been received",
                self.card_id
            );
        }

        Ok(())
    }
}
