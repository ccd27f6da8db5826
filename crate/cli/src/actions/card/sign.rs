use std::path::PathBuf;

use clap::Parser;
use tessera_client::{CardModel, CardsClient};

use crate::{
    actions::shared::{
        credentials::{resolve_credentials, TtyPrompt},
        utils::{read_from_json_file, write_json_to_file_or_stdout},
    },
    error::result::CliResult,
};

/// Sign a Card with another Card's private key.
///
/// Both Cards are read from their JSON files as returned by the Cards
/// Service. If the signer's key is encrypted, the password is read from the
/// terminal. The resulting Sign is written to `--out` or stdout.
#[derive(Parser, Debug)]
pub struct CardSignAction {
    /// The signer's Card file
    #[clap(long = "signer", short = 's')]
    signer: PathBuf,

    /// The Card file to be signed
    #[clap(long = "to-be-signed", short = 'b')]
    to_be_signed: PathBuf,

    /// The signer's private key file
    #[clap(long = "key", short = 'k')]
    key: PathBuf,

    /// The file to write the Sign to. If omitted, stdout is used.
    #[clap(long = "out", short = 'o')]
    output_file: Option<PathBuf>,
}

impl CardSignAction {
    pub async fn run(&self, cards_client: &CardsClient) -> CliResult<()> {
        let signer_card: CardModel = read_from_json_file(&self.signer)?;
        let to_be_signed_card: CardModel = read_from_json_file(&self.to_be_signed)?;

        let credentials = resolve_credentials(&self.key, None, &TtyPrompt)?;

        let card_sign = cards_client
            .sign(
                &to_be_signed_card.id,
                &to_be_signed_card.hash,
                &signer_card.id,
                &credentials,
            )
            .await?;

        write_json_to_file_or_stdout(&card_sign, self.output_file.as_ref())?;

        println!(
            "Card with card-id: {} has been used to sign the Card with card-id: {}",
            signer_card.id, to_be_signed_card.id
        );

        Ok(())
    }
}
