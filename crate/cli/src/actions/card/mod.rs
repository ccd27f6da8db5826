mod sign;

use clap::Parser;
use tessera_client::CardsClient;

use self::sign::CardSignAction;
use crate::error::result::CliResult;

/// Sign Cards with another Card's private key.
#[derive(Parser)]
pub enum CardCommands {
    Sign(CardSignAction),
}

impl CardCommands {
    pub async fn process(&self, cards_client: &CardsClient) -> CliResult<()> {
        match self {
            Self::Sign(action) => action.run(cards_client).await,
        }
    }
}
