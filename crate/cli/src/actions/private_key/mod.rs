mod add;
mod get;

use clap::Parser;
use tessera_client::CardsClient;

use self::{add::PrivateKeyAddAction, get::PrivateKeyGetAction};
use crate::error::result::CliResult;

/// Register and fetch private keys on the Private Keys service.
#[derive(Parser)]
pub enum PrivateKeyCommands {
    Add(PrivateKeyAddAction),
    Get(PrivateKeyGetAction),
}

impl PrivateKeyCommands {
    pub async fn process(&self, cards_client: &CardsClient) -> CliResult<()> {
        match self {
            Self::Add(action) => action.run(cards_client).await,
            Self::Get(action) => action.run(cards_client).await,
        }
    }
}
