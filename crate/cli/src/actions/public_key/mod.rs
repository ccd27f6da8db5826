mod revoke;
mod revoke_private;

use clap::Parser;
use tessera_client::CardsClient;

use self::{revoke::PublicKeyRevokeAction, revoke_private::PublicKeyRevokePrivateAction};
use crate::error::result::CliResult;

/// Revoke chains of Cards connected by public-key-id.
#[derive(Parser)]
pub enum PublicKeyCommands {
    Revoke(PublicKeyRevokeAction),
    RevokePrivate(PublicKeyRevokePrivateAction),
}

impl PublicKeyCommands {
    pub async fn process(&self, cards_client: &CardsClient) -> CliResult<()> {
        match self {
            Self::Revoke(action) => action.run(cards_client).await,
            Self::RevokePrivate(action) => action.run(cards_client).await,
        }
    }
}
