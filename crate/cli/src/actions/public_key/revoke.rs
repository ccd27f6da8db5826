use std::path::PathBuf;

use clap::Parser;
use tessera_client::CardsClient;

use crate::{
    actions::shared::{
        credentials::{resolve_credentials, TtyPrompt},
        identities::{
            select_revocation_target, IdentityTypePolicy, RevocationTarget,
            PUBLIC_CARD_IDENTITY_TYPES,
        },
    },
    error::result::CliResult,
};

/// Revoke a chain of Cards with (un)confirmed identities connected by
/// public-key-id.
///
/// Exactly one of `--validated-identity` and `--identity` must be supplied.
/// Identities given with `--identity` are unconfirmed `type:value` pairs and
/// are restricted to the public-card types (email, application).
#[derive(Parser, Debug)]
pub struct PublicKeyRevokeAction {
    /// The public key identifier of the chain to revoke
    #[clap(long = "public-key-id", short = 'e')]
    public_key_id: String,

    /// The Card identifier of one of the Cards in the chain
    #[clap(long = "card-id", short = 'a')]
    card_id: String,

    /// The owner's private key file
    #[clap(long = "key", short = 'k')]
    key: PathBuf,

    /// An unconfirmed identity as a `type:value` pair.
    /// To revoke several identities, use the option multiple times.
    #[clap(long = "identity", short = 'd', value_name = "TYPE:VALUE")]
    identities: Vec<String>,

    /// A validated identity file.
    /// To revoke several identities, use the option multiple times.
    #[clap(long = "validated-identity", short = 'f', value_name = "FILE")]
    validated_identities: Vec<PathBuf>,
}

impl PublicKeyRevokeAction {
    pub async fn run(&self, cards_client: &CardsClient) -> CliResult<()> {
        let credentials = resolve_credentials(&self.key, None, &TtyPrompt)?;

        let target = select_revocation_target(
            &self.validated_identities,
            &self.identities,
            IdentityTypePolicy::Strict(PUBLIC_CARD_IDENTITY_TYPES),
        )?;

        match &target {
            RevocationTarget::Confirmed(validated_identities) => {
                cards_client
                    .revoke(
                        &self.public_key_id,
                        &self.card_id,
                        validated_identities,
                        &credentials,
                    )
                    .await?;
            }
            RevocationTarget::Unconfirmed(identities) => {
                cards_client
                    .revoke_not_valid(
                        &self.public_key_id,
                        &self.card_id,
                        identities,
                        &credentials,
                    )
                    .await?;
            }
        }

        println!(
            "Card with public-key-id: {} has been revoked",
            self.public_key_id
        );

        Ok(())
    }
}
