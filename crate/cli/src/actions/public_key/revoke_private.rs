use std::path::PathBuf;

use clap::Parser;
use tessera_client::CardsClient;

use crate::{
    actions::shared::{
        credentials::{resolve_credentials, TtyPrompt},
        identities::{select_revocation_target, IdentityTypePolicy, RevocationTarget},
    },
    error::result::CliResult,
};

/// Revoke a group of private Cards connected by public-key-id.
///
/// Exactly one of `--validated-identity` and `--identity` must be supplied.
/// Unlike `public-key revoke`, identity types are not checked against the
/// public-card vocabulary: obfuscated types and values are passed to the
/// service untouched.
#[derive(Parser, Debug)]
pub struct PublicKeyRevokePrivateAction {
    /// The public key identifier of the group to revoke
    #[clap(long = "public-key-id", short = 'e')]
    public_key_id: String,

    /// The private Card identifier of one of the Cards in the group
    #[clap(long = "card-id", short = 'a')]
    card_id: String,

    /// The owner's private key file
    #[clap(long = "key", short = 'k')]
    key: PathBuf,

    /// Password of the private key. If the key is encrypted and no password
    /// is supplied, it is read from the terminal.
    #[clap(long = "key-password", short = 'p')]
    key_password: Option<String>,

    /// An unconfirmed identity as a `type:value` pair.
    /// To revoke several identities, use the option multiple times.
    #[clap(long = "identity", short = 'd', value_name = "TYPE:VALUE")]
    identities: Vec<String>,

    /// A validated identity file.
    /// To revoke several identities, use the option multiple times.
    #[clap(long = "validated-identity", short = 'f', value_name = "FILE")]
    validated_identities: Vec<PathBuf>,

    /// Show detailed information
    #[clap(long = "verbose", short = 'V')]
    verbose: bool,
}

impl PublicKeyRevokePrivateAction {
    pub async fn run(&self, cards_client: &CardsClient) -> CliResult<()> {
        let credentials = resolve_credentials(&self.key, self.key_password.as_deref(), &TtyPrompt)?;

        let target = select_revocation_target(
            &self.validated_identities,
            &self.identities,
            IdentityTypePolicy::Open,
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

        if self.verbose {
            println!(
                "Card[s] with public-key-id: {} has been revoked",
                self.public_key_id
            );
        }

        Ok(())
    }
}
