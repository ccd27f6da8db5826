use std::path::PathBuf;

use tessera_client::{Identity, ValidatedIdentity};

use crate::{
    actions::shared::utils::read_validated_identity,
    error::{result::CliResult, CliError},
};

/// Identity types the service knows about on public Cards.
pub const PUBLIC_CARD_IDENTITY_TYPES: &[&str] = &["email", "application"];

/// How strictly the type tag of a raw `type:value` pair is checked.
///
/// Public-card commands restrict the vocabulary; private-card commands
/// accept any tag so that obfuscated types pass through untouched.
#[derive(Clone, Copy, Debug)]
pub enum IdentityTypePolicy {
    Strict(&'static [&'static str]),
    Open,
}

/// The set of identities a revocation applies to.
///
/// Exactly one variant per invocation; the order follows the command line.
#[derive(Debug, PartialEq, Eq)]
pub enum RevocationTarget {
    Confirmed(Vec<ValidatedIdentity>),
    Unconfirmed(Vec<Identity>),
}

/// Split a raw `type:value` argument on its first colon.
pub fn parse_identity_pair(raw: &str) -> CliResult<Identity> {
    let Some((identity_type, value)) = raw.split_once(':') else {
        return Err(CliError::Validation(format!(
            "missing ':' separator in identity '{raw}'"
        )))
    };
    if identity_type.is_empty() || value.is_empty() {
        return Err(CliError::Validation(format!(
            "empty type or value in identity '{raw}'"
        )))
    }
    Ok(Identity::new(identity_type, value))
}

/// Decide between the confirmed and unconfirmed revocation flows.
///
/// Callers pass the two argument lists as given on the command line; exactly
/// one must be non-empty. Validated identity files are loaded in order and
/// any load failure aborts the whole selection. Raw pairs are parsed in
/// order and their type tags checked against `policy`.
pub fn select_revocation_target(
    validated_identity_files: &[PathBuf],
    raw_identities: &[String],
    policy: IdentityTypePolicy,
) -> CliResult<RevocationTarget> {
    if !validated_identity_files.is_empty() && !raw_identities.is_empty() {
        return Err(CliError::Validation(
            "--validated-identity and --identity are mutually exclusive".to_owned(),
        ))
    }
    if validated_identity_files.is_empty() && raw_identities.is_empty() {
        return Err(CliError::Validation(
            "one of --validated-identity or --identity must be supplied".to_owned(),
        ))
    }

    if !validated_identity_files.is_empty() {
        let mut validated_identities = Vec::with_capacity(validated_identity_files.len());
        for file in validated_identity_files {
            validated_identities.push(read_validated_identity(file)?);
        }
        return Ok(RevocationTarget::Confirmed(validated_identities))
    }

    let mut identities = Vec::with_capacity(raw_identities.len());
    for raw in raw_identities {
        let identity = parse_identity_pair(raw)?;
        if let IdentityTypePolicy::Strict(allowed_types) = policy {
            if !allowed_types.contains(&identity.identity_type.as_str()) {
                return Err(CliError::Validation(format!(
                    "unknown identity type '{}' in '{raw}' (expected one of: {})",
                    identity.identity_type,
                    allowed_types.join(", ")
                )))
            }
        }
        identities.push(identity);
    }
    Ok(RevocationTarget::Unconfirmed(identities))
}
