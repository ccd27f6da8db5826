use std::{io::IsTerminal, path::Path};

use tessera_client::Credentials;
use zeroize::Zeroizing;

use crate::{
    actions::shared::utils::read_bytes_from_file,
    error::{result::CliResult, CliError},
};

/// A blocking, non-echoing source of secrets.
///
/// Injected into [`resolve_credentials`] so tests can supply canned input
/// instead of a terminal.
pub trait SecretInput {
    fn read_secret(&self, prompt: &str) -> CliResult<String>;
}

/// Reads the secret from the controlling terminal without echoing it.
pub struct TtyPrompt;

impl SecretInput for TtyPrompt {
    fn read_secret(&self, prompt: &str) -> CliResult<String> {
        if !std::io::stdin().is_terminal() {
            return Err(CliError::Io(
                "the private key is encrypted and no password was supplied, but there is no \
                 terminal to prompt on"
                    .to_owned(),
            ))
        }
        rpassword::prompt_password(prompt)
            .map_err(|e| CliError::Io(format!("failed reading the password: {e}")))
    }
}

/// PEM tags that hold private key material in the clear.
const PLAIN_KEY_TAGS: &[&str] = &["PRIVATE KEY", "RSA PRIVATE KEY", "EC PRIVATE KEY"];

/// Determine whether the private key bytes require a password.
///
/// | PEM tag | encrypted |
/// |---------|-----------|
/// | ENCRYPTED PRIVATE KEY | always |
/// | PRIVATE KEY, RSA PRIVATE KEY, EC PRIVATE KEY | when a `Proc-Type: 4,ENCRYPTED` header is present |
///
/// Anything else is not a private key.
pub fn key_is_encrypted(key_bytes: &[u8]) -> CliResult<bool> {
    let pem = pem::parse(key_bytes)
        .map_err(|e| CliError::KeyFormat(format!("cannot parse the private key: {e}")))?;
    match pem.tag() {
        "ENCRYPTED PRIVATE KEY" => Ok(true),
        tag if PLAIN_KEY_TAGS.contains(&tag) => Ok(pem
            .headers()
            .get("Proc-Type")
            .is_some_and(|proc_type| proc_type.contains("ENCRYPTED"))),
        tag => Err(CliError::KeyFormat(format!(
            "PEM tag {tag} is not a private key"
        ))),
    }
}

/// Build the signing credential for a command.
///
/// An explicit password is taken verbatim without probing the key (a wrong
/// password is rejected by the service, not here). Without one, the key is
/// probed and, when encrypted, the password is read from `prompt`.
pub fn resolve_credentials(
    key_file: &impl AsRef<Path>,
    password: Option<&str>,
    prompt: &impl SecretInput,
) -> CliResult<Credentials> {
    let key_bytes = Zeroizing::new(read_bytes_from_file(key_file)?);
    let password = Zeroizing::new(match password {
        Some(password) => password.as_bytes().to_vec(),
        None if key_is_encrypted(&key_bytes)? => prompt
            .read_secret("Private key password: ")?
            .into_bytes(),
        None => Vec::new(),
    });
    Ok(Credentials::new(key_bytes, password))
}
