use std::{
    fs::{self, File},
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};
use tessera_client::ValidatedIdentity;

use crate::error::{result::CliResult, CliError};

/// Read all bytes from a file
pub(crate) fn read_bytes_from_file(file: &impl AsRef<Path>) -> CliResult<Vec<u8>> {
    let mut buffer = Vec::new();
    File::open(file)
        .map_err(|e| {
            CliError::Io(format!(
                "could not open the file {}: {e}",
                file.as_ref().display()
            ))
        })?
        .read_to_end(&mut buffer)
        .map_err(|e| {
            CliError::Io(format!(
                "could not read the file {}: {e}",
                file.as_ref().display()
            ))
        })?;

    Ok(buffer)
}

/// Read an object T from a JSON file
pub(crate) fn read_from_json_file<T>(file: &impl AsRef<Path>) -> CliResult<T>
where
    T: DeserializeOwned,
{
    let buffer = read_bytes_from_file(file)?;
    serde_json::from_slice::<T>(&buffer).map_err(|e| {
        CliError::Validation(format!(
            "malformed JSON in {}: {e}",
            file.as_ref().display()
        ))
    })
}

/// Load a validated identity artifact produced by the identity confirmation
/// flow. All failures are validation errors: a missing or malformed artifact
/// means the identity cannot be used as a confirmed revocation target.
pub(crate) fn read_validated_identity(file: &impl AsRef<Path>) -> CliResult<ValidatedIdentity> {
    let buffer = fs::read(file).map_err(|e| {
        CliError::Validation(format!(
            "cannot read the validated identity file {}: {e}",
            file.as_ref().display()
        ))
    })?;
    serde_json::from_slice(&buffer).map_err(|e| {
        CliError::Validation(format!(
            "malformed validated identity in {}: {e}",
            file.as_ref().display()
        ))
    })
}

/// Write an object as pretty JSON to `file`, or to stdout when no output
/// file was given.
pub(crate) fn write_json_to_file_or_stdout<T>(
    json_object: &T,
    file: Option<&PathBuf>,
) -> CliResult<()>
where
    T: Serialize,
{
    let bytes = serde_json::to_vec_pretty(json_object)?;
    match file {
        Some(file) => {
            fs::write(file, &bytes)
                .map_err(|e| CliError::Io(format!("failed writing to {}: {e}", file.display())))?;
            tracing::info!("The output is available at {file:?}");
        }
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(&bytes)?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
