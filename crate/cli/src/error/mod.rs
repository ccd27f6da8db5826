use tessera_client::ClientError;
use thiserror::Error;

pub mod result;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Default(String),

    /// An input file could not be read, or interactive input was required
    /// and no terminal is available
    #[error("{0}")]
    Io(String),

    /// The private key file does not hold usable key material
    #[error("invalid private key: {0}")]
    KeyFormat(String),

    /// Malformed identity-pair syntax, unrecognized identity type or
    /// contradictory target selection
    #[error("invalid identity: {0}")]
    Validation(String),

    /// An error returned by the Cards Service or its transport
    #[error(transparent)]
    ClientError(#[from] ClientError),

    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

/// Return early with an error if a condition is not satisfied.
///
/// This macro is equivalent to `if !$cond { return Err(From::from($err)); }`.
#[macro_export]
macro_rules! cli_ensure {
    ($cond:expr, $msg:literal $(,)?) => {
        if !$cond {
            return ::core::result::Result::Err($crate::cli_error!($msg));
        }
    };
    ($cond:expr, $err:expr $(,)?) => {
        if !$cond {
            return ::core::result::Result::Err($err);
        }
    };
    ($cond:expr, $fmt:expr, $($arg:tt)*) => {
        if !$cond {
            return ::core::result::Result::Err($crate::cli_error!($fmt, $($arg)*));
        }
    };
}

/// Construct a CLI error from a string.
#[macro_export]
macro_rules! cli_error {
    ($msg:literal) => {
        $crate::error::CliError::Default(::core::format_args!($msg).to_string())
    };
    ($err:expr $(,)?) => ({
        $crate::error::CliError::Default($err.to_string())
    });
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::CliError::Default(::core::format_args!($fmt, $($arg)*).to_string())
    };
}

/// Return early with an error.
#[macro_export]
macro_rules! cli_bail {
    ($msg:literal) => {
        return ::core::result::Result::Err($crate::cli_error!($msg))
    };
    ($err:expr $(,)?) => {
        return ::core::result::Result::Err($err)
    };
    ($fmt:expr, $($arg:tt)*) => {
        return ::core::result::Result::Err($crate::cli_error!($fmt, $($arg)*))
    };
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use crate::error::result::CliResult;

    #[test]
    fn test_cli_error_interpolation() {
        let card_id = "c-42";
        let err = cli_error!("unknown card {card_id}");
        assert_eq!("unknown card c-42", err.to_string());

        let err = bail();
        match err {
            Err(e) => assert_eq!("unknown card c-43", e.to_string()),
            Ok(()) => panic!("expected error"),
        }

        let err = ensure();
        match err {
            Err(e) => assert_eq!("unknown card c-44", e.to_string()),
            Ok(()) => panic!("expected error"),
        }
    }

    fn bail() -> CliResult<()> {
        let card_id = "c-43";
        if true {
            cli_bail!("unknown card {card_id}");
        }
        Ok(())
    }

    fn ensure() -> CliResult<()> {
        let card_id = "c-44";
        cli_ensure!(false, "unknown card {card_id}");
        Ok(())
    }
}
