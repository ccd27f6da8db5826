use std::{env, fs::File, io::BufReader};

use serde::{Deserialize, Serialize};
use tessera_client::CardsClient;

use crate::error::result::{CliResult, CliResultHelper};

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct CliConf {
    // Insecure is useful if the cli needs to connect to an HTTPS Cards Service using an unsecured SSL certificate
    #[serde(default)]
    pub insecure: bool,
    pub cards_server_url: String,
    cards_access_token: String,
}

/// Define the configuration of the CLI reading a json
///
/// {
///     "insecure": false,
///     "cards_server_url": "http://127.0.0.1:9775",
///     "cards_access_token": "AA...AAA"
/// }
///
pub const TESSERA_CLI_CONF_ENV: &str = "TESSERA_CLI_CONF";

impl CliConf {
    pub fn load() -> CliResult<CardsClient> {
        let cli_conf_filename = env::var(TESSERA_CLI_CONF_ENV)
            .context("Can't find TESSERA_CLI_CONF env variable")?;

        let file = File::open(&cli_conf_filename).with_context(|| {
            format!("Can't read {cli_conf_filename} set in the TESSERA_CLI_CONF env variable")
        })?;

        let conf: Self = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Config JSON malformed in {cli_conf_filename}"))?;

        // Create a client to query the Cards Service
        let cards_client = CardsClient::instantiate(
            &conf.cards_server_url,
            &conf.cards_access_token,
            conf.insecure,
        )
        .with_context(|| {
            format!(
                "Can't build the query to connect to the Cards Service {}",
                &conf.cards_server_url
            )
        })?;

        Ok(cards_client)
    }
}
