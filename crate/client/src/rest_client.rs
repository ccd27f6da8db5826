use std::time::Duration;

use base64::{engine::general_purpose, Engine as _};
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client, ClientBuilder, Response, StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::trace;
use url::Url;

use crate::{
    error::ClientError,
    models::{Credentials, Identity, PrivateKeyModel, SignModel, ValidatedIdentity},
    result::{ClientResult, ClientResultHelper},
};

/// A client for the Cards Service REST API.
///
/// One instance is built per CLI invocation from the configuration file and
/// performs at most one operation before the process terminates.
#[derive(Clone)]
pub struct CardsClient {
    pub server_url: String,
    client: Client,
}

/// Credential material as the service expects it on owner-authorized
/// operations. The service verifies that the key matches the public key of
/// the targeted Card chain and that the password decrypts it.
#[derive(Serialize)]
struct CredentialsDto {
    private_key: String,
    password: String,
}

impl From<&Credentials> for CredentialsDto {
    fn from(credentials: &Credentials) -> Self {
        Self {
            private_key: general_purpose::STANDARD.encode(credentials.key_bytes()),
            password: general_purpose::STANDARD.encode(credentials.password()),
        }
    }
}

#[derive(Serialize)]
struct SignRequest<'a> {
    signed_card_hash: &'a str,
    signer_card_id: &'a str,
    credentials: CredentialsDto,
}

#[derive(Serialize)]
struct AddPrivateKeyRequest<'a> {
    card_id: &'a str,
    credentials: CredentialsDto,
}

#[derive(Serialize)]
struct GetPrivateKeyRequest<'a> {
    card_id: &'a str,
    validated_identity: &'a ValidatedIdentity,
}

#[derive(Serialize)]
struct RevokeRequest<'a> {
    card_id: &'a str,
    validated_identities: &'a [ValidatedIdentity],
    credentials: CredentialsDto,
}

#[derive(Serialize)]
struct RevokeNotValidRequest<'a> {
    card_id: &'a str,
    identities: &'a [Identity],
    credentials: CredentialsDto,
}

/// Response for success
#[derive(Deserialize, Serialize, Debug)]
struct SuccessResponse {
    success: String,
}

impl CardsClient {
    /// Sign the Card `signed_card_id` with the private key of the Card
    /// `signer_card_id`, endorsing the binding captured by
    /// `signed_card_hash`.
    pub async fn sign(
        &self,
        signed_card_id: &str,
        signed_card_hash: &str,
        signer_card_id: &str,
        credentials: &Credentials,
    ) -> ClientResult<SignModel> {
        self.post_json(
            &format!("/card/{signed_card_id}/sign"),
            &SignRequest {
                signed_card_hash,
                signer_card_id,
                credentials: credentials.into(),
            },
        )
        .await
    }

    /// Register a Card's private key with the Private Keys service.
    pub async fn add_private_key(
        &self,
        card_id: &str,
        credentials: &Credentials,
    ) -> ClientResult<()> {
        let response: SuccessResponse = self
            .post_json(
                "/private-key",
                &AddPrivateKeyRequest {
                    card_id,
                    credentials: credentials.into(),
                },
            )
            .await?;
        trace!("add_private_key: {}", response.success);
        Ok(())
    }

    /// Fetch the private key of a Card; the validated identity proves
    /// ownership of the identity the Card binds.
    pub async fn get_private_key(
        &self,
        card_id: &str,
        validated_identity: &ValidatedIdentity,
    ) -> ClientResult<PrivateKeyModel> {
        self.post_json(
            "/private-key/retrieve",
            &GetPrivateKeyRequest {
                card_id,
                validated_identity,
            },
        )
        .await
    }

    /// Revoke the chain of Cards sharing `public_key_id`, authorized by
    /// validated identities.
    pub async fn revoke(
        &self,
        public_key_id: &str,
        card_id: &str,
        validated_identities: &[ValidatedIdentity],
        credentials: &Credentials,
    ) -> ClientResult<()> {
        let response: SuccessResponse = self
            .delete_json(
                &format!("/public-key/{public_key_id}"),
                &RevokeRequest {
                    card_id,
                    validated_identities,
                    credentials: credentials.into(),
                },
            )
            .await?;
        trace!("revoke: {}", response.success);
        Ok(())
    }

    /// Revoke the chain of Cards sharing `public_key_id`, authorized by
    /// unconfirmed `type:value` identities.
    pub async fn revoke_not_valid(
        &self,
        public_key_id: &str,
        card_id: &str,
        identities: &[Identity],
        credentials: &Credentials,
    ) -> ClientResult<()> {
        let response: SuccessResponse = self
            .delete_json(
                &format!("/public-key/{public_key_id}/not-valid"),
                &RevokeNotValidRequest {
                    card_id,
                    identities,
                    credentials: credentials.into(),
                },
            )
            .await?;
        trace!("revoke_not_valid: {}", response.success);
        Ok(())
    }

    /// Instantiate a new Cards Service REST client.
    ///
    /// The access token authenticates the application against the service;
    /// `accept_invalid_certs` is useful when the service runs behind a
    /// self-signed certificate.
    pub fn instantiate(
        server_url: &str,
        access_token: &str,
        accept_invalid_certs: bool,
    ) -> ClientResult<Self> {
        // fail fast on a malformed URL rather than on the first request
        Url::parse(server_url)?;
        let server_url = server_url
            .strip_suffix('/')
            .map_or_else(|| server_url.to_string(), std::string::ToString::to_string);

        let mut headers = HeaderMap::new();
        if !access_token.is_empty() {
            headers.insert(
                "Authorization",
                HeaderValue::from_str(format!("Bearer {access_token}").as_str())?,
            );
        }

        Ok(Self {
            client: ClientBuilder::new()
                .danger_accept_invalid_certs(accept_invalid_certs)
                .default_headers(headers)
                .tcp_keepalive(Duration::from_secs(60))
                .build()
                .context("Reqwest client builder")?,
            server_url,
        })
    }

    async fn post_json<O, R>(&self, endpoint: &str, data: &O) -> ClientResult<R>
    where
        O: Serialize,
        R: serde::de::DeserializeOwned + Sized + 'static,
    {
        let server_url = format!("{}{endpoint}", self.server_url);
        trace!(
            "==>\n{}",
            serde_json::to_string_pretty(&data).unwrap_or_else(|_| "[N/A]".to_owned())
        );
        let response = self.client.post(server_url).json(data).send().await?;

        let status_code = response.status();
        if status_code.is_success() {
            return Ok(response.json::<R>().await?)
        }

        // process error
        let p = handle_error(endpoint, response).await?;
        Err(ClientError::RequestFailed(p))
    }

    async fn delete_json<O, R>(&self, endpoint: &str, data: &O) -> ClientResult<R>
    where
        O: Serialize,
        R: serde::de::DeserializeOwned + Sized + 'static,
    {
        let server_url = format!("{}{endpoint}", self.server_url);
        trace!(
            "==>\n{}",
            serde_json::to_string_pretty(&data).unwrap_or_else(|_| "[N/A]".to_owned())
        );
        let response = self.client.delete(server_url).json(data).send().await?;

        let status_code = response.status();
        if status_code.is_success() {
            return Ok(response.json::<R>().await?)
        }

        // process error
        let p = handle_error(endpoint, response).await?;
        Err(ClientError::RequestFailed(p))
    }
}

/// Some errors are returned by the middleware without going through the
/// service's own error manager. In that case, make the error clearer here
/// for the client.
async fn handle_error(endpoint: &str, response: Response) -> ClientResult<String> {
    trace!("Error response received on {endpoint}: Response: {response:?}");
    let status = response.status();
    let text = response.text().await?;

    Ok(format!(
        "{}: {}",
        endpoint,
        if text.is_empty() {
            match status {
                StatusCode::NOT_FOUND => "Cards Service endpoint does not exist".to_owned(),
                StatusCode::UNAUTHORIZED => "Bad authorization token".to_owned(),
                _ => format!("{status} {text}"),
            }
        } else {
            text
        }
    ))
}
