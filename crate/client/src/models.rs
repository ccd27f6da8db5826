use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

/// An identity bound to a Card, expressed as a `type` plus a `value`.
///
/// For public Cards the type is one of the service-known types (`email`,
/// `application`); private Cards may carry obfuscated types the service
/// treats as opaque tags.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    #[serde(rename = "type")]
    pub identity_type: String,
    pub value: String,
}

impl Identity {
    #[must_use]
    pub fn new(identity_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            identity_type: identity_type.into(),
            value: value.into(),
        }
    }
}

/// An identity whose ownership was confirmed out-of-band.
///
/// The identity service issues the validation token during the confirmation
/// flow; the Cards Service checks it on confirmed operations.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ValidatedIdentity {
    #[serde(flatten)]
    pub identity: Identity,
    pub validation_token: String,
}

/// A Card: a signed binding between an identity and a public key,
/// held by the Cards Service.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CardModel {
    pub id: String,
    /// Content hash of the Card at registration time; this is what gets
    /// signed when another Card endorses this one.
    pub hash: String,
    pub identity: Identity,
    pub public_key_id: String,
    #[serde(with = "base64_bytes")]
    pub public_key: Vec<u8>,
}

/// The result of signing a Card with another Card's private key.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SignModel {
    pub id: String,
    pub signer_card_id: String,
    pub signed_card_id: String,
    #[serde(with = "base64_bytes")]
    pub signed_digest: Vec<u8>,
}

/// A private key held by the Private Keys service for a Card.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PrivateKeyModel {
    pub card_id: String,
    #[serde(with = "base64_bytes")]
    pub private_key: Vec<u8>,
}

/// Private key material plus the password protecting it.
///
/// The password is empty only when the key itself is unencrypted.
/// Both fields are zeroized on drop; the CLI never persists this value.
#[derive(Clone, Debug)]
pub struct Credentials {
    key_bytes: Zeroizing<Vec<u8>>,
    password: Zeroizing<Vec<u8>>,
}

impl Credentials {
    #[must_use]
    pub fn new(key_bytes: Zeroizing<Vec<u8>>, password: Zeroizing<Vec<u8>>) -> Self {
        Self {
            key_bytes,
            password,
        }
    }

    #[must_use]
    pub fn key_bytes(&self) -> &[u8] {
        &self.key_bytes
    }

    #[must_use]
    pub fn password(&self) -> &[u8] {
        &self.password
    }
}

impl PartialEq for Credentials {
    fn eq(&self, other: &Self) -> bool {
        *self.key_bytes == *other.key_bytes && *self.password == *other.password
    }
}

impl Eq for Credentials {}

/// Serialize byte fields as standard base64 strings, the encoding the
/// Cards Service uses for all binary JSON fields.
pub(crate) mod base64_bytes {
    use base64::{engine::general_purpose, Engine as _};
    use serde::{Deserialize, Deserializer, Serializer};

    pub(crate) fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&general_purpose::STANDARD.encode(bytes))
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let b64 = String::deserialize(deserializer)?;
        general_purpose::STANDARD
            .decode(b64)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::{Identity, ValidatedIdentity};

    #[test]
    fn validated_identity_json_is_flattened() {
        let validated_identity = ValidatedIdentity {
            identity: Identity::new("email", "alice@example.com"),
            validation_token: "tok_1".to_owned(),
        };
        let json = serde_json::to_value(&validated_identity).unwrap();
        assert_eq!(json["type"], "email");
        assert_eq!(json["value"], "alice@example.com");
        assert_eq!(json["validation_token"], "tok_1");
    }

    #[test]
    fn card_byte_fields_are_base64_strings() {
        let json = serde_json::json!({
            "id": "c-1",
            "hash": "h-1",
            "identity": {"type": "email", "value": "alice@example.com"},
            "public_key_id": "pk-1",
            "public_key": "AAECAw=="
        });
        let card: super::CardModel = serde_json::from_value(json).unwrap();
        assert_eq!(card.public_key, vec![0, 1, 2, 3]);
    }
}
