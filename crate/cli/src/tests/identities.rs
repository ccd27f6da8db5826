use std::fs;

use tempfile::TempDir;
use tessera_client::{Identity, ValidatedIdentity};

use crate::{
    actions::shared::identities::{
        parse_identity_pair, select_revocation_target, IdentityTypePolicy, RevocationTarget,
        PUBLIC_CARD_IDENTITY_TYPES,
    },
    error::CliError,
};

fn validated(value: &str, token: &str) -> ValidatedIdentity {
    ValidatedIdentity {
        identity: Identity::new("email", value),
        validation_token: token.to_owned(),
    }
}

#[test]
fn parse_simple_pair() {
    let identity = parse_identity_pair("email:alice@example.com").unwrap();
    assert_eq!(identity, Identity::new("email", "alice@example.com"));
}

#[test]
fn parse_splits_on_the_first_colon() {
    let identity = parse_identity_pair("application:urn:example:app").unwrap();
    assert_eq!(identity.identity_type, "application");
    assert_eq!(identity.value, "urn:example:app");
}

#[test]
fn parse_missing_separator_fails() {
    let err = parse_identity_pair("noseparator").unwrap_err();
    match err {
        CliError::Validation(message) => {
            assert!(message.contains("missing ':' separator"));
            assert!(message.contains("noseparator"));
        }
        other => panic!("expected a Validation error, got {other:?}"),
    }
}

#[test]
fn parse_empty_components_fail() {
    for raw in ["email:", ":alice@example.com", ":"] {
        let err = parse_identity_pair(raw).unwrap_err();
        match err {
            CliError::Validation(message) => assert!(message.contains("empty type or value")),
            other => panic!("expected a Validation error, got {other:?}"),
        }
    }
}

#[test]
fn strict_policy_rejects_unknown_types() {
    let err = select_revocation_target(
        &[],
        &["phone:+15550100".to_owned()],
        IdentityTypePolicy::Strict(PUBLIC_CARD_IDENTITY_TYPES),
    )
    .unwrap_err();
    match err {
        CliError::Validation(message) => assert!(message.contains("unknown identity type")),
        other => panic!("expected a Validation error, got {other:?}"),
    }
}

#[test]
fn open_policy_accepts_any_tag() {
    let target = select_revocation_target(
        &[],
        &["obf-3f:bm90aGluZw".to_owned()],
        IdentityTypePolicy::Open,
    )
    .unwrap();
    assert_eq!(
        target,
        RevocationTarget::Unconfirmed(vec![Identity::new("obf-3f", "bm90aGluZw")])
    );
}

#[test]
fn unconfirmed_set_preserves_order_and_length() {
    let raw_identities = vec![
        "email:alice@example.com".to_owned(),
        "application:wallet".to_owned(),
        "email:alice.backup@example.com".to_owned(),
    ];
    let target = select_revocation_target(
        &[],
        &raw_identities,
        IdentityTypePolicy::Strict(PUBLIC_CARD_IDENTITY_TYPES),
    )
    .unwrap();

    let RevocationTarget::Unconfirmed(identities) = target else {
        panic!("expected the unconfirmed variant")
    };
    assert_eq!(identities.len(), 3);
    assert_eq!(identities[0].value, "alice@example.com");
    assert_eq!(identities[1].value, "wallet");
    assert_eq!(identities[2].value, "alice.backup@example.com");
}

#[test]
fn confirmed_set_preserves_file_order() {
    let tmp_dir = TempDir::new().unwrap();
    let file_a = tmp_dir.path().join("a.json");
    let file_b = tmp_dir.path().join("b.json");
    fs::write(
        &file_a,
        serde_json::to_vec(&validated("alice@example.com", "tok_a")).unwrap(),
    )
    .unwrap();
    fs::write(
        &file_b,
        serde_json::to_vec(&validated("alice.backup@example.com", "tok_b")).unwrap(),
    )
    .unwrap();

    let target = select_revocation_target(
        &[file_a, file_b],
        &[],
        IdentityTypePolicy::Strict(PUBLIC_CARD_IDENTITY_TYPES),
    )
    .unwrap();

    let RevocationTarget::Confirmed(validated_identities) = target else {
        panic!("expected the confirmed variant")
    };
    assert_eq!(validated_identities.len(), 2);
    assert_eq!(validated_identities[0].validation_token, "tok_a");
    assert_eq!(validated_identities[1].validation_token, "tok_b");
}

#[test]
fn failure_loading_a_file_aborts_the_selection() {
    let tmp_dir = TempDir::new().unwrap();
    let file_a = tmp_dir.path().join("a.json");
    let file_b = tmp_dir.path().join("b.json");
    fs::write(
        &file_a,
        serde_json::to_vec(&validated("alice@example.com", "tok_a")).unwrap(),
    )
    .unwrap();
    fs::write(&file_b, b"{ truncated").unwrap();

    let err = select_revocation_target(
        &[file_a, file_b],
        &[],
        IdentityTypePolicy::Strict(PUBLIC_CARD_IDENTITY_TYPES),
    )
    .unwrap_err();
    match err {
        CliError::Validation(message) => assert!(message.contains("b.json")),
        other => panic!("expected a Validation error, got {other:?}"),
    }
}

#[test]
fn missing_validated_identity_file_aborts_the_selection() {
    let tmp_dir = TempDir::new().unwrap();
    let missing = tmp_dir.path().join("missing.json");

    let err = select_revocation_target(&[missing], &[], IdentityTypePolicy::Open).unwrap_err();
    assert!(matches!(err, CliError::Validation(_)));
}

#[test]
fn both_sources_are_rejected() {
    let tmp_dir = TempDir::new().unwrap();
    let file_a = tmp_dir.path().join("a.json");
    fs::write(
        &file_a,
        serde_json::to_vec(&validated("alice@example.com", "tok_a")).unwrap(),
    )
    .unwrap();

    let err = select_revocation_target(
        &[file_a],
        &["email:alice@example.com".to_owned()],
        IdentityTypePolicy::Open,
    )
    .unwrap_err();
    match err {
        CliError::Validation(message) => assert!(message.contains("mutually exclusive")),
        other => panic!("expected a Validation error, got {other:?}"),
    }
}

#[test]
fn neither_source_is_rejected() {
    let err = select_revocation_target(&[], &[], IdentityTypePolicy::Open).unwrap_err();
    match err {
        CliError::Validation(message) => assert!(message.contains("must be supplied")),
        other => panic!("expected a Validation error, got {other:?}"),
    }
}
