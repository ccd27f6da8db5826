use std::fs;

use tempfile::TempDir;

use crate::{
    actions::shared::credentials::{key_is_encrypted, resolve_credentials},
    error::CliError,
    tests::utils::{
        CannedSecret, NoTerminal, ENCRYPTED_KEY_PEM, LEGACY_ENCRYPTED_KEY_PEM, NOT_A_KEY_PEM,
        PLAIN_KEY_PEM,
    },
};

#[test]
fn plain_key_resolves_with_empty_password() {
    let tmp_dir = TempDir::new().unwrap();
    let key_file = tmp_dir.path().join("plain.key");
    fs::write(&key_file, PLAIN_KEY_PEM).unwrap();

    let credentials = resolve_credentials(&key_file, None, &NoTerminal).unwrap();
    assert_eq!(credentials.key_bytes(), PLAIN_KEY_PEM.as_bytes());
    assert!(credentials.password().is_empty());
}

#[test]
fn explicit_password_is_used_verbatim_without_prompting() {
    let tmp_dir = TempDir::new().unwrap();
    let key_file = tmp_dir.path().join("encrypted.key");
    fs::write(&key_file, ENCRYPTED_KEY_PEM).unwrap();

    // NoTerminal fails when consulted: success proves no prompt happened
    let credentials = resolve_credentials(&key_file, Some("s3cret"), &NoTerminal).unwrap();
    assert_eq!(credentials.password(), b"s3cret");
}

#[test]
fn explicit_password_skips_the_format_probe() {
    let tmp_dir = TempDir::new().unwrap();
    let key_file = tmp_dir.path().join("opaque.key");
    fs::write(&key_file, b"not pem at all").unwrap();

    // no format check is performed on the pair; the service rejects a
    // wrong password, not the resolver
    let credentials = resolve_credentials(&key_file, Some("s3cret"), &NoTerminal).unwrap();
    assert_eq!(credentials.key_bytes(), b"not pem at all");
}

#[test]
fn encrypted_key_prompts_for_the_password() {
    let tmp_dir = TempDir::new().unwrap();
    let key_file = tmp_dir.path().join("encrypted.key");
    fs::write(&key_file, ENCRYPTED_KEY_PEM).unwrap();

    let credentials = resolve_credentials(&key_file, None, &CannedSecret("letmein")).unwrap();
    assert_eq!(credentials.password(), b"letmein");
}

#[test]
fn encrypted_key_without_a_terminal_fails() {
    let tmp_dir = TempDir::new().unwrap();
    let key_file = tmp_dir.path().join("encrypted.key");
    fs::write(&key_file, ENCRYPTED_KEY_PEM).unwrap();

    let err = resolve_credentials(&key_file, None, &NoTerminal).unwrap_err();
    assert!(matches!(err, CliError::Io(_)));
}

#[test]
fn resolving_twice_yields_equal_credentials() {
    let tmp_dir = TempDir::new().unwrap();
    let key_file = tmp_dir.path().join("encrypted.key");
    fs::write(&key_file, ENCRYPTED_KEY_PEM).unwrap();

    let first = resolve_credentials(&key_file, None, &CannedSecret("letmein")).unwrap();
    let second = resolve_credentials(&key_file, None, &CannedSecret("letmein")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_key_file_fails_with_io() {
    let tmp_dir = TempDir::new().unwrap();
    let key_file = tmp_dir.path().join("does-not-exist.key");

    let err = resolve_credentials(&key_file, None, &NoTerminal).unwrap_err();
    match err {
        CliError::Io(message) => assert!(message.contains("does-not-exist.key")),
        other => panic!("expected an Io error, got {other:?}"),
    }
}

#[test]
fn garbage_key_without_password_fails_with_key_format() {
    let tmp_dir = TempDir::new().unwrap();
    let key_file = tmp_dir.path().join("garbage.key");
    fs::write(&key_file, b"not pem at all").unwrap();

    let err = resolve_credentials(&key_file, None, &CannedSecret("unused")).unwrap_err();
    assert!(matches!(err, CliError::KeyFormat(_)));
}

#[test]
fn key_encryption_probe() {
    assert!(!key_is_encrypted(PLAIN_KEY_PEM.as_bytes()).unwrap());
    assert!(key_is_encrypted(ENCRYPTED_KEY_PEM.as_bytes()).unwrap());
    assert!(key_is_encrypted(LEGACY_ENCRYPTED_KEY_PEM.as_bytes()).unwrap());

    let err = key_is_encrypted(NOT_A_KEY_PEM.as_bytes()).unwrap_err();
    assert!(matches!(err, CliError::KeyFormat(_)));

    let err = key_is_encrypted(b"").unwrap_err();
    assert!(matches!(err, CliError::KeyFormat(_)));
}
