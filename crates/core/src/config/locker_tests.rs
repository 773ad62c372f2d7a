// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::time::Duration;
use yare::parameterized;

#[test]
fn defaults_match_documented_values() {
    let config = LockerConfig::default();
    assert_eq!(config.key_prefix, "Locker:");
    assert_eq!(config.default_timeout, 5);
    assert_eq!(config.max_timeout, 60);
    assert!(config.validate().is_ok());
}

#[test]
fn empty_document_yields_defaults() {
    assert_eq!(LockerConfig::from_toml_str("").unwrap(), LockerConfig::default());
}

#[test]
fn partial_document_overrides_only_given_fields() {
    let config = LockerConfig::from_toml_str(
        r#"
        key_prefix = "app:locks:"
        max_timeout = 100

        [wait]
        max_interval = "250ms"
        "#,
    )
    .unwrap();

    assert_eq!(config.key_prefix, "app:locks:");
    assert_eq!(config.default_timeout, 5);
    assert_eq!(config.max_timeout, 100);
    assert_eq!(config.wait.max_interval, Duration::from_millis(250));
    assert_eq!(config.wait.initial_interval, WaitConfig::default().initial_interval);
}

#[parameterized(
    zero_max = { "max_timeout = 0" },
    zero_default = { "default_timeout = 0" },
    default_above_max = { "default_timeout = 61" },
    shrinking_backoff = { "[wait]\nmultiplier = 0.5" },
    zero_interval = { "[wait]\ninitial_interval = \"0s\"" },
)]
fn invalid_documents_are_rejected(content: &str) {
    assert!(matches!(
        LockerConfig::from_toml_str(content),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    assert!(matches!(
        LockerConfig::from_toml_str("max_timeout = \"lots\""),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn load_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("locker.toml");
    std::fs::write(&path, "default_timeout = 2\nmax_timeout = 100\n").unwrap();

    let config = LockerConfig::load(&path).unwrap();
    assert_eq!(config.default_timeout, 2);
    assert_eq!(config.max_timeout, 100);
}

#[test]
fn load_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = LockerConfig::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn builders_chain() {
    let config = LockerConfig::new()
        .with_key_prefix("x:")
        .with_default_timeout(2)
        .with_max_timeout(100);
    assert_eq!(config.key_prefix, "x:");
    assert_eq!(config.default_timeout, 2);
    assert_eq!(config.max_timeout, 100);
}
