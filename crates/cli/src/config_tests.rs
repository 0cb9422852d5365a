// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use std::fs;
use tempfile::tempdir;

fn path() -> PathBuf {
    PathBuf::from("sharon.toml")
}

#[test]
fn parses_minimal_config() {
    let config = parse_with_warnings("version = 1\n", &path()).unwrap();
    assert_eq!(config.version, 1);
    assert_eq!(config.run, RunConfig::default());
}

#[test]
fn parses_run_table() {
    let content = r#"
version = 1

[run]
tests_dir = "suites"
reports_dir = "/var/reports"
mocha_timeout_ms = 60000
"#;
    let config = parse_with_warnings(content, &path()).unwrap();
    assert_eq!(config.run.tests_dir, Some(PathBuf::from("suites")));
    assert_eq!(config.run.reports_dir, Some(PathBuf::from("/var/reports")));
    assert_eq!(config.run.mocha_timeout_ms, Some(60_000));
}

#[test]
fn rejects_missing_version() {
    let err = parse_with_warnings("", &path()).unwrap_err();
    assert!(err.to_string().contains("missing required field: version"));
}

#[test]
fn rejects_unsupported_version() {
    let err = parse_with_warnings("version = 2\n", &path()).unwrap_err();
    assert!(err.to_string().contains("unsupported config version 2"));
}

#[test]
fn rejects_non_integer_version() {
    let err = parse_with_warnings("version = \"1\"\n", &path()).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[test]
fn version_is_not_reported_as_unknown_key() {
    let (_, unknown) = parse_collecting("version = 1\n", &path()).unwrap();
    assert!(unknown.is_empty());
}

#[test]
fn rejects_invalid_toml() {
    let err = parse_with_warnings("version = ", &path()).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[test]
fn rejects_wrong_field_type() {
    let content = "version = 1\n[run]\nmocha_timeout_ms = \"slow\"\n";
    assert!(parse_with_warnings(content, &path()).is_err());
}

#[test]
fn collects_unknown_keys_at_both_levels() {
    let content = r#"
version = 1
extra = true

[run]
tests_dir = "t"
parallel = 4
"#;
    let (config, unknown) = parse_collecting(content, &path()).unwrap();
    assert_eq!(config.run.tests_dir, Some(PathBuf::from("t")));
    assert_eq!(unknown, ["extra", "run.parallel"]);
}

#[test]
fn load_resolves_relative_dirs_against_config_dir() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join(CONFIG_FILE);
    fs::write(
        &config_path,
        "version = 1\n[run]\ntests_dir = \"suites\"\nreports_dir = \"/abs/reports\"\n",
    )
    .unwrap();

    let config = load_with_warnings(&config_path).unwrap();
    assert_eq!(config.run.tests_dir, Some(dir.path().join("suites")));
    assert_eq!(config.run.reports_dir, Some(PathBuf::from("/abs/reports")));
}

#[test]
fn load_fails_on_missing_file() {
    let dir = tempdir().unwrap();
    let err = load_with_warnings(&dir.path().join("nonexistent.toml")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}
