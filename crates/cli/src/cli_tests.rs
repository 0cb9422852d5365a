// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use clap::CommandFactory;
use yare::parameterized;

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn parse_bare_invocation() {
    let cli = Cli::parse_from(["sharon"]);
    assert!(!cli.verbose);
    assert!(!cli.quiet);
    assert_eq!(cli.output, OutputFormat::Summary);
    assert!(cli.phases.is_empty());
    assert!(cli.tests_dir.is_none());
    assert!(cli.mocha_timeout_ms.is_none());
}

#[parameterized(
    detailed = { "detailed", OutputFormat::Detailed },
    summary = { "summary", OutputFormat::Summary },
    minimal = { "minimal", OutputFormat::Minimal },
)]
fn parse_output_format(value: &str, expected: OutputFormat) {
    let cli = Cli::parse_from(["sharon", "--output", value]);
    assert_eq!(cli.output, expected);
}

#[test]
fn parse_output_with_equals() {
    let cli = Cli::parse_from(["sharon", "--output=minimal"]);
    assert_eq!(cli.output, OutputFormat::Minimal);
}

#[test]
fn rejects_unknown_output_format() {
    assert!(Cli::try_parse_from(["sharon", "--output", "json"]).is_err());
}

#[test]
fn verbose_and_quiet_are_independent() {
    let cli = Cli::try_parse_from(["sharon", "-v", "-q"]).unwrap();
    assert!(cli.verbose);
    assert!(cli.quiet);
}

#[test]
fn color_flags_conflict() {
    assert!(Cli::try_parse_from(["sharon", "--color", "--no-color"]).is_err());
}

#[test]
fn parse_repeated_phase() {
    let cli = Cli::parse_from(["sharon", "--phase", "system", "--phase", "protocol"]);
    assert_eq!(cli.phases, [PhaseKind::System, PhaseKind::Protocol]);
}

#[test]
fn parse_directories_and_timeout() {
    let cli = Cli::parse_from([
        "sharon",
        "--tests-dir",
        "suite",
        "--reports-dir",
        "out",
        "--timeout",
        "5000",
    ]);
    assert_eq!(cli.tests_dir, Some(PathBuf::from("suite")));
    assert_eq!(cli.reports_dir, Some(PathBuf::from("out")));
    assert_eq!(cli.mocha_timeout_ms, Some(5000));
}

#[test]
fn output_format_serializes_lowercase() {
    let json = serde_json::to_string(&OutputFormat::Detailed).unwrap();
    assert_eq!(json, "\"detailed\"");
}
