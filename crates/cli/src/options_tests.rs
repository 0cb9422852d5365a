// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

#[test]
fn defaults_match_summary_mode() {
    let options = RunOptions::default();
    assert_eq!(options.output, OutputFormat::Summary);
    assert!(!options.is_verbose());
    assert!(!options.is_quiet());
    assert_eq!(options.mocha_timeout_ms, 30_000);
    assert!(options.phases.is_empty());
    assert!(options.captures_output());
}

#[test]
fn verbose_disables_capture() {
    let options = RunOptions {
        verbose: true,
        ..RunOptions::default()
    };
    assert!(options.is_verbose());
    assert!(!options.captures_output());
}

#[test]
fn quiet_still_captures() {
    let options = RunOptions {
        quiet: true,
        ..RunOptions::default()
    };
    assert!(options.is_quiet());
    assert!(options.captures_output());
}

#[test]
fn default_interpreters_are_node_tools() {
    let interpreters = Interpreters::default();
    assert_eq!(interpreters.node, "node");
    assert_eq!(interpreters.npm, "npm");
    assert_eq!(interpreters.npx, "npx");
}

#[test]
fn options_serialize_for_debug_output() {
    let json = serde_json::to_string(&RunOptions::default()).unwrap();
    assert!(json.contains("\"verbose\":false"));
    assert!(json.contains("\"quiet\":false"));
    assert!(json.contains("\"output\":\"summary\""));
}

mod resolve {
    use super::*;
    use crate::config::RunConfig;
    use clap::Parser;
    use std::path::PathBuf;

    fn config(tests_dir: &str, reports_dir: &str, timeout: u64) -> Config {
        Config {
            version: 1,
            run: RunConfig {
                tests_dir: Some(PathBuf::from(tests_dir)),
                reports_dir: Some(PathBuf::from(reports_dir)),
                mocha_timeout_ms: Some(timeout),
            },
        }
    }

    fn resolve(args: &[&str], config: &Config) -> Result<RunOptions> {
        let mut argv = vec!["sharon"];
        argv.extend_from_slice(args);
        let cli = Cli::parse_from(argv);
        RunOptions::resolve(&cli, config, false, Interpreters::default())
    }

    #[test]
    fn defaults_without_flags_or_config() {
        let options = resolve(&[], &Config::default()).unwrap();
        assert_eq!(options.tests_dir, PathBuf::from("tests"));
        assert_eq!(options.reports_dir, PathBuf::from("reports"));
        assert_eq!(options.mocha_timeout_ms, DEFAULT_MOCHA_TIMEOUT_MS);
        assert!(!options.is_verbose());
    assert!(!options.is_quiet());
        assert!(!options.color);
    }

    #[test]
    fn config_overrides_defaults() {
        let options = resolve(&[], &config("/suite", "/out", 45_000)).unwrap();
        assert_eq!(options.tests_dir, PathBuf::from("/suite"));
        assert_eq!(options.reports_dir, PathBuf::from("/out"));
        assert_eq!(options.mocha_timeout_ms, 45_000);
    }

    #[test]
    fn flags_override_config() {
        let options = resolve(
            &["--tests-dir", "cli-tests", "--reports-dir", "cli-out", "--timeout", "9000"],
            &config("/suite", "/out", 45_000),
        )
        .unwrap();
        assert_eq!(options.tests_dir, PathBuf::from("cli-tests"));
        assert_eq!(options.reports_dir, PathBuf::from("cli-out"));
        assert_eq!(options.mocha_timeout_ms, 9000);
    }

    #[test]
    fn verbosity_and_format_come_from_flags() {
        let options = resolve(&["-q", "--output", "minimal"], &Config::default()).unwrap();
        assert!(options.is_quiet());
        assert_eq!(options.output, OutputFormat::Minimal);

        let options = resolve(&["--verbose"], &Config::default()).unwrap();
        assert!(options.is_verbose());
        assert!(!options.is_quiet());
    }

    #[test]
    fn verbose_and_quiet_combine() {
        let options = resolve(&["-v", "-q"], &Config::default()).unwrap();
        assert!(options.is_verbose());
        assert!(options.is_quiet());
        assert!(!options.captures_output());
    }

    #[test]
    fn phases_are_carried_over() {
        let options = resolve(&["--phase", "magic"], &Config::default()).unwrap();
        assert_eq!(options.phases, [PhaseKind::Magic]);
    }

    #[test]
    fn zero_timeout_is_an_argument_error() {
        let err = resolve(&["--timeout", "0"], &Config::default()).unwrap_err();
        assert!(matches!(err, Error::Argument(_)));
    }
}
