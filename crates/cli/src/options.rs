// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resolved run options.
//!
//! Built once at startup from CLI flags, the config file and the
//! environment, then passed by reference to everything that needs it.

use std::path::PathBuf;

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::registry::PhaseKind;

/// Default `--timeout` for the direct mocha fallback.
pub const DEFAULT_MOCHA_TIMEOUT_MS: u64 = 30_000;

/// Interpreters used by the three command resolution branches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interpreters {
    /// Runs `test-runner.js`.
    pub node: String,
    /// Runs `npm test`.
    pub npm: String,
    /// Runs `npx mocha`.
    pub npx: String,
}

impl Default for Interpreters {
    fn default() -> Self {
        Self {
            node: "node".to_string(),
            npm: "npm".to_string(),
            npx: "npx".to_string(),
        }
    }
}

impl Interpreters {
    /// Defaults overridden by `SHARON_NODE`, `SHARON_NPM` and `SHARON_NPX`.
    pub fn from_env() -> Self {
        let default = Self::default();
        let var = |name: &str, fallback: String| {
            std::env::var(name)
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(fallback)
        };
        Self {
            node: var("SHARON_NODE", default.node),
            npm: var("SHARON_NPM", default.npm),
            npx: var("SHARON_NPX", default.npx),
        }
    }
}

/// Everything a run needs to know, fixed for the run's lifetime.
#[derive(Debug, Clone, Serialize)]
pub struct RunOptions {
    /// Children inherit the console; nothing is captured.
    pub verbose: bool,
    /// Only failures, the summary, the report pointer and the banner.
    pub quiet: bool,
    pub output: OutputFormat,
    pub color: bool,
    /// Root holding the category directories.
    pub tests_dir: PathBuf,
    /// Where HTML reports are written.
    pub reports_dir: PathBuf,
    pub mocha_timeout_ms: u64,
    /// Empty means the default phases.
    pub phases: Vec<PhaseKind>,
    pub interpreters: Interpreters,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            quiet: false,
            output: OutputFormat::Summary,
            color: true,
            tests_dir: PathBuf::from("tests"),
            reports_dir: PathBuf::from("reports"),
            mocha_timeout_ms: DEFAULT_MOCHA_TIMEOUT_MS,
            phases: Vec::new(),
            interpreters: Interpreters::default(),
        }
    }
}

impl RunOptions {
    /// Fold CLI flags over config values over defaults.
    pub fn resolve(
        cli: &Cli,
        config: &Config,
        color: bool,
        interpreters: Interpreters,
    ) -> Result<Self> {
        let defaults = Self::default();

        let mocha_timeout_ms = cli
            .mocha_timeout_ms
            .or(config.run.mocha_timeout_ms)
            .unwrap_or(defaults.mocha_timeout_ms);
        if mocha_timeout_ms == 0 {
            return Err(Error::Argument(
                "mocha timeout must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            verbose: cli.verbose,
            quiet: cli.quiet,
            output: cli.output,
            color,
            tests_dir: cli
                .tests_dir
                .clone()
                .or_else(|| config.run.tests_dir.clone())
                .unwrap_or(defaults.tests_dir),
            reports_dir: cli
                .reports_dir
                .clone()
                .or_else(|| config.run.reports_dir.clone())
                .unwrap_or(defaults.reports_dir),
            mocha_timeout_ms,
            phases: cli.phases.clone(),
            interpreters,
        })
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Whether child output is captured for parsing.
    pub fn captures_output(&self) -> bool {
        !self.is_verbose()
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
