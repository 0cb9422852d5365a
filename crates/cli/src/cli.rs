// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

use crate::registry::PhaseKind;

/// Runs the integration suites phase by phase and writes an HTML report
#[derive(Parser, Debug)]
#[command(name = "sharon")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Let test processes write straight to the console
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print failures, the summary and the final banner
    #[arg(short, long)]
    pub quiet: bool,

    /// Per-category output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
    pub output: OutputFormat,

    /// Disable color output
    #[arg(long, conflicts_with = "color")]
    pub no_color: bool,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "SHARON_CONFIG")]
    pub config: Option<PathBuf>,

    /// Root directory holding the category directories
    #[arg(long, value_name = "DIR")]
    pub tests_dir: Option<PathBuf>,

    /// Directory the HTML report is written to
    #[arg(long, value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Run only these phases (repeatable)
    #[arg(long = "phase", value_enum, value_name = "PHASE")]
    pub phases: Vec<PhaseKind>,

    /// Timeout in milliseconds passed to the direct mocha fallback
    #[arg(long = "timeout", value_name = "MS")]
    pub mocha_timeout_ms: Option<u64>,
}

/// How much each finished category prints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Counts and every extracted failure record.
    Detailed,
    /// Status and duration; captured output echoed on failure.
    #[default]
    Summary,
    /// Category names only.
    Minimal,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
